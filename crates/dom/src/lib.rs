//! Live document model for page enhancement
//!
//! An owned, mutable, arena-backed DOM that stands in for the page the
//! enhancer manipulates. The arena keeps nodes in a single Vec indexed
//! by u32 ids; mutation happens through attach/detach/replace
//! primitives so removal can be guarded by an attachment check.
//!
//! ```text
//! ElementBuilder → DomArena (owned) → Document facade → render_html
//!                       ↓
//!                 NodeId (u32)
//! ```

pub mod arena;
pub mod builder;
pub mod document;
pub mod error;
pub mod render;
pub mod types;

pub use arena::DomArena;
pub use builder::{el, ElementBuilder};
pub use document::Document;
pub use error::{DomError, Result};
pub use render::render_html;
pub use types::*;
