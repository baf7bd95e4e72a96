//! The three one-shot setup actions run at initialization
//!
//! Each is isolated from the others: a failure in one is logged by the
//! caller and must not stop the rest.

pub mod nav;
pub mod scroll;
pub mod tooltips;
