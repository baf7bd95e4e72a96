//! Error types for the enhancer
//!
//! Most failure paths here are deliberately absorbed rather than
//! propagated: missing DOM targets are silent no-ops and the API call
//! wrapper reports failure in-band. What remains is small.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnhanceError>;

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("Document error: {0}")]
    Dom(#[from] dom::DomError),

    #[error("Port error: {0}")]
    Port(String),
}
