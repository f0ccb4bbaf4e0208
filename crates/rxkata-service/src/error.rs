//! Error types for the country query service.

use thiserror::Error;

/// Errors that can occur in query operations.
#[derive(Error, Debug)]
pub enum KataError {
    #[error("Name transformation failed: {0}")]
    Transform(String),

    #[error("Index out of range: {index} (length: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Upstream computation failed: {0}")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, KataError>;
