//! Error types for model construction and configuration loading.

use thiserror::Error;

/// Errors that can occur when building a game model.
///
/// Per-tick simulation is total; nothing past construction can fail.
#[derive(Debug, Error)]
pub enum FirefliesError {
    /// A construction parameter is out of range. The caller has to rebuild
    /// the model with valid parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    /// Settings JSON could not be parsed or written.
    #[error("settings serialization error: {0}")]
    Settings(#[from] serde_json::Error),
}

impl FirefliesError {
    /// True for errors raised by parameter validation.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, FirefliesError::InvalidConfiguration(_))
    }
}
