use thiserror::Error;

/// Errors raised by the layout engine.
///
/// Every variant is a caller mistake detected before any output is produced;
/// retrying with the same arguments reproduces the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl LayoutError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        LayoutError::Configuration(message.into())
    }
}
