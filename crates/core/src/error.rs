//! Error types for streamfold.
//!
//! Propagation never fails; errors only come out of constructors that
//! validate window parameters.

use alloc::string::String;

/// Result type alias for streamfold operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for streamfold construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A fixed window was asked to hold zero elements.
    #[error("window capacity must be at least 1")]
    ZeroCapacity,
    /// A duration window width is negative or not comparable to zero.
    #[error("invalid window width: {message}")]
    InvalidWidth { message: String },
    /// A configuration value is out of range.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl Error {
    /// Creates an invalid width error.
    pub fn invalid_width(message: impl Into<String>) -> Self {
        Error::InvalidWidth {
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
        }
    }
}
