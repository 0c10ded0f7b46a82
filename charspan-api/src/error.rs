//! API error types

use std::string::FromUtf8Error;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Input exceeds the configured size cap
    #[error("input of {chars} character(s) exceeds the configured cap of {cap}")]
    InputTooLarge {
        /// Character count of the rejected input
        chars: usize,
        /// Configured maximum
        cap: usize,
    },

    /// Rank error from the order-statistic selector
    #[error("rank error: {0}")]
    Rank(#[from] charspan_core::RankError),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
