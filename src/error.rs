use thiserror::Error;

/// Custom error types for `dburl`
#[derive(Debug, Error)]
pub enum ParseError {
    /// A clustered connection string does not follow the multi-host grammar
    #[error("invalid cluster connection string: {reason}")]
    InvalidClusterUrl {
        /// What made the string unacceptable
        reason: String,
    },
}

/// Result type alias for `dburl` operations
pub type Result<T> = std::result::Result<T, ParseError>;
