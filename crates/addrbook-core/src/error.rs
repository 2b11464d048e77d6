//! Error types for addrbook-core

use thiserror::Error;

/// Main error type for addrbook-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for addrbook-core
pub type Result<T> = std::result::Result<T, Error>;
