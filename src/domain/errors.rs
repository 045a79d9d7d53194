//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Directory listing failed: {0}")]
    Listing(String),

    /// Open or read failure for a matched entry. Never raised for decode problems:
    /// those are recovered by the fallback encoding.
    #[error("Reading source file failed: {0}")]
    Read(String),

    #[error("Writing output failed: {0}")]
    Output(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
