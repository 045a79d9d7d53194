//! Inbound port. The binary calls into the application.

use crate::domain::{CombineReport, DomainError};

/// Input port: entry point that runs one combine pass.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// List, read and combine all matching files, then write the output once.
    async fn run(&self) -> Result<CombineReport, DomainError>;
}
