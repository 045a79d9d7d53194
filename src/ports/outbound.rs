//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{CombineReport, DecodedText, DirEntryInfo, DomainError};

/// Enumerates one directory (no recursion).
#[async_trait::async_trait]
pub trait DirectoryLister: Send + Sync {
    /// All immediate entries, in the order the platform returns them. Not sorted.
    async fn list_entries(&self) -> Result<Vec<DirEntryInfo>, DomainError>;
}

/// Reads a whole file as text.
#[async_trait::async_trait]
pub trait TextReader: Send + Sync {
    /// Returns the entire content. Decode failures are recovered internally;
    /// open/read failures are returned as `DomainError::Read`.
    async fn read_text(&self, entry: &DirEntryInfo) -> Result<DecodedText, DomainError>;
}

/// Destination of the combined buffer. Written exactly once per run.
#[async_trait::async_trait]
pub trait OutputSink: Send + Sync {
    /// Replace any previous content with `content`. Returns bytes written.
    async fn write_output(&self, content: &str) -> Result<usize, DomainError>;

    /// Location as shown to the user (e.g. `ALL.txt`).
    fn location(&self) -> String;
}

/// Reports the outcome of a run to the user.
pub trait ReportPort: Send + Sync {
    fn report(&self, report: &CombineReport);
}
