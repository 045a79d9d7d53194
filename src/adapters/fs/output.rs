//! Implements OutputSink. Overwrites one file with the combined UTF-8 buffer.
//!
//! Plain truncate-and-write: no temp file, no rename, no backup.

use crate::domain::DomainError;
use crate::ports::OutputSink;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub struct FsOutputSink {
    path: PathBuf,
}

impl FsOutputSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl OutputSink for FsOutputSink {
    async fn write_output(&self, content: &str) -> Result<usize, DomainError> {
        fs::write(&self.path, content.as_bytes())
            .await
            .map_err(|e| DomainError::Output(format!("{}: {}", self.path.display(), e)))?;
        info!(
            path = %self.path.display(),
            bytes = content.len(),
            "wrote combined output"
        );
        Ok(content.len())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
