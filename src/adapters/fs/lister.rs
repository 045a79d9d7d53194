//! Implements DirectoryLister over one directory. Immediate entries only.

use crate::domain::{DirEntryInfo, DomainError};
use crate::ports::DirectoryLister;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

pub struct FsLister {
    dir: PathBuf,
}

impl FsLister {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl DirectoryLister for FsLister {
    /// Entries come back in `read_dir` order; `.` and `..` are never included.
    async fn list_entries(&self) -> Result<Vec<DirEntryInfo>, DomainError> {
        let mut rd = fs::read_dir(&self.dir)
            .await
            .map_err(|e| DomainError::Listing(format!("{}: {}", self.dir.display(), e)))?;
        let mut entries = Vec::new();
        while let Some(entry) = rd
            .next_entry()
            .await
            .map_err(|e| DomainError::Listing(format!("{}: {}", self.dir.display(), e)))?
        {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            // Follow symlinks, like opening the entry would.
            let is_dir = fs::metadata(&path)
                .await
                .map(|m| m.is_dir())
                .unwrap_or(false);
            entries.push(DirEntryInfo { name, path, is_dir });
        }
        debug!(dir = %self.dir.display(), count = entries.len(), "listed directory");
        Ok(entries)
    }
}
