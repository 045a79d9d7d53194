//! Main combine logic: list -> filter by suffix -> read each -> accumulate -> write once.
//!
//! - Keeps listing order; no sorting, no dedup
//! - All blocks are buffered in memory; the sink is only touched after every read succeeded
//! - First listing/read error aborts the run with nothing written

use crate::domain::{Block, CombineReport, DirEntryInfo, DomainError, ExtensionSet};
use crate::ports::{DirectoryLister, InputPort, OutputSink, TextReader};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Combine service. Aggregates matched files into one output.
pub struct CombineService {
    lister: Arc<dyn DirectoryLister>,
    reader: Arc<dyn TextReader>,
    sink: Arc<dyn OutputSink>,
    extensions: ExtensionSet,
    skip_directories: bool,
}

impl CombineService {
    pub fn new(
        lister: Arc<dyn DirectoryLister>,
        reader: Arc<dyn TextReader>,
        sink: Arc<dyn OutputSink>,
        extensions: ExtensionSet,
    ) -> Self {
        Self {
            lister,
            reader,
            sink,
            extensions,
            skip_directories: false,
        }
    }

    /// Drop matching entries that are directories instead of failing on them.
    pub fn with_skip_directories(mut self, skip: bool) -> Self {
        self.skip_directories = skip;
        self
    }

    /// Directory entries whose name ends with one of the configured suffixes, in listing order.
    pub async fn matched_files(&self) -> Result<Vec<DirEntryInfo>, DomainError> {
        let entries = self.lister.list_entries().await?;
        let matched = entries
            .into_iter()
            .filter(|e| self.extensions.matches(&e.name))
            .filter(|e| {
                if self.skip_directories && e.is_dir {
                    warn!(name = %e.name, "skipping directory with matching name");
                    return false;
                }
                true
            })
            .collect();
        Ok(matched)
    }

    /// Builds the combined buffer. Returns the buffer and the number of fallback decodes.
    pub async fn build_buffer(
        &self,
        files: &[DirEntryInfo],
    ) -> Result<(String, usize), DomainError> {
        let mut buffer = String::new();
        let mut fallback_decodes = 0usize;
        for file in files {
            let decoded = self.reader.read_text(file).await?;
            if decoded.used_fallback() {
                fallback_decodes += 1;
            }
            debug!(
                name = %file.name,
                encoding = %decoded.encoding,
                chars = decoded.text.len(),
                "appending block"
            );
            Block::new(&file.name, &decoded.text).append_to(&mut buffer);
        }
        Ok((buffer, fallback_decodes))
    }

    /// Full run. Writes the output exactly once, after all reads succeeded.
    pub async fn combine(&self) -> Result<CombineReport, DomainError> {
        info!(extensions = %self.extensions, "combining files");
        let files = self.matched_files().await?;
        let (buffer, fallback_decodes) = self.build_buffer(&files).await?;
        let bytes_written = self.sink.write_output(&buffer).await?;

        let report = CombineReport {
            files_combined: files.len(),
            output: self.sink.location(),
            fallback_decodes,
            bytes_written,
        };
        info!(
            files = report.files_combined,
            fallback_decodes = report.fallback_decodes,
            bytes = report.bytes_written,
            output = %report.output,
            "combine finished"
        );
        Ok(report)
    }
}

#[async_trait::async_trait]
impl InputPort for CombineService {
    async fn run(&self) -> Result<CombineReport, DomainError> {
        self.combine().await
    }
}
