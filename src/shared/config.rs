//! Application configuration. Source directory, output path, extension list.
//!
//! Every field is optional; with nothing set the run uses the current directory,
//! the fixed extension list and `ALL.txt`.
//!
//! `.env` is looked up in the current directory and then in each ancestor, so a `.env`
//! in a parent of the scanned directory can set `COMBINE_SOURCE_DIR` or `COMBINE_EXTENSIONS`.

use crate::domain::{DEFAULT_OUTPUT_FILE, DomainError, ExtensionSet};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory whose immediate entries are combined. Read from COMBINE_SOURCE_DIR.
    #[serde(default)]
    pub source_dir: Option<String>,

    /// Output file, overwritten on every run. Read from COMBINE_OUTPUT_FILE.
    #[serde(default)]
    pub output_file: Option<String>,

    /// Comma-separated suffix list, kept verbatim. Read from COMBINE_EXTENSIONS.
    #[serde(default)]
    pub extensions: Option<String>,

    /// Skip matching entries that are directories instead of aborting on them.
    /// Read from COMBINE_SKIP_DIRECTORIES.
    #[serde(default)]
    pub skip_directories: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, DomainError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("COMBINE_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("COMBINE").try_parsing(true));
        c.build()
            .and_then(|built| built.try_deserialize())
            .map_err(|e| DomainError::Config(e.to_string()))
    }

    /// Returns the source directory. Defaults to the current working directory.
    pub fn source_dir_or_default(&self) -> PathBuf {
        self.source_dir
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Returns the output path. Defaults to `ALL.txt`.
    pub fn output_file_or_default(&self) -> PathBuf {
        self.output_file
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE))
    }

    /// Returns the extension set. Falls back to the fixed list if unset or empty.
    pub fn extensions_or_default(&self) -> ExtensionSet {
        self.extensions
            .as_deref()
            .and_then(ExtensionSet::parse_list)
            .unwrap_or_default()
    }

    pub fn skip_directories_or_default(&self) -> bool {
        self.skip_directories.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reproduce_fixed_behavior() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.source_dir_or_default(), PathBuf::from("."));
        assert_eq!(cfg.output_file_or_default(), PathBuf::from("ALL.txt"));
        assert_eq!(cfg.extensions_or_default(), ExtensionSet::default());
        assert!(!cfg.skip_directories_or_default());
    }

    #[test]
    fn test_overrides() {
        let cfg = AppConfig {
            source_dir: Some("src".to_string()),
            output_file: Some("out/combined.txt".to_string()),
            extensions: Some(".rs,.toml".to_string()),
            skip_directories: Some(true),
        };
        assert_eq!(cfg.source_dir_or_default(), PathBuf::from("src"));
        assert_eq!(cfg.output_file_or_default(), PathBuf::from("out/combined.txt"));
        assert!(cfg.extensions_or_default().matches("main.rs"));
        assert!(!cfg.extensions_or_default().matches("a.py"));
        assert!(cfg.skip_directories_or_default());
    }

    #[test]
    fn test_empty_values_fall_back() {
        let cfg = AppConfig {
            source_dir: Some(String::new()),
            output_file: Some(String::new()),
            extensions: Some(" , ".to_string()),
            skip_directories: None,
        };
        assert_eq!(cfg.source_dir_or_default(), PathBuf::from("."));
        assert_eq!(cfg.output_file_or_default(), PathBuf::from("ALL.txt"));
        assert_eq!(cfg.extensions_or_default(), ExtensionSet::default());
    }
}
