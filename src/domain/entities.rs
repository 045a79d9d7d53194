//! Domain entities. Pure data structures for the core business.
//!
//! No filesystem/IO types here beyond plain paths; adapters produce these.

use std::fmt::{self, Write};
use std::path::PathBuf;

/// Suffixes combined by default, in match order. `css` has no leading dot and so
/// also matches names such as `access`.
pub const DEFAULT_EXTENSIONS: [&str; 5] = [".py", ".js", ".html", ".md", "css"];

/// Default output artifact, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "ALL.txt";

/// Ordered set of filename suffixes. Matching is a plain `ends_with`, no globbing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    suffixes: Vec<String>,
}

impl ExtensionSet {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a comma-separated override. Entries are trimmed but otherwise kept
    /// verbatim (no dot is added). Returns `None` when nothing usable remains.
    pub fn parse_list(raw: &str) -> Option<Self> {
        let suffixes: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if suffixes.is_empty() {
            None
        } else {
            Some(Self { suffixes })
        }
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// True if `name` ends with any suffix of the set.
    pub fn matches(&self, name: &str) -> bool {
        self.suffixes.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffixes.join(","))
    }
}

/// One immediate entry of the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// Entry name as text (lossy if the OS name is not valid UTF-8).
    pub name: String,
    /// Real path used to open the entry.
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Encoding that successfully decoded a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// ISO-8859-1: every byte is the code point of the same value. Cannot fail.
    Latin1,
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoding::Utf8 => write!(f, "utf-8"),
            TextEncoding::Latin1 => write!(f, "iso-8859-1"),
        }
    }
}

/// Full text content of one file plus the encoding used to get it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: TextEncoding,
}

impl DecodedText {
    pub fn used_fallback(&self) -> bool {
        self.encoding == TextEncoding::Latin1
    }
}

/// One output unit: header line, file content, blank-line separator.
#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    pub file_name: &'a str,
    pub content: &'a str,
}

impl<'a> Block<'a> {
    pub fn new(file_name: &'a str, content: &'a str) -> Self {
        Self { file_name, content }
    }

    /// Appends the rendered block to `buf`.
    pub fn append_to(&self, buf: &mut String) {
        buf.reserve(self.file_name.len() + self.content.len() + 24);
        // Writing into a String cannot fail.
        let _ = write!(buf, "{}", self);
    }
}

impl fmt::Display for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "--- Contenido de {} ---\n{}\n\n",
            self.file_name, self.content
        )
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineReport {
    pub files_combined: usize,
    /// Output location as shown to the user.
    pub output: String,
    pub fallback_decodes: usize,
    pub bytes_written: usize,
}

impl CombineReport {
    /// The single line printed on success.
    pub fn summary_line(&self) -> String {
        format!(
            "Se han combinado {} archivos en {}",
            self.files_combined, self.output
        )
    }
}
