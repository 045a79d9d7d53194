//! Implements TextReader. Whole-file reads, UTF-8 first, ISO-8859-1 on decode failure.
//!
//! Line endings are normalized (`\r\n` and lone `\r` become `\n`) after decoding.
//! A UTF-8 byte-order mark is kept as content.

use crate::domain::{DecodedText, DirEntryInfo, DomainError, TextEncoding};
use crate::ports::TextReader;
use encoding_rs::UTF_8;
use std::borrow::Cow;
use tokio::fs;
use tracing::warn;

/// File-system text reader.
#[derive(Debug, Default)]
pub struct FsTextReader;

impl FsTextReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl TextReader for FsTextReader {
    async fn read_text(&self, entry: &DirEntryInfo) -> Result<DecodedText, DomainError> {
        let bytes = fs::read(&entry.path)
            .await
            .map_err(|e| DomainError::Read(format!("{}: {}", entry.path.display(), e)))?;
        let decoded = decode_bytes(&bytes);
        if decoded.used_fallback() {
            warn!(
                path = %entry.path.display(),
                encoding = %decoded.encoding,
                "not valid UTF-8, decoded with fallback encoding"
            );
        }
        Ok(decoded)
    }
}

/// Decodes `bytes` as strict UTF-8, or as ISO-8859-1 if that fails. Never fails.
pub fn decode_bytes(bytes: &[u8]) -> DecodedText {
    match UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => DecodedText {
            text: normalize_newlines(text).into_owned(),
            encoding: TextEncoding::Utf8,
        },
        None => DecodedText {
            text: normalize_newlines(encoding_rs::mem::decode_latin1(bytes)).into_owned(),
            encoding: TextEncoding::Latin1,
        },
    }
}

fn normalize_newlines(text: Cow<'_, str>) -> Cow<'_, str> {
    if !text.contains('\r') {
        return text;
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            out.push('\n');
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_utf8() {
        let decoded = decode_bytes("señal ✓".as_bytes());
        assert_eq!(decoded.text, "señal ✓");
        assert_eq!(decoded.encoding, TextEncoding::Utf8);
        assert!(!decoded.used_fallback());
    }

    #[test]
    fn test_decode_invalid_utf8_falls_back_to_latin1() {
        // "caf\xe9" is Latin-1 for "café"; 0x80..0x9f map to C1 controls, not cp1252.
        let decoded = decode_bytes(b"caf\xe9 \x80");
        assert_eq!(decoded.encoding, TextEncoding::Latin1);
        assert_eq!(decoded.text, "caf\u{e9} \u{80}");
    }

    #[test]
    fn test_decode_keeps_bom() {
        let decoded = decode_bytes(b"\xef\xbb\xbfhi");
        assert_eq!(decoded.encoding, TextEncoding::Utf8);
        assert_eq!(decoded.text, "\u{feff}hi");
    }

    #[test]
    fn test_decode_normalizes_line_endings() {
        assert_eq!(decode_bytes(b"a\r\nb\rc\n").text, "a\nb\nc\n");
        assert_eq!(decode_bytes(b"x\r\n\xff").text, "x\n\u{ff}");
    }

    #[test]
    fn test_decode_empty() {
        let decoded = decode_bytes(b"");
        assert_eq!(decoded.text, "");
        assert_eq!(decoded.encoding, TextEncoding::Utf8);
    }

    #[tokio::test]
    async fn test_read_text_missing_file_is_read_error() {
        let reader = FsTextReader::new();
        let entry = DirEntryInfo {
            name: "gone.py".to_string(),
            path: std::path::PathBuf::from("definitely/not/here/gone.py"),
            is_dir: false,
        };
        let err = reader.read_text(&entry).await.unwrap_err();
        assert!(matches!(err, DomainError::Read(_)));
    }
}
