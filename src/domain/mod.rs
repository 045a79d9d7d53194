//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    Block, CombineReport, DEFAULT_EXTENSIONS, DEFAULT_OUTPUT_FILE, DecodedText, DirEntryInfo,
    ExtensionSet, TextEncoding,
};
pub use errors::DomainError;
