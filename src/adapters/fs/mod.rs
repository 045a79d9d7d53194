//! Filesystem adapters: directory listing, text reading, output writing.

pub mod lister;
pub mod output;
pub mod reader;

pub use lister::FsLister;
pub use output::FsOutputSink;
pub use reader::{FsTextReader, decode_bytes};
