//! Infrastructure adapters. Implement outbound ports.
//!
//! Filesystem and console. Map errors to DomainError.

pub mod fs;
pub mod ui;
