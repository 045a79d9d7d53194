//! combine-files: concatenate one directory's source files into a single labeled text file,
//! with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
