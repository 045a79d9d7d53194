//! Application use cases. Orchestrate domain logic via ports.

pub mod combine_service;

pub use combine_service::CombineService;
