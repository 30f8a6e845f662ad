//! Common test utilities shared across integration tests

pub mod repository;

pub use repository::*;
