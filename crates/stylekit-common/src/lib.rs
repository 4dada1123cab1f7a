//! Shared error types for the stylekit crates.

pub mod errors;

pub use errors::{ConfigError, StoreError, StylekitError};

pub type Result<T> = std::result::Result<T, StylekitError>;
