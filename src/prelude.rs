//! Common types and utilities.

/// Main crate error type.
pub use crate::error::Error;

/// Main crate result type.
pub type Result<T> = core::result::Result<T, Error>;
