//! Unified error types for the Longan library.
//!
//! This module provides a single error type that encompasses dialect,
//! value, parsing and IO failures, presenting a consistent API to users.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
