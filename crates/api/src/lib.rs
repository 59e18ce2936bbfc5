//! Public API types for the gmcrypt library
//!
//! This crate holds the error type shared by every gmcrypt crate, the
//! validation helpers that produce it, and fixed-size secret containers.

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

pub use error::{validate, Error, Result};
pub use types::SecretBytes;
