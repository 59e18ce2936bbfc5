//! Error handling for the cipher session ecosystem

pub mod types;
pub mod validate;

pub use types::{Error, Result};

// Specialized result type for session operations
pub type SessionResult<T> = Result<T>;
