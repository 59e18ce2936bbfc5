//! Error handling for cipher sessions
//!
//! Re-exports the API error system. Primitive errors convert into it
//! through `From`, so `?` works across the crate boundary.

// Re-export the primary API error system
pub use gmcrypt_api::error::{validate, Error, Result, SessionResult};
