//! Security primitives and memory safety utilities
//!
//! Foundational types used throughout gmcrypt to make sure sensitive
//! material is wiped once it is no longer needed.

pub mod secret;

pub use secret::{SecretBuffer, SecretVec};
