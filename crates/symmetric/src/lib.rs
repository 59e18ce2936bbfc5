//! Streaming block cipher sessions for the gmcrypt library
//!
//! This crate drives the raw block ciphers of `gmcrypt-algorithms`
//! through an open / update / finalize session with PKCS#7 padding, and
//! provides the name table, random key/IV generation and one-shot
//! helpers around it. Errors come from the unified API error system.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod algorithm;
pub mod cipher;
pub mod error;
pub mod oneshot;
pub mod random;
pub mod session;

// Re-export main types for convenience
pub use algorithm::{AlgorithmSpec, CipherKind, CipherMode, CipherTable, CipherTableBuilder};
pub use cipher::{ChainedCipher, KeyedCipher};
pub use oneshot::{decrypt, encrypt};
pub use random::{
    fill_random, generate_iv, generate_iv_with, generate_key, generate_key_with, generate_random,
};
pub use session::{CipherSession, Direction};

// Re-export the API error system
pub use gmcrypt_api::error::{validate, Error, Result};
