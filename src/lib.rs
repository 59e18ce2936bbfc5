//! # gmcrypt
//!
//! A pure Rust block cipher session engine: SMS4 (SM4) and AES in CBC or
//! ECB mode with PKCS#7 padding, driven through incremental
//! open / update / finalize sessions.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gmcrypt = "0.3"
//! ```
//!
//! ```
//! use gmcrypt::prelude::*;
//!
//! let table = CipherTable::standard();
//! let key = generate_key(&table, "SMS4").unwrap();
//! let iv = generate_iv(&table, "SMS4").unwrap();
//!
//! let ciphertext = encrypt(&table, "SMS4", &key, &iv, b"hello").unwrap();
//! assert_eq!(ciphertext.len(), 16);
//! assert_eq!(decrypt(&table, "SMS4", &key, &iv, &ciphertext).unwrap(), b"hello");
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: `Serialize`/`Deserialize` for directions and algorithm descriptors
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `gmcrypt-algorithms`: raw block ciphers, chaining modes, padding
//! - `gmcrypt-symmetric`: cipher sessions, the algorithm table, key/IV generation

// Core re-exports (always available)
pub use gmcrypt_api as api;
pub use gmcrypt_common as common;
pub use gmcrypt_internal as internal;
pub use gmcrypt_params as params;

pub use gmcrypt_algorithms as algorithms;
pub use gmcrypt_symmetric as symmetric;

pub use zeroize;

/// Common imports for gmcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, SecretBytes};

    // Re-export core traits
    pub use crate::algorithms::{BlockCipher, BlockMode, BlockTransform, CipherAlgorithm};

    // Re-export security types
    pub use crate::common::{SecretBuffer, SecretVec};
    pub use zeroize::Zeroizing;

    // Re-export the session engine
    pub use crate::symmetric::{
        decrypt, encrypt, generate_iv, generate_key, generate_random, AlgorithmSpec,
        CipherKind, CipherMode, CipherSession, CipherTable, CipherTableBuilder, Direction,
    };
}
