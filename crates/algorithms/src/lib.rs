//! Block cipher primitives for the gmcrypt library
//!
//! This crate provides the raw block transforms (SMS4 and AES), the
//! chaining modes that run them over whole blocks while carrying state
//! between calls, and PKCS#7 padding. Everything here operates on
//! block-aligned data; buffering arbitrary-length input is the job of
//! the session engine in `gmcrypt-symmetric`.
//!
//! # Security Features
//!
//! - Key schedules and chaining state are zeroized on drop
//! - S-box lookups do not index memory by secret data
//! - Padding checks run in constant time

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub use error::{validate, Error, Result};

pub mod block;
pub use block::{
    Aes128, Aes192, Aes256, BlockCipher, BlockTransform, CipherAlgorithm, Sm4, Sms4,
};
pub use block::modes::{BlockMode, Cbc, Ecb};

pub mod padding;
pub use padding::Pkcs7;

pub use gmcrypt_api::SecretBytes;
