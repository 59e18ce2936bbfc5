//! Constant values for gmcrypt cryptographic operations
//!
//! Sizes are in bytes. Nothing in this crate allocates or depends on `std`.

#![no_std]

pub mod utils;
