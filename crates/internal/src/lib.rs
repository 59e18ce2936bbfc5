//! Internal utilities for the gmcrypt library
//!
//! Constant-time helpers and byte-order conversions shared by the
//! primitive and session crates. Not part of the public API surface.

#![no_std]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
