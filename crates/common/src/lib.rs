//! Common implementations and shared functionality for the gmcrypt library
//!
//! This crate provides the zeroizing containers used for key schedules,
//! chaining state and buffered input across gmcrypt components.

#![forbid(unsafe_code)]

pub mod security;

pub use security::{SecretBuffer, SecretVec};
