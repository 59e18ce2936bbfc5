//! Testing utilities for the gmcrypt library
//!
//! Holds the known-answer vectors shared by the integration tests and the
//! runner that checks a session implementation against them.

pub mod vectors;
