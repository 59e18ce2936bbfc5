//! Validation utilities shared by the gmcrypt crates

use super::types::{Error, Result};

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a key length for `algorithm`
#[inline(always)]
pub fn key_length(algorithm: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKeyLength {
            algorithm,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate an IV length for `algorithm`
#[inline(always)]
pub fn iv_length(algorithm: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidIvLength {
            algorithm,
            expected,
            actual,
        });
    }
    Ok(())
}
