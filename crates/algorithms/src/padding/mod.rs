//! PKCS#7 padding (RFC 5652, section 6.3)
//!
//! A message is extended with N bytes of value N, N in `[1, block_size]`,
//! so that block-aligned input still gains one full block of padding.
//!
//! Removal inspects every byte of the final block and folds the result
//! into a single [`Choice`], so a bad length byte and a bad fill byte
//! follow the same path.

use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater};

use crate::error::{validate, Error, Result};

/// PKCS#7 padding scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pkcs7;

impl Pkcs7 {
    /// Pad a trailing partial block out to exactly one full block
    ///
    /// `tail` must be shorter than `block_size`.
    pub fn pad(tail: &[u8], block_size: usize) -> Result<Vec<u8>> {
        validate::parameter(
            (1..=255).contains(&block_size),
            "block_size",
            "PKCS#7 block size must be between 1 and 255",
        )?;
        validate::parameter(
            tail.len() < block_size,
            "tail",
            "padding input must be shorter than one block",
        )?;

        let pad_len = block_size - tail.len();
        let mut block = Vec::with_capacity(block_size);
        block.extend_from_slice(tail);
        block.resize(block_size, pad_len as u8);
        Ok(block)
    }

    /// Number of message bytes in a decrypted final block
    ///
    /// Runs in time independent of the block contents. Any malformed
    /// padding yields [`Error::Padding`].
    pub fn unpadded_len(block: &[u8]) -> Result<usize> {
        let block_size = block.len();
        validate::parameter(
            (1..=255).contains(&block_size),
            "block_size",
            "PKCS#7 block size must be between 1 and 255",
        )?;

        let bs = block_size as u8;
        let pad = block[block_size - 1];

        let mut valid = pad.ct_gt(&0) & !pad.ct_gt(&bs);
        for (i, &byte) in block.iter().enumerate() {
            // position i is inside the padding when block_size - i <= pad
            let in_pad: Choice = !(bs - i as u8).ct_gt(&pad);
            valid &= !in_pad | byte.ct_eq(&pad);
        }

        if bool::from(valid) {
            Ok(block_size - pad as usize)
        } else {
            Err(Error::Padding)
        }
    }

    /// Strip the padding from a decrypted final block
    pub fn unpad(block: &[u8]) -> Result<&[u8]> {
        let len = Self::unpadded_len(block)?;
        Ok(&block[..len])
    }
}
