//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode provides confidentiality by XORing each plaintext block with
//! the previous ciphertext block before encryption. The first block is
//! XORed with an initialization vector (IV).
//!
//! This implementation follows NIST SP 800-38A. The chaining value lives
//! in the mode between calls and is zeroized with it.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::BlockMode;
use crate::block::BlockTransform;
use crate::error::{validate, Result};
use gmcrypt_common::SecretVec;
use gmcrypt_internal::constant_time::xor_in_place;
use gmcrypt_params::utils::symmetric::MAX_BLOCK_SIZE;

/// CBC mode implementation
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockTransform + Zeroize + ZeroizeOnDrop> {
    cipher: B,
    chain: SecretVec,
}

impl<B: BlockTransform + Zeroize + ZeroizeOnDrop> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be the same size as the block size of the cipher.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        let block_size = cipher.block_len();
        validate::parameter(
            block_size > 0 && block_size <= MAX_BLOCK_SIZE,
            "block size",
            "unsupported block size for CBC",
        )?;
        validate::length("CBC initialization vector", iv.len(), block_size)?;

        Ok(Self {
            cipher,
            chain: SecretVec::from_slice(iv),
        })
    }
}

impl<B: BlockTransform + Zeroize + ZeroizeOnDrop> BlockMode for Cbc<B> {
    fn block_len(&self) -> usize {
        self.chain.len()
    }

    fn encrypt_blocks(&mut self, data: &mut [u8]) -> Result<()> {
        let block_size = self.block_len();
        validate::block_multiple("CBC plaintext", data.len(), block_size)?;

        for block in data.chunks_exact_mut(block_size) {
            xor_in_place(block, self.chain.as_slice());
            self.cipher.encrypt_in_place(block)?;
            self.chain.copy_from_slice(block);
        }
        Ok(())
    }

    fn decrypt_blocks(&mut self, data: &mut [u8]) -> Result<()> {
        let block_size = self.block_len();
        validate::block_multiple("CBC ciphertext", data.len(), block_size)?;

        let mut saved = [0u8; MAX_BLOCK_SIZE];
        let saved = &mut saved[..block_size];
        for block in data.chunks_exact_mut(block_size) {
            saved.copy_from_slice(block);
            self.cipher.decrypt_in_place(block)?;
            xor_in_place(block, self.chain.as_slice());
            self.chain.copy_from_slice(saved);
        }
        saved.zeroize();
        Ok(())
    }
}
