//! Electronic Codebook (ECB) mode
//!
//! Each block is transformed independently, so equal plaintext blocks
//! give equal ciphertext blocks. Kept for interoperability; prefer CBC.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::BlockMode;
use crate::block::BlockTransform;
use crate::error::{validate, Result};

/// ECB mode implementation
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Ecb<B: BlockTransform + Zeroize + ZeroizeOnDrop> {
    cipher: B,
}

impl<B: BlockTransform + Zeroize + ZeroizeOnDrop> Ecb<B> {
    /// Creates a new ECB mode instance around `cipher`
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }
}

impl<B: BlockTransform + Zeroize + ZeroizeOnDrop> BlockMode for Ecb<B> {
    fn block_len(&self) -> usize {
        self.cipher.block_len()
    }

    fn encrypt_blocks(&mut self, data: &mut [u8]) -> Result<()> {
        let block_size = self.block_len();
        validate::block_multiple("ECB plaintext", data.len(), block_size)?;

        for block in data.chunks_exact_mut(block_size) {
            self.cipher.encrypt_in_place(block)?;
        }
        Ok(())
    }

    fn decrypt_blocks(&mut self, data: &mut [u8]) -> Result<()> {
        let block_size = self.block_len();
        validate::block_multiple("ECB ciphertext", data.len(), block_size)?;

        for block in data.chunks_exact_mut(block_size) {
            self.cipher.decrypt_in_place(block)?;
        }
        Ok(())
    }
}
