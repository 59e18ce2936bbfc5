//! Block cipher modes of operation
//!
//! Modes here are streaming: each call consumes whole blocks and the
//! chaining state carries over to the next call, so feeding a message in
//! several pieces produces the same output as feeding it at once.

use crate::error::Result;

pub mod cbc;
pub mod ecb;

// Re-exports
pub use cbc::Cbc;
pub use ecb::Ecb;

/// A chaining mode over whole blocks
pub trait BlockMode {
    /// Block size in bytes
    fn block_len(&self) -> usize;

    /// Encrypts `data` in place; its length must be a multiple of the block size
    fn encrypt_blocks(&mut self, data: &mut [u8]) -> Result<()>;

    /// Decrypts `data` in place; its length must be a multiple of the block size
    fn decrypt_blocks(&mut self, data: &mut [u8]) -> Result<()>;
}
