//! Block cipher implementations with type-level key sizes
//!
//! Each cipher exposes its key and block sizes through a
//! [`CipherAlgorithm`] marker type and transforms exactly one block at a
//! time. Chaining across blocks lives in [`modes`].
//!
//! ## Example usage
//!
//! ```
//! use gmcrypt_algorithms::block::{BlockCipher, Sms4};
//! use gmcrypt_algorithms::SecretBytes;
//!
//! let key = SecretBytes::new([0x42u8; 16]);
//! let cipher = Sms4::new(&key);
//!
//! let mut block = *b"sixteen byte blk";
//! cipher.encrypt_block(&mut block).unwrap();
//! cipher.decrypt_block(&mut block).unwrap();
//! assert_eq!(&block, b"sixteen byte blk");
//! ```

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::Result;

pub mod aes;
pub mod modes;
pub mod sm4;

// Re-exports
pub use aes::{Aes128, Aes192, Aes256};
pub use sm4::{Sm4, Sms4};

/// Marker trait for cipher algorithms with compile-time properties
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// Trait for block ciphers with type-level constraints
pub trait BlockCipher: Zeroize {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// Key type with appropriate size guarantee
    type Key: AsRef<[u8]> + AsMut<[u8]> + Clone + Zeroize;

    /// Creates a new block cipher instance with the given key
    fn new(key: &Self::Key) -> Self;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the block cipher
    fn name() -> &'static str {
        Self::Algorithm::name()
    }

    /// Generate a random key
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;
}

/// Object-level view of a keyed block cipher
///
/// [`BlockCipher`] carries its sizes as associated constants, which
/// callers choosing a cipher at runtime cannot name. This trait exposes
/// the same transform through `&self` so chaining modes and sessions can
/// work over any keyed cipher.
pub trait BlockTransform {
    /// Block size in bytes
    fn block_len(&self) -> usize;

    /// Encrypts one block in place
    fn encrypt_in_place(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts one block in place
    fn decrypt_in_place(&self, block: &mut [u8]) -> Result<()>;
}

impl<B: BlockCipher> BlockTransform for B {
    #[inline]
    fn block_len(&self) -> usize {
        B::block_size()
    }

    #[inline]
    fn encrypt_in_place(&self, block: &mut [u8]) -> Result<()> {
        self.encrypt_block(block)
    }

    #[inline]
    fn decrypt_in_place(&self, block: &mut [u8]) -> Result<()> {
        self.decrypt_block(block)
    }
}
