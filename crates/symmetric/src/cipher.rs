//! Keyed ciphers selected at runtime
//!
//! [`KeyedCipher`] holds one expanded key for whichever raw cipher a
//! [`CipherKind`] names, and [`ChainedCipher`] wraps it in the chaining
//! mode an [`AlgorithmSpec`] asks for.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::algorithm::{AlgorithmSpec, CipherKind, CipherMode};
use crate::error::{validate, Result};
use gmcrypt_algorithms::block::{Aes128, Aes192, Aes256, BlockCipher, BlockTransform, Sms4};
use gmcrypt_algorithms::{BlockMode, Cbc, Ecb, SecretBytes};

/// A raw block cipher with its key schedule
pub enum KeyedCipher {
    /// SMS4 / SM4
    Sms4(Sms4),
    /// AES-128
    Aes128(Aes128),
    /// AES-192
    Aes192(Aes192),
    /// AES-256
    Aes256(Aes256),
}

impl KeyedCipher {
    /// Expand `key` for `kind`, checking its length first
    pub fn new(kind: CipherKind, key: &[u8]) -> Result<Self> {
        validate::key_length(kind.name(), key.len(), kind.key_len())?;

        Ok(match kind {
            CipherKind::Sms4 => KeyedCipher::Sms4(Sms4::new(&SecretBytes::from_slice(key)?)),
            CipherKind::Aes128 => KeyedCipher::Aes128(Aes128::new(&SecretBytes::from_slice(key)?)),
            CipherKind::Aes192 => KeyedCipher::Aes192(Aes192::new(&SecretBytes::from_slice(key)?)),
            CipherKind::Aes256 => KeyedCipher::Aes256(Aes256::new(&SecretBytes::from_slice(key)?)),
        })
    }

    /// Which cipher this is
    pub fn kind(&self) -> CipherKind {
        match self {
            KeyedCipher::Sms4(_) => CipherKind::Sms4,
            KeyedCipher::Aes128(_) => CipherKind::Aes128,
            KeyedCipher::Aes192(_) => CipherKind::Aes192,
            KeyedCipher::Aes256(_) => CipherKind::Aes256,
        }
    }
}

impl BlockTransform for KeyedCipher {
    fn block_len(&self) -> usize {
        self.kind().block_size()
    }

    fn encrypt_in_place(&self, block: &mut [u8]) -> gmcrypt_algorithms::Result<()> {
        match self {
            KeyedCipher::Sms4(c) => c.encrypt_block(block),
            KeyedCipher::Aes128(c) => c.encrypt_block(block),
            KeyedCipher::Aes192(c) => c.encrypt_block(block),
            KeyedCipher::Aes256(c) => c.encrypt_block(block),
        }
    }

    fn decrypt_in_place(&self, block: &mut [u8]) -> gmcrypt_algorithms::Result<()> {
        match self {
            KeyedCipher::Sms4(c) => c.decrypt_block(block),
            KeyedCipher::Aes128(c) => c.decrypt_block(block),
            KeyedCipher::Aes192(c) => c.decrypt_block(block),
            KeyedCipher::Aes256(c) => c.decrypt_block(block),
        }
    }
}

impl Zeroize for KeyedCipher {
    fn zeroize(&mut self) {
        match self {
            KeyedCipher::Sms4(c) => c.zeroize(),
            KeyedCipher::Aes128(c) => c.zeroize(),
            KeyedCipher::Aes192(c) => c.zeroize(),
            KeyedCipher::Aes256(c) => c.zeroize(),
        }
    }
}

// Every variant wipes its own schedule on drop.
impl ZeroizeOnDrop for KeyedCipher {}

/// A keyed cipher inside its chaining mode
pub enum ChainedCipher {
    /// Electronic Codebook
    Ecb(Ecb<KeyedCipher>),
    /// Cipher Block Chaining
    Cbc(Cbc<KeyedCipher>),
}

impl ChainedCipher {
    /// Key the cipher and set up the mode, checking key and IV lengths
    pub fn new(spec: AlgorithmSpec, key: &[u8], iv: &[u8]) -> Result<Self> {
        validate::key_length(spec.name(), key.len(), spec.key_len())?;
        validate::iv_length(spec.name(), iv.len(), spec.iv_len())?;

        let cipher = KeyedCipher::new(spec.kind, key)?;
        Ok(match spec.mode {
            CipherMode::Ecb => ChainedCipher::Ecb(Ecb::new(cipher)),
            CipherMode::Cbc => ChainedCipher::Cbc(Cbc::new(cipher, iv)?),
        })
    }
}

impl BlockMode for ChainedCipher {
    fn block_len(&self) -> usize {
        match self {
            ChainedCipher::Ecb(m) => m.block_len(),
            ChainedCipher::Cbc(m) => m.block_len(),
        }
    }

    fn encrypt_blocks(&mut self, data: &mut [u8]) -> gmcrypt_algorithms::Result<()> {
        match self {
            ChainedCipher::Ecb(m) => m.encrypt_blocks(data),
            ChainedCipher::Cbc(m) => m.encrypt_blocks(data),
        }
    }

    fn decrypt_blocks(&mut self, data: &mut [u8]) -> gmcrypt_algorithms::Result<()> {
        match self {
            ChainedCipher::Ecb(m) => m.decrypt_blocks(data),
            ChainedCipher::Cbc(m) => m.decrypt_blocks(data),
        }
    }
}
