//! Constants for symmetric block ciphers and their modes of operation

/// SMS4 (SM4, GB/T 32907-2016) key size in bytes
pub const SMS4_KEY_SIZE: usize = 16;

/// SMS4 block size in bytes
pub const SMS4_BLOCK_SIZE: usize = 16;

/// Number of SMS4 rounds
pub const SMS4_ROUNDS: usize = 32;

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Largest block size of any supported cipher
pub const MAX_BLOCK_SIZE: usize = 16;

/// ECB carries no chaining state, so it takes no IV
pub const ECB_IV_SIZE: usize = 0;
