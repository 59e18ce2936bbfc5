//! AES block cipher implementations
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197, for 128, 192 and 256-bit keys.
//!
//! ## Constant-Time Guarantees
//!
//! This implementation mitigates timing side-channel attacks by:
//! - Using branchless arithmetic for GF(2^8) operations
//! - Computing the S-box from field inversion instead of table lookups
//! - Ensuring consistent memory access patterns

use core::sync::atomic::{compiler_fence, Ordering};

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use gmcrypt_api::SecretBytes;
use gmcrypt_common::SecretBuffer;
use gmcrypt_internal::constant_time::xor_in_place;
use gmcrypt_internal::endian::{u32_from_be_bytes, u32_into_be_bytes};
use gmcrypt_params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE,
};

/// Round constants for AES key expansion
const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000,
    0x10000000, 0x20000000, 0x40000000, 0x80000000, 0x1b000000, 0x36000000,
];

/// Largest expanded schedule, in words (AES-256)
const MAX_SCHEDULE_WORDS: usize = 60;

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a >> 7;
        a <<= 1;
        a ^= hi * 0x1B;
        b >>= 1;
    }
    p
}

/// Raise to the 254th power (b⁻¹ in GF(2⁸)); maps 0 to 0
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    gf_mul(y, x2)
}

/// AES forward S-box: inv(x) ⊕ ROTL(inv(x),1–4) ⊕ 0x63
#[inline(always)]
fn sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

/// AES inverse S-box: undo the affine map, then invert
#[inline(always)]
fn inv_sbox(x: u8) -> u8 {
    let y = x ^ 0x63;
    gf_inv(y.rotate_left(1) ^ y.rotate_left(3) ^ y.rotate_left(6))
}

/// Substitutes each byte in a word using the S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let b = word.to_be_bytes();
    u32::from_be_bytes([sbox(b[0]), sbox(b[1]), sbox(b[2]), sbox(b[3])])
}

/// FIPS 197 key expansion into `out`, which holds `4 * (rounds + 1)` words
fn expand_key(key: &[u8], out: &mut [u8]) {
    let nk = key.len() / 4;
    let total = out.len() / 4;
    let mut w = [0u32; MAX_SCHEDULE_WORDS];

    for (i, chunk) in key.chunks_exact(4).enumerate() {
        w[i] = u32_from_be_bytes(chunk);
    }

    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ RCON[i / nk];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    for (i, chunk) in out.chunks_exact_mut(4).enumerate() {
        u32_into_be_bytes(w[i], chunk);
    }
    w.zeroize();
}

fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
    // ensure no reordering around the bit operations
    compiler_fence(Ordering::SeqCst);
}

fn inv_sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
    compiler_fence(Ordering::SeqCst);
}

/// Row r of the column-major state rotates left by r positions
fn shift_rows(state: &mut [u8; 16]) {
    let t = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[c * 4 + r] = t[((c + r) % 4) * 4 + r];
        }
    }
}

fn inv_shift_rows(state: &mut [u8; 16]) {
    let t = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[((c + r) % 4) * 4 + r] = t[c * 4 + r];
        }
    }
}

/// Multiply by 2 in GF(2^8)
#[inline(always)]
fn mul2(byte: u8) -> u8 {
    (byte << 1) ^ ((byte >> 7) * 0x1B)
}

fn mix_columns(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let (s0, s1, s2, s3) = (col[0], col[1], col[2], col[3]);
        col[0] = mul2(s0) ^ mul2(s1) ^ s1 ^ s2 ^ s3;
        col[1] = s0 ^ mul2(s1) ^ mul2(s2) ^ s2 ^ s3;
        col[2] = s0 ^ s1 ^ mul2(s2) ^ mul2(s3) ^ s3;
        col[3] = mul2(s0) ^ s0 ^ s1 ^ s2 ^ mul2(s3);
    }
}

fn inv_mix_columns(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let (s0, s1, s2, s3) = (col[0], col[1], col[2], col[3]);
        col[0] = gf_mul(s0, 14) ^ gf_mul(s1, 11) ^ gf_mul(s2, 13) ^ gf_mul(s3, 9);
        col[1] = gf_mul(s0, 9) ^ gf_mul(s1, 14) ^ gf_mul(s2, 11) ^ gf_mul(s3, 13);
        col[2] = gf_mul(s0, 13) ^ gf_mul(s1, 9) ^ gf_mul(s2, 14) ^ gf_mul(s3, 11);
        col[3] = gf_mul(s0, 11) ^ gf_mul(s1, 13) ^ gf_mul(s2, 9) ^ gf_mul(s3, 14);
    }
}

/// Encrypt one block with an expanded schedule of `rounds + 1` round keys
fn encrypt_rounds(block: &mut [u8], round_keys: &[u8], rounds: usize) {
    let mut state = [0u8; 16];
    state.copy_from_slice(block);

    xor_in_place(&mut state, &round_keys[..16]);
    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        xor_in_place(&mut state, &round_keys[round * 16..(round + 1) * 16]);
    }
    sub_bytes(&mut state);
    shift_rows(&mut state);
    xor_in_place(&mut state, &round_keys[rounds * 16..(rounds + 1) * 16]);

    block.copy_from_slice(&state);
    state.zeroize();
}

/// Inverse of [`encrypt_rounds`]
fn decrypt_rounds(block: &mut [u8], round_keys: &[u8], rounds: usize) {
    let mut state = [0u8; 16];
    state.copy_from_slice(block);

    xor_in_place(&mut state, &round_keys[rounds * 16..(rounds + 1) * 16]);
    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        xor_in_place(&mut state, &round_keys[round * 16..(round + 1) * 16]);
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    xor_in_place(&mut state, &round_keys[..16]);

    block.copy_from_slice(&state);
    state.zeroize();
}

macro_rules! aes_variant {
    (
        $(#[$doc:meta])*
        $cipher:ident, $algorithm:ident, $name:literal,
        key = $key_size:expr, rounds = $rounds:literal, schedule = $schedule:literal
    ) => {
        #[doc = concat!("Type-level constants for ", $name)]
        pub enum $algorithm {}

        impl CipherAlgorithm for $algorithm {
            const KEY_SIZE: usize = $key_size;
            const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

            fn name() -> &'static str {
                $name
            }
        }

        $(#[$doc])*
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct $cipher {
            round_keys: SecretBuffer<$schedule>,
        }

        impl BlockCipher for $cipher {
            type Algorithm = $algorithm;
            type Key = SecretBytes<{ $key_size }>;

            fn new(key: &Self::Key) -> Self {
                let mut round_keys = SecretBuffer::<$schedule>::zeroed();
                expand_key(key.as_ref(), round_keys.as_mut_slice());
                $cipher { round_keys }
            }

            fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
                validate::length(concat!($name, " block"), block.len(), AES_BLOCK_SIZE)?;
                encrypt_rounds(block, self.round_keys.as_slice(), $rounds);
                Ok(())
            }

            fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
                validate::length(concat!($name, " block"), block.len(), AES_BLOCK_SIZE)?;
                decrypt_rounds(block, self.round_keys.as_slice(), $rounds);
                Ok(())
            }

            fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
                SecretBytes::random(rng)
            }
        }
    };
}

aes_variant! {
    /// AES-128 block cipher
    Aes128, Aes128Algorithm, "AES-128",
    key = AES128_KEY_SIZE, rounds = 10, schedule = 176
}

aes_variant! {
    /// AES-192 block cipher
    Aes192, Aes192Algorithm, "AES-192",
    key = AES192_KEY_SIZE, rounds = 12, schedule = 208
}

aes_variant! {
    /// AES-256 block cipher
    Aes256, Aes256Algorithm, "AES-256",
    key = AES256_KEY_SIZE, rounds = 14, schedule = 240
}
