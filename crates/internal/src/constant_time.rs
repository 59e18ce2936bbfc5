//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Only the
/// lengths are compared in variable time.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time mask generation: all-1s if `condition` is set, all-0s otherwise
#[inline(always)]
pub fn ct_mask(condition: Choice) -> u8 {
    0u8.wrapping_sub(condition.unwrap_u8())
}

/// XOR `src` into `dst` byte by byte
///
/// Both slices must have the same length.
#[inline(always)]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= *s;
    }
}

/// Table lookup that touches every entry
///
/// The memory access pattern is independent of `index`, so the lookup
/// does not leak the index through the cache.
#[inline(always)]
pub fn ct_lookup(table: &[u8; 256], index: u8) -> u8 {
    let mut out = 0u8;
    for (i, &entry) in table.iter().enumerate() {
        let hit = (i as u8).ct_eq(&index);
        out |= entry & ct_mask(hit);
    }
    out
}
