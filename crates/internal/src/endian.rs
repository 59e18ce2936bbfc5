//! Endianness utility functions

/// Convert the first four bytes of `bytes` from big-endian order to a u32
#[inline(always)]
pub fn u32_from_be_bytes(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Write `value` into the first four bytes of `out` in big-endian order
#[inline(always)]
pub fn u32_into_be_bytes(value: u32, out: &mut [u8]) {
    out[..4].copy_from_slice(&value.to_be_bytes());
}

/// Load a 16-byte block as four big-endian words
#[inline(always)]
pub fn block_to_words(block: &[u8]) -> [u32; 4] {
    [
        u32_from_be_bytes(&block[0..4]),
        u32_from_be_bytes(&block[4..8]),
        u32_from_be_bytes(&block[8..12]),
        u32_from_be_bytes(&block[12..16]),
    ]
}

/// Store four words into a 16-byte block in big-endian order
#[inline(always)]
pub fn words_to_block(words: &[u32; 4], block: &mut [u8]) {
    for (i, w) in words.iter().enumerate() {
        u32_into_be_bytes(*w, &mut block[i * 4..(i + 1) * 4]);
    }
}
