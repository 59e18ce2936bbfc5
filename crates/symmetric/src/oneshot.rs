//! Whole-message helpers over [`CipherSession`]

use crate::algorithm::CipherTable;
use crate::error::Result;
use crate::session::{CipherSession, Direction};

fn transform(
    table: &CipherTable,
    name: &str,
    key: &[u8],
    iv: &[u8],
    data: &[u8],
    direction: Direction,
) -> Result<Vec<u8>> {
    let mut session = CipherSession::open(table, name, key, iv, direction)?;
    let mut out = session.update(data)?;
    out.extend(session.finalize()?);
    Ok(out)
}

/// Encrypt and pad `plaintext` in one call
pub fn encrypt(
    table: &CipherTable,
    name: &str,
    key: &[u8],
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    transform(table, name, key, iv, plaintext, Direction::Encrypt)
}

/// Decrypt and unpad `ciphertext` in one call
pub fn decrypt(
    table: &CipherTable,
    name: &str,
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    transform(table, name, key, iv, ciphertext, Direction::Decrypt)
}
