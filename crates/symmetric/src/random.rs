//! Random key and IV generation
//!
//! The default source is the operating system CSPRNG ([`OsRng`]). The
//! `_with` variants take any cryptographic RNG, which tests use to stay
//! deterministic.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::algorithm::{AlgorithmSpec, CipherTable};
use crate::error::{Error, Result};

/// Fill `buf` from `rng`, surfacing RNG failure as an error
pub fn fill_random<R: RngCore + CryptoRng>(rng: &mut R, buf: &mut [u8]) -> Result<()> {
    rng.try_fill_bytes(buf).map_err(|err| Error::RandomGeneration {
        context: "fill_random",
        message: err.to_string(),
    })
}

/// `n` bytes from the operating system CSPRNG
pub fn generate_random(n: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; n];
    fill_random(&mut OsRng, &mut buf)?;
    Ok(buf)
}

/// A fresh key for `spec`, drawn from `rng`
pub fn generate_key_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    spec: AlgorithmSpec,
) -> Result<Zeroizing<Vec<u8>>> {
    let mut key = Zeroizing::new(vec![0u8; spec.key_len()]);
    fill_random(rng, &mut key)?;
    Ok(key)
}

/// A fresh IV for `spec`, drawn from `rng`; empty for ECB
pub fn generate_iv_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    spec: AlgorithmSpec,
) -> Result<Vec<u8>> {
    let mut iv = vec![0u8; spec.iv_len()];
    fill_random(rng, &mut iv)?;
    Ok(iv)
}

/// A fresh key for the named algorithm
pub fn generate_key(table: &CipherTable, name: &str) -> Result<Zeroizing<Vec<u8>>> {
    generate_key_with(&mut OsRng, table.lookup(name)?)
}

/// A fresh IV for the named algorithm
pub fn generate_iv(table: &CipherTable, name: &str) -> Result<Vec<u8>> {
    generate_iv_with(&mut OsRng, table.lookup(name)?)
}
