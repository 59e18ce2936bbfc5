//! Cipher algorithm metadata and the lookup table
//!
//! Names resolve once, at session open, to an [`AlgorithmSpec`]: a closed
//! pair of [`CipherKind`] and [`CipherMode`]. Nothing past that point
//! dispatches on strings.
//!
//! The table is an ordinary immutable value. Build it once with
//! [`CipherTable::standard`] or [`CipherTableBuilder`] and pass it to
//! wherever lookups happen.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::session::{CipherSession, Direction};
use gmcrypt_params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE, ECB_IV_SIZE,
    SMS4_BLOCK_SIZE, SMS4_KEY_SIZE,
};

/// Raw block cipher behind a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CipherKind {
    /// SMS4 / SM4, 128-bit key
    Sms4,
    /// AES with a 128-bit key
    Aes128,
    /// AES with a 192-bit key
    Aes192,
    /// AES with a 256-bit key
    Aes256,
}

impl CipherKind {
    /// Key length in bytes
    pub const fn key_len(self) -> usize {
        match self {
            CipherKind::Sms4 => SMS4_KEY_SIZE,
            CipherKind::Aes128 => AES128_KEY_SIZE,
            CipherKind::Aes192 => AES192_KEY_SIZE,
            CipherKind::Aes256 => AES256_KEY_SIZE,
        }
    }

    /// Block length in bytes
    pub const fn block_size(self) -> usize {
        match self {
            CipherKind::Sms4 => SMS4_BLOCK_SIZE,
            CipherKind::Aes128 | CipherKind::Aes192 | CipherKind::Aes256 => AES_BLOCK_SIZE,
        }
    }

    /// Name of the raw cipher
    pub const fn name(self) -> &'static str {
        match self {
            CipherKind::Sms4 => "SMS4",
            CipherKind::Aes128 => "AES-128",
            CipherKind::Aes192 => "AES-192",
            CipherKind::Aes256 => "AES-256",
        }
    }
}

/// Chaining mode applied over the raw cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CipherMode {
    /// Cipher Block Chaining; IV is one block
    Cbc,
    /// Electronic Codebook; no IV
    Ecb,
}

/// A fully resolved algorithm: cipher plus mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlgorithmSpec {
    /// Raw block cipher
    pub kind: CipherKind,
    /// Chaining mode
    pub mode: CipherMode,
}

impl AlgorithmSpec {
    /// SMS4 in CBC mode, the default SMS4 configuration
    pub const SMS4_CBC: Self = Self::new(CipherKind::Sms4, CipherMode::Cbc);

    /// Combine a cipher and a mode
    pub const fn new(kind: CipherKind, mode: CipherMode) -> Self {
        Self { kind, mode }
    }

    /// Canonical name, e.g. `SMS4-CBC`
    pub const fn name(&self) -> &'static str {
        match (self.kind, self.mode) {
            (CipherKind::Sms4, CipherMode::Cbc) => "SMS4-CBC",
            (CipherKind::Sms4, CipherMode::Ecb) => "SMS4-ECB",
            (CipherKind::Aes128, CipherMode::Cbc) => "AES-128-CBC",
            (CipherKind::Aes128, CipherMode::Ecb) => "AES-128-ECB",
            (CipherKind::Aes192, CipherMode::Cbc) => "AES-192-CBC",
            (CipherKind::Aes192, CipherMode::Ecb) => "AES-192-ECB",
            (CipherKind::Aes256, CipherMode::Cbc) => "AES-256-CBC",
            (CipherKind::Aes256, CipherMode::Ecb) => "AES-256-ECB",
        }
    }

    /// Key length in bytes
    pub const fn key_len(&self) -> usize {
        self.kind.key_len()
    }

    /// IV length in bytes; zero for ECB
    pub const fn iv_len(&self) -> usize {
        match self.mode {
            CipherMode::Cbc => self.kind.block_size(),
            CipherMode::Ecb => ECB_IV_SIZE,
        }
    }

    /// Block length in bytes
    pub const fn block_size(&self) -> usize {
        self.kind.block_size()
    }
}

impl fmt::Display for AlgorithmSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every built-in algorithm, in listing order
const BUILTIN: [AlgorithmSpec; 8] = [
    AlgorithmSpec::SMS4_CBC,
    AlgorithmSpec::new(CipherKind::Sms4, CipherMode::Ecb),
    AlgorithmSpec::new(CipherKind::Aes128, CipherMode::Cbc),
    AlgorithmSpec::new(CipherKind::Aes192, CipherMode::Cbc),
    AlgorithmSpec::new(CipherKind::Aes256, CipherMode::Cbc),
    AlgorithmSpec::new(CipherKind::Aes128, CipherMode::Ecb),
    AlgorithmSpec::new(CipherKind::Aes192, CipherMode::Ecb),
    AlgorithmSpec::new(CipherKind::Aes256, CipherMode::Ecb),
];

/// Uppercase, with `_` folded into `-`
fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c == '_' { '-' } else { c.to_ascii_uppercase() })
        .collect()
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    key: String,
    spec: AlgorithmSpec,
}

/// Immutable name-to-algorithm table
#[derive(Debug, Clone)]
pub struct CipherTable {
    entries: Vec<Entry>,
}

impl CipherTable {
    /// The built-in algorithms plus the `SMS4` and `SM4` aliases for SMS4-CBC
    pub fn standard() -> Self {
        CipherTableBuilder::standard().build()
    }

    /// Start an empty table
    pub fn builder() -> CipherTableBuilder {
        CipherTableBuilder::new()
    }

    /// Resolve a name, ignoring case and treating `-` and `_` alike
    pub fn lookup(&self, name: &str) -> Result<AlgorithmSpec> {
        let key = normalize(name);
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.spec)
            .ok_or_else(|| Error::UnknownAlgorithm {
                name: name.to_string(),
            })
    }

    /// Whether `name` resolves
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_ok()
    }

    /// Key length of the named algorithm
    pub fn key_length(&self, name: &str) -> Result<usize> {
        Ok(self.lookup(name)?.key_len())
    }

    /// IV length of the named algorithm
    pub fn iv_length(&self, name: &str) -> Result<usize> {
        Ok(self.lookup(name)?.iv_len())
    }

    /// Block size of the named algorithm
    pub fn block_size(&self, name: &str) -> Result<usize> {
        Ok(self.lookup(name)?.block_size())
    }

    /// Registered names, aliases included, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no names at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve `name` and open a session on it
    pub fn open(
        &self,
        name: &str,
        key: &[u8],
        iv: &[u8],
        direction: Direction,
    ) -> Result<CipherSession> {
        CipherSession::with_spec(self.lookup(name)?, key, iv, direction)
    }
}

impl Default for CipherTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builder for a [`CipherTable`]
///
/// Registering a name that already resolves replaces the earlier entry.
#[derive(Debug, Clone, Default)]
pub struct CipherTableBuilder {
    entries: Vec<Entry>,
}

impl CipherTableBuilder {
    /// Empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded with the standard table
    pub fn standard() -> Self {
        let mut builder = Self::new();
        for spec in BUILTIN {
            builder = builder.register(spec.name(), spec);
        }
        builder
            .register("SMS4", AlgorithmSpec::SMS4_CBC)
            .register("SM4", AlgorithmSpec::SMS4_CBC)
    }

    /// Register `name` for `spec`
    pub fn register(mut self, name: &str, spec: AlgorithmSpec) -> Self {
        let key = normalize(name);
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.spec = spec,
            None => self.entries.push(Entry {
                name: name.trim().to_string(),
                key,
                spec,
            }),
        }
        self
    }

    /// Register `alias` for whatever `target` currently resolves to
    pub fn alias(self, alias: &str, target: &str) -> Result<Self> {
        let key = normalize(target);
        let spec = self
            .entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.spec)
            .ok_or_else(|| Error::UnknownAlgorithm {
                name: target.to_string(),
            })?;
        Ok(self.register(alias, spec))
    }

    /// Freeze into a table
    pub fn build(self) -> CipherTable {
        CipherTable {
            entries: self.entries,
        }
    }
}
