//! Error type definitions for cipher operations

use std::string::String;

/// Primary error type for cipher sessions and the primitives beneath them
///
/// `TruncatedCiphertext` and `InvalidPadding` render the same message, so
/// that anything formatted for a peer does not reveal which check failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The algorithm name is not present in the cipher table
    #[error("unknown cipher algorithm: {name}")]
    UnknownAlgorithm {
        /// Name as supplied by the caller
        name: String,
    },

    /// Key length does not match the algorithm
    #[error("invalid key length for {algorithm}: expected {expected}, got {actual}")]
    InvalidKeyLength {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    /// IV length does not match the algorithm's mode
    #[error("invalid IV length for {algorithm}: expected {expected}, got {actual}")]
    InvalidIvLength {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The session has already been finalized or closed
    #[error("cipher session already finalized")]
    SessionFinalized,

    /// Decrypt input ended before a whole final block was buffered
    #[error("decryption failed")]
    TruncatedCiphertext,

    /// The final decrypted block does not carry valid padding
    #[error("decryption failed")]
    InvalidPadding,

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// The random source failed to produce bytes
    #[error("random generation error: {context}: {message}")]
    RandomGeneration {
        context: &'static str,
        message: String,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// True for the errors a decrypting `finalize` can produce on bad input
    ///
    /// Callers that answer a remote peer should branch on this rather than
    /// on the individual variants.
    pub fn is_decryption_failure(&self) -> bool {
        matches!(self, Self::TruncatedCiphertext | Self::InvalidPadding)
    }

    /// Shorthand for an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }
}
