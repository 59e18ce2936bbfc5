//! Streaming cipher sessions
//!
//! A [`CipherSession`] is one keyed, one-directional conversation:
//! `open`, any number of `update` calls, then one `finalize`. Input may
//! arrive in chunks of any size; output is always whole blocks, with
//! PKCS#7 padding added on the last encrypt block and checked and
//! removed on the last decrypt block.
//!
//! ```
//! use gmcrypt_symmetric::{CipherSession, CipherTable, Direction};
//!
//! let table = CipherTable::standard();
//! let key = [0x11u8; 16];
//! let iv = [0x22u8; 16];
//!
//! let mut enc = CipherSession::open(&table, "SMS4", &key, &iv, Direction::Encrypt).unwrap();
//! let mut ciphertext = enc.update(b"hello").unwrap();
//! ciphertext.extend(enc.finalize().unwrap());
//! assert_eq!(ciphertext.len(), 16);
//!
//! let mut dec = CipherSession::open(&table, "SMS4", &key, &iv, Direction::Decrypt).unwrap();
//! let mut plaintext = dec.update(&ciphertext).unwrap();
//! plaintext.extend(dec.finalize().unwrap());
//! assert_eq!(plaintext, b"hello");
//! ```

use core::fmt;

use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::algorithm::{AlgorithmSpec, CipherTable};
use crate::cipher::ChainedCipher;
use crate::error::{Error, Result, SessionResult};
use gmcrypt_algorithms::{BlockMode, Pkcs7};
use gmcrypt_common::SecretVec;

/// Which way a session transforms data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Plaintext in, ciphertext out
    Encrypt,
    /// Ciphertext in, plaintext out
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encrypt"),
            Direction::Decrypt => f.write_str("decrypt"),
        }
    }
}

enum SessionState {
    Open {
        mode: ChainedCipher,
        pending: SecretVec,
    },
    Finalized,
}

/// One open streaming cipher conversation
///
/// Key schedule, chaining value and buffered input are zeroized when the
/// session finalizes, is closed, or is dropped.
pub struct CipherSession {
    spec: AlgorithmSpec,
    direction: Direction,
    state: SessionState,
}

impl CipherSession {
    /// Resolve `name` in `table` and open a session
    ///
    /// Fails with `UnknownAlgorithm`, `InvalidKeyLength` or
    /// `InvalidIvLength`.
    pub fn open(
        table: &CipherTable,
        name: &str,
        key: &[u8],
        iv: &[u8],
        direction: Direction,
    ) -> Result<Self> {
        Self::with_spec(table.lookup(name)?, key, iv, direction)
    }

    /// Open a session for an already resolved algorithm
    pub fn with_spec(
        spec: AlgorithmSpec,
        key: &[u8],
        iv: &[u8],
        direction: Direction,
    ) -> Result<Self> {
        let mode = ChainedCipher::new(spec, key, iv)?;
        debug!("opened {} session for {}", direction, spec);

        Ok(Self {
            spec,
            direction,
            state: SessionState::Open {
                mode,
                pending: SecretVec::with_capacity(2 * spec.block_size()),
            },
        })
    }

    /// Feed the next chunk of input and collect whatever whole blocks it completes
    ///
    /// Decrypt sessions keep the last full block buffered, since only
    /// `finalize` may strip its padding. Whole blocks are taken straight
    /// from `input`; only the tail is copied into the pending buffer, which
    /// never holds more than one block.
    pub fn update(&mut self, input: &[u8]) -> SessionResult<Vec<u8>> {
        let direction = self.direction;
        let (mode, pending) = match &mut self.state {
            SessionState::Open { mode, pending } => (mode, pending),
            SessionState::Finalized => return Err(Error::SessionFinalized),
        };

        let buffered = pending.len().saturating_add(input.len());
        let ready = ready_len(direction, buffered, mode.block_len());
        let from_pending = ready.min(pending.len());
        let from_input = ready - from_pending;

        let mut out = Vec::with_capacity(ready);
        out.extend_from_slice(&pending.as_slice()[..from_pending]);
        out.extend_from_slice(&input[..from_input]);
        pending.discard_front(from_pending);
        pending.extend_from_slice(&input[from_input..]);

        let result = match direction {
            Direction::Encrypt => mode.encrypt_blocks(&mut out),
            Direction::Decrypt => mode.decrypt_blocks(&mut out),
        };
        if let Err(err) = result {
            out.zeroize();
            self.teardown();
            return Err(err.into());
        }

        trace!(
            "{} {} update: {} bytes in, {} bytes out, {} buffered",
            self.spec,
            direction,
            input.len(),
            out.len(),
            self.pending_len()
        );
        Ok(out)
    }

    /// Flush the final block
    ///
    /// Encrypt pads the buffered tail to one full block. Decrypt requires
    /// exactly one buffered block, decrypts it and strips the padding.
    /// Whatever the outcome, the session is finalized and its state wiped;
    /// a second call fails with `SessionFinalized`.
    pub fn finalize(&mut self) -> SessionResult<Vec<u8>> {
        let state = core::mem::replace(&mut self.state, SessionState::Finalized);
        let (mut mode, pending) = match state {
            SessionState::Open { mode, pending } => (mode, pending),
            SessionState::Finalized => return Err(Error::SessionFinalized),
        };

        let result = match self.direction {
            Direction::Encrypt => finish_encrypt(&mut mode, &pending),
            Direction::Decrypt => finish_decrypt(&mut mode, &pending),
        };

        match &result {
            Ok(out) => debug!(
                "finalized {} {} session, {} bytes out",
                self.spec,
                self.direction,
                out.len()
            ),
            Err(err) if err.is_decryption_failure() => debug!("{} decryption failed", self.spec),
            Err(err) => debug!("{} {} finalize failed: {}", self.spec, self.direction, err),
        }
        result
    }

    /// Wipe the session without producing output
    ///
    /// Later `update` and `finalize` calls fail with `SessionFinalized`.
    pub fn close(&mut self) {
        if !self.is_finalized() {
            debug!("closed {} {} session", self.spec, self.direction);
        }
        self.teardown();
    }

    fn teardown(&mut self) {
        // dropping the open state zeroizes the schedule, chain and buffer
        self.state = SessionState::Finalized;
    }

    /// Direction fixed at open
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Algorithm the session was opened with
    pub fn algorithm(&self) -> AlgorithmSpec {
        self.spec
    }

    /// Block size in bytes
    pub fn block_size(&self) -> usize {
        self.spec.block_size()
    }

    /// Whether `finalize` or `close` has run
    pub fn is_finalized(&self) -> bool {
        matches!(self.state, SessionState::Finalized)
    }

    /// Bytes of input buffered and not yet emitted
    pub fn pending_len(&self) -> usize {
        match &self.state {
            SessionState::Open { pending, .. } => pending.len(),
            SessionState::Finalized => 0,
        }
    }

    /// Exact number of bytes the next `update` with `input_len` bytes returns
    pub fn output_size_hint(&self, input_len: usize) -> usize {
        match &self.state {
            SessionState::Open { pending, .. } => {
                let buffered = pending.len().saturating_add(input_len);
                ready_len(self.direction, buffered, self.block_size())
            }
            SessionState::Finalized => 0,
        }
    }
}

impl fmt::Debug for CipherSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherSession")
            .field("algorithm", &self.spec.name())
            .field("direction", &self.direction)
            .field("finalized", &self.is_finalized())
            .field("pending_len", &self.pending_len())
            .finish_non_exhaustive()
    }
}

/// How many buffered bytes an update may release
fn ready_len(direction: Direction, buffered: usize, block_size: usize) -> usize {
    match direction {
        Direction::Encrypt => buffered - buffered % block_size,
        // hold back the last full block for finalize
        Direction::Decrypt => buffered.saturating_sub(1) / block_size * block_size,
    }
}

fn finish_encrypt(mode: &mut ChainedCipher, pending: &SecretVec) -> Result<Vec<u8>> {
    let mut block = Pkcs7::pad(pending.as_slice(), mode.block_len())?;
    if let Err(err) = mode.encrypt_blocks(&mut block) {
        block.zeroize();
        return Err(err.into());
    }
    Ok(block)
}

fn finish_decrypt(mode: &mut ChainedCipher, pending: &SecretVec) -> Result<Vec<u8>> {
    if pending.len() != mode.block_len() {
        return Err(Error::TruncatedCiphertext);
    }

    let mut block = pending.as_slice().to_vec();
    let unpadded = mode
        .decrypt_blocks(&mut block)
        .and_then(|()| Pkcs7::unpadded_len(&block));

    match unpadded {
        Ok(len) => {
            block[len..].zeroize();
            block.truncate(len);
            Ok(block)
        }
        Err(err) => {
            block.zeroize();
            Err(err.into())
        }
    }
}
