//! AES-128 block cipher core: key schedule and single-block encryption.
//!
//! This crate implements the forward transformation of AES-128 as specified
//! in FIPS-197:
//! - Key schedule expanding a 16-byte key into 11 round keys.
//! - Encryption of one 16-byte block (initial AddRoundKey, nine full rounds,
//!   final round without MixColumns).
//!
//! Decryption, key sizes other than 128 bits, chaining modes, and padding are
//! deliberately out of scope; callers own stream chunking and any handling of
//! partial final blocks.
//!
//! SubBytes is table-driven, so the implementation aims for clarity and
//! testability rather than constant-time guarantees; it should not be treated
//! as hardened against cache-timing side channels. Key material is wiped on
//! drop and compared in constant time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod round;
mod sbox;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{encrypt_block, encrypt_block_slice, expand_key_slice};
pub use crate::error::{Error, Result};
pub use crate::key::{expand_key, Aes128Key, RoundKeys, KEY_SIZE, SCHEDULE_SIZE};
