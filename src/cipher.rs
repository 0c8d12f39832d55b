//! Single-block encryption: the round pipeline and the slice-validated
//! entry points.

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{self, Result};
use crate::key::{expand_key, Aes128Key, RoundKeys};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};

/// Encrypts a single 16-byte block with pre-expanded round keys.
///
/// The pipeline is fixed regardless of content: AddRoundKey with round key 0,
/// nine rounds of SubBytes, ShiftRows, MixColumns, and AddRoundKey, then a
/// final round that skips MixColumns. The schedule is only read, so blocks
/// may be encrypted concurrently under one schedule.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..10 {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(10));

    state
}

/// Expands a key supplied as a byte slice.
///
/// Fails with [`Error::InvalidKeyLength`](crate::Error::InvalidKeyLength)
/// unless the slice is exactly 16 bytes.
pub fn expand_key_slice(key: &[u8]) -> Result<RoundKeys> {
    let key = Aes128Key::from_slice(key)?;
    Ok(expand_key(&key))
}

/// Encrypts a block with a schedule supplied in its 176-byte linearized form.
///
/// Both inputs are validated before any transformation runs: the schedule
/// must be exactly 176 bytes
/// ([`Error::InvalidScheduleLength`](crate::Error::InvalidScheduleLength))
/// and the block exactly 16
/// ([`Error::InvalidBlockLength`](crate::Error::InvalidBlockLength)).
pub fn encrypt_block_slice(block: &[u8], schedule: &[u8]) -> Result<Block> {
    let round_keys = RoundKeys::from_slice(schedule)?;
    error::check_block_length(block.len())?;
    let mut buf = [0u8; BLOCK_SIZE];
    buf.copy_from_slice(block);
    Ok(encrypt_block(&buf, &round_keys))
}
