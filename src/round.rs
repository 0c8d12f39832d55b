//! The four round transformations applied to the cipher state.
//!
//! The state is a [`Block`] read column-major: entry (row, col) lives at
//! index `row + 4 * col`. Every transformation here is total and mutates the
//! state in place.

use crate::block::{xor_in_place, Block};
use crate::sbox::sbox;

/// Replaces every state byte with its S-box image.
#[inline]
pub(crate) fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Rotates row `r` of the state left by `r` positions.
#[inline]
pub(crate) fn shift_rows(state: &mut Block) {
    let copy = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[row + 4 * col] = copy[row + 4 * ((col + row) % 4)];
        }
    }
}

/// Doubles a byte in GF(2^8), reducing by x^8 + x^4 + x^3 + x + 1.
///
/// The reduction is applied branchlessly so the operation costs the same
/// whether or not the high bit is set.
#[inline]
fn xtime(byte: u8) -> u8 {
    (byte << 1) ^ ((byte >> 7) * 0x1b)
}

/// Multiplies each state column by the fixed MixColumns matrix over GF(2^8).
///
/// Per column this is `out_i = 2·a_i ⊕ 3·a_{i+1} ⊕ a_{i+2} ⊕ a_{i+3}` with
/// indices taken cyclically. Skipped in the final round.
#[inline]
pub(crate) fn mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let (a0, a1, a2, a3) = (col[0], col[1], col[2], col[3]);
        col[0] = xtime(a0) ^ xtime(a1) ^ a1 ^ a2 ^ a3;
        col[1] = a0 ^ xtime(a1) ^ xtime(a2) ^ a2 ^ a3;
        col[2] = a0 ^ a1 ^ xtime(a2) ^ xtime(a3) ^ a3;
        col[3] = xtime(a0) ^ a0 ^ a1 ^ a2 ^ xtime(a3);
    }
}

/// XORs a round key into the state.
#[inline]
pub(crate) fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
