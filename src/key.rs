//! Key types and the AES-128 key schedule.

use core::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{self, Result};
use crate::sbox::sbox;

/// Length in bytes of an AES-128 key.
pub const KEY_SIZE: usize = 16;

/// Length in bytes of the expanded round-key schedule.
pub const SCHEDULE_SIZE: usize = 176;

/// Number of round keys: the initial key plus one per round.
const NUM_ROUND_KEYS: usize = 11;

/// Number of 4-byte words in the expanded schedule.
const NUM_WORDS: usize = 44;

/// Round constants for the key schedule, indexed by round (1-based).
const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// AES-128 key wrapper.
///
/// The bytes are wiped when the key is dropped, equality is evaluated in
/// constant time, and `Debug` never prints key material.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128Key([u8; KEY_SIZE]);

impl Aes128Key {
    /// Builds a key from a byte slice.
    ///
    /// Fails with [`Error::InvalidKeyLength`](crate::Error::InvalidKeyLength)
    /// for any length other than 16; the input is never truncated or padded.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        error::check_key_length(bytes.len())?;
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// Returns the raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes128Key(<redacted>)")
    }
}

impl PartialEq for Aes128Key {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for Aes128Key {}

/// Expanded round keys for AES-128, wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys([Block; NUM_ROUND_KEYS]);

impl RoundKeys {
    /// Rebuilds a schedule from its 176-byte linearized form.
    ///
    /// Fails with
    /// [`Error::InvalidScheduleLength`](crate::Error::InvalidScheduleLength)
    /// for any other length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        error::check_schedule_length(bytes.len())?;
        let mut round_keys = [[0u8; BLOCK_SIZE]; NUM_ROUND_KEYS];
        for (round_key, chunk) in round_keys.iter_mut().zip(bytes.chunks_exact(BLOCK_SIZE)) {
            round_key.copy_from_slice(chunk);
        }
        Ok(Self(round_keys))
    }

    /// Linearizes the schedule to 176 bytes, round key 0 first.
    pub fn to_bytes(&self) -> [u8; SCHEDULE_SIZE] {
        let mut bytes = [0u8; SCHEDULE_SIZE];
        for (chunk, round_key) in bytes.chunks_exact_mut(BLOCK_SIZE).zip(self.0.iter()) {
            chunk.copy_from_slice(round_key);
        }
        bytes
    }

    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RoundKeys(<redacted>)")
    }
}

impl PartialEq for RoundKeys {
    fn eq(&self, other: &Self) -> bool {
        let mut eq = Choice::from(1u8);
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            eq &= a.ct_eq(b);
        }
        eq.into()
    }
}

impl Eq for RoundKeys {}

/// Rotates the four bytes of a word left by one position.
#[inline]
fn rot_word(word: &mut [u8; 4]) {
    word.rotate_left(1);
}

/// Substitutes each byte of a word through the S-box.
#[inline]
fn sub_word(word: &mut [u8; 4]) {
    for byte in word.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Expands a 128-bit key into the 11 round keys consumed by the cipher.
///
/// Words 0–3 are the key itself; every later word is the previous word,
/// transformed on each fourth position by RotWord, SubWord, and a round
/// constant, XORed with the word four positions back. The result is a pure
/// function of the key bytes.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut words = [[0u8; 4]; NUM_WORDS];
    for (word, chunk) in words.iter_mut().zip(key.0.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in 4..NUM_WORDS {
        let mut temp = words[i - 1];
        if i % 4 == 0 {
            rot_word(&mut temp);
            sub_word(&mut temp);
            temp[0] ^= RCON[i / 4 - 1];
        }
        for (t, prev) in temp.iter_mut().zip(words[i - 4].iter()) {
            *t ^= *prev;
        }
        words[i] = temp;
    }

    let mut round_keys = [[0u8; BLOCK_SIZE]; NUM_ROUND_KEYS];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for (chunk, word) in round_key
            .chunks_exact_mut(4)
            .zip(words[round * 4..round * 4 + 4].iter())
        {
            chunk.copy_from_slice(word);
        }
    }

    let schedule = RoundKeys(round_keys);
    words.zeroize();
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    // FIPS-197 appendix A.1 key expansion example.
    const FIPS_KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];

    #[test]
    fn schedule_starts_with_the_key() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let mut key_bytes = [0u8; KEY_SIZE];
            rng.fill_bytes(&mut key_bytes);
            let schedule = expand_key(&Aes128Key::from(key_bytes));
            assert_eq!(&schedule.to_bytes()[..KEY_SIZE], &key_bytes);
        }
    }

    #[test]
    fn expansion_matches_fips_appendix_a() {
        let schedule = expand_key(&Aes128Key::from(FIPS_KEY));
        let bytes = schedule.to_bytes();
        // w4 = a0fafe17, the first derived word.
        assert_eq!(&bytes[16..20], &[0xa0, 0xfa, 0xfe, 0x17]);
        // Round key 10: d014f9a8 c9ee2589 e13f0cc8 b6630ca6.
        assert_eq!(
            schedule.get(10),
            &[
                0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6,
                0x63, 0x0c, 0xa6,
            ]
        );
    }

    #[test]
    fn expansion_is_deterministic() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let mut key_bytes = [0u8; KEY_SIZE];
            rng.fill_bytes(&mut key_bytes);
            let key = Aes128Key::from(key_bytes);
            assert_eq!(expand_key(&key), expand_key(&key));
        }
    }

    #[test]
    fn key_from_slice_rejects_wrong_lengths() {
        for len in [0usize, 15, 17, 32] {
            let bytes = vec![0u8; len];
            assert_eq!(
                Aes128Key::from_slice(&bytes).unwrap_err(),
                crate::Error::InvalidKeyLength { actual: len }
            );
        }
        assert!(Aes128Key::from_slice(&[0u8; 16]).is_ok());
    }

    #[test]
    fn schedule_round_trips_through_bytes() {
        let schedule = expand_key(&Aes128Key::from(FIPS_KEY));
        let rebuilt = RoundKeys::from_slice(&schedule.to_bytes()).unwrap();
        assert_eq!(schedule, rebuilt);
    }

    #[test]
    fn schedule_from_slice_rejects_wrong_lengths() {
        for len in [0usize, 16, 175, 177] {
            let bytes = vec![0u8; len];
            assert_eq!(
                RoundKeys::from_slice(&bytes).unwrap_err(),
                crate::Error::InvalidScheduleLength { actual: len }
            );
        }
    }

    #[test]
    fn debug_output_redacts_key_material() {
        let key = Aes128Key::from(FIPS_KEY);
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("2b"));
        assert!(rendered.contains("redacted"));
    }
}
