//! Error taxonomy for the cipher core.
//!
//! Every failure is an input-contract violation detected before any round
//! transformation runs; nothing is truncated or padded silently, and no error
//! is transient.

use core::fmt;

use crate::block::BLOCK_SIZE;
use crate::key::{KEY_SIZE, SCHEDULE_SIZE};

/// Errors surfaced by the cipher core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The supplied key was not exactly 16 bytes.
    InvalidKeyLength {
        /// Length of the rejected input.
        actual: usize,
    },
    /// The supplied block was not exactly 16 bytes.
    InvalidBlockLength {
        /// Length of the rejected input.
        actual: usize,
    },
    /// The supplied round-key schedule was not exactly 176 bytes.
    InvalidScheduleLength {
        /// Length of the rejected input.
        actual: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength { actual } => {
                write!(f, "invalid key length: expected {KEY_SIZE} bytes, got {actual}")
            }
            Error::InvalidBlockLength { actual } => {
                write!(f, "invalid block length: expected {BLOCK_SIZE} bytes, got {actual}")
            }
            Error::InvalidScheduleLength { actual } => {
                write!(
                    f,
                    "invalid schedule length: expected {SCHEDULE_SIZE} bytes, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Rejects key inputs that are not exactly [`KEY_SIZE`] bytes.
pub(crate) fn check_key_length(actual: usize) -> Result<()> {
    if actual == KEY_SIZE {
        Ok(())
    } else {
        Err(Error::InvalidKeyLength { actual })
    }
}

/// Rejects block inputs that are not exactly [`BLOCK_SIZE`] bytes.
pub(crate) fn check_block_length(actual: usize) -> Result<()> {
    if actual == BLOCK_SIZE {
        Ok(())
    } else {
        Err(Error::InvalidBlockLength { actual })
    }
}

/// Rejects schedule inputs that are not exactly [`SCHEDULE_SIZE`] bytes.
pub(crate) fn check_schedule_length(actual: usize) -> Result<()> {
    if actual == SCHEDULE_SIZE {
        Ok(())
    } else {
        Err(Error::InvalidScheduleLength { actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_checks_accept_exact_sizes() {
        assert!(check_key_length(16).is_ok());
        assert!(check_block_length(16).is_ok());
        assert!(check_schedule_length(176).is_ok());
    }

    #[test]
    fn length_checks_report_the_offending_size() {
        assert_eq!(check_key_length(15), Err(Error::InvalidKeyLength { actual: 15 }));
        assert_eq!(check_block_length(17), Err(Error::InvalidBlockLength { actual: 17 }));
        assert_eq!(
            check_schedule_length(0),
            Err(Error::InvalidScheduleLength { actual: 0 })
        );
    }

    #[test]
    fn display_names_the_expected_size() {
        let msg = Error::InvalidKeyLength { actual: 15 }.to_string();
        assert!(msg.contains("16"));
        assert!(msg.contains("15"));
    }
}
