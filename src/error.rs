//! Error types shared by the codec operations that can reject their input.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by checked and buffer-level codec operations.
///
/// The bit-level functions never fail; a corrupted codeword is corrected or
/// silently miscorrected, never reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Generic invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A nibble value above 15 was given to a checked encoder
    #[error("nibble out of range: {0} (expected 0..=15)")]
    NibbleOutOfRange(u8),

    /// Byte-pair decoding needs an even number of codewords
    #[error("odd number of codewords: {0}")]
    OddCodewordCount(usize),

    /// A codeword carried a value outside its 7-bit layout
    #[error("invalid codeword 0x{value:02x} at index {index}")]
    InvalidCodeword { index: usize, value: u8 },
}

impl Error {
    /// Creates an [`Error::InvalidInput`] from any message
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
