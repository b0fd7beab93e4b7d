//! Hamming(7,4) error correction.
//!
//! This module provides the pieces of a Hamming(7,4) codec, leaves first:
//! - Parity computation over the codeword bit layout
//! - Syndrome decoding to locate a single flipped bit
//! - Nibble encoding/decoding with single-bit correction
//! - Byte encoding/decoding as a pair of independent codewords
//! - A buffer-level codec built on the byte codec
//!
//! # Codeword layout
//!
//! A codeword lives in the low 7 bits of a `u8`, bit 7 is always zero on encode:
//!
//! ```text
//! bit:   7  6  5  4  3  2  1  0
//! role:  0 p1 p2 d1 p3 d2 d3 d4
//! ```
//!
//! with `p1 = d1^d2^d4`, `p2 = d1^d3^d4` and `p3 = d2^d3^d4`.
//!
//! # Examples
//!
//! ```rust
//! use hamming74::ecc::{decode_byte, decode_nibble, encode_byte, encode_nibble};
//!
//! let codeword = encode_nibble(0b1011);
//! assert_eq!(decode_nibble(codeword ^ 0b0100), 0b1011);
//!
//! let pair = encode_byte(35);
//! assert_eq!(pair, [42, 67]);
//! assert_eq!(decode_byte(pair), 35);
//! ```

use crate::error::Error;

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode data with error correction symbols
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decode data and correct errors if possible
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

pub mod byte;
pub mod hamming;
pub mod nibble;
pub mod parity;
pub mod syndrome;

pub use byte::{decode_byte, encode_byte, encode_byte_into};
pub use hamming::{
    hamming74_decode, hamming74_encode, DecodeReport, Hamming74, Hamming74Config, NibblePolicy,
};
pub use nibble::{correct_codeword, decode_nibble, encode_nibble, try_encode_nibble};
pub use parity::compute_parity;
pub use syndrome::{locate_error, syndrome};
