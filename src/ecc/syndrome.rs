//! Syndrome decoding for received codewords.

use crate::ecc::parity::{compute_parity, P1_BIT, P2_BIT, P3_BIT};
use bitvec::prelude::*;

/// Position returned by [`locate_error`] when the parity checks all pass
pub const NO_ERROR: u8 = 7;

/// Computes the 3-bit syndrome of a received codeword.
///
/// The data bits are trusted to recompute the parity; a flipped data bit shows up
/// through the parity checks it participates in. The syndrome is
/// `4*m3 + 2*m2 + m1`, where `mN` is set when parity bit `pN` disagrees with the
/// recomputed value. Bit 7 never contributes.
pub fn syndrome(codeword: u8) -> u8 {
    let mismatch = codeword ^ compute_parity(codeword);
    let bits = mismatch.view_bits::<Lsb0>();

    ((bits[P3_BIT] as u8) << 2) | ((bits[P2_BIT] as u8) << 1) | (bits[P1_BIT] as u8)
}

/// Locates the bit to flip in a received codeword.
///
/// Returns [`NO_ERROR`] (7) when no error is detected, otherwise the codeword bit
/// position in `0..=6` holding the error. The layout makes the mapping a plain
/// `7 - syndrome`:
///
/// | syndrome | 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 |
/// |----------|---|---|---|---|---|---|---|---|
/// | position | - | 6 | 5 | 4 | 3 | 2 | 1 | 0 |
///
/// Exact for zero or one flipped bit. Two or more flips produce a valid looking
/// but generally wrong position.
///
/// # Example
/// ```
/// use hamming74::ecc::{encode_nibble, locate_error};
/// use hamming74::ecc::syndrome::NO_ERROR;
///
/// let codeword = encode_nibble(6);
/// assert_eq!(locate_error(codeword), NO_ERROR);
/// assert_eq!(locate_error(codeword ^ (1 << 4)), 4);
/// ```
pub fn locate_error(codeword: u8) -> u8 {
    NO_ERROR - syndrome(codeword)
}
