//! Nibble codec: 4 data bits in, one 7-bit codeword out, and back.
//!
//! The nibble's bits 0..=2 (d4, d3, d2) keep their positions in the codeword;
//! bit 3 (d1) is moved up to codeword bit 4 to leave bit 3 free for p3.

use crate::ecc::parity::{compute_parity, CODEWORD_MASK, D1_BIT};
use crate::ecc::syndrome::{locate_error, NO_ERROR};
use crate::ecc::Result;
use crate::error::Error;

/// Nibble bit holding d1 before relocation
const NIBBLE_D1_BIT: usize = 3;

/// Largest valid nibble
pub const MAX_NIBBLE: u8 = 0x0F;

/// Encodes a nibble into a Hamming(7,4) codeword.
///
/// Only the low 4 bits of `value` are used; anything above is masked off rather
/// than rejected. Use [`try_encode_nibble`] to reject out-of-range input instead.
/// The result always satisfies the parity invariant and has bit 7 clear.
///
/// # Example
/// ```
/// use hamming74::ecc::encode_nibble;
///
/// assert_eq!(encode_nibble(8), 112);
/// assert_eq!(encode_nibble(15), 127);
/// ```
pub fn encode_nibble(value: u8) -> u8 {
    let mut codeword = value & MAX_NIBBLE;

    if codeword & (1 << NIBBLE_D1_BIT) != 0 {
        codeword = (codeword & !(1 << NIBBLE_D1_BIT)) | (1 << D1_BIT);
    }

    codeword | compute_parity(codeword)
}

/// Encodes a nibble, rejecting values above 15.
pub fn try_encode_nibble(value: u8) -> Result<u8> {
    if value > MAX_NIBBLE {
        return Err(Error::NibbleOutOfRange(value));
    }
    Ok(encode_nibble(value))
}

/// Applies single-bit correction to a received codeword.
///
/// Returns the codeword with the located bit flipped back and bit 7 cleared. A
/// codeword with two or more flipped bits comes back as a different valid
/// codeword.
pub fn correct_codeword(codeword: u8) -> u8 {
    let position = locate_error(codeword);
    let corrected = if position != NO_ERROR {
        codeword ^ (1 << position)
    } else {
        codeword
    };
    corrected & CODEWORD_MASK
}

/// Decodes a received codeword back into its nibble.
///
/// Any single flipped bit among the low 7 is corrected; bit 7 is ignored. The
/// result is always in `0..=15`, even when more than one bit was corrupted, in
/// which case it may silently differ from the nibble that was sent.
///
/// # Example
/// ```
/// use hamming74::ecc::decode_nibble;
///
/// assert_eq!(decode_nibble(105), 1);
/// // 105 with p2 flipped
/// assert_eq!(decode_nibble(105 ^ 0b010_0000), 1);
/// ```
pub fn decode_nibble(codeword: u8) -> u8 {
    let corrected = correct_codeword(codeword);
    let mut data = corrected & !compute_parity(corrected);

    if data & (1 << D1_BIT) != 0 {
        data = (data & !(1 << D1_BIT)) | (1 << NIBBLE_D1_BIT);
    }

    data & MAX_NIBBLE
}
