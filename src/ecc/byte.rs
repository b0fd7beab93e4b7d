//! Byte codec: a byte travels as two codewords, high nibble first.

use crate::ecc::nibble::{decode_nibble, encode_nibble};

/// Encodes a byte into a codeword pair.
///
/// Element 0 carries the high nibble (bits 4..=7), element 1 the low nibble.
///
/// # Example
/// ```
/// use hamming74::ecc::encode_byte;
///
/// assert_eq!(encode_byte(35), [42, 67]);
/// ```
pub fn encode_byte(byte: u8) -> [u8; 2] {
    [encode_nibble(byte >> 4), encode_nibble(byte & 0x0F)]
}

/// Encodes a byte into a caller-provided pair buffer
pub fn encode_byte_into(byte: u8, buffer: &mut [u8; 2]) {
    *buffer = encode_byte(byte);
}

/// Decodes a codeword pair back into a byte, correcting one flipped bit per codeword.
pub fn decode_byte(codewords: [u8; 2]) -> u8 {
    (decode_nibble(codewords[0]) << 4) | decode_nibble(codewords[1])
}
