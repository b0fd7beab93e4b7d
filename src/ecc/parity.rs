//! Parity unit for the Hamming(7,4) codeword layout.
//!
//! The three parity bits each cover a fixed subset of the data bits:
//!
//! | parity | codeword bit | covers       |
//! |--------|--------------|--------------|
//! | p1     | 6            | d1, d2, d4   |
//! | p2     | 5            | d1, d3, d4   |
//! | p3     | 3            | d2, d3, d4   |

use bitvec::prelude::*;

/// Codeword bit holding data bit d4 (nibble bit 0)
pub const D4_BIT: usize = 0;
/// Codeword bit holding data bit d3 (nibble bit 1)
pub const D3_BIT: usize = 1;
/// Codeword bit holding data bit d2 (nibble bit 2)
pub const D2_BIT: usize = 2;
/// Codeword bit holding parity bit p3
pub const P3_BIT: usize = 3;
/// Codeword bit holding data bit d1 (nibble bit 3, relocated)
pub const D1_BIT: usize = 4;
/// Codeword bit holding parity bit p2
pub const P2_BIT: usize = 5;
/// Codeword bit holding parity bit p1
pub const P1_BIT: usize = 6;

/// All parity positions of a codeword
pub const PARITY_MASK: u8 = (1 << P1_BIT) | (1 << P2_BIT) | (1 << P3_BIT);
/// All data positions of a codeword
pub const DATA_MASK: u8 = (1 << D1_BIT) | (1 << D2_BIT) | (1 << D3_BIT) | (1 << D4_BIT);
/// The meaningful bits of a codeword
pub const CODEWORD_MASK: u8 = PARITY_MASK | DATA_MASK;

/// Computes the parity bits for the data bits of `codeword`.
///
/// Bits 4, 2, 1 and 0 are read as d1, d2, d3 and d4; every other input bit is
/// ignored. The result only ever has bits 6 (p1), 5 (p2) and 3 (p3) set, so it
/// can be OR-ed straight into a codeword whose parity positions are clear.
///
/// # Example
/// ```
/// use hamming74::ecc::compute_parity;
///
/// // d4 alone feeds all three parity bits
/// assert_eq!(compute_parity(0b000_0001), 0b110_1000);
/// // parity positions in the input do not matter
/// assert_eq!(compute_parity(0b110_1001), 0b110_1000);
/// ```
pub fn compute_parity(codeword: u8) -> u8 {
    let bits = codeword.view_bits::<Lsb0>();
    let d1 = bits[D1_BIT];
    let d2 = bits[D2_BIT];
    let d3 = bits[D3_BIT];
    let d4 = bits[D4_BIT];

    let p1 = d1 ^ d2 ^ d4;
    let p2 = d1 ^ d3 ^ d4;
    let p3 = d2 ^ d3 ^ d4;

    ((p1 as u8) << P1_BIT) | ((p2 as u8) << P2_BIT) | ((p3 as u8) << P3_BIT)
}
