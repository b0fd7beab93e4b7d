pub mod ecc;
pub mod error;

pub use ecc::{
    decode_byte, decode_nibble, encode_byte, encode_nibble, ErrorCorrection, Hamming74,
    Hamming74Config,
};
pub use error::{Error, Result};
