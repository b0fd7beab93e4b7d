//! Buffer-level Hamming(7,4) codec.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! The (7,4) variant encodes 4 data bits into 7 bits by adding 3 parity bits, and corrects any
//! single flipped bit per codeword. It does not detect double-bit errors: two flips are
//! indistinguishable from a different single flip and get silently miscorrected.
//!
//! This module applies the byte codec to whole buffers:
//! - Every input byte becomes two codewords, high nibble first
//! - Decoding corrects one flipped bit per codeword
//! - Optional reporting of which codewords needed correction
//! - Configurable handling of out-of-range nibbles and of bit 7 on the wire
//!
//! With the `parallel` feature, buffers are processed on the rayon thread pool.
//!
//! # Applications
//!
//! - Serial links and radio framing with sparse bit errors
//! - Computer memory (ECC RAM)
//! - Small embedded storage

use crate::ecc::byte::{decode_byte, encode_byte};
use crate::ecc::nibble::{decode_nibble, encode_nibble, MAX_NIBBLE};
use crate::ecc::parity::CODEWORD_MASK;
use crate::ecc::syndrome::{locate_error, NO_ERROR};
use crate::ecc::{ErrorCorrection, Result};
use crate::error::Error;
use log::{debug, trace, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Codewords produced per input byte
pub const CODEWORDS_PER_BYTE: usize = 2;

/// What to do with a nibble value above 15
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NibblePolicy {
    /// Keep the low 4 bits and carry on
    #[default]
    Mask,
    /// Fail with [`Error::NibbleOutOfRange`]
    Reject,
}

/// Configuration for [`Hamming74`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hamming74Config {
    /// Handling of out-of-range nibbles in [`Hamming74::encode_nibbles`]
    pub nibble_policy: NibblePolicy,
    /// Fail on received codewords with bit 7 set instead of ignoring the bit
    pub reject_high_bit: bool,
}

impl Default for Hamming74Config {
    fn default() -> Self {
        Self {
            nibble_policy: NibblePolicy::Mask,
            reject_high_bit: false,
        }
    }
}

/// Result of decoding a buffer with correction tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    /// Decoded bytes
    pub data: Vec<u8>,
    /// Indices of the received codewords whose syndrome was non-zero
    pub corrected: Vec<usize>,
}

impl DecodeReport {
    /// Number of codewords that needed a correction
    pub fn corrections(&self) -> usize {
        self.corrected.len()
    }

    /// Whether every codeword arrived with consistent parity
    pub fn is_clean(&self) -> bool {
        self.corrected.is_empty()
    }
}

/// Hamming(7,4) codec over byte buffers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming74 {
    config: Hamming74Config,
}

impl Hamming74 {
    /// Creates a codec with the given configuration
    pub fn new(config: Hamming74Config) -> Self {
        Hamming74 { config }
    }

    /// Creates a codec that rejects out-of-range nibbles and codewords with bit 7 set
    pub fn strict() -> Self {
        Self::new(Hamming74Config {
            nibble_policy: NibblePolicy::Reject,
            reject_high_bit: true,
        })
    }

    /// Gets the active configuration
    pub fn config(&self) -> &Hamming74Config {
        &self.config
    }

    /// Gets the number of encoded bytes produced for a given number of input bytes
    pub fn encoded_len(&self, input_bytes: usize) -> usize {
        input_bytes * CODEWORDS_PER_BYTE
    }

    /// Encodes a byte slice, two codewords per byte
    ///
    /// # Example
    /// ```
    /// use hamming74::ecc::Hamming74;
    ///
    /// let codec = Hamming74::default();
    /// assert_eq!(codec.encode(&[35]), vec![42, 67]);
    /// ```
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        #[cfg(feature = "parallel")]
        let encoded: Vec<u8> = data.par_iter().flat_map_iter(|&b| encode_byte(b)).collect();
        #[cfg(not(feature = "parallel"))]
        let encoded: Vec<u8> = data.iter().flat_map(|&b| encode_byte(b)).collect();

        encoded
    }

    /// Decodes codeword pairs back into bytes, correcting one bit per codeword
    ///
    /// # Returns
    ///
    /// The decoded bytes, or an error if the input has odd length or, with
    /// `reject_high_bit`, a codeword has bit 7 set
    pub fn decode(&self, encoded: &[u8]) -> Result<Vec<u8>> {
        self.check_pairs(encoded)?;
        self.check_codewords(encoded)?;
        Ok(decode_pairs(encoded))
    }

    /// Decodes codeword pairs and reports which codewords were corrected
    ///
    /// A codeword with two or more flipped bits is still reported as corrected;
    /// its decoded value may be wrong.
    pub fn decode_with_report(&self, encoded: &[u8]) -> Result<DecodeReport> {
        self.check_pairs(encoded)?;
        self.check_codewords(encoded)?;

        let data = decode_pairs(encoded);
        let corrected = corrupted_indices(encoded);

        for &index in &corrected {
            trace!(
                "corrected codeword {} (0x{:02x}) at bit {}",
                index,
                encoded[index],
                locate_error(encoded[index])
            );
        }
        debug!(
            "decoded {} codewords into {} bytes, {} corrected",
            encoded.len(),
            data.len(),
            corrected.len()
        );

        Ok(DecodeReport { data, corrected })
    }

    /// Decodes a single codeword pair, as handed over by a transport
    pub fn decode_pair(&self, buffer: &[u8]) -> Result<u8> {
        let pair: [u8; 2] = buffer.try_into().map_err(|_| {
            Error::invalid_input(format!(
                "byte pair must hold exactly {} codewords, got {}",
                CODEWORDS_PER_BYTE,
                buffer.len()
            ))
        })?;
        self.check_codewords(&pair)?;
        Ok(decode_byte(pair))
    }

    /// Encodes a slice of nibbles, one codeword each
    pub fn encode_nibbles(&self, nibbles: &[u8]) -> Result<Vec<u8>> {
        if self.config.nibble_policy == NibblePolicy::Reject {
            if let Some(&value) = nibbles.iter().find(|&&v| v > MAX_NIBBLE) {
                return Err(Error::NibbleOutOfRange(value));
            }
        }
        Ok(nibbles.iter().map(|&v| encode_nibble(v)).collect())
    }

    /// Decodes a slice of codewords, one nibble each
    pub fn decode_nibbles(&self, codewords: &[u8]) -> Result<Vec<u8>> {
        self.check_codewords(codewords)?;
        Ok(codewords.iter().map(|&c| decode_nibble(c)).collect())
    }

    fn check_pairs(&self, encoded: &[u8]) -> Result<()> {
        if encoded.len() % CODEWORDS_PER_BYTE != 0 {
            warn!(
                "rejecting buffer of {} codewords, not a whole number of pairs",
                encoded.len()
            );
            return Err(Error::OddCodewordCount(encoded.len()));
        }
        Ok(())
    }

    fn check_codewords(&self, codewords: &[u8]) -> Result<()> {
        if !self.config.reject_high_bit {
            return Ok(());
        }
        if let Some(index) = codewords.iter().position(|&c| c & !CODEWORD_MASK != 0) {
            warn!(
                "rejecting codeword 0x{:02x} at index {}: bit 7 set",
                codewords[index], index
            );
            return Err(Error::InvalidCodeword {
                index,
                value: codewords[index],
            });
        }
        Ok(())
    }
}

impl ErrorCorrection for Hamming74 {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(Hamming74::encode(self, data))
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        Hamming74::decode(self, data)
    }
}

fn decode_pairs(encoded: &[u8]) -> Vec<u8> {
    #[cfg(feature = "parallel")]
    let decoded: Vec<u8> = encoded
        .par_chunks_exact(CODEWORDS_PER_BYTE)
        .map(|pair| decode_byte([pair[0], pair[1]]))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let decoded: Vec<u8> = encoded
        .chunks_exact(CODEWORDS_PER_BYTE)
        .map(|pair| decode_byte([pair[0], pair[1]]))
        .collect();

    decoded
}

fn corrupted_indices(encoded: &[u8]) -> Vec<usize> {
    #[cfg(feature = "parallel")]
    let indices: Vec<usize> = encoded
        .par_iter()
        .enumerate()
        .filter(|(_, &c)| locate_error(c) != NO_ERROR)
        .map(|(i, _)| i)
        .collect();
    #[cfg(not(feature = "parallel"))]
    let indices: Vec<usize> = encoded
        .iter()
        .enumerate()
        .filter(|(_, &c)| locate_error(c) != NO_ERROR)
        .map(|(i, _)| i)
        .collect();

    indices
}

/// Encodes data using the default Hamming(7,4) codec
pub fn hamming74_encode(data: &[u8]) -> Vec<u8> {
    Hamming74::default().encode(data)
}

/// Decodes data using the default Hamming(7,4) codec
pub fn hamming74_decode(encoded: &[u8]) -> Result<Vec<u8>> {
    Hamming74::default().decode(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_hamming_creation() {
        let codec = Hamming74::default();
        assert_eq!(codec.config().nibble_policy, NibblePolicy::Mask);
        assert!(!codec.config().reject_high_bit);
        assert_eq!(codec.encoded_len(13), 26);

        let codec = Hamming74::strict();
        assert_eq!(codec.config().nibble_policy, NibblePolicy::Reject);
        assert!(codec.config().reject_high_bit);
    }

    #[test]
    fn test_hamming_encode_decode_no_errors() {
        let data = b"Test data for Hamming code";
        let codec = Hamming74::default();

        let encoded = codec.encode(data);
        assert_eq!(encoded.len(), codec.encoded_len(data.len()));
        assert!(encoded.iter().all(|&c| c & 0x80 == 0));

        let decoded = codec.decode(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_encode_known_bytes() {
        let encoded = hamming74_encode(&[35, 0x00, 0xff]);
        assert_eq!(hex::encode(&encoded), "2a4300007f7f");
    }

    #[test]
    fn test_hamming_error_correction() {
        let data = b"Test";
        let codec = Hamming74::default();

        let mut encoded = codec.encode(data);
        encoded[0] ^= 0x40;
        encoded[5] ^= 0x01;

        let report = codec.decode_with_report(&encoded).unwrap();
        assert_eq!(report.data, data);
        assert_eq!(report.corrected, vec![0, 5]);
        assert_eq!(report.corrections(), 2);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_clean_report() {
        let codec = Hamming74::default();
        let report = codec.decode_with_report(&codec.encode(b"ok")).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.data, b"ok");
    }

    #[test]
    fn test_random_single_flips() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let codec = Hamming74::default();

        let data: Vec<u8> = (0..512).map(|_| rng.gen()).collect();
        let mut encoded = codec.encode(&data);
        for codeword in encoded.iter_mut() {
            if rng.gen_bool(0.5) {
                *codeword ^= 1 << rng.gen_range(0..7u8);
            }
        }

        assert_eq!(codec.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_double_flip_reported_but_wrong() {
        let codec = Hamming74::default();
        let mut encoded = codec.encode(&[0x00]);
        encoded[1] ^= 0b11;

        let report = codec.decode_with_report(&encoded).unwrap();
        assert_eq!(report.corrected, vec![1]);
        assert_eq!(report.data, vec![0x03]);
    }

    #[test]
    fn test_odd_length_rejected() {
        let codec = Hamming74::default();
        assert_eq!(codec.decode(&[42, 67, 0]), Err(Error::OddCodewordCount(3)));
        assert!(codec.decode_with_report(&[42]).is_err());
    }

    #[test]
    fn test_high_bit_policy() {
        let encoded = [42 | 0x80, 67];

        let lenient = Hamming74::default();
        assert_eq!(lenient.decode(&encoded).unwrap(), vec![35]);

        let strict = Hamming74::strict();
        assert_eq!(
            strict.decode(&encoded),
            Err(Error::InvalidCodeword {
                index: 0,
                value: 0xaa
            })
        );
        assert!(strict.decode_nibbles(&[0, 0x80]).is_err());
    }

    #[test]
    fn test_decode_pair() {
        let codec = Hamming74::default();
        assert_eq!(codec.decode_pair(&[42, 67]), Ok(35));
        assert!(matches!(
            codec.decode_pair(&[42]),
            Err(Error::InvalidInput(_))
        ));
        assert!(codec.decode_pair(&[42, 67, 0]).is_err());
    }

    #[test]
    fn test_nibble_policy() {
        let lenient = Hamming74::default();
        assert_eq!(lenient.encode_nibbles(&[1, 0x11]).unwrap(), vec![105, 105]);

        let strict = Hamming74::strict();
        assert_eq!(
            strict.encode_nibbles(&[1, 0x11]),
            Err(Error::NibbleOutOfRange(0x11))
        );

        let encoded = strict.encode_nibbles(&[0, 9, 15]).unwrap();
        assert_eq!(encoded, vec![0, 25, 127]);
        assert_eq!(strict.decode_nibbles(&encoded).unwrap(), vec![0, 9, 15]);
    }

    #[test]
    fn test_empty_input() {
        let codec = Hamming74::default();

        let encoded = codec.encode(&[]);
        assert!(encoded.is_empty());

        let decoded = codec.decode(&[]).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_helper_functions() {
        let data = b"Test";

        let encoded = hamming74_encode(data);
        let decoded = hamming74_decode(&encoded).unwrap();
        assert_eq!(decoded, data);

        let codec: &dyn ErrorCorrection = &Hamming74::default();
        let encoded = codec.encode(data).unwrap();
        assert_eq!(codec.decode(&encoded).unwrap(), data);
    }
}
