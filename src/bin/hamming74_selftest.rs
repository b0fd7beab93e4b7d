use hamming74::ecc::{decode_byte, decode_nibble, encode_byte, encode_nibble, Hamming74};
use rand::Rng;
use std::process;

const ENCODED: [u8; 16] = [
    0, 105, 42, 67, 76, 37, 102, 15, 112, 25, 90, 51, 60, 85, 22, 127,
];

fn fail(msg: &str) -> ! {
    eprintln!("hamming (7,4) failed {}", msg);
    process::exit(1);
}

fn main() {
    for (i, &expected) in ENCODED.iter().enumerate() {
        if encode_nibble(i as u8) != expected {
            fail("encoding.");
        }
    }

    for (i, &codeword) in ENCODED.iter().enumerate() {
        if decode_nibble(codeword) != i as u8 {
            fail("decoding.");
        }
    }

    // one random bit position, flipped in every table entry
    let f_bit: u8 = rand::thread_rng().gen_range(0..7);
    for (i, &codeword) in ENCODED.iter().enumerate() {
        if decode_nibble(codeword ^ (1 << f_bit)) != i as u8 {
            fail("decoding with flipped bit.");
        }
    }

    let data = 35;
    let data_encoded = [42, 67];

    let buf = encode_byte(data);
    if buf != data_encoded {
        fail("encoding byte.");
    }
    if decode_byte(data_encoded) != data {
        fail("decoding buffer.");
    }

    let codec = Hamming74::default();
    let message = b"hamming";
    let mut encoded = codec.encode(message);
    encoded[0] ^= 1 << f_bit;
    match codec.decode_with_report(&encoded) {
        Ok(report) if report.data == message && report.corrections() == 1 => {}
        _ => fail("decoding message."),
    }

    println!(
        "hamming (7,4) ok: flipped bit {}, {} -> {}",
        f_bit,
        data,
        hex::encode(buf)
    );
}
