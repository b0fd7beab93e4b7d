use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming74::ecc::{decode_nibble, encode_nibble, Hamming74};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn bench_nibble(c: &mut Criterion) {
    let mut group = c.benchmark_group("nibble");

    group.bench_function("encode_all", |b| {
        b.iter(|| {
            for v in 0..16u8 {
                black_box(encode_nibble(black_box(v)));
            }
        })
    });

    group.bench_function("decode_all_flips", |b| {
        let codewords: Vec<u8> = (0..16u8)
            .flat_map(|v| (0..7).map(move |bit| encode_nibble(v) ^ (1 << bit)))
            .collect();
        b.iter(|| {
            for &c in &codewords {
                black_box(decode_nibble(black_box(c)));
            }
        })
    });

    group.finish();
}

fn bench_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer");
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let codec = Hamming74::default();

    for size in [64usize, 4096, 65536] {
        let data: Vec<u8> = (0..size).map(|_| rng.gen()).collect();
        let mut encoded = codec.encode(&data);
        for codeword in encoded.iter_mut().step_by(3) {
            *codeword ^= 1 << rng.gen_range(0..7u8);
        }

        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| codec.encode(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| codec.decode(black_box(encoded)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_nibble, bench_buffer);
criterion_main!(benches);
