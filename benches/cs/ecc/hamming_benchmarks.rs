use criterion::{black_box, criterion_group, criterion_main, Criterion};
use secded::cs::ecc::hamming::{DATA_BITS, TOTAL_BITS};
use secded::{HammingCode, Vector};

fn bench_construction(c: &mut Criterion) {
    c.bench_function("hamming_new", |b| {
        b.iter(|| HammingCode::new().unwrap());
    });
}

fn bench_encode(c: &mut Criterion) {
    let code = HammingCode::new().unwrap();
    let words: Vec<Vector> = (0..1u64 << DATA_BITS)
        .map(|value| Vector::from_value(value, DATA_BITS))
        .collect();

    c.bench_function("hamming_encode_all_words", |b| {
        b.iter(|| {
            for word in &words {
                black_box(code.encode(black_box(word)).unwrap());
            }
        });
    });
}

fn bench_decode(c: &mut Criterion) {
    let code = HammingCode::new().unwrap();
    let word = Vector::from_value(0b011011, DATA_BITS);
    let codeword = code.encode(&word).unwrap();

    let received: Vec<Vector> = (0..TOTAL_BITS)
        .map(|i| {
            let mut noisy = codeword.clone();
            noisy.flip(i);
            noisy
        })
        .collect();

    c.bench_function("hamming_decode_valid", |b| {
        b.iter(|| code.decode(black_box(&codeword)).unwrap());
    });

    c.bench_function("hamming_decode_single_errors", |b| {
        b.iter(|| {
            for noisy in &received {
                black_box(code.decode(black_box(noisy)).unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_construction, bench_encode, bench_decode);
criterion_main!(benches);
