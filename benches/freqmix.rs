use criterion::{criterion_group, criterion_main, Criterion};
use freqmix::{apply_frequency_filter, create_hybrid_image, Band, Image};
use std::hint::black_box;

fn make_image(rows: usize, cols: usize, seed: usize) -> Image {
    Image::from_fn(rows, cols, 1, |r, c, _| {
        (((r * 13) ^ (c * 7) ^ (r * c) ^ seed) % 256) as u8
    })
    .unwrap()
}

fn bench_filter(c: &mut Criterion) {
    let img = make_image(512, 512, 0);
    c.bench_function("low_pass_512", |b| {
        b.iter(|| apply_frequency_filter(black_box(&img), Band::LowPass, 30).unwrap())
    });
    c.bench_function("high_pass_512", |b| {
        b.iter(|| apply_frequency_filter(black_box(&img), Band::HighPass, 30).unwrap())
    });

    // 509 is prime, so the padding path kicks in (509 -> 512 per axis).
    let awkward = make_image(509, 509, 7);
    c.bench_function("low_pass_509_padded", |b| {
        b.iter(|| apply_frequency_filter(black_box(&awkward), Band::LowPass, 30).unwrap())
    });
}

fn bench_hybrid(c: &mut Criterion) {
    let a = make_image(256, 256, 1);
    let b_img = make_image(256, 256, 1000);
    c.bench_function("hybrid_256", |b| {
        b.iter(|| create_hybrid_image(black_box(&a), black_box(&b_img), 20, 20).unwrap())
    });
}

criterion_group!(benches, bench_filter, bench_hybrid);
criterion_main!(benches);
