//! Properties of the transform, shift, and mask building blocks.

use freqmix::{Band, Image, Mask, Plane, Spectrum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustfft::num_complex::Complex;

fn gradient_plane(rows: usize, cols: usize) -> Plane {
    let img = Image::from_fn(rows, cols, 1, |r, c, _| {
        (((r * 31) ^ (c * 17)) % 256) as u8
    })
    .unwrap();
    Plane::from_gray(&img)
}

fn max_abs_diff(a: &Plane, b: &Plane) -> f32 {
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0f32, f32::max)
}

#[test]
fn quadrant_shift_is_self_inverse() {
    let values: Vec<Complex<f32>> = (0..6 * 8)
        .map(|i| Complex::new(i as f32, -(i as f32) * 0.5))
        .collect();
    let spectrum = Spectrum::from_parts(values.clone(), 6, 8).unwrap();
    let twice = spectrum.shifted().shifted();
    assert_eq!(twice.as_slice(), values.as_slice());

    let shifted = spectrum.shifted();
    assert_ne!(shifted.as_slice(), values.as_slice());
    assert_eq!(shifted.get(3, 4), Some(values[0]));
}

#[test]
fn spectrum_rejects_odd_or_mismatched_parts() {
    let err = Spectrum::from_parts(vec![Complex::default(); 15], 3, 5)
        .err()
        .unwrap();
    assert_eq!(err, freqmix::FreqMixError::InvalidDimensions { rows: 3, cols: 5 });

    let err = Spectrum::from_parts(vec![Complex::default(); 7], 2, 4)
        .err()
        .unwrap();
    assert_eq!(err, freqmix::FreqMixError::BufferSizeMismatch { needed: 8, got: 7 });
}

#[test]
fn forward_inverse_round_trip_recovers_plane() {
    // 6x5 pads to 6x6, so the round trip also exercises pad + crop.
    let plane = gradient_plane(6, 5);
    let spectrum = Spectrum::forward(&plane);
    assert_eq!(spectrum.rows(), 6);
    assert_eq!(spectrum.cols(), 6);
    let restored = spectrum.inverse().cropped(6, 5);
    assert!(max_abs_diff(&plane, &restored) < 5e-2);
}

#[test]
fn round_trip_recovers_random_planes() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for (rows, cols) in [(12, 10), (9, 16), (20, 20)] {
        let data: Vec<u8> = (0..rows * cols).map(|_| rng.random()).collect();
        let img = Image::new(data, rows, cols, 1).unwrap();
        let plane = Plane::from_gray(&img);
        let restored = Spectrum::forward(&plane)
            .inverse()
            .cropped(rows, cols);
        assert!(
            max_abs_diff(&plane, &restored) < 5e-2,
            "{rows}x{cols} round trip drifted"
        );
    }
}

#[test]
fn round_trip_preserves_zero_padding() {
    let plane = gradient_plane(6, 5);
    let restored = Spectrum::forward(&plane).inverse();
    for r in 0..6 {
        assert!(restored.get(r, 5).unwrap().abs() < 5e-2);
    }
}

#[test]
fn low_and_high_masks_sum_to_all_ones() {
    for radius in [0u32, 1, 3, 7, 100] {
        let low = Mask::build(12, 10, Band::LowPass, radius);
        let high = Mask::build(12, 10, Band::HighPass, radius);
        for (l, h) in low.as_slice().iter().zip(high.as_slice()) {
            assert_eq!(l + h, 1.0);
        }
    }
}

#[test]
fn masked_bands_recombine_to_original_image() {
    let plane = gradient_plane(8, 8);
    let shifted = Spectrum::forward(&plane).shifted();

    let low = shifted.apply_mask(&Mask::build(8, 8, Band::LowPass, 2));
    let high = shifted.apply_mask(&Mask::build(8, 8, Band::HighPass, 2));
    let recombined = low.sum(&high);

    // Complementary {0,1} masks partition the bins, so the sum matches the
    // unmasked spectrum exactly.
    assert_eq!(recombined.as_slice(), shifted.as_slice());

    let restored = recombined.shifted().inverse();
    assert!(max_abs_diff(&plane, &restored) < 5e-2);
}
