//! End-to-end behavior of the frequency filter pipeline.

use freqmix::{apply_frequency_filter, to_grayscale, Band, Image};

fn gradient_image(rows: usize, cols: usize) -> Image {
    Image::from_fn(rows, cols, 1, |r, c, _| ((r * cols + c) * 4 % 256) as u8).unwrap()
}

#[test]
fn flat_image_with_dc_only_mask_stays_flat() {
    // Low-pass radius 0 keeps only the zero-frequency bin; for a flat input
    // this reproduces the flat value, and normalization must not stretch it.
    let img = Image::from_fn(4, 4, 1, |_, _, _| 100).unwrap();
    let out = apply_frequency_filter(&img, Band::LowPass, 0).unwrap();
    assert_eq!(out.rows(), 4);
    assert_eq!(out.cols(), 4);
    assert_eq!(out.channels(), 3);
    assert!(out.as_raw().iter().all(|&v| v == 100));
}

#[test]
fn output_keeps_input_dimensions_despite_padding() {
    // 7x5 pads internally to 8x6; the result must be cropped back.
    let img = gradient_image(7, 5);
    let out = apply_frequency_filter(&img, Band::LowPass, 2).unwrap();
    assert_eq!(out.rows(), 7);
    assert_eq!(out.cols(), 5);
    assert_eq!(out.channels(), 3);
}

#[test]
fn all_pass_filter_equals_normalized_grayscale() {
    // A radius far beyond the plane passes every bin, so the pipeline reduces
    // to round trip + min-max normalization of the grayscale input.
    let img = gradient_image(8, 8);
    let out = apply_frequency_filter(&img, Band::LowPass, 1000).unwrap();

    let gray = to_grayscale(&img).unwrap();
    let min = f32::from(*gray.as_raw().iter().min().unwrap());
    let max = f32::from(*gray.as_raw().iter().max().unwrap());
    for r in 0..8 {
        for c in 0..8 {
            let expected = (f32::from(gray.get(r, c, 0).unwrap()) - min) * 255.0 / (max - min);
            let got = f32::from(out.get(r, c, 0).unwrap());
            assert!(
                (got - expected).abs() <= 2.0,
                "({r},{c}): got {got}, expected {expected}"
            );
        }
    }
}

#[test]
fn low_and_high_pass_differ_on_textured_input() {
    let img = gradient_image(8, 8);
    let low = apply_frequency_filter(&img, Band::LowPass, 2).unwrap();
    let high = apply_frequency_filter(&img, Band::HighPass, 2).unwrap();
    assert_ne!(low.as_raw(), high.as_raw());
}

#[test]
fn color_input_is_projected_before_filtering() {
    // A 3-channel image whose channels are all equal must behave exactly like
    // its grayscale projection.
    let color = Image::from_fn(6, 6, 3, |r, c, _| ((r * 40 + c * 7) % 256) as u8).unwrap();
    let gray = to_grayscale(&color).unwrap();
    let from_color = apply_frequency_filter(&color, Band::HighPass, 1).unwrap();
    let from_gray = apply_frequency_filter(&gray, Band::HighPass, 1).unwrap();
    assert_eq!(from_color.as_raw(), from_gray.as_raw());
}

#[test]
fn normalized_output_spans_full_range() {
    let img = gradient_image(8, 8);
    let out = apply_frequency_filter(&img, Band::LowPass, 1000).unwrap();
    let min = out.as_raw().iter().min().copied().unwrap();
    let max = out.as_raw().iter().max().copied().unwrap();
    assert_eq!(min, 0);
    assert_eq!(max, 255);
}
