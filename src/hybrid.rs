//! Hybrid-image composition.

use crate::filter::apply_frequency_filter;
use crate::image::resize::resize_bilinear;
use crate::image::Image;
use crate::spectrum::mask::Band;
use crate::trace::trace_span;
use crate::util::FreqMixResult;

/// Composes a hybrid image: the low band of `image_a` plus the high band of
/// `image_b`.
///
/// `image_b` is bilinearly resized to `image_a`'s dimensions when they
/// differ. The high-pass result is mean-corrected per channel before the
/// add: filter normalization forces every output into [0, 255], giving the
/// high band a constant offset near 127 where a zero mean is expected, and
/// composing without removing it washes the result out. The final sum is
/// quantized with saturation, never wraparound.
///
/// The output has `image_a`'s dimensions and 3 channels.
pub fn create_hybrid_image(
    image_a: &Image,
    image_b: &Image,
    radius_a: u32,
    radius_b: u32,
) -> FreqMixResult<Image> {
    let _span = trace_span!(
        "create_hybrid_image",
        rows = image_a.rows(),
        cols = image_a.cols(),
    )
    .entered();

    let b_aligned = if image_b.rows() != image_a.rows() || image_b.cols() != image_a.cols() {
        resize_bilinear(image_b, image_a.rows(), image_a.cols())?
    } else {
        image_b.clone()
    };

    let low = apply_frequency_filter(image_a, Band::LowPass, radius_a)?;
    let high = apply_frequency_filter(&b_aligned, Band::HighPass, radius_b)?;

    let channels = low.channels();
    let high_mean = channel_means(&high);
    let data = low
        .as_raw()
        .iter()
        .zip(high.as_raw())
        .enumerate()
        .map(|(i, (&l, &h))| {
            let corrected = f32::from(h) - high_mean[i % channels];
            saturate_u8(f32::from(l) + corrected)
        })
        .collect();
    Image::new(data, low.rows(), low.cols(), channels)
}

/// Per-channel arithmetic means of an image's samples.
fn channel_means(image: &Image) -> Vec<f32> {
    let channels = image.channels();
    let mut sums = vec![0.0f64; channels];
    for (i, &v) in image.as_raw().iter().enumerate() {
        sums[i % channels] += f64::from(v);
    }
    let count = (image.rows() * image.cols()) as f64;
    sums.iter().map(|&s| (s / count) as f32).collect()
}

/// Rounds and clamps a float sample into the `u8` range.
fn saturate_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
