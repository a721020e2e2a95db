//! Frequency-domain filter pipeline.

use crate::image::gray::to_grayscale;
use crate::image::Image;
use crate::plane::Plane;
use crate::spectrum::mask::{Band, Mask};
use crate::spectrum::Spectrum;
use crate::trace::{trace_event, trace_span};
use crate::util::FreqMixResult;

/// Applies a low-pass or high-pass filter to an image in the frequency
/// domain.
///
/// The pipeline: grayscale projection, padded forward DFT, quadrant shift,
/// circular band mask, shift back, inverse DFT, crop to the input size,
/// min-max normalization to [0, 255], and replication into three display
/// channels. The output always has the input's `rows x cols` and 3 channels.
///
/// Normalization means the output of a high-pass filter carries an
/// artificial mean near 127; [`crate::create_hybrid_image`] corrects for
/// this before composing bands.
pub fn apply_frequency_filter(image: &Image, band: Band, radius: u32) -> FreqMixResult<Image> {
    let _span = trace_span!(
        "apply_frequency_filter",
        rows = image.rows(),
        cols = image.cols(),
    )
    .entered();

    let gray = to_grayscale(image)?;
    let plane = Plane::from_gray(&gray);

    let spectrum = Spectrum::forward(&plane);
    trace_event!(
        "forward_dft",
        padded_rows = spectrum.rows(),
        padded_cols = spectrum.cols(),
    );

    let mask = Mask::build(spectrum.rows(), spectrum.cols(), band, radius);
    let filtered = spectrum.shifted().apply_mask(&mask).shifted();

    let restored = filtered
        .inverse()
        .cropped(image.rows(), image.cols())
        .normalize_minmax();
    restored.to_image(3)
}
