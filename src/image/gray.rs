//! Grayscale projection.

use crate::image::Image;
use crate::util::FreqMixResult;

/// Luma weights for interleaved **BGR** samples: `0.114 B + 0.587 G + 0.299 R`.
///
/// This is the crate-wide channel-order convention. Every 3-channel buffer in
/// freqmix stores blue first; the IO bridge converts on the way in and out.
pub const BGR_LUMA: [f32; 3] = [0.114, 0.587, 0.299];

/// Projects an image to a single luminance channel.
///
/// A 1-channel input is returned as a copy. A 3-channel input is reduced with
/// [`BGR_LUMA`], rounding to the nearest sample value.
pub fn to_grayscale(image: &Image) -> FreqMixResult<Image> {
    if image.channels() == 1 {
        return Ok(image.clone());
    }
    let rows = image.rows();
    let cols = image.cols();
    let mut data = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let src = image.row(row).expect("row within bounds");
        for px in src.chunks_exact(3) {
            let luma = BGR_LUMA[0] * f32::from(px[0])
                + BGR_LUMA[1] * f32::from(px[1])
                + BGR_LUMA[2] * f32::from(px[2]);
            data.push(luma.round().clamp(0.0, 255.0) as u8);
        }
    }
    Image::new(data, rows, cols, 1)
}
