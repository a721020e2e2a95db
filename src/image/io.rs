//! Bridging to the `image` crate for file IO.
//!
//! Available when the `image-io` feature is enabled. Decoded images come
//! back in this crate's BGR channel order; saving converts back to RGB.

use crate::image::Image;
use crate::util::{FreqMixError, FreqMixResult};
use std::path::Path;

/// Converts a decoded RGB image into a 3-channel BGR [`Image`].
pub fn from_rgb_image(img: &image::RgbImage) -> FreqMixResult<Image> {
    let rows = img.height() as usize;
    let cols = img.width() as usize;
    let mut data = Vec::with_capacity(rows * cols * 3);
    for px in img.as_raw().chunks_exact(3) {
        data.extend_from_slice(&[px[2], px[1], px[0]]);
    }
    Image::new(data, rows, cols, 3)
}

/// Loads an image file into a 3-channel BGR [`Image`].
pub fn load_image<P: AsRef<Path>>(path: P) -> FreqMixResult<Image> {
    let img = image::open(path).map_err(|err| FreqMixError::ImageIo {
        reason: err.to_string(),
    })?;
    from_rgb_image(&img.to_rgb8())
}

/// Saves an [`Image`] to disk; the format is inferred from the extension.
pub fn save_image<P: AsRef<Path>>(img: &Image, path: P) -> FreqMixResult<()> {
    let rows = img.rows() as u32;
    let cols = img.cols() as u32;
    let rgb: Vec<u8> = match img.channels() {
        1 => img
            .as_raw()
            .iter()
            .flat_map(|&v| [v, v, v])
            .collect(),
        _ => img
            .as_raw()
            .chunks_exact(3)
            .flat_map(|px| [px[2], px[1], px[0]])
            .collect(),
    };
    let buffer =
        image::RgbImage::from_raw(cols, rows, rgb).ok_or_else(|| FreqMixError::ImageIo {
            reason: "buffer size mismatch while encoding".to_string(),
        })?;
    buffer.save(path).map_err(|err| FreqMixError::ImageIo {
        reason: err.to_string(),
    })
}
