//! Bilinear resizing used to align hybrid inputs.

use crate::image::Image;
use crate::util::FreqMixResult;

/// Resizes `image` to `rows x cols` with bilinear interpolation.
///
/// Source coordinates use the pixel-center convention
/// `src = (dst + 0.5) * scale - 0.5`, clamped to the source extent, so the
/// output covers the full source without edge overshoot.
pub fn resize_bilinear(image: &Image, rows: usize, cols: usize) -> FreqMixResult<Image> {
    if rows == image.rows() && cols == image.cols() {
        return Ok(image.clone());
    }
    let channels = image.channels();
    let src_rows = image.rows();
    let src_cols = image.cols();
    let row_scale = src_rows as f32 / rows as f32;
    let col_scale = src_cols as f32 / cols as f32;

    let mut data = Vec::with_capacity(rows * cols * channels);
    for r in 0..rows {
        let sy = ((r as f32 + 0.5) * row_scale - 0.5).clamp(0.0, (src_rows - 1) as f32);
        let y0 = sy.floor() as usize;
        let y1 = (y0 + 1).min(src_rows - 1);
        let fy = sy - y0 as f32;
        for c in 0..cols {
            let sx = ((c as f32 + 0.5) * col_scale - 0.5).clamp(0.0, (src_cols - 1) as f32);
            let x0 = sx.floor() as usize;
            let x1 = (x0 + 1).min(src_cols - 1);
            let fx = sx - x0 as f32;
            for ch in 0..channels {
                let p00 = f32::from(image.get(y0, x0, ch).expect("in bounds"));
                let p01 = f32::from(image.get(y0, x1, ch).expect("in bounds"));
                let p10 = f32::from(image.get(y1, x0, ch).expect("in bounds"));
                let p11 = f32::from(image.get(y1, x1, ch).expect("in bounds"));
                let top = p00 + (p01 - p00) * fx;
                let bottom = p10 + (p11 - p10) * fx;
                let value = top + (bottom - top) * fy;
                data.push(value.round().clamp(0.0, 255.0) as u8);
            }
        }
    }
    Image::new(data, rows, cols, channels)
}
