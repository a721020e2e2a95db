//! Single-channel `f32` working planes.
//!
//! A `Plane` is the float representation an image passes through between
//! grayscale projection and the spectral transform: zero-padded before the
//! forward DFT, cropped and min-max normalized after the inverse.

use crate::image::Image;
use crate::util::FreqMixResult;

/// Threshold below which a plane's value range is treated as constant, so
/// min-max normalization does not blow floating-point residue up to full
/// scale.
const FLAT_RANGE_EPS: f32 = 1e-6;

/// Owned row-major `f32` plane.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl Plane {
    /// Wraps a raw buffer; the length must equal `rows * cols`.
    pub(crate) fn from_vec(data: Vec<f32>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// Converts a single-channel image into a float plane.
    ///
    /// Multi-channel images must go through grayscale projection first.
    pub fn from_gray(image: &Image) -> Self {
        debug_assert_eq!(image.channels(), 1);
        let data = image.as_raw().iter().map(|&v| f32::from(v)).collect();
        Self::from_vec(data, image.rows(), image.cols())
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the backing row-major buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Returns the value at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    /// Extends the plane to `rows x cols` with a zero-valued bottom/right
    /// border. Dimensions must not shrink.
    pub fn padded(&self, rows: usize, cols: usize) -> Plane {
        debug_assert!(rows >= self.rows && cols >= self.cols);
        if rows == self.rows && cols == self.cols {
            return self.clone();
        }
        let mut data = vec![0.0f32; rows * cols];
        for r in 0..self.rows {
            let src = &self.data[r * self.cols..(r + 1) * self.cols];
            data[r * cols..r * cols + self.cols].copy_from_slice(src);
        }
        Plane::from_vec(data, rows, cols)
    }

    /// Copies the top-left `rows x cols` sub-rectangle.
    pub fn cropped(&self, rows: usize, cols: usize) -> Plane {
        debug_assert!(rows <= self.rows && cols <= self.cols);
        if rows == self.rows && cols == self.cols {
            return self.clone();
        }
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            let start = r * self.cols;
            data.extend_from_slice(&self.data[start..start + cols]);
        }
        Plane::from_vec(data, rows, cols)
    }

    /// Arithmetic mean of all values.
    pub fn mean(&self) -> f32 {
        let sum: f64 = self.data.iter().map(|&v| f64::from(v)).sum();
        (sum / self.data.len() as f64) as f32
    }

    /// Stretches values to the full [0, 255] range.
    ///
    /// A constant plane (range below a small epsilon) short-circuits to the
    /// constant clamped into [0, 255] instead of dividing by zero.
    pub fn normalize_minmax(&self) -> Plane {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for &v in &self.data {
            min = min.min(v);
            max = max.max(v);
        }
        let range = max - min;
        let data = if range < FLAT_RANGE_EPS {
            vec![min.clamp(0.0, 255.0); self.data.len()]
        } else {
            let scale = 255.0 / range;
            self.data.iter().map(|&v| (v - min) * scale).collect()
        };
        Plane::from_vec(data, self.rows, self.cols)
    }

    /// Quantizes to `u8` with rounding and saturation, replicating the single
    /// plane into `channels` identical interleaved channels.
    pub fn to_image(&self, channels: usize) -> FreqMixResult<Image> {
        let mut data = Vec::with_capacity(self.data.len() * channels);
        for &v in &self.data {
            let q = v.round().clamp(0.0, 255.0) as u8;
            for _ in 0..channels {
                data.push(q);
            }
        }
        Image::new(data, self.rows, self.cols, channels)
    }
}
