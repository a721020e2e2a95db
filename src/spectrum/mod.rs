//! Complex frequency-domain grids and the 2D DFT.
//!
//! The forward transform zero-pads its input to a size that factors into
//! small primes (fast for the planner) and is even in both axes. Evenness is
//! load-bearing: the quadrant shift in [`shift`] splits the grid at the exact
//! midpoint and silently corrupts data on odd extents, so the padding policy
//! enforces it unconditionally.
//!
//! Transforms are unnormalized on the forward pass; the inverse scales by
//! `1 / (rows * cols)` so a forward/inverse pair is an identity.

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftDirection, FftPlanner};
use std::sync::Arc;

use crate::plane::Plane;
use crate::spectrum::mask::Mask;
use crate::util::{FreqMixError, FreqMixResult};

pub mod mask;
pub mod shift;

/// Returns the smallest transform-friendly size at or above `n`.
///
/// The size is the next integer whose prime factors are all in {2, 3, 5},
/// bumped by one when that integer is odd. The planner handles any length,
/// so the one-past-smooth fallback only costs speed, never correctness.
pub fn optimal_fft_size(n: usize) -> usize {
    let mut size = n.max(1);
    loop {
        let mut rem = size;
        for factor in [2usize, 3, 5] {
            while rem % factor == 0 {
                rem /= factor;
            }
        }
        if rem == 1 {
            break;
        }
        size += 1;
    }
    if size % 2 != 0 {
        size += 1;
    }
    size
}

/// Owned complex-valued frequency grid.
///
/// Produced by [`Spectrum::forward`]; both extents are always even.
#[derive(Clone, Debug)]
pub struct Spectrum {
    data: Vec<Complex<f32>>,
    rows: usize,
    cols: usize,
}

impl Spectrum {
    /// Wraps an existing complex grid.
    ///
    /// Both extents must be even and the buffer length must match; this is
    /// the escape hatch for custom spectral processing outside the built-in
    /// band masks.
    pub fn from_parts(data: Vec<Complex<f32>>, rows: usize, cols: usize) -> FreqMixResult<Self> {
        if rows == 0 || cols == 0 || rows % 2 != 0 || cols % 2 != 0 {
            return Err(FreqMixError::InvalidDimensions { rows, cols });
        }
        let needed = rows * cols;
        if data.len() != needed {
            return Err(FreqMixError::BufferSizeMismatch {
                needed,
                got: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Computes the forward 2D DFT of a plane.
    ///
    /// The plane is zero-padded on the bottom/right to
    /// `optimal_fft_size(rows) x optimal_fft_size(cols)` first; the output
    /// carries the padded dimensions.
    pub fn forward(plane: &Plane) -> Spectrum {
        let rows = optimal_fft_size(plane.rows());
        let cols = optimal_fft_size(plane.cols());
        let padded = plane.padded(rows, cols);
        let mut data: Vec<Complex<f32>> = padded
            .as_slice()
            .iter()
            .map(|&v| Complex::new(v, 0.0))
            .collect();
        fft_2d(&mut data, rows, cols, FftDirection::Forward);
        Spectrum { data, rows, cols }
    }

    /// Computes the inverse 2D DFT, scaled by `1 / (rows * cols)`, and keeps
    /// the real component.
    ///
    /// For a spectrum that went through symmetric masking the imaginary part
    /// is numerical noise and is dropped without validation.
    pub fn inverse(&self) -> Plane {
        let mut data = self.data.clone();
        fft_2d(&mut data, self.rows, self.cols, FftDirection::Inverse);
        let scale = 1.0 / (self.rows * self.cols) as f32;
        let real = data.iter().map(|c| c.re * scale).collect();
        Plane::from_vec(real, self.rows, self.cols)
    }

    /// Returns a copy with diagonally-opposite quadrants swapped, moving zero
    /// frequency between the corner and the center. Self-inverse.
    pub fn shifted(&self) -> Spectrum {
        Spectrum {
            data: shift::swap_quadrants(&self.data, self.rows, self.cols),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Multiplies the spectrum element-wise by a real-valued mask.
    ///
    /// Mask dimensions must match the spectrum's.
    pub fn apply_mask(&self, mask: &Mask) -> Spectrum {
        debug_assert_eq!((self.rows, self.cols), (mask.rows(), mask.cols()));
        let data = self
            .data
            .iter()
            .zip(mask.as_slice())
            .map(|(c, &m)| c * m)
            .collect();
        Spectrum {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Element-wise sum with another spectrum of the same dimensions.
    pub fn sum(&self, other: &Spectrum) -> Spectrum {
        debug_assert_eq!((self.rows, self.cols), (other.rows, other.cols));
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect();
        Spectrum {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns the number of rows (always even).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns (always even).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the backing row-major complex buffer.
    pub fn as_slice(&self) -> &[Complex<f32>] {
        &self.data
    }

    /// Returns the element at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Complex<f32>> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }
}

/// In-place 2D transform: a pass over rows, a transpose, a pass over the
/// former columns, and a transpose back to row-major layout.
fn fft_2d(data: &mut [Complex<f32>], rows: usize, cols: usize, direction: FftDirection) {
    let mut planner = FftPlanner::new();

    let row_fft = planner.plan_fft(cols, direction);
    run_rows(data, cols, &row_fft);

    let mut transposed = transpose(data, rows, cols);
    let col_fft = planner.plan_fft(rows, direction);
    run_rows(&mut transposed, rows, &col_fft);

    let back = transpose(&transposed, cols, rows);
    data.copy_from_slice(&back);
}

#[cfg(not(feature = "rayon"))]
fn run_rows(data: &mut [Complex<f32>], len: usize, fft: &Arc<dyn Fft<f32>>) {
    let mut scratch = vec![Complex::default(); fft.get_inplace_scratch_len()];
    for row in data.chunks_exact_mut(len) {
        fft.process_with_scratch(row, &mut scratch);
    }
}

#[cfg(feature = "rayon")]
fn run_rows(data: &mut [Complex<f32>], len: usize, fft: &Arc<dyn Fft<f32>>) {
    use rayon::prelude::*;
    data.par_chunks_exact_mut(len).for_each_init(
        || vec![Complex::default(); fft.get_inplace_scratch_len()],
        |scratch, row| fft.process_with_scratch(row, scratch),
    );
}

fn transpose(data: &[Complex<f32>], rows: usize, cols: usize) -> Vec<Complex<f32>> {
    let mut out = vec![Complex::default(); data.len()];
    for r in 0..rows {
        for c in 0..cols {
            out[c * rows + r] = data[r * cols + c];
        }
    }
    out
}
