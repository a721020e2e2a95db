//! Owned 8-bit image buffers.
//!
//! `Image` is a dense row-major `rows x cols x channels` buffer of `u8`
//! samples with 1 (grayscale) or 3 (color) channels. Images are immutable
//! once constructed; every transform in this crate returns a new `Image`.
//!
//! Three-channel data is stored in **BGR** order (see [`gray::BGR_LUMA`]).
//! The whole pipeline relies on this single convention: luma projection,
//! hybrid composition, and the IO bridge all assume it.

use crate::util::{FreqMixError, FreqMixResult};

pub mod gray;
#[cfg(feature = "image-io")]
pub mod io;
pub mod resize;

/// Owned dense image buffer, row-major, interleaved channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    data: Vec<u8>,
    rows: usize,
    cols: usize,
    channels: usize,
}

impl Image {
    /// Creates an image from a raw interleaved buffer.
    ///
    /// The buffer length must equal `rows * cols * channels` exactly.
    pub fn new(data: Vec<u8>, rows: usize, cols: usize, channels: usize) -> FreqMixResult<Self> {
        let needed = required_len(rows, cols, channels)?;
        if data.len() != needed {
            return Err(FreqMixError::BufferSizeMismatch {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            rows,
            cols,
            channels,
        })
    }

    /// Creates an image by evaluating `f(row, col, channel)` for every sample.
    pub fn from_fn<F>(rows: usize, cols: usize, channels: usize, f: F) -> FreqMixResult<Self>
    where
        F: Fn(usize, usize, usize) -> u8,
    {
        let needed = required_len(rows, cols, channels)?;
        let mut data = Vec::with_capacity(needed);
        for r in 0..rows {
            for c in 0..cols {
                for ch in 0..channels {
                    data.push(f(r, c, ch));
                }
            }
        }
        Self::new(data, rows, cols, channels)
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of channels (1 or 3).
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the raw interleaved sample buffer.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Returns the sample at `(row, col, channel)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Option<u8> {
        if row >= self.rows || col >= self.cols || channel >= self.channels {
            return None;
        }
        let idx = (row * self.cols + col) * self.channels + channel;
        self.data.get(idx).copied()
    }

    /// Returns a contiguous slice for one row (`cols * channels` samples).
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.rows {
            return None;
        }
        let width = self.cols * self.channels;
        let start = row * width;
        self.data.get(start..start + width)
    }

    /// Copies the top-left `rows x cols` sub-rectangle into a new image.
    pub fn crop(&self, rows: usize, cols: usize) -> FreqMixResult<Self> {
        if rows > self.rows || cols > self.cols {
            return Err(FreqMixError::CropOutOfBounds {
                rows,
                cols,
                src_rows: self.rows,
                src_cols: self.cols,
            });
        }
        let mut data = Vec::with_capacity(rows * cols * self.channels);
        for r in 0..rows {
            let src = self.row(r).expect("row within bounds");
            data.extend_from_slice(&src[..cols * self.channels]);
        }
        Self::new(data, rows, cols, self.channels)
    }
}

fn required_len(rows: usize, cols: usize, channels: usize) -> FreqMixResult<usize> {
    if rows == 0 || cols == 0 {
        return Err(FreqMixError::InvalidDimensions { rows, cols });
    }
    if channels != 1 && channels != 3 {
        return Err(FreqMixError::InvalidChannels { channels });
    }
    rows.checked_mul(cols)
        .and_then(|v| v.checked_mul(channels))
        .ok_or(FreqMixError::InvalidDimensions { rows, cols })
}
