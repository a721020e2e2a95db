//! Error types for freqmix.

use thiserror::Error;

/// Result alias for freqmix operations.
pub type FreqMixResult<T> = std::result::Result<T, FreqMixError>;

/// Errors that can occur when constructing images or running the pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FreqMixError {
    /// An image has zero rows or zero columns.
    #[error("invalid dimensions: {rows}x{cols}")]
    InvalidDimensions {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// Channel count outside the supported set {1, 3}.
    #[error("unsupported channel count: {channels} (expected 1 or 3)")]
    InvalidChannels {
        /// Requested channel count.
        channels: usize,
    },
    /// The provided buffer does not match `rows * cols * channels`.
    #[error("buffer length mismatch: needed {needed}, got {got}")]
    BufferSizeMismatch {
        /// Required number of elements.
        needed: usize,
        /// Actual number of elements provided.
        got: usize,
    },
    /// A crop region extends past the source image.
    #[error("crop {rows}x{cols} exceeds source {src_rows}x{src_cols}")]
    CropOutOfBounds {
        /// Requested crop rows.
        rows: usize,
        /// Requested crop columns.
        cols: usize,
        /// Source rows.
        src_rows: usize,
        /// Source columns.
        src_cols: usize,
    },
    /// Image decoding or encoding failed (feature `image-io`).
    #[error("image io failed: {reason}")]
    ImageIo {
        /// Human-readable failure description from the codec.
        reason: String,
    },
}
