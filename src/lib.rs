//! FreqMix is a frequency-domain image filtering and hybrid-image library.
//!
//! It applies low-pass and high-pass filters to 8-bit images through a 2D
//! DFT pipeline (pad, transform, quadrant shift, circular band mask, inverse,
//! crop, normalize) and composes hybrid images from the low band of one
//! image and the mean-corrected high band of another.
//!
//! Optional features: `rayon` parallelizes the transform's row passes,
//! `image-io` bridges to the `image` crate for file IO, and `tracing` emits
//! spans around the pipeline stages.

pub mod filter;
pub mod hybrid;
pub mod image;
pub mod plane;
pub mod spectrum;
mod trace;
pub mod util;

pub use filter::apply_frequency_filter;
pub use hybrid::create_hybrid_image;
pub use image::gray::{to_grayscale, BGR_LUMA};
pub use image::resize::resize_bilinear;
pub use image::Image;
pub use plane::Plane;
pub use spectrum::mask::{Band, Mask};
pub use spectrum::{optimal_fft_size, Spectrum};
pub use util::{FreqMixError, FreqMixResult};

#[cfg(feature = "image-io")]
pub use image::io;
