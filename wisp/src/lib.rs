//! WISP (**W**avelet **I**mage + **S**imple **P**rediction) is a pair of
//! small image codecs behind path-based entry points: a lossy codec built
//! on a single-level 2D Haar wavelet with scalar quantization, and a
//! lossless predictive coder over raw bytes. Both serialize to a JSON
//! artifact that the matching decompress call consumes.
//!
//! This crate is mainly for experimentation and learning about
//! compression. If you're looking for an image format to actually use,
//! consider a more standard one such as those supported by the
//! [image crate](https://docs.rs/image/latest/image/).
//!
//! # Example
//! ## Compressing an image
//! ```no_run
//! let info = wisp::compress_lossy("photo.png", "photo.wisp", 75)
//!     .expect("could not compress the image");
//!
//! println!("{}x{} at quality {:?}", info.width, info.height, info.quality);
//! ```
//!
//! ## Reconstructing it
//! ```no_run
//! let written = wisp::decompress_lossy("photo.wisp", "photo_out.png")
//!     .expect("could not decompress the artifact");
//!
//! println!("reconstruction written to {}", written.display());
//! ```

mod compression {
    pub mod lossless;
    pub mod quant;
    pub mod wavelet;
}
mod raster;

pub mod artifact;
pub mod codec;
pub mod error;

// ----------------------- //
// INLINED USEFUL FEATURES //
// ----------------------- //
#[doc(inline)]
pub use codec::{compress_lossless, compress_lossy, decompress, decompress_lossless, decompress_lossy};

#[doc(inline)]
pub use artifact::{Artifact, ArtifactInfo, ArtifactKind};

#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use compression::quant::DEFAULT_QUALITY;

#[doc(inline)]
pub use compression::lossless::ROW_WIDTH as LOSSLESS_ROW_WIDTH;
