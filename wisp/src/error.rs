use thiserror::Error;

/// Everything that can go wrong while compressing or decompressing.
///
/// The codecs never retry or suppress a failure internally; every error
/// propagates to the caller as-is.
#[derive(Error, Debug)]
pub enum Error {
    /// The source image could not be decoded, or the reconstructed image
    /// could not be written to the destination.
    #[error("raster i/o failed: {0}")]
    RasterIo(#[from] image::ImageError),

    /// Raw file i/o failed (artifact read/write, lossless byte stream).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Quality is outside the accepted 1..=100 range.
    #[error("invalid quality {0}, expected a value from 1 to 100")]
    InvalidQuality(u8),

    /// The artifact document is unparseable or violates its schema.
    #[error("malformed artifact: {0}")]
    ArtifactFormat(String),

    /// The quantized matrix shape disagrees with the declared image
    /// dimensions after padding. The artifact is treated as corrupt.
    #[error("quantized matrix is {found_height}x{found_width}, expected {expected_height}x{expected_width} after padding")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        found_width: usize,
        found_height: usize,
    },
}
