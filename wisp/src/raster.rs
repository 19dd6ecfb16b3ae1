//! Greyscale raster decode/encode, backed by the `image` crate.

use std::path::Path;

use image::ColorType;

use crate::error::Error;

/// Decode any supported image file into a single-channel 8-bit pixel
/// matrix, returning the pixels row-major along with the dimensions.
pub fn decode_greyscale<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, u32, u32), Error> {
    let image = image::open(path)?;
    let luma = image.into_luma8();
    let (width, height) = luma.dimensions();

    Ok((luma.into_raw(), width, height))
}

/// Encode a single-channel pixel buffer into the image format implied by
/// the destination extension.
pub fn encode_greyscale<P: AsRef<Path>>(
    pixels: &[u8],
    width: u32,
    height: u32,
    path: P,
) -> Result<(), Error> {
    image::save_buffer(path, pixels, width, height, ColorType::L8)?;

    Ok(())
}
