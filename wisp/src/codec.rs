//! Path-based entry points for the two codecs.
//!
//! Each call is a self-contained request/response transform: it reads one
//! source file, works entirely on in-memory matrices, and writes exactly
//! one destination file. No state is shared between calls, and the caller
//! is responsible for serializing writer-then-reader access to an artifact
//! path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::artifact::{Artifact, ArtifactInfo, LosslessArtifact, LossyArtifact};
use crate::compression::{lossless, quant, wavelet};
use crate::error::Error;
use crate::raster;

/// Compress an image into a lossy wavelet artifact.
///
/// The source is decoded to greyscale, zero-padded to even dimensions,
/// Haar-transformed, quantized with the given quality and serialized to
/// `dst`. Deterministic: the same input bytes and quality always produce
/// the same artifact. The source file is never deleted.
pub fn compress_lossy<P, Q>(src: P, dst: Q, quality: u8) -> Result<ArtifactInfo, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    // Reject a bad quality before any transform work or file i/o.
    quant::validate_quality(quality)?;

    let (pixels, width, height) = raster::decode_greyscale(src)?;
    let (padded, padded_width, padded_height) =
        pad_to_even(&pixels, width as usize, height as usize);

    let coefficients = wavelet::forward(&padded, padded_width, padded_height);
    let quantized = quant::quantize(&coefficients, quality);

    let artifact = Artifact::Lossy(LossyArtifact {
        width,
        height,
        quality,
        quantized: quantized.chunks(padded_width).map(<[i32]>::to_vec).collect(),
    });
    artifact.save(dst)?;

    Ok(artifact.info())
}

/// Reconstruct an image from a lossy artifact, writing it to `dst` and
/// returning the written path.
pub fn decompress_lossy<P, Q>(src: P, dst: Q) -> Result<PathBuf, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    match Artifact::load(src)? {
        Artifact::Lossy(lossy) => reconstruct_lossy(&lossy, dst),
        Artifact::Lossless(_) => Err(Error::ArtifactFormat(
            "expected a lossy artifact, found a lossless one".into(),
        )),
    }
}

/// Compress any file's raw bytes into a lossless predictive artifact.
///
/// The bytes are framed into [`lossless::ROW_WIDTH`]-byte rows; trailing
/// bytes beyond the last full row are dropped.
pub fn compress_lossless<P, Q>(src: P, dst: Q) -> Result<ArtifactInfo, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let data = fs::read(src)?;

    let width = lossless::ROW_WIDTH;
    let (height, residuals) = lossless::encode(&data, width);
    if height == 0 {
        return Err(Error::ArtifactFormat(format!(
            "input of {} bytes is shorter than one {width}-byte row",
            data.len()
        )));
    }

    let artifact = Artifact::Lossless(LosslessArtifact {
        width: width as u32,
        height: height as u32,
        residuals,
    });
    artifact.save(dst)?;

    Ok(artifact.info())
}

/// Rebuild the raw byte stream from a lossless artifact, writing it to
/// `dst` and returning the written path. No container header is added; the
/// output is exactly `width * height` bytes.
pub fn decompress_lossless<P, Q>(src: P, dst: Q) -> Result<PathBuf, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    match Artifact::load(src)? {
        Artifact::Lossless(artifact) => reconstruct_lossless(&artifact, dst),
        Artifact::Lossy(_) => Err(Error::ArtifactFormat(
            "expected a lossless artifact, found a lossy one".into(),
        )),
    }
}

/// Decompress an artifact of either kind, dispatching on the parsed
/// document. Convenient for callers that only hold an artifact path.
pub fn decompress<P, Q>(src: P, dst: Q) -> Result<PathBuf, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    match Artifact::load(src)? {
        Artifact::Lossy(artifact) => reconstruct_lossy(&artifact, dst),
        Artifact::Lossless(artifact) => reconstruct_lossless(&artifact, dst),
    }
}

fn reconstruct_lossy<Q: AsRef<Path>>(artifact: &LossyArtifact, dst: Q) -> Result<PathBuf, Error> {
    let (padded_width, padded_height) = artifact.padded_dimensions();
    let quantized: Vec<i32> = artifact.quantized.iter().flatten().copied().collect();

    let coefficients = quant::dequantize(&quantized, artifact.quality);
    let reconstructed = wavelet::inverse(&coefficients, padded_width, padded_height);

    // Crop the padding back off while rounding and clamping each sample;
    // quantization error can overshoot the byte range, and the padded
    // region must never leak into the output.
    let width = artifact.width as usize;
    let height = artifact.height as usize;
    let mut pixels = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let value = reconstructed[y * padded_width + x].round();
            pixels[y * width + x] = value.clamp(0.0, 255.0) as u8;
        }
    }

    raster::encode_greyscale(&pixels, artifact.width, artifact.height, &dst)?;

    Ok(dst.as_ref().to_path_buf())
}

fn reconstruct_lossless<Q: AsRef<Path>>(
    artifact: &LosslessArtifact,
    dst: Q,
) -> Result<PathBuf, Error> {
    let bytes = lossless::decode(
        &artifact.residuals,
        artifact.width as usize,
        artifact.height as usize,
    );
    fs::write(&dst, bytes)?;

    Ok(dst.as_ref().to_path_buf())
}

/// Expand a pixel matrix to even dimensions, zero-filling the trailing
/// edge, and lift the samples to floats for the transform.
fn pad_to_even(pixels: &[u8], width: usize, height: usize) -> (Vec<f32>, usize, usize) {
    let padded_width = width.div_ceil(2) * 2;
    let padded_height = height.div_ceil(2) * 2;

    let mut padded = vec![0.0f32; padded_width * padded_height];
    for y in 0..height {
        for x in 0..width {
            padded[y * padded_width + x] = pixels[y * width + x] as f32;
        }
    }

    (padded, padded_width, padded_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_zero_fills_the_trailing_edge() {
        let pixels = [1u8, 2, 3, 4, 5, 6];
        let (padded, padded_width, padded_height) = pad_to_even(&pixels, 3, 2);

        assert_eq!(padded_width, 4);
        assert_eq!(padded_height, 2);
        assert_eq!(padded, vec![1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 6.0, 0.0]);
    }

    #[test]
    fn even_dimensions_pass_through_unpadded() {
        let pixels = [7u8, 8, 9, 10];
        let (padded, padded_width, padded_height) = pad_to_even(&pixels, 2, 2);

        assert_eq!((padded_width, padded_height), (2, 2));
        assert_eq!(padded, vec![7.0, 8.0, 9.0, 10.0]);
    }
}
