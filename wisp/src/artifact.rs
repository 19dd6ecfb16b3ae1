//! The serialized interchange format between a compress call and the
//! matching decompress call.
//!
//! An artifact is a JSON document holding either quantized wavelet
//! coefficients (lossy) or prediction residuals (lossless). The two kinds
//! are distinguished by which fields are present, and every document is
//! validated against its schema when loaded so that corrupt or truncated
//! artifacts are rejected up front instead of failing mid-reconstruction.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compression::quant;
use crate::error::Error;

/// Lossy artifact: quantized coefficients of the padded matrix plus the
/// original (unpadded) image dimensions and the quality they were
/// quantized with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LossyArtifact {
    /// Width of the original image in pixels, before padding.
    pub width: u32,

    /// Height of the original image in pixels, before padding.
    pub height: u32,

    /// Quality the coefficients were quantized with, 1..=100.
    pub quality: u8,

    /// Quantized coefficient rows. The row count and row length carry the
    /// padded dimensions implicitly.
    pub quantized: Vec<Vec<i32>>,
}

impl LossyArtifact {
    /// The even dimensions the image was padded to before the transform.
    pub fn padded_dimensions(&self) -> (usize, usize) {
        (
            (self.width as usize).div_ceil(2) * 2,
            (self.height as usize).div_ceil(2) * 2,
        )
    }
}

/// Lossless artifact: one signed residual per framed byte, row-major.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LosslessArtifact {
    /// Framing row width in bytes.
    pub width: u32,

    /// Number of full rows encoded.
    pub height: u32,

    /// Left-neighbor prediction residuals, `width * height` of them.
    pub residuals: Vec<i32>,
}

/// A compressed document, either variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Artifact {
    Lossy(LossyArtifact),
    Lossless(LosslessArtifact),
}

impl Artifact {
    /// Read and parse an artifact from a file, validating it against its
    /// schema. Never returns a partially-valid artifact.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let document = fs::read_to_string(path)?;
        let artifact: Artifact =
            serde_json::from_str(&document).map_err(|e| Error::ArtifactFormat(e.to_string()))?;

        artifact.validate()?;

        Ok(artifact)
    }

    /// Serialize the artifact as JSON and write it to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let document =
            serde_json::to_string(self).map_err(|e| Error::ArtifactFormat(e.to_string()))?;
        fs::write(path, document)?;

        Ok(())
    }

    /// Check the invariants the schema cannot express: positive
    /// dimensions, quality range, and array shapes matching the declared
    /// dimensions.
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            Artifact::Lossy(lossy) => {
                if lossy.width == 0 || lossy.height == 0 {
                    return Err(Error::ArtifactFormat(format!(
                        "non-positive image dimensions {}x{}",
                        lossy.width, lossy.height
                    )));
                }

                quant::validate_quality(lossy.quality)?;

                let (padded_width, padded_height) = lossy.padded_dimensions();
                let found_width = lossy.quantized.first().map_or(0, Vec::len);
                if lossy.quantized.len() != padded_height
                    || lossy.quantized.iter().any(|row| row.len() != padded_width)
                {
                    return Err(Error::DimensionMismatch {
                        expected_width: padded_width,
                        expected_height: padded_height,
                        found_width,
                        found_height: lossy.quantized.len(),
                    });
                }
            }
            Artifact::Lossless(lossless) => {
                if lossless.width == 0 || lossless.height == 0 {
                    return Err(Error::ArtifactFormat(format!(
                        "non-positive framing dimensions {}x{}",
                        lossless.width, lossless.height
                    )));
                }

                let expected = lossless.width as usize * lossless.height as usize;
                if lossless.residuals.len() != expected {
                    return Err(Error::ArtifactFormat(format!(
                        "expected {} residuals for {}x{}, found {}",
                        expected,
                        lossless.width,
                        lossless.height,
                        lossless.residuals.len()
                    )));
                }
            }
        }

        Ok(())
    }

    /// A lightweight summary of the artifact, without its payload.
    pub fn info(&self) -> ArtifactInfo {
        match self {
            Artifact::Lossy(lossy) => ArtifactInfo {
                kind: ArtifactKind::Lossy,
                width: lossy.width,
                height: lossy.height,
                quality: Some(lossy.quality),
            },
            Artifact::Lossless(lossless) => ArtifactInfo {
                kind: ArtifactKind::Lossless,
                width: lossless.width,
                height: lossless.height,
                quality: None,
            },
        }
    }
}

/// Which codec produced an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Lossy,
    Lossless,
}

/// Summary returned by the compress entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactInfo {
    pub kind: ArtifactKind,
    pub width: u32,
    pub height: u32,

    /// Quantization quality for lossy artifacts, `None` for lossless ones.
    pub quality: Option<u8>,
}
