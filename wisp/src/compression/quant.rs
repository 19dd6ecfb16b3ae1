//! Scalar quantization of wavelet coefficients.

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::error::Error;

/// Quality used when the caller does not specify one.
pub const DEFAULT_QUALITY: u8 = 75;

/// Check that a quality value is inside the accepted 1..=100 range.
///
/// A quality of zero would make the quantization step infinite, so this
/// must run before any transform work or file i/o happens.
pub fn validate_quality(quality: u8) -> Result<(), Error> {
    if quality == 0 || quality > 100 {
        return Err(Error::InvalidQuality(quality));
    }

    Ok(())
}

/// The divisor applied to each coefficient before rounding.
///
/// Lower quality means a larger step, which discards more precision and
/// shrinks the artifact. Quality 100 gives a step of exactly 1.
pub fn step_size(quality: u8) -> f32 {
    100.0 / quality as f32
}

/// Quantize a coefficient matrix, returning the rounded result.
pub fn quantize(coefficients: &[f32], quality: u8) -> Vec<i32> {
    let step = step_size(quality);
    coefficients.par_iter().map(|c| (c / step).round() as i32).collect()
}

/// Dequantize a matrix, returning an approximation of the original
/// coefficients.
pub fn dequantize(quantized: &[i32], quality: u8) -> Vec<f32> {
    let step = step_size(quality);
    quantized.par_iter().map(|q| *q as f32 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_shrinks_as_quality_rises() {
        assert_eq!(step_size(10), 10.0);
        assert_eq!(step_size(50), 2.0);
        assert_eq!(step_size(100), 1.0);
    }

    #[test]
    fn quality_100_preserves_integer_coefficients() {
        let coefficients = [0.0, 1.0, -7.0, 255.0, -128.0];
        let quantized = quantize(&coefficients, 100);
        let restored = dequantize(&quantized, 100);

        assert_eq!(restored, coefficients.to_vec());
    }

    #[test]
    fn coarse_quality_rounds_to_step_multiples() {
        let quantized = quantize(&[24.0, 26.0, -9.9], 10);

        assert_eq!(quantized, vec![2, 3, -1]);
        assert_eq!(dequantize(&quantized, 10), vec![20.0, 30.0, -10.0]);
    }

    #[test]
    fn rejects_zero_and_out_of_range_quality() {
        assert!(matches!(validate_quality(0), Err(Error::InvalidQuality(0))));
        assert!(matches!(validate_quality(101), Err(Error::InvalidQuality(101))));
        assert!(validate_quality(1).is_ok());
        assert!(validate_quality(100).is_ok());
    }
}
