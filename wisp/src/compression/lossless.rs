//! Predictive (delta) lossless coder.
//!
//! Works on raw bytes framed into fixed-width rows; each byte is predicted
//! by its left neighbor and only the residual is kept. The predictor resets
//! at the start of every row, so rows are independent of one another and
//! can be processed in parallel without changing the output.

use rayon::iter::ParallelIterator;
use rayon::slice::ParallelSlice;

/// Row width used to frame a raw byte stream into a matrix.
///
/// This is disconnected from any real image geometry; it is kept as a named
/// constant rather than inferred so that the framing both sides use always
/// agrees. Input bytes beyond the last full row are dropped.
pub const ROW_WIDTH: usize = 256;

/// Encode a byte stream into left-neighbor residuals, `width` bytes per
/// row. Returns the row count and the residuals, one per encoded byte.
///
/// Trailing bytes beyond `height * width` are silently dropped.
pub fn encode(data: &[u8], width: usize) -> (usize, Vec<i32>) {
    let height = data.len() / width;

    let residuals = data[..height * width]
        .par_chunks(width)
        .flat_map_iter(|row| {
            row.iter().enumerate().map(|(x, &byte)| {
                let predicted = if x > 0 { row[x - 1] as i32 } else { 0 };
                byte as i32 - predicted
            })
        })
        .collect();

    (height, residuals)
}

/// Rebuild the byte stream from residuals produced by [`encode`].
///
/// Every reconstructed byte is clamped to 0..=255 before it is used to
/// predict the next one, so adversarial residuals can never wrap or drift a
/// row out of range.
pub fn decode(residuals: &[i32], width: usize, height: usize) -> Vec<u8> {
    debug_assert_eq!(residuals.len(), width * height);

    residuals
        .par_chunks(width)
        .flat_map_iter(|row| {
            let mut line = Vec::with_capacity(row.len());
            let mut previous = 0i32;
            for &residual in row {
                let value = (residual + previous).clamp(0, 255);
                line.push(value as u8);
                previous = value;
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residuals_reset_each_row() {
        let data = [10u8, 13, 11, 200, 100, 0];
        let (height, residuals) = encode(&data, 3);

        assert_eq!(height, 2);
        assert_eq!(residuals, vec![10, 3, -2, 200, -100, -100]);
    }

    #[test]
    fn trailing_bytes_are_dropped() {
        let data = [1u8, 2, 3, 4, 5, 6, 7];
        let (height, residuals) = encode(&data, 3);

        assert_eq!(height, 2);
        assert_eq!(residuals.len(), 6);
    }

    #[test]
    fn decode_clamps_instead_of_wrapping() {
        // 300 overshoots above, then -600 dives below; both must pin to the
        // byte range and keep predicting from the clamped value.
        let residuals = [300, 10, -600, 5];
        let bytes = decode(&residuals, 4, 1);

        assert_eq!(bytes, vec![255, 255, 0, 5]);
    }

    #[test]
    fn roundtrip_exact_for_full_rows() {
        let data: Vec<u8> = (0..=255).rev().collect();
        let (height, residuals) = encode(&data, 16);
        let restored = decode(&residuals, 16, height);

        assert_eq!(restored, data);
    }
}
