//! Single-level 2D Haar decomposition.
//!
//! Both directions are pure functions over row-major matrices: the input is
//! borrowed, the output freshly allocated. Dimensions must be even, which
//! the lossy codec guarantees by zero-padding before calling in here.

/// Perform a single-level forward Haar transform on the input matrix.
///
/// The horizontal pass runs to completion over the full matrix before the
/// vertical pass starts, since the vertical pass pairs samples of rows that
/// have already been transformed. Changing that order changes the output.
pub fn forward(input: &[f32], width: usize, height: usize) -> Vec<f32> {
    check_dimensions(input.len(), width, height);

    // Horizontal pass: averages to the left half of each row, differences
    // to the right half.
    let mut rows = vec![0.0f32; width * height];
    for y in 0..height {
        let row = &input[y * width..(y + 1) * width];
        let out = &mut rows[y * width..(y + 1) * width];
        for j in 0..width / 2 {
            out[j] = (row[2 * j] + row[2 * j + 1]) / 2.0;
            out[j + width / 2] = (row[2 * j] - row[2 * j + 1]) / 2.0;
        }
    }

    // Vertical pass: identical pairing down each column, averages to the
    // top half, differences to the bottom half.
    let mut output = vec![0.0f32; width * height];
    for x in 0..width {
        for i in 0..height / 2 {
            let a = rows[(2 * i) * width + x];
            let b = rows[(2 * i + 1) * width + x];
            output[i * width + x] = (a + b) / 2.0;
            output[(i + height / 2) * width + x] = (a - b) / 2.0;
        }
    }

    output
}

/// Invert a single-level Haar transform, reversing the passes of
/// [`forward`] in opposite order (vertical first, then horizontal).
///
/// For unquantized coefficients this reproduces the original matrix exactly
/// up to floating-point rounding.
pub fn inverse(input: &[f32], width: usize, height: usize) -> Vec<f32> {
    check_dimensions(input.len(), width, height);

    // Vertical inverse: merge the top (average) and bottom (difference)
    // halves back into interleaved rows.
    let mut merged = vec![0.0f32; width * height];
    for x in 0..width {
        for i in 0..height / 2 {
            let average = input[i * width + x];
            let difference = input[(i + height / 2) * width + x];
            merged[(2 * i) * width + x] = average + difference;
            merged[(2 * i + 1) * width + x] = average - difference;
        }
    }

    // Horizontal inverse over the vertically-reconstructed rows.
    let mut output = vec![0.0f32; width * height];
    for y in 0..height {
        let row = &merged[y * width..(y + 1) * width];
        for j in 0..width / 2 {
            let average = row[j];
            let difference = row[j + width / 2];
            output[y * width + 2 * j] = average + difference;
            output[y * width + 2 * j + 1] = average - difference;
        }
    }

    output
}

fn check_dimensions(len: usize, width: usize, height: usize) {
    if len != width * height {
        panic!("Input matrix size must be width×height")
    }

    if width % 2 != 0 || height % 2 != 0 {
        panic!("Matrix dimensions must be even")
    }
}
