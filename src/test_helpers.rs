//! Shared test utilities: small synthetic grayscale images.
//!
//! ```text
//! use crate::test_helpers::*;
//!
//! let flat = uniform_image(5, 5, 100);
//! let step = vertical_step_image(5, 5, 2);   // black left of col 2, white from col 2
//! let noise = pseudo_random_image(32, 24, 7); // deterministic per seed
//! ```

use crate::imaging::GrayImage;

/// Every pixel set to `value`.
pub fn uniform_image(width: usize, height: usize, value: u8) -> GrayImage {
    GrayImage::new(width, height, vec![value; width * height]).unwrap()
}

/// 0 for columns `< edge_col`, 255 from `edge_col` on.
pub fn vertical_step_image(width: usize, height: usize, edge_col: usize) -> GrayImage {
    let data = (0..width * height)
        .map(|i| if i % width < edge_col { 0 } else { 255 })
        .collect();
    GrayImage::new(width, height, data).unwrap()
}

/// Deterministic noise from a 32-bit LCG, so failures reproduce.
pub fn pseudo_random_image(width: usize, height: usize, seed: u32) -> GrayImage {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    let data = (0..width * height)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect();
    GrayImage::new(width, height, data).unwrap()
}
