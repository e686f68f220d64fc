//! Shared test utilities for the pixmap-filter test suite.
//!
//! Provides deterministic image builders, raw PPM fixtures and assertions
//! used by the filter, codec and process tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let img = noise_image(8, 6, 42);
//! let out = blur(img.clone(), BlurRadius::default());
//! assert_borders_equal(&img, &out, 1);
//! ```

use crate::imaging::{ImageBuffer, Pixel};

// =========================================================================
// Image builders
// =========================================================================

/// Pseudo-random image from a fixed seed (64-bit LCG), identical on every run.
pub fn noise_image(width: usize, height: usize, seed: u64) -> ImageBuffer {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as u8
    };
    ImageBuffer::from_fn(width, height, |_, _| Pixel::new(next(), next(), next()))
}

/// Deterministic pattern where channels depend on position.
pub fn gradient_image(width: usize, height: usize) -> ImageBuffer {
    ImageBuffer::from_fn(width, height, |row, col| {
        Pixel::new((col * 37) as u8, (row * 11) as u8, (row + col) as u8)
    })
}

// =========================================================================
// Raw PPM fixtures
// =========================================================================

/// Binary `P6` file bytes with maxval 255.
pub fn ppm_p6(width: usize, height: usize, samples: &[u8]) -> Vec<u8> {
    let mut bytes = format!("P6\n{width} {height}\n255\n").into_bytes();
    bytes.extend_from_slice(samples);
    bytes
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert that every pixel within `border` of an edge is identical in both images.
pub fn assert_borders_equal(before: &ImageBuffer, after: &ImageBuffer, border: usize) {
    assert_eq!(before.dimensions(), after.dimensions(), "dimensions changed");
    let (width, height) = before.dimensions();
    for row in 0..height {
        for col in 0..width {
            let on_border = row < border
                || col < border
                || row + border >= height
                || col + border >= width;
            if on_border {
                assert_eq!(
                    before.pixel(row, col),
                    after.pixel(row, col),
                    "border pixel ({row}, {col}) changed"
                );
            }
        }
    }
}
