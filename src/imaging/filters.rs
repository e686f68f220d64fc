//! The six pixel filters.
//!
//! Every filter takes the image by value and returns the transformed image.
//! Grayscale, invert, contrast and mirror rewrite the owned buffer in place;
//! blur and downsample build a fresh buffer, since blur must read an
//! unmodified source and downsample changes the dimensions.
//!
//! None of these functions can fail on a well-formed [`ImageBuffer`].

use super::buffer::{ImageBuffer, Pixel};
use super::calculations::{
    can_downsample_dims, contrast_channel, gray_level, halved_len, interior_span, invert_channel,
    window_mean,
};
use super::params::{BlurRadius, ContrastFactor};

/// Replace each pixel by the truncated mean of its channels.
pub fn grayscale(mut image: ImageBuffer) -> ImageBuffer {
    for pixel in image.pixels_mut() {
        *pixel = Pixel::gray(gray_level(pixel.r, pixel.g, pixel.b));
    }
    image
}

/// `255 - c` on every channel.
pub fn invert(mut image: ImageBuffer) -> ImageBuffer {
    for pixel in image.pixels_mut() {
        *pixel = pixel.map_channels(invert_channel);
    }
    image
}

/// Stretch (or flatten) every channel around mid-gray by `factor`.
pub fn contrast(mut image: ImageBuffer, factor: ContrastFactor) -> ImageBuffer {
    let factor = factor.value();
    for pixel in image.pixels_mut() {
        *pixel = pixel.map_channels(|c| contrast_channel(c, factor));
    }
    image
}

/// Box blur with a `(2r+1)×(2r+1)` window.
///
/// Interior pixels become the truncated per-channel mean of their window in
/// the source image. Pixels closer than `r` to any edge are copied unchanged.
/// When either dimension is smaller than the window there is no interior and
/// the image is returned as is.
pub fn blur(image: ImageBuffer, radius: BlurRadius) -> ImageBuffer {
    let r = radius.value();
    let (width, height) = image.dimensions();
    let (Some((row_lo, row_hi)), Some((col_lo, col_hi))) =
        (interior_span(height, r), interior_span(width, r))
    else {
        return image;
    };

    let count = (radius.window() * radius.window()) as u32;
    let mut blurred = image.clone();
    let out = blurred.pixels_mut();

    for row in row_lo..=row_hi {
        for col in col_lo..=col_hi {
            let mut sum = [0u32; 3];
            for y in row - r..=row + r {
                for p in &image.row(y)[col - r..=col + r] {
                    sum[0] += p.r as u32;
                    sum[1] += p.g as u32;
                    sum[2] += p.b as u32;
                }
            }
            out[row * width + col] = Pixel::new(
                window_mean(sum[0], count),
                window_mean(sum[1], count),
                window_mean(sum[2], count),
            );
        }
    }

    blurred
}

/// Horizontal flip: reverse the pixel order of each row.
pub fn mirror(mut image: ImageBuffer) -> ImageBuffer {
    image.for_each_row_mut(<[Pixel]>::reverse);
    image
}

/// Whether [`downsample`] would produce a meaningful result.
///
/// Callers are expected to check this and report the step as declined
/// instead of downsampling when it returns `false`.
pub fn can_downsample(image: &ImageBuffer) -> bool {
    can_downsample_dims(image.width(), image.height())
}

/// Keep every other row and every other column, starting at index 0.
///
/// Output is `ceil(h/2) × ceil(w/2)`. This is a nearest-neighbor subsample,
/// not an average.
pub fn downsample(image: ImageBuffer) -> ImageBuffer {
    let out_w = halved_len(image.width());
    let out_h = halved_len(image.height());
    ImageBuffer::from_fn(out_w, out_h, |row, col| image.pixel(2 * row, 2 * col))
}
