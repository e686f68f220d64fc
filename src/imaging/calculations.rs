//! Pure per-channel and per-dimension arithmetic used by the filters.
//!
//! All functions here are pure and testable without building an image. The
//! integer averages truncate; contrast truncates toward zero after scaling.
//! Neither is rounded, since rounding would change the output bytes.

/// Truncated mean of the three channels.
///
/// ```
/// # use pixmap_filter::imaging::calculations::gray_level;
/// assert_eq!(gray_level(10, 20, 31), 20);
/// ```
#[inline]
pub fn gray_level(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

#[inline]
pub fn invert_channel(c: u8) -> u8 {
    255 - c
}

/// Scale a channel's distance from mid-gray by `factor`.
///
/// Computes `(c - 128) * factor + 128` in single precision, truncates toward
/// zero and clamps the result into `[0, 255]`.
///
/// ```
/// # use pixmap_filter::imaging::calculations::contrast_channel;
/// assert_eq!(contrast_channel(100, 1.2), 94);
/// assert_eq!(contrast_channel(250, 1.2), 255);
/// ```
#[inline]
pub fn contrast_channel(c: u8, factor: f32) -> u8 {
    // `as i32` truncates toward zero and saturates on overflow/NaN.
    let adjusted = ((c as f32 - 128.0) * factor + 128.0) as i32;
    adjusted.clamp(0, 255) as u8
}

/// Truncated integer mean of `count` samples whose total is `sum`.
#[inline]
pub fn window_mean(sum: u32, count: u32) -> u8 {
    (sum / count) as u8
}

/// Number of samples kept when taking every other element starting at 0.
///
/// ```
/// # use pixmap_filter::imaging::calculations::halved_len;
/// assert_eq!(halved_len(5), 3);
/// assert_eq!(halved_len(4), 2);
/// ```
#[inline]
pub fn halved_len(len: usize) -> usize {
    len.div_ceil(2)
}

/// Whether a `width × height` image is large enough to downsample.
#[inline]
pub fn can_downsample_dims(width: usize, height: usize) -> bool {
    height > 1 && width > 1
}

/// Inclusive range of interior indices along one axis for a window of the
/// given radius, or `None` when the axis has no interior.
///
/// Written without subtraction on `len` first, so 0- and 1-length axes never
/// underflow.
pub fn interior_span(len: usize, radius: usize) -> Option<(usize, usize)> {
    if len < 2 * radius + 1 {
        return None;
    }
    Some((radius, len - 1 - radius))
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // gray_level / invert_channel
    // =========================================================================

    #[test]
    fn gray_level_truncates() {
        assert_eq!(gray_level(1, 1, 0), 0);
        assert_eq!(gray_level(2, 2, 1), 1);
        assert_eq!(gray_level(255, 255, 254), 254);
    }

    #[test]
    fn gray_level_of_white_does_not_overflow() {
        assert_eq!(gray_level(255, 255, 255), 255);
    }

    #[test]
    fn invert_channel_extremes() {
        assert_eq!(invert_channel(0), 255);
        assert_eq!(invert_channel(255), 0);
        assert_eq!(invert_channel(100), 155);
    }

    // =========================================================================
    // contrast_channel
    // =========================================================================

    #[test]
    fn contrast_reference_values() {
        assert_eq!(contrast_channel(100, 1.2), 94);
        assert_eq!(contrast_channel(150, 1.2), 154);
        assert_eq!(contrast_channel(200, 1.2), 214);
    }

    #[test]
    fn contrast_midpoint_is_fixed() {
        assert_eq!(contrast_channel(128, 1.2), 128);
        assert_eq!(contrast_channel(128, 3.0), 128);
    }

    #[test]
    fn contrast_clamps_both_ends() {
        assert_eq!(contrast_channel(0, 1.2), 0);
        assert_eq!(contrast_channel(5, 1.2), 0);
        assert_eq!(contrast_channel(255, 1.2), 255);
        assert_eq!(contrast_channel(240, 1.2), 255);
    }

    #[test]
    fn contrast_factor_one_is_identity() {
        for c in 0..=255u8 {
            assert_eq!(contrast_channel(c, 1.0), c);
        }
    }

    #[test]
    fn contrast_factor_zero_flattens_to_mid_gray() {
        assert_eq!(contrast_channel(0, 0.0), 128);
        assert_eq!(contrast_channel(255, 0.0), 128);
    }

    #[test]
    fn contrast_truncates_toward_zero() {
        // (10 - 128) * 1.2 + 128 = -13.6 → clamps to 0
        assert_eq!(contrast_channel(10, 1.2), 0);
        // (20 - 128) * 1.1 + 128 = 9.2 → 9
        assert_eq!(contrast_channel(20, 1.1), 9);
    }

    // =========================================================================
    // window_mean / halved_len / interior_span
    // =========================================================================

    #[test]
    fn window_mean_truncates() {
        assert_eq!(window_mean(17, 9), 1);
        assert_eq!(window_mean(255 * 9, 9), 255);
    }

    #[test]
    fn halved_len_is_ceil() {
        assert_eq!(halved_len(0), 0);
        assert_eq!(halved_len(1), 1);
        assert_eq!(halved_len(2), 1);
        assert_eq!(halved_len(7), 4);
    }

    #[test]
    fn can_downsample_requires_two_by_two() {
        assert!(!can_downsample_dims(1, 1));
        assert!(!can_downsample_dims(5, 1));
        assert!(!can_downsample_dims(1, 5));
        assert!(!can_downsample_dims(0, 0));
        assert!(can_downsample_dims(2, 2));
    }

    #[test]
    fn interior_span_small_axes_have_no_interior() {
        assert_eq!(interior_span(0, 1), None);
        assert_eq!(interior_span(1, 1), None);
        assert_eq!(interior_span(2, 1), None);
        assert_eq!(interior_span(3, 1), Some((1, 1)));
        assert_eq!(interior_span(10, 1), Some((1, 8)));
    }

    #[test]
    fn interior_span_larger_radius() {
        assert_eq!(interior_span(4, 2), None);
        assert_eq!(interior_span(5, 2), Some((2, 2)));
        assert_eq!(interior_span(1, 0), Some((0, 0)));
        assert_eq!(interior_span(0, 0), None);
    }
}
