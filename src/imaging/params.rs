//! Parameter types for the tunable filters.
//!
//! Only contrast and blur take parameters. They are carried in a
//! [`FilterSettings`] value that the pipeline hands to every step, so the
//! filter functions themselves never read global constants.
//!
//! ## Types
//!
//! - [`ContrastFactor`] — Multiplier applied around mid-gray (default 1.2).
//! - [`BlurRadius`] — Half-width of the box window (default 1, i.e. 3×3). Clamped on construction.
//! - [`FilterSettings`] — Both of the above, as passed to [`apply_filters`](super::pipeline::apply_filters).

/// Largest accepted blur radius (33×33 window).
pub const MAX_BLUR_RADIUS: usize = 16;

/// Contrast multiplier applied as `(c - 128) * factor + 128`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastFactor(pub f32);

impl ContrastFactor {
    pub fn new(value: f32) -> Self {
        Self(value)
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ContrastFactor {
    fn default() -> Self {
        Self(1.2)
    }
}

/// Box-blur radius; the averaging window is `(2r+1)×(2r+1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurRadius(pub usize);

impl BlurRadius {
    pub fn new(value: usize) -> Self {
        Self(value.min(MAX_BLUR_RADIUS))
    }

    pub fn value(self) -> usize {
        self.0
    }

    /// Side length of the averaging window.
    pub fn window(self) -> usize {
        2 * self.0 + 1
    }
}

impl Default for BlurRadius {
    fn default() -> Self {
        Self(1)
    }
}

/// Parameters threaded through the pipeline to the filters that need them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterSettings {
    pub contrast: ContrastFactor,
    pub blur: BlurRadius,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contrast_default_is_1_2() {
        assert_eq!(ContrastFactor::default().value(), 1.2);
    }

    #[test]
    fn blur_default_is_3x3() {
        assert_eq!(BlurRadius::default().value(), 1);
        assert_eq!(BlurRadius::default().window(), 3);
    }

    #[test]
    fn blur_radius_clamps_to_max() {
        assert_eq!(BlurRadius::new(2).value(), 2);
        assert_eq!(BlurRadius::new(1000).value(), MAX_BLUR_RADIUS);
    }
}
