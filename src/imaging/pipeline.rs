//! Ordered application of filters.
//!
//! A pipeline is a plain list of [`FilterKind`] values. [`apply_filters`]
//! folds the image through them left to right; each step sees only the
//! output of the step before it. Repeats are allowed and are applied again.

use super::buffer::ImageBuffer;
use super::filters;
use super::params::FilterSettings;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one filter step.
///
/// The single-letter aliases are the historical command-line flags
/// (`-g -i -x -b -m -c`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    #[value(alias = "g")]
    Grayscale,
    #[value(alias = "i")]
    Invert,
    #[value(alias = "x")]
    Contrast,
    #[value(alias = "b")]
    Blur,
    #[value(alias = "m")]
    Mirror,
    #[value(alias = "c")]
    Downsample,
}

impl FilterKind {
    pub const ALL: [FilterKind; 6] = [
        FilterKind::Grayscale,
        FilterKind::Invert,
        FilterKind::Contrast,
        FilterKind::Blur,
        FilterKind::Mirror,
        FilterKind::Downsample,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Grayscale => "grayscale",
            FilterKind::Invert => "invert",
            FilterKind::Contrast => "contrast",
            FilterKind::Blur => "blur",
            FilterKind::Mirror => "mirror",
            FilterKind::Downsample => "downsample",
        }
    }

    /// Run this filter once.
    ///
    /// Downsample is applied unconditionally here; the size precheck
    /// ([`filters::can_downsample`]) belongs to the caller.
    pub fn apply(self, image: ImageBuffer, settings: &FilterSettings) -> ImageBuffer {
        match self {
            FilterKind::Grayscale => filters::grayscale(image),
            FilterKind::Invert => filters::invert(image),
            FilterKind::Contrast => filters::contrast(image, settings.contrast),
            FilterKind::Blur => filters::blur(image, settings.blur),
            FilterKind::Mirror => filters::mirror(image),
            FilterKind::Downsample => filters::downsample(image),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply `steps` in order: `stepN(... step1(image) ...)`.
pub fn apply_filters(
    image: ImageBuffer,
    steps: &[FilterKind],
    settings: &FilterSettings,
) -> ImageBuffer {
    steps
        .iter()
        .fold(image, |image, step| step.apply(image, settings))
}
