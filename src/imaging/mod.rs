//! Image model, filters and codec.
//!
//! | Piece | Module |
//! |---|---|
//! | **Pixel grid** | [`buffer`] — `Pixel`, `ImageBuffer` |
//! | **Arithmetic** | [`calculations`] — truncating means, contrast, interior spans |
//! | **Filters** | [`filters`] — grayscale, invert, contrast, blur, mirror, downsample |
//! | **Dispatch** | [`pipeline`] — `FilterKind`, `apply_filters` |
//! | **Codec** | [`codec`] trait + [`pnm`] (`image` crate, PPM only) |
//!
//! The module is split into:
//! - **Calculations**: Pure per-channel functions (unit testable)
//! - **Parameters**: Tunable values for contrast and blur
//! - **Filters / Pipeline**: Whole-image transforms and their ordering
//! - **Codec**: [`PixmapCodec`] trait + [`PnmCodec`]

pub mod buffer;
pub mod calculations;
pub mod codec;
pub mod filters;
mod params;
pub mod pipeline;
pub mod pnm;

pub use buffer::{BufferError, ImageBuffer, Pixel};
pub use codec::{CodecError, Dimensions, PixmapCodec};
pub use filters::{blur, can_downsample, contrast, downsample, grayscale, invert, mirror};
pub use params::{BlurRadius, ContrastFactor, FilterSettings, MAX_BLUR_RADIUS};
pub use pipeline::{FilterKind, apply_filters};
pub use pnm::{PixmapEncoding, PnmCodec};
