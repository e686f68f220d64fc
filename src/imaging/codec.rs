//! Codec trait and shared types.
//!
//! The [`PixmapCodec`] trait is the seam between the filter core and the
//! on-disk format: `decode(bytes) → ImageBuffer` and `encode(ImageBuffer) → bytes`.
//! The orchestration layer only talks to this trait, so tests can run the
//! whole read → filter → write flow against an in-memory mock.
//!
//! The production implementation is [`PnmCodec`](super::pnm::PnmCodec).

use super::buffer::{BufferError, ImageBuffer};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Encode failed: {0}")]
    Encode(String),
    #[error("Malformed pixel data: {0}")]
    Buffer(#[from] BufferError),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for pixel-map codecs.
pub trait PixmapCodec {
    /// Parse a complete file into an image.
    fn decode(&self, bytes: &[u8]) -> Result<ImageBuffer, CodecError>;

    /// Serialize an image into a complete file.
    fn encode(&self, image: &ImageBuffer) -> Result<Vec<u8>, CodecError>;

    /// Read dimensions. The default decodes the whole image.
    fn identify(&self, bytes: &[u8]) -> Result<Dimensions, CodecError> {
        let image = self.decode(bytes)?;
        let (width, height) = image.dimensions();
        Ok(Dimensions {
            width: width as u32,
            height: height as u32,
        })
    }
}
