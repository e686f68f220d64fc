//! PPM codec backed by the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Magic check | local, `P3` / `P6` only |
//! | Decode | `image::load_from_memory_with_format` (`ImageFormat::Pnm`) → `into_rgb8` |
//! | Identify | `PnmDecoder` header read, no pixel decode |
//! | Encode | `PnmEncoder` with `PnmSubtype::Pixmap` (binary or ASCII samples) |
//!
//! Only the color pixmap subtypes are accepted. Bitmaps, graymaps and PAM
//! files are rejected even though the `image` crate could decode them.

use super::buffer::{ImageBuffer, Pixel};
use super::codec::{CodecError, Dimensions, PixmapCodec};
use image::codecs::pnm::{PnmDecoder, PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageDecoder, ImageEncoder, ImageFormat};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// Sample encoding for written pixmaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixmapEncoding {
    /// `P6`: raw bytes.
    #[default]
    Binary,
    /// `P3`: whitespace-separated decimal samples.
    Ascii,
}

impl PixmapEncoding {
    fn sample_encoding(self) -> SampleEncoding {
        match self {
            PixmapEncoding::Binary => SampleEncoding::Binary,
            PixmapEncoding::Ascii => SampleEncoding::Ascii,
        }
    }
}

/// Reads `P3`/`P6` pixmaps, writes the configured [`PixmapEncoding`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PnmCodec {
    encoding: PixmapEncoding,
}

impl PnmCodec {
    pub fn new(encoding: PixmapEncoding) -> Self {
        Self { encoding }
    }

    pub fn encoding(&self) -> PixmapEncoding {
        self.encoding
    }
}

fn check_pixmap_magic(bytes: &[u8]) -> Result<(), CodecError> {
    match bytes.get(..2) {
        Some(b"P3") | Some(b"P6") => Ok(()),
        Some([b'P', n]) if n.is_ascii_digit() => Err(CodecError::UnsupportedFormat(format!(
            "P{} is not a color pixmap (expected P3 or P6)",
            *n as char
        ))),
        _ => Err(CodecError::UnsupportedFormat(
            "missing PPM magic number (expected P3 or P6)".into(),
        )),
    }
}

impl PixmapCodec for PnmCodec {
    fn decode(&self, bytes: &[u8]) -> Result<ImageBuffer, CodecError> {
        check_pixmap_magic(bytes)?;
        let rgb = image::load_from_memory_with_format(bytes, ImageFormat::Pnm)
            .map_err(|e| CodecError::Decode(e.to_string()))?
            .into_rgb8();
        let (width, height) = (rgb.width() as usize, rgb.height() as usize);
        let pixels = rgb
            .into_raw()
            .chunks_exact(3)
            .map(|c| Pixel::new(c[0], c[1], c[2]))
            .collect();
        Ok(ImageBuffer::from_pixels(width, height, pixels)?)
    }

    fn encode(&self, image: &ImageBuffer) -> Result<Vec<u8>, CodecError> {
        let (width, height) = image.dimensions();
        let width = u32::try_from(width)
            .map_err(|_| CodecError::Encode(format!("width {width} does not fit in u32")))?;
        let height = u32::try_from(height)
            .map_err(|_| CodecError::Encode(format!("height {height} does not fit in u32")))?;
        let raw: Vec<u8> = image.pixels().iter().flat_map(|p| p.channels()).collect();

        let mut out = Vec::with_capacity(raw.len() + 32);
        PnmEncoder::new(&mut out)
            .with_subtype(PnmSubtype::Pixmap(self.encoding.sample_encoding()))
            .write_image(&raw, width, height, ExtendedColorType::Rgb8)
            .map_err(|e| CodecError::Encode(e.to_string()))?;
        Ok(out)
    }

    fn identify(&self, bytes: &[u8]) -> Result<Dimensions, CodecError> {
        check_pixmap_magic(bytes)?;
        let decoder =
            PnmDecoder::new(Cursor::new(bytes)).map_err(|e| CodecError::Decode(e.to_string()))?;
        let (width, height) = decoder.dimensions();
        Ok(Dimensions { width, height })
    }
}
