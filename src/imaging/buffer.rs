//! In-memory image representation shared by every filter.
//!
//! An [`ImageBuffer`] is a row-major grid of [`Pixel`] values with the origin
//! at the top-left corner. Pixels are stored contiguously, so the grid is
//! rectangular by construction: there is no way to hold rows of different
//! lengths. Constructors that accept caller-shaped data ([`ImageBuffer::from_rows`],
//! [`ImageBuffer::from_pixels`]) reject malformed input instead of truncating it.
//!
//! Zero-area images (`0×0`, `w×0`, `0×h`) are valid values.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("row {row} has {found} pixels, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("pixel count {found} does not match {expected} (width × height)")]
    LengthMismatch { expected: usize, found: usize },
}

/// One RGB sample, 8 bits per channel. No alpha.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a pixel whose three channels share one value.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Apply `f` to each channel independently.
    #[inline]
    pub fn map_channels(self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Rectangular, row-major grid of pixels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl ImageBuffer {
    /// An image with every pixel set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width * height],
        }
    }

    /// Build an image by evaluating `f(row, col)` for every position.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Pixel) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Wrap a flat row-major pixel vector.
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<Pixel>,
    ) -> Result<Self, BufferError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                found: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build an image from a list of rows. Every row must have the length of
    /// the first one.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, BufferError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut pixels = Vec::with_capacity(width * height);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(BufferError::Ragged {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
            pixels.extend(row);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// True when the image has no pixels (either dimension is zero).
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// Pixel at `(row, col)`. Panics when out of bounds.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> Pixel {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        self.pixels[row * self.width + col]
    }

    /// Pixels of one row, left to right. Panics when `row >= height`.
    pub fn row(&self, row: usize) -> &[Pixel] {
        assert!(row < self.height, "row {row} out of bounds ({})", self.height);
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Iterate rows top to bottom. Yields `height` slices even when `width == 0`.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        (0..self.height).map(move |row| self.row(row))
    }

    /// Apply `f` to every row in place.
    pub fn for_each_row_mut(&mut self, mut f: impl FnMut(&mut [Pixel])) {
        if self.width == 0 {
            return;
        }
        for row in self.pixels.chunks_exact_mut(self.width) {
            f(row);
        }
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    pub fn into_rows(self) -> Vec<Vec<Pixel>> {
        self.rows().map(<[Pixel]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_builds_rectangular_image() {
        let img = ImageBuffer::from_rows(vec![
            vec![Pixel::gray(1), Pixel::gray(2)],
            vec![Pixel::gray(3), Pixel::gray(4)],
            vec![Pixel::gray(5), Pixel::gray(6)],
        ])
        .unwrap();
        assert_eq!(img.dimensions(), (2, 3));
        assert_eq!(img.pixel(2, 1), Pixel::gray(6));
        assert_eq!(img.row(1), &[Pixel::gray(3), Pixel::gray(4)]);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = ImageBuffer::from_rows(vec![
            vec![Pixel::gray(1), Pixel::gray(2)],
            vec![Pixel::gray(3)],
        ])
        .unwrap_err();
        assert_eq!(
            err,
            BufferError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn from_rows_empty_is_zero_area() {
        let img = ImageBuffer::from_rows(Vec::new()).unwrap();
        assert_eq!(img.dimensions(), (0, 0));
        assert!(img.is_empty());
    }

    #[test]
    fn zero_width_rows_keep_height() {
        let img = ImageBuffer::from_rows(vec![Vec::new(), Vec::new(), Vec::new()]).unwrap();
        assert_eq!(img.dimensions(), (0, 3));
        assert!(img.is_empty());
        assert_eq!(img.rows().count(), 3);
        assert_eq!(img.into_rows(), vec![Vec::<Pixel>::new(); 3]);
    }

    #[test]
    fn from_pixels_checks_length() {
        let err = ImageBuffer::from_pixels(2, 2, vec![Pixel::default(); 3]).unwrap_err();
        assert_eq!(
            err,
            BufferError::LengthMismatch {
                expected: 4,
                found: 3
            }
        );
        assert!(ImageBuffer::from_pixels(2, 2, vec![Pixel::default(); 4]).is_ok());
    }

    #[test]
    fn from_fn_is_row_major() {
        let img = ImageBuffer::from_fn(3, 2, |row, col| Pixel::new(row as u8, col as u8, 0));
        assert_eq!(img.pixels()[4], Pixel::new(1, 1, 0));
        assert_eq!(img.get(1, 2), Some(Pixel::new(1, 2, 0)));
        assert_eq!(img.get(2, 0), None);
        assert_eq!(img.get(0, 3), None);
    }

    #[test]
    fn for_each_row_mut_skips_zero_width() {
        let mut img = ImageBuffer::filled(0, 4, Pixel::default());
        let mut calls = 0;
        img.for_each_row_mut(|_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn pixel_out_of_bounds_panics() {
        ImageBuffer::filled(2, 2, Pixel::default()).pixel(2, 0);
    }

    #[test]
    fn map_channels_is_per_channel() {
        let p = Pixel::new(1, 2, 3).map_channels(|c| c * 10);
        assert_eq!(p.channels(), [10, 20, 30]);
    }
}
