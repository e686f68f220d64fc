//! # pixmap-filter
//!
//! A command-line filter pipeline for PPM pixmap images. An image is decoded
//! into memory, pushed through an ordered list of filters, and written back
//! out as a PPM.
//!
//! # Architecture
//!
//! ```text
//! bytes ── decode ──▶ ImageBuffer ── filter 1 ── … ── filter N ──▶ ImageBuffer ── encode ──▶ bytes
//! ```
//!
//! The filters are pure functions from image to image. Everything that can
//! fail (reading files, parsing PPM, loading config) happens at the edges,
//! so the middle of the pipeline has no error paths at all.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Pixel grid, the six filters, step dispatch, PPM codec |
//! | [`process`] | Read → filter → write for one file, with progress events |
//! | [`config`] | `filters.toml` loading, validation, command-line overrides |
//! | [`naming`] | Default output filename (`photo.ppm` → `photo_output.ppm`) |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Design Decisions
//!
//! ## Truncating Arithmetic
//!
//! Grayscale and blur use truncating integer means, and contrast truncates
//! toward zero after scaling. Nothing is rounded. Output bytes therefore
//! match the long-standing behavior of the tool exactly.
//!
//! ## Filters Own Their Input
//!
//! Every filter takes the [`ImageBuffer`](imaging::ImageBuffer) by value and
//! returns one. Per-pixel filters rewrite the buffer they were given; blur
//! and downsample allocate a new one. Blur reads only from its untouched
//! input, so results never depend on scan order.
//!
//! ## Edges Are Left Alone
//!
//! The box blur only recomputes pixels whose whole window lies inside the
//! image. Border pixels are copied. Images smaller than the window come back
//! unchanged.
//!
//! ## Downsampling Is Checked By The Caller
//!
//! [`imaging::downsample`] never fails, but on a single row or column it has
//! nothing useful to do. [`process::run_steps`] checks
//! [`imaging::can_downsample`] first and reports the step as skipped instead.

pub mod config;
pub mod imaging;
pub mod logging;
pub mod naming;
pub mod output;
pub mod process;

#[cfg(test)]
pub(crate) mod test_helpers;
