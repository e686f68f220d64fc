//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Apply
//!
//! ```text
//! Input: photo.ppm (640x480)
//! 001 grayscale → 640x480
//! 002 downsample → 320x240
//! 003 blur → 320x240
//! 004 downsample: skipped (image too small to compress further)
//! Image processing complete. Output saved to photo_output.ppm
//! ```
//!
//! ## Info
//!
//! ```text
//! photo.ppm: 640x480 PPM
//! ```
//!
//! # Architecture
//!
//! Each report has a `format_*` function (returns `Vec<String>` or `String`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::process::{ProcessEvent, ProcessSummary};
use serde::Serialize;
use std::path::Path;

/// Format a 1-based step index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn format_dims(width: usize, height: usize) -> String {
    format!("{}x{}", width, height)
}

/// Format a single progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::Decoded {
            path,
            width,
            height,
        } => vec![format!(
            "Input: {} ({})",
            path.display(),
            format_dims(*width, *height)
        )],
        ProcessEvent::StepApplied {
            index,
            filter,
            width,
            height,
        } => vec![format!(
            "{} {} → {}",
            format_index(*index),
            filter,
            format_dims(*width, *height)
        )],
        ProcessEvent::StepDeclined {
            index,
            filter,
            reason,
        } => vec![format!(
            "{} {}: skipped ({})",
            format_index(*index),
            filter,
            reason
        )],
    }
}

/// Closing lines of an `apply` run.
pub fn format_summary(summary: &ProcessSummary) -> Vec<String> {
    let mut lines = Vec::new();
    if summary.declined > 0 {
        lines.push(format!(
            "{} step(s) applied, {} skipped",
            summary.applied, summary.declined
        ));
    }
    lines.push(format!(
        "Image processing complete. Output saved to {}",
        summary.output.display()
    ));
    lines
}

pub fn print_summary(summary: &ProcessSummary) {
    for line in format_summary(summary) {
        println!("{}", line);
    }
}

/// Dimensions report for the `info` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageInfo {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    pub fn new(path: &Path, (width, height): (u32, u32)) -> Self {
        Self {
            path: path.display().to_string(),
            width,
            height,
        }
    }
}

pub fn format_info(info: &ImageInfo) -> String {
    format!("{}: {}x{} PPM", info.path, info.width, info.height)
}

pub fn print_info(info: &ImageInfo, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(info)?);
    } else {
        println!("{}", format_info(info));
    }
    Ok(())
}
