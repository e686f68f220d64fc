//! Output filename derivation.
//!
//! When no output path is given the result is written next to the input,
//! with `_output` inserted before the extension:
//! - `photo.ppm` → `photo_output.ppm`
//! - `scans/page.1.ppm` → `scans/page.1_output.ppm`
//! - `raw` → `raw_output`
//!
//! Only the final path component is considered, so dots in directory names
//! never move the suffix.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to the input stem.
pub const OUTPUT_SUFFIX: &str = "_output";

/// Default output path for `input`.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let Some(stem) = input.file_stem() else {
        // `..`, `/` or empty: nothing sensible to rename, append to the whole path.
        let mut name = input.as_os_str().to_os_string();
        name.push(OUTPUT_SUFFIX);
        return PathBuf::from(name);
    };

    let mut name = OsString::from(stem);
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}
