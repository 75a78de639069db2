//! Output filename convention for converted images.
//!
//! Every converted file is named `<input-stem>_k4.png` — the `_k4` suffix
//! marks device-ready output so a second run over the same directory can sit
//! next to the originals without colliding, and the `.png` extension is fixed
//! regardless of the source format. Placement: the output directory when one
//! was given, otherwise alongside the source file.

use std::path::{Path, PathBuf};

/// Suffix appended to every converted file's stem.
const OUTPUT_SUFFIX: &str = "_k4";

/// Compute the output path for `input`.
pub fn output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{stem}{OUTPUT_SUFFIX}.png");

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}
