//! Input collection: expanding CLI arguments into image file candidates.
//!
//! Stage 1 of the conversion pipeline. Takes the raw path arguments from the
//! command line and produces an ordered, deduplicated list of candidate image
//! files for the [`convert`](crate::convert) driver to process.
//!
//! ## Expansion Rules
//!
//! - A **directory** argument contributes its immediate file children whose
//!   extension is on the image allow-list (case-insensitive). Subdirectories
//!   are not descended into.
//! - Any **other** argument is taken as a candidate file as-is, regardless of
//!   extension. Existence is not checked here — the driver reports missing
//!   files per-file so one bad argument never hides the rest of the batch.
//!
//! Candidates keep their first-seen order across the whole argument list and
//! are deduplicated by canonical absolute path, so a file reachable both
//! directly and via its parent directory converts exactly once.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extensions eligible for directory expansion.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "webp", "tif", "tiff"];

/// Expand `inputs` into a deduplicated, order-preserving list of candidate
/// image files.
///
/// Only directory listing failures are errors; unknown or missing paths pass
/// through untouched.
pub fn collect_images(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, ScanError> {
    let mut candidates = Vec::new();

    for input in inputs {
        if input.is_dir() {
            candidates.extend(image_children(input)?);
        } else {
            candidates.push(input.clone());
        }
    }

    Ok(dedup_first_seen(candidates))
}

/// Immediate file children of `dir` with an allow-listed extension, sorted
/// for a deterministic sequence across runs.
fn image_children(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut children: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_image(p))
        .collect();

    children.sort();
    Ok(children)
}

fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// Deduplicate by canonical absolute path, keeping the first occurrence.
fn dedup_first_seen(candidates: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        if seen.insert(resolution_key(&candidate)) {
            out.push(candidate);
        }
    }

    out
}

/// Canonical form used only as the dedup key. Candidates that do not exist
/// (yet) cannot be canonicalized; their absolute form keeps them distinct
/// without requiring existence.
fn resolution_key(path: &Path) -> PathBuf {
    fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
