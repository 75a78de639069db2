//! The per-file conversion pipeline.
//!
//! Stage 2 of the conversion pipeline. Takes the candidate list from
//! [`scan`](crate::scan) and drives each file through a fixed sequence of
//! checks and transforms:
//!
//! ```text
//! MissingCheck → SizeCheck → [Geometry] → Tone → WriteStep
//! ```
//!
//! Every file ends in one of two terminal states, [`FileOutcome::Converted`]
//! or [`FileOutcome::Skipped`]. Failures while decoding, transforming, or
//! writing are isolated to the file that caused them — the run continues and
//! the error detail is carried in [`SkipReason::Failed`]. Only two conditions
//! abort the whole run: an empty candidate list and setup I/O (output
//! directory creation).
//!
//! Processing is strictly sequential; one file is fully read, transformed,
//! and written before the next begins. The only cross-file state is the
//! [`RunSummary`] counters.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{GrayImage, ImageReader};
use thiserror::Error;

use crate::imaging::{self, ResizeMode, TARGET_HEIGHT, TARGET_WIDTH};
use crate::naming;
use crate::scan::{self, ScanError};

/// Fatal, run-level errors. Per-file failures never surface here.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("no image files found in given inputs")]
    NoImagesFound,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Errors that terminate processing of a single file.
#[derive(Error, Debug)]
enum FileError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Image(#[from] image::ImageError),
}

/// Options resolved once from the CLI, read-only for the rest of the run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Output directory; `None` writes alongside each source file.
    pub output_dir: Option<PathBuf>,
    /// Whether wrong-sized images are normalized instead of skipped.
    pub allow_resize: bool,
    /// Geometry strategy, consulted only when `allow_resize` is set.
    pub resize_mode: ResizeMode,
    pub autocontrast: bool,
    pub shades16: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_dir: None,
            allow_resize: false,
            resize_mode: ResizeMode::Fit,
            autocontrast: false,
            shades16: false,
        }
    }
}

/// Why a file was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The path does not exist on the file system.
    Missing,
    /// Dimensions differ from the target and resizing is disallowed.
    WrongSize { width: u32, height: u32 },
    /// Decode, transform, or write failed; carries the error detail.
    Failed(String),
}

/// Terminal state for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Converted { output: PathBuf },
    Skipped(SkipReason),
}

/// One processed input and where it ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub source: PathBuf,
    pub outcome: FileOutcome,
}

/// Totals across a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub skipped: usize,
}

/// Convert every candidate expanded from `inputs`, reporting each file to
/// `on_report` as it finishes.
///
/// Fails before any per-file processing when the expansion yields no
/// candidates.
pub fn convert_all(
    inputs: &[PathBuf],
    options: &ConvertOptions,
    mut on_report: impl FnMut(&FileReport),
) -> Result<RunSummary, ConvertError> {
    let images = scan::collect_images(inputs)?;
    if images.is_empty() {
        return Err(ConvertError::NoImagesFound);
    }

    if let Some(dir) = &options.output_dir {
        fs::create_dir_all(dir)?;
    }

    let mut summary = RunSummary::default();
    for source in images {
        let outcome = convert_one(&source, options);
        match outcome {
            FileOutcome::Converted { .. } => summary.converted += 1,
            FileOutcome::Skipped(_) => summary.skipped += 1,
        }
        on_report(&FileReport { source, outcome });
    }

    Ok(summary)
}

fn convert_one(source: &Path, options: &ConvertOptions) -> FileOutcome {
    if !source.exists() {
        return FileOutcome::Skipped(SkipReason::Missing);
    }

    let output = naming::output_path(source, options.output_dir.as_deref());
    process_file(source, &output, options)
        .unwrap_or_else(|e| FileOutcome::Skipped(SkipReason::Failed(e.to_string())))
}

/// Decode → size check → geometry → tone → encode, for one file.
///
/// The format is sniffed from the file content, so explicit files with a
/// misleading extension still decode.
fn process_file(
    source: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<FileOutcome, FileError> {
    let img = ImageReader::open(source)?.with_guessed_format()?.decode()?;

    let img = if (img.width(), img.height()) != (TARGET_WIDTH, TARGET_HEIGHT) {
        if !options.allow_resize {
            return Ok(FileOutcome::Skipped(SkipReason::WrongSize {
                width: img.width(),
                height: img.height(),
            }));
        }
        imaging::normalize(&img, options.resize_mode)
    } else {
        img
    };

    let gray = imaging::to_device_gray(&img, options.autocontrast, options.shades16);
    write_png(&gray, output)?;

    Ok(FileOutcome::Converted {
        output: output.to_path_buf(),
    })
}

/// Encode as PNG at the strongest compression level. The writer is flushed
/// explicitly so encode errors surface here, not on drop.
fn write_png(gray: &GrayImage, path: &Path) -> Result<(), FileError> {
    let mut writer = BufWriter::new(File::create(path)?);
    gray.write_with_encoder(PngEncoder::new_with_quality(
        &mut writer,
        CompressionType::Best,
        FilterType::Adaptive,
    ))?;
    writer.flush()?;
    Ok(())
}
