//! Geometry normalization: bring any image to exactly the device resolution.
//!
//! Three strategies, selected by [`ResizeMode`]:
//!
//! - **fit** — scale to fit entirely within 600×800 (aspect preserved),
//!   letterboxed on a white canvas.
//! - **crop** — scale to fill 600×800 and center-crop the excess.
//! - **pad** — no scaling; center the original on a white 600×800 canvas.
//!
//! Both canvas modes place content with floor-division offsets, so when the
//! leftover space is odd the extra pixel of padding lands on the right/bottom
//! edge. A `pad` source larger than the canvas is clipped by the canvas
//! bounds rather than rejected.

use std::fmt;
use std::str::FromStr;

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use thiserror::Error;

use super::{TARGET_HEIGHT, TARGET_WIDTH};

/// Raised when a resize-mode string is not one of `fit`, `crop`, `pad`.
///
/// Unreachable through the CLI (clap parses `--resize-mode` through this same
/// guard and rejects bad values up front) but kept for library callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown resize mode: {0} (expected fit, crop, or pad)")]
pub struct InvalidMode(pub String);

/// Strategy for reaching the device resolution when the source differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode {
    Fit,
    Crop,
    Pad,
}

impl FromStr for ResizeMode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fit" => Ok(ResizeMode::Fit),
            "crop" => Ok(ResizeMode::Crop),
            "pad" => Ok(ResizeMode::Pad),
            other => Err(InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResizeMode::Fit => "fit",
            ResizeMode::Crop => "crop",
            ResizeMode::Pad => "pad",
        };
        f.write_str(name)
    }
}

/// Produce an image of exactly 600×800 from `img` using `mode`.
pub fn normalize(img: &DynamicImage, mode: ResizeMode) -> DynamicImage {
    match mode {
        ResizeMode::Fit => fit(img),
        ResizeMode::Crop => crop(img),
        ResizeMode::Pad => pad(img),
    }
}

/// Scale to fit within the target box (aspect preserved, Lanczos3), then
/// letterbox on white.
fn fit(img: &DynamicImage) -> DynamicImage {
    let scaled = img.resize(TARGET_WIDTH, TARGET_HEIGHT, FilterType::Lanczos3);
    compose_on_white(&scaled)
}

/// Scale to fill the target box and center-crop the overflow. Full bleed, so
/// no padding color is involved.
fn crop(img: &DynamicImage) -> DynamicImage {
    img.resize_to_fill(TARGET_WIDTH, TARGET_HEIGHT, FilterType::Lanczos3)
}

/// Center the original on a white target-size canvas without scaling.
/// Sources larger than the canvas overflow and are clipped.
fn pad(img: &DynamicImage) -> DynamicImage {
    compose_on_white(img)
}

fn compose_on_white(img: &DynamicImage) -> DynamicImage {
    let mut canvas =
        RgbaImage::from_pixel(TARGET_WIDTH, TARGET_HEIGHT, Rgba([255, 255, 255, 255]));
    let x = center_offset(TARGET_WIDTH as i64, img.width() as i64);
    let y = center_offset(TARGET_HEIGHT as i64, img.height() as i64);
    imageops::overlay(&mut canvas, &img.to_rgba8(), x, y);
    DynamicImage::ImageRgba8(canvas)
}

/// Offset that centers `inner` within `outer`, flooring so an odd remainder
/// pushes the extra pixel to the right/bottom. Negative when `inner`
/// overflows `outer`.
fn center_offset(outer: i64, inner: i64) -> i64 {
    (outer - inner).div_euclid(2)
}
