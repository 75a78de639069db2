//! Pixel-level operations — pure Rust via the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Fit** (contain + letterbox) | `DynamicImage::resize` (Lanczos3) + `imageops::overlay` |
//! | **Crop** (fill + center crop) | `DynamicImage::resize_to_fill` (Lanczos3) |
//! | **Pad** (center, no scaling) | `imageops::overlay` on a white canvas |
//! | **Grayscale** | `DynamicImage::to_luma8` |
//! | **Autocontrast / posterize** | LUT remap / bit mask over `GrayImage` |
//!
//! The module is split into:
//! - **Geometry**: bringing any image to exactly the device resolution
//! - **Tone**: grayscale conversion plus the optional contrast transforms
//!
//! All functions are pure pixel computation; nothing here touches the
//! file system.

pub mod geometry;
pub mod tone;

pub use geometry::{InvalidMode, ResizeMode, normalize};
pub use tone::to_device_gray;

/// Kindle 4 panel width in pixels.
pub const TARGET_WIDTH: u32 = 600;

/// Kindle 4 panel height in pixels.
pub const TARGET_HEIGHT: u32 = 800;
