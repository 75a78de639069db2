//! Tone transformation: grayscale conversion plus optional contrast shaping.
//!
//! The device panel is 8-bit grayscale, so every image ends up as a
//! [`GrayImage`] here. `DynamicImage` enumerates the supported source pixel
//! formats and [`DynamicImage::to_luma8`] is the per-variant conversion path
//! into standard 8-bit luma.
//!
//! Two optional transforms, applied in this order:
//! 1. **autocontrast** — stretch the histogram so the darkest and lightest
//!    values present map to 0 and 255 (no cutoff).
//! 2. **shades16** — posterize to 16 evenly spaced gray levels by keeping the
//!    top 4 bits of each value.

use image::{DynamicImage, GrayImage};

/// Convert `img` to device grayscale, applying the requested transforms.
pub fn to_device_gray(img: &DynamicImage, autocontrast: bool, shades16: bool) -> GrayImage {
    let mut gray = img.to_luma8();
    if autocontrast {
        stretch_contrast(&mut gray);
    }
    if shades16 {
        posterize16(&mut gray);
    }
    gray
}

/// Remap pixel values so the observed min/max span the full 0..=255 range.
/// Flat images (min == max) are left untouched.
fn stretch_contrast(gray: &mut GrayImage) {
    let Some((lo, hi)) = value_range(gray) else {
        return;
    };
    if lo == hi || (lo == 0 && hi == 255) {
        return;
    }

    let range = (hi - lo) as u32;
    let lut: [u8; 256] = std::array::from_fn(|v| {
        let v = v as u32;
        let lo = lo as u32;
        if v <= lo {
            0
        } else if v >= hi as u32 {
            255
        } else {
            (((v - lo) * 255 + range / 2) / range) as u8
        }
    });

    for pixel in gray.pixels_mut() {
        pixel.0[0] = lut[pixel.0[0] as usize];
    }
}

/// Quantize to 16 gray levels: keep the top 4 bits of each value.
fn posterize16(gray: &mut GrayImage) {
    for pixel in gray.pixels_mut() {
        pixel.0[0] &= 0xF0;
    }
}

/// Darkest and lightest values present, or `None` for an empty buffer.
fn value_range(gray: &GrayImage) -> Option<(u8, u8)> {
    let mut values = gray.pixels().map(|p| p.0[0]);
    let first = values.next()?;
    let (lo, hi) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    Some((lo, hi))
}
