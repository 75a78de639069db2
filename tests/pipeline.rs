//! End-to-end pipeline tests through the public library API.
//!
//! Builds real input trees with synthesized images, runs the full
//! scan → convert flow, and checks the written PNGs pixel by pixel.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use tempfile::TempDir;

use inkpress::convert::{ConvertOptions, FileReport, RunSummary, convert_all};
use inkpress::imaging::ResizeMode;
use inkpress::output::format_report;

fn create_jpeg(path: &Path, width: u32, height: u32, color: Rgb<u8>) {
    let img = RgbImage::from_pixel(width, height, color);
    let writer = BufWriter::new(File::create(path).unwrap());
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
}

fn create_png(path: &Path, width: u32, height: u32, color: Rgb<u8>) {
    RgbImage::from_pixel(width, height, color).save(path).unwrap();
}

fn run(inputs: &[PathBuf], options: &ConvertOptions) -> (RunSummary, Vec<FileReport>) {
    let mut reports = Vec::new();
    let summary = convert_all(inputs, options, |r| reports.push(r.clone())).unwrap();
    (summary, reports)
}

#[test]
fn mixed_directory_with_fit_resize() {
    let tmp = TempDir::new().unwrap();
    let content = tmp.path().join("content");
    std::fs::create_dir(&content).unwrap();

    create_jpeg(&content.join("exact.jpg"), 600, 800, Rgb([200, 200, 200]));
    create_png(&content.join("wide.png"), 1200, 400, Rgb([0, 0, 0]));
    std::fs::write(content.join("notes.txt"), "not an image").unwrap();

    let out_dir = tmp.path().join("out");
    let options = ConvertOptions {
        output_dir: Some(out_dir.clone()),
        allow_resize: true,
        resize_mode: ResizeMode::Fit,
        ..Default::default()
    };

    let (summary, reports) = run(&[content], &options);
    assert_eq!(summary, RunSummary { converted: 2, skipped: 0 });
    assert_eq!(reports.len(), 2);

    // The wide image lands as a 600x200 black band centered on white.
    let fitted = image::open(out_dir.join("wide_k4.png")).unwrap().to_luma8();
    assert_eq!(fitted.dimensions(), (600, 800));
    assert_eq!(fitted.get_pixel(300, 100).0[0], 255);
    assert_eq!(fitted.get_pixel(300, 400).0[0], 0);
    assert_eq!(fitted.get_pixel(300, 700).0[0], 255);

    // The exact-size image is untouched geometry-wise.
    let exact = image::open(out_dir.join("exact_k4.png")).unwrap();
    assert_eq!(exact.color(), image::ColorType::L8);
    assert_eq!((exact.width(), exact.height()), (600, 800));
}

#[test]
fn shades16_output_uses_sixteen_levels() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("ramp.png");

    // Horizontal ramp across the full value range.
    let img = RgbImage::from_fn(600, 800, |x, _| {
        let v = (x * 255 / 599) as u8;
        Rgb([v, v, v])
    });
    img.save(&source).unwrap();

    let options = ConvertOptions {
        shades16: true,
        ..Default::default()
    };
    let (summary, _) = run(&[source], &options);
    assert_eq!(summary, RunSummary { converted: 1, skipped: 0 });

    let out = image::open(tmp.path().join("ramp_k4.png")).unwrap().to_luma8();
    let distinct: std::collections::BTreeSet<u8> = out.pixels().map(|p| p.0[0]).collect();
    assert!(distinct.len() <= 16);
    assert!(distinct.iter().all(|v| v % 16 == 0));
}

#[test]
fn autocontrast_spans_full_range() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("flat.png");

    // Low-contrast image: values confined to 100..=150.
    let img = RgbImage::from_fn(600, 800, |x, _| {
        let v = 100 + (x * 50 / 599) as u8;
        Rgb([v, v, v])
    });
    img.save(&source).unwrap();

    let options = ConvertOptions {
        autocontrast: true,
        ..Default::default()
    };
    run(&[source], &options);

    let out = image::open(tmp.path().join("flat_k4.png")).unwrap().to_luma8();
    let lo = out.pixels().map(|p| p.0[0]).min().unwrap();
    let hi = out.pixels().map(|p| p.0[0]).max().unwrap();
    assert_eq!((lo, hi), (0, 255));
}

#[test]
fn status_lines_cover_every_outcome() {
    let tmp = TempDir::new().unwrap();
    create_jpeg(&tmp.path().join("good.jpg"), 600, 800, Rgb([128, 128, 128]));
    create_jpeg(&tmp.path().join("small.jpg"), 320, 240, Rgb([128, 128, 128]));
    std::fs::write(tmp.path().join("broken.png"), b"garbage").unwrap();
    let missing = tmp.path().join("gone.jpg");

    let (summary, reports) = run(
        &[tmp.path().to_path_buf(), missing],
        &ConvertOptions::default(),
    );
    assert_eq!(summary, RunSummary { converted: 1, skipped: 3 });

    let lines: Vec<String> = reports.iter().map(format_report).collect();
    assert!(lines.iter().any(|l| l.starts_with("✔ good.jpg → ")));
    assert!(lines.iter().any(|l| l == "↷ Skipped (wrong size 320x240): small.jpg"));
    assert!(lines.iter().any(|l| l.starts_with("✖ Failed: broken.png (")));
    assert!(lines.iter().any(|l| l.starts_with("✖ Missing: ")));
}
