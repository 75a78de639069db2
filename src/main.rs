use clap::Parser;
use inkpress::convert::{self, ConvertOptions};
use inkpress::imaging::ResizeMode;
use inkpress::output;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inkpress")]
#[command(version)]
#[command(about = "Convert images for the Kindle 4 e-reader (600x800, 8-bit grayscale PNG)")]
struct Cli {
    /// One or more image files or directories
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory (default: alongside each input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Allow resizing/cropping/padding if input isn't 600x800 (otherwise skip)
    #[arg(long)]
    allow_resize: bool,

    /// When resizing is allowed: how to reach 600x800 (fit, crop, or pad)
    #[arg(long, default_value = "fit")]
    resize_mode: ResizeMode,

    /// Apply autocontrast after grayscale conversion
    #[arg(long)]
    autocontrast: bool,

    /// Reduce to 16 gray shades
    #[arg(long)]
    shades16: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let options = ConvertOptions {
        output_dir: cli.output,
        allow_resize: cli.allow_resize,
        resize_mode: cli.resize_mode,
        autocontrast: cli.autocontrast,
        shades16: cli.shades16,
    };

    let summary = convert::convert_all(&cli.inputs, &options, output::print_report)?;
    output::print_summary(&summary);

    Ok(())
}
