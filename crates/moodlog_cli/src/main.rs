//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `moodlog_core` linkage without the Flutter runtime.
//! - Print tag colors for labels given on the command line.

use clap::Parser;
use moodlog_core::{Colorizer, HashUnit, Palette, PaletteManifest};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "moodlog_cli", version, about = "Resolve tag label colors")]
struct Args {
    /// JSON palette manifest; defaults to the built-in palette.
    #[arg(long, value_name = "FILE")]
    palette: Option<PathBuf>,

    /// Hash UTF-16 code units instead of code points.
    #[arg(long)]
    utf16: bool,

    /// Labels to color. Prints a linkage probe when empty.
    labels: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let palette = match args.palette.as_deref() {
        Some(path) => match PaletteManifest::load(path).and_then(PaletteManifest::into_palette) {
            Ok(palette) => palette,
            Err(err) => {
                eprintln!("palette error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Palette::default(),
    };

    if args.labels.is_empty() {
        println!("moodlog_core ping={}", moodlog_core::ping());
        println!("moodlog_core version={}", moodlog_core::core_version());
        println!("palette version={}", palette.version());
        return ExitCode::SUCCESS;
    }

    let unit = if args.utf16 {
        HashUnit::Utf16CodeUnit
    } else {
        HashUnit::CodePoint
    };
    let colorizer = Colorizer::new(palette, unit);
    for label in &args.labels {
        let chip = colorizer.chip_for(label);
        println!(
            "{}\t{}\t{}\t{}",
            chip.label, chip.index, chip.color, chip.display
        );
    }
    ExitCode::SUCCESS
}
