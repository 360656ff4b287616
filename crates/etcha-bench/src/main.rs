//! etcha-bench: CLI tool for pipeline parameter experimentation.
//!
//! Runs the image-to-stroke pipeline on a given image file with
//! configurable parameters, printing per-stage diagnostics. Useful for:
//!
//! - Tuning the point cap, jump threshold, and sampler cell size
//! - Measuring per-stage durations to identify bottlenecks
//! - Inspecting how parameter changes affect edge and point counts
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin etcha-bench -- [OPTIONS] <IMAGE_PATH>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use etcha_pipeline::{Dimensions, PipelineConfig};

/// Pipeline parameter experimentation and diagnostics for etcha.
///
/// Runs the image-to-stroke pipeline on a given image with configurable
/// parameters and prints per-stage timing and count diagnostics.
#[derive(Parser)]
#[command(name = "etcha-bench", version)]
struct Cli {
    /// Path to the input image (PNG, JPEG, BMP, WebP).
    image_path: PathBuf,

    /// Target canvas width in pixels.
    #[arg(long, default_value_t = 600)]
    canvas_width: u32,

    /// Target canvas height in pixels.
    #[arg(long, default_value_t = 400)]
    canvas_height: u32,

    /// Maximum stroke points to emit.
    #[arg(long, default_value_t = PipelineConfig::DEFAULT_MAX_POINTS)]
    max_points: usize,

    /// Far-jump threshold in pixels.
    #[arg(long, default_value_t = PipelineConfig::DEFAULT_JUMP_THRESHOLD)]
    jump_threshold: f64,

    /// Adaptive sampler grid cell size in pixels.
    #[arg(long, default_value_t = PipelineConfig::DEFAULT_CELL_SIZE)]
    cell_size: u32,

    /// Synthetic timestamp spacing in milliseconds.
    #[arg(long, default_value_t = PipelineConfig::DEFAULT_TIMESTAMP_STEP_MS)]
    timestamp_step_ms: u64,

    /// Output diagnostics as JSON instead of a human-readable report.
    #[arg(long)]
    json: bool,

    /// Write the generated stroke points to a JSON file.
    #[arg(long)]
    points_out: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let bytes = std::fs::read(&cli.image_path)
        .map_err(|e| format!("cannot read {}: {e}", cli.image_path.display()))?;

    let image = etcha_pipeline::grayscale::decode(&bytes).map_err(|e| e.to_string())?;

    let canvas = Dimensions {
        width: cli.canvas_width,
        height: cli.canvas_height,
    };
    let config = PipelineConfig {
        max_points: cli.max_points,
        jump_threshold: cli.jump_threshold,
        cell_size: cli.cell_size,
        timestamp_step_ms: cli.timestamp_step_ms,
    };

    let start_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));

    let (stroke, diagnostics) =
        etcha_pipeline::process_with_diagnostics(&image, canvas, &config, start_ms)
            .map_err(|e| e.to_string())?;

    if cli.json {
        let json = serde_json::to_string_pretty(&diagnostics).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        println!("{}", diagnostics.report());
    }

    if let Some(path) = &cli.points_out {
        let json = serde_json::to_string(stroke.points()).map_err(|e| e.to_string())?;
        std::fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
        println!("Stroke written to {} ({} points)", path.display(), stroke.len());
    }

    Ok(())
}
