//! etcha-pipeline: Pure image-to-stroke path synthesis (sans-IO).
//!
//! Converts raster images into a single replayable pen stroke through:
//! letterbox -> intensity map -> Sobel gradients -> non-maximum
//! suppression -> hysteresis filtering -> adaptive sampling ->
//! nearest-neighbor path construction.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and decoded rasters and returns structured data. Upload
//! handling, persistence, and live knob capture live in sibling crates.
//!
//! The pipeline is synchronous, single-threaded, and stateless across
//! invocations: nothing computed for one image outlives the call.

pub mod diagnostics;
pub mod gradient;
pub mod grayscale;
pub mod hysteresis;
pub mod letterbox;
pub mod sample;
pub mod simplify;
pub mod stroke;
pub mod suppress;
pub mod types;

use std::time::Instant;

use image::DynamicImage;

use crate::diagnostics::{PipelineDiagnostics, PipelineSummary, StageDiagnostics, StageMetrics};
pub use crate::simplify::simplify;
pub use crate::types::{
    Dimensions, EdgePixel, EdgePoint, GradientSample, PipelineConfig, PipelineError, Stroke,
    StrokePoint,
};

/// Run the full image-to-stroke pipeline on raw image bytes.
///
/// Decodes the bytes (PNG, JPEG, BMP, WebP), letterboxes the image into
/// the target canvas, and synthesizes an ordered, timestamped stroke
/// capped at `config.max_points`. `start_ms` becomes the first point's
/// timestamp; subsequent points step by `config.timestamp_step_ms`.
///
/// A blank or low-contrast image legitimately produces an **empty**
/// stroke -- that is a valid outcome, not an error.
///
/// # Pipeline steps
///
/// 1. Decode image bytes
/// 2. Letterbox into the target canvas
/// 3. Intensity-map reduction (mean of R, G, B)
/// 4. Sobel gradient computation over interior pixels
/// 5. Non-maximum suppression along the gradient direction
/// 6. Dual-threshold hysteresis filtering
/// 7. Adaptive grid sampling toward the point cap
/// 8. Nearest-neighbor stroke construction with synthetic timestamps
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `image_bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the image cannot be
/// decoded; the pipeline never runs on partially decoded data.
/// Returns [`PipelineError::InvalidConfig`] for a zero-sized canvas or
/// a zero point cap.
pub fn process(
    image_bytes: &[u8],
    canvas: Dimensions,
    config: &PipelineConfig,
    start_ms: u64,
) -> Result<Stroke, PipelineError> {
    let image = grayscale::decode(image_bytes)?;
    process_image(&image, canvas, config, start_ms)
}

/// Run the pipeline on an already-decoded image.
///
/// Same behavior as [`process`] minus the decode step.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidConfig`] for a zero-sized canvas or
/// a zero point cap.
pub fn process_image(
    image: &DynamicImage,
    canvas: Dimensions,
    config: &PipelineConfig,
    start_ms: u64,
) -> Result<Stroke, PipelineError> {
    validate(canvas, config)?;

    let composed = letterbox::letterbox(image, canvas);
    let intensity = grayscale::intensity_map(&composed);
    let gradients = gradient::sobel_gradients(&intensity);
    let thinned = suppress::non_maximum_suppression(&gradients);
    let filtered = hysteresis::hysteresis_filter(&thinned);
    let sampled = sample::adaptive_sample(&filtered, canvas, config.cell_size, config.max_points);
    Ok(stroke::build_stroke(&sampled, config, start_ms))
}

/// Run the pipeline on an already-decoded image, collecting per-stage
/// diagnostics alongside the stroke.
///
/// # Errors
///
/// Same conditions as [`process_image`].
pub fn process_with_diagnostics(
    image: &DynamicImage,
    canvas: Dimensions,
    config: &PipelineConfig,
    start_ms: u64,
) -> Result<(Stroke, PipelineDiagnostics), PipelineError> {
    validate(canvas, config)?;
    let total_start = Instant::now();

    let stage_start = Instant::now();
    let composed = letterbox::letterbox(image, canvas);
    let letterbox_diag = StageDiagnostics {
        duration: stage_start.elapsed(),
        metrics: StageMetrics::Letterbox {
            source_width: image.width(),
            source_height: image.height(),
            canvas_width: canvas.width,
            canvas_height: canvas.height,
        },
    };

    let stage_start = Instant::now();
    let intensity = grayscale::intensity_map(&composed);
    let grayscale_diag = StageDiagnostics {
        duration: stage_start.elapsed(),
        metrics: StageMetrics::Grayscale {
            pixel_count: u64::from(intensity.width()) * u64::from(intensity.height()),
        },
    };

    let stage_start = Instant::now();
    let gradients = gradient::sobel_gradients(&intensity);
    let gradient_diag = StageDiagnostics {
        duration: stage_start.elapsed(),
        metrics: StageMetrics::Gradient {
            sample_count: gradients.len(),
        },
    };

    let stage_start = Instant::now();
    let thinned = suppress::non_maximum_suppression(&gradients);
    let suppression_diag = StageDiagnostics {
        duration: stage_start.elapsed(),
        metrics: StageMetrics::Suppression {
            samples_in: gradients.len(),
            edges_out: thinned.len(),
        },
    };

    let stage_start = Instant::now();
    let thresholds = hysteresis::derive_thresholds(&thinned);
    let filtered = hysteresis::hysteresis_filter(&thinned);
    let hysteresis_diag = StageDiagnostics {
        duration: stage_start.elapsed(),
        metrics: StageMetrics::Hysteresis {
            high_threshold: thresholds.high,
            low_threshold: thresholds.low,
            edges_out: filtered.len(),
        },
    };

    let stage_start = Instant::now();
    let sampled = sample::adaptive_sample(&filtered, canvas, config.cell_size, config.max_points);
    let sampling_diag = StageDiagnostics {
        duration: stage_start.elapsed(),
        metrics: StageMetrics::Sampling {
            applied: sampled.len() != filtered.len(),
            edges_in: filtered.len(),
            edges_out: sampled.len(),
        },
    };

    let stage_start = Instant::now();
    let result = stroke::build_stroke(&sampled, config, start_ms);
    let stroke_diag = StageDiagnostics {
        duration: stage_start.elapsed(),
        metrics: StageMetrics::Stroke {
            point_count: result.len(),
            jump_count: count_jumps(&result, config.jump_threshold),
        },
    };

    let diagnostics = PipelineDiagnostics {
        summary: PipelineSummary {
            canvas_width: canvas.width,
            canvas_height: canvas.height,
            edge_count: filtered.len(),
            final_point_count: result.len(),
        },
        letterbox: letterbox_diag,
        grayscale: grayscale_diag,
        gradient: gradient_diag,
        suppression: suppression_diag,
        hysteresis: hysteresis_diag,
        sampling: sampling_diag,
        stroke: stroke_diag,
        total_duration: total_start.elapsed(),
    };

    Ok((result, diagnostics))
}

/// Validate canvas dimensions and configuration before running.
fn validate(canvas: Dimensions, config: &PipelineConfig) -> Result<(), PipelineError> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(PipelineError::InvalidConfig(format!(
            "canvas dimensions must be nonzero, got {}x{}",
            canvas.width, canvas.height,
        )));
    }
    if config.max_points == 0 {
        return Err(PipelineError::InvalidConfig(
            "max_points must be nonzero".to_string(),
        ));
    }
    Ok(())
}

/// Count consecutive stroke segments longer than the jump threshold --
/// the visible travel lines between disconnected regions.
fn count_jumps(stroke: &Stroke, jump_threshold: f64) -> usize {
    stroke
        .points()
        .windows(2)
        .filter(|pair| {
            let dx = pair[1].x - pair[0].x;
            let dy = pair[1].y - pair[0].y;
            dx.hypot(dy) > jump_threshold
        })
        .count()
}
