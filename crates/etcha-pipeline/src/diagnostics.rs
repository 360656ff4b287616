//! Pipeline diagnostics: timing and counts for each stage.
//!
//! Permanent instrumentation for threshold tuning and parameter
//! experimentation. [`crate::process_with_diagnostics`] collects these
//! alongside the stroke result; the bench CLI renders them as a
//! human-readable table or JSON.
//!
//! Durations are serialized as fractional seconds (`f64`) for JSON
//! compatibility, since `std::time::Duration` does not implement serde
//! traits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Serde support for `std::time::Duration` as fractional seconds.
mod duration_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize a `Duration` as fractional seconds (`f64`).
    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs_f64().serialize(serializer)
    }

    /// Deserialize a `Duration` from fractional seconds (`f64`).
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            serde::de::Error::custom(
                "duration seconds must be finite, non-negative, and representable as a Duration",
            )
        })
    }
}

/// Diagnostics collected from a single pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineDiagnostics {
    /// Stage 0: letterboxing into the canvas.
    pub letterbox: StageDiagnostics,
    /// Stage 1: intensity-map reduction.
    pub grayscale: StageDiagnostics,
    /// Stage 2: Sobel gradient computation.
    pub gradient: StageDiagnostics,
    /// Stage 3: non-maximum suppression.
    pub suppression: StageDiagnostics,
    /// Stage 4: hysteresis filtering.
    pub hysteresis: StageDiagnostics,
    /// Stage 5: adaptive spatial sampling.
    pub sampling: StageDiagnostics,
    /// Stage 6: stroke path construction.
    pub stroke: StageDiagnostics,
    /// Total wall-clock duration of the entire pipeline (seconds).
    #[serde(with = "duration_serde")]
    pub total_duration: Duration,
    /// Summary counts across all stages.
    pub summary: PipelineSummary,
}

/// Diagnostics for a single pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDiagnostics {
    /// Wall-clock duration of this stage (seconds).
    #[serde(with = "duration_serde")]
    pub duration: Duration,
    /// Stage-specific metrics.
    pub metrics: StageMetrics,
}

/// Stage-specific metrics that vary by pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StageMetrics {
    /// Letterboxing metrics.
    Letterbox {
        /// Source image width in pixels.
        source_width: u32,
        /// Source image height in pixels.
        source_height: u32,
        /// Canvas width in pixels.
        canvas_width: u32,
        /// Canvas height in pixels.
        canvas_height: u32,
    },
    /// Intensity-map reduction metrics.
    Grayscale {
        /// Total pixel count of the intensity map.
        pixel_count: u64,
    },
    /// Sobel gradient metrics.
    Gradient {
        /// Number of interior pixels sampled.
        sample_count: usize,
    },
    /// Non-maximum suppression metrics.
    Suppression {
        /// Dense samples in.
        samples_in: usize,
        /// Thinned edges out.
        edges_out: usize,
    },
    /// Hysteresis filtering metrics.
    Hysteresis {
        /// Derived high threshold.
        high_threshold: f32,
        /// Derived low threshold.
        low_threshold: f32,
        /// Edges retained.
        edges_out: usize,
    },
    /// Adaptive sampling metrics.
    Sampling {
        /// Whether the grid reduction actually ran (input exceeded the
        /// target slack).
        applied: bool,
        /// Edges in.
        edges_in: usize,
        /// Edges out.
        edges_out: usize,
    },
    /// Stroke construction metrics.
    Stroke {
        /// Emitted stroke points.
        point_count: usize,
        /// Number of far-jump segment restarts.
        jump_count: usize,
    },
}

/// High-level summary counts for the entire pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Edges surviving hysteresis.
    pub edge_count: usize,
    /// Points in the final stroke.
    pub final_point_count: usize,
}

impl PipelineDiagnostics {
    /// Format diagnostics as a human-readable report.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Pipeline Diagnostics Report\n{}", "=".repeat(60)));
        lines.push(format!(
            "Canvas: {}x{}",
            self.summary.canvas_width, self.summary.canvas_height,
        ));
        lines.push(format!(
            "Total duration: {:.3}ms",
            duration_ms(self.total_duration),
        ));
        lines.push(String::new());

        lines.push(format!(
            "{:<18} {:>10} {:>10}  {}",
            "Stage", "Duration", "% Total", "Details"
        ));
        lines.push("-".repeat(72));

        let total_ms = duration_ms(self.total_duration);
        let stages: [(&str, &StageDiagnostics); 7] = [
            ("Letterbox", &self.letterbox),
            ("Grayscale", &self.grayscale),
            ("Gradient", &self.gradient),
            ("Suppression", &self.suppression),
            ("Hysteresis", &self.hysteresis),
            ("Sampling", &self.sampling),
            ("Stroke", &self.stroke),
        ];

        for (name, diag) in &stages {
            let ms = duration_ms(diag.duration);
            let pct = if total_ms > 0.0 {
                ms / total_ms * 100.0
            } else {
                0.0
            };
            let details = format_metrics(&diag.metrics);
            lines.push(format!("{name:<18} {ms:>8.3}ms {pct:>9.1}%  {details}"));
        }

        lines.push(String::new());
        lines.push(format!(
            "Edges: {}  |  Final stroke points: {}",
            self.summary.edge_count, self.summary.final_point_count,
        ));

        lines.join("\n")
    }
}

/// Convert a `Duration` to milliseconds as `f64`.
fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Format stage metrics into a compact detail string.
fn format_metrics(metrics: &StageMetrics) -> String {
    match metrics {
        StageMetrics::Letterbox {
            source_width,
            source_height,
            canvas_width,
            canvas_height,
        } => format!("{source_width}x{source_height} -> {canvas_width}x{canvas_height}"),
        StageMetrics::Grayscale { pixel_count } => format!("{pixel_count} px"),
        StageMetrics::Gradient { sample_count } => format!("{sample_count} samples"),
        StageMetrics::Suppression {
            samples_in,
            edges_out,
        } => format!("{samples_in} -> {edges_out}"),
        StageMetrics::Hysteresis {
            high_threshold,
            low_threshold,
            edges_out,
        } => format!("high={high_threshold:.1} low={low_threshold:.1} edges={edges_out}"),
        StageMetrics::Sampling {
            applied,
            edges_in,
            edges_out,
        } => {
            if *applied {
                format!("{edges_in} -> {edges_out}")
            } else {
                format!("pass-through ({edges_in})")
            }
        }
        StageMetrics::Stroke {
            point_count,
            jump_count,
        } => format!("{point_count} pts, {jump_count} jumps"),
    }
}
