//! Fixed-cadence stroke capture.
//!
//! The UI drives an animation loop far faster than points are worth
//! recording. The recorder accepts every tick but appends a point only
//! when at least [`CAPTURE_INTERVAL_MS`] has elapsed since the last
//! capture, so knob wiggling at any frame rate produces a stable
//! point density.

use etcha_pipeline::{Dimensions, StrokePoint};

use crate::knob::Knob;

/// Minimum milliseconds between captured points.
pub const CAPTURE_INTERVAL_MS: u64 = 8;

/// Captures knob-driven cursor positions into a stroke.
#[derive(Debug, Clone)]
pub struct Recorder {
    canvas: Dimensions,
    points: Vec<StrokePoint>,
    last_capture_ms: Option<u64>,
}

impl Recorder {
    /// Create a recorder for the given canvas.
    #[must_use]
    pub const fn new(canvas: Dimensions) -> Self {
        Self {
            canvas,
            points: Vec::new(),
            last_capture_ms: None,
        }
    }

    /// The cursor position for the given knob pair on this canvas.
    #[must_use]
    pub fn cursor(&self, horizontal: &Knob, vertical: &Knob) -> (f64, f64) {
        (
            horizontal.value() * f64::from(self.canvas.width),
            vertical.value() * f64::from(self.canvas.height),
        )
    }

    /// Offer a tick to the recorder. Appends a point (and returns
    /// `true`) when the capture interval has elapsed; otherwise the
    /// tick is ignored. The first tick always captures.
    pub fn sample(&mut self, now_ms: u64, horizontal: &Knob, vertical: &Knob) -> bool {
        let due = self
            .last_capture_ms
            .is_none_or(|last| now_ms.saturating_sub(last) >= CAPTURE_INTERVAL_MS);
        if !due {
            return false;
        }

        let (x, y) = self.cursor(horizontal, vertical);
        self.points.push(StrokePoint::new(x, y, now_ms));
        self.last_capture_ms = Some(now_ms);
        true
    }

    /// The captured points so far.
    #[must_use]
    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }

    /// Erase the captured stroke (the shake-to-erase gesture).
    pub fn clear(&mut self) {
        self.points.clear();
        self.last_capture_ms = None;
    }

    /// Consume the recorder and return the captured points.
    #[must_use]
    pub fn into_points(self) -> Vec<StrokePoint> {
        self.points
    }
}
