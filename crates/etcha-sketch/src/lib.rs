//! etcha-sketch: knob state and live stroke capture.
//!
//! The drawing surface is driven by two independent rotary knobs, one
//! per axis, each a bounded value in [0, 1]. A fixed-cadence recorder
//! samples the resulting cursor position into timestamped stroke
//! points, fully decoupled from the image pipeline; the caller
//! concatenates the two point streams before persistence.
//!
//! Knob drag physics (touch angles, momentum, spring animation) are a
//! UI concern and live with the UI; this crate models only the state
//! the UI observes.

pub mod capture;
pub mod knob;

pub use capture::{CAPTURE_INTERVAL_MS, Recorder};
pub use knob::{KEYBOARD_STEP, Knob};
