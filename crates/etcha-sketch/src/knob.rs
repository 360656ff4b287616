//! Bounded rotary knob state.
//!
//! A knob holds a single value in [0, 1]; one full rotation of the
//! physical control spans the whole range. All mutation clamps, so a
//! knob can be cranked past either end without wrapping or escaping
//! its bounds.

use serde::{Deserialize, Serialize};

/// Value change for one keyboard increment/decrement press.
pub const KEYBOARD_STEP: f64 = 0.01;

/// A single rotary knob with its value bounded to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Knob {
    value: f64,
}

impl Knob {
    /// Create a knob at the given position, clamped to [0, 1].
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
        }
    }

    /// Create a knob centered at 0.5 (the cursor rest position).
    #[must_use]
    pub fn centered() -> Self {
        Self::new(0.5)
    }

    /// The current value in [0, 1].
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Set the value directly, clamped to [0, 1].
    pub fn set(&mut self, value: f64) {
        self.value = value.clamp(0.0, 1.0);
    }

    /// Rotate by a fraction of a full turn (positive = clockwise),
    /// clamping at the ends.
    pub fn turn(&mut self, delta: f64) {
        self.set(self.value + delta);
    }

    /// One keyboard increment.
    pub fn step_up(&mut self) {
        self.turn(KEYBOARD_STEP);
    }

    /// One keyboard decrement.
    pub fn step_down(&mut self) {
        self.turn(-KEYBOARD_STEP);
    }
}

impl Default for Knob {
    fn default() -> Self {
        Self::centered()
    }
}
