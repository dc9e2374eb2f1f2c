use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::rotation::RotationState;

/// User-tunable view behavior.
///
/// Every field has a default matching the stock viewer, so a preferences
/// file only needs to name the fields it changes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewPreferences {
    /// Milliseconds between ticks of the redraw loop. Default: 125.
    pub tick_ms: u64,
    /// Radians of viewpoint rotation per pixel of pointer movement.
    /// Default: 0.01.
    pub drag_sensitivity: f64,
    /// Pitch the viewpoint starts at and returns to on reset, in radians.
    /// Default: -0.15.
    pub baseline_pitch: f64,
    /// Yaw the viewpoint starts at and returns to on reset, in radians.
    /// Default: -0.15.
    pub baseline_yaw: f64,
    /// Number of random moves in a scramble. Default: 50.
    pub scramble_moves: usize,
}

impl Default for ViewPreferences {
    fn default() -> Self {
        Self {
            tick_ms: 125,
            drag_sensitivity: 0.01,
            baseline_pitch: -0.15,
            baseline_yaw: -0.15,
            scramble_moves: 50,
        }
    }
}

impl ViewPreferences {
    /// Returns the tick period.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Returns the baseline rotation, wrapped into `[0, 2π)`.
    pub fn baseline(&self) -> RotationState {
        RotationState::new(self.baseline_pitch, self.baseline_yaw)
    }
}
