use std::f64::consts::TAU;

/// Viewpoint rotation in radians, with both angles normalized to `[0, 2π)`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RotationState {
    pitch: f64,
    yaw: f64,
}
impl RotationState {
    /// Constructs a rotation, wrapping each angle into `[0, 2π)`.
    pub fn new(pitch: f64, yaw: f64) -> Self {
        Self {
            pitch: wrap_angle(pitch),
            yaw: wrap_angle(yaw),
        }
    }

    /// Returns the rotation about the horizontal axis, in `[0, 2π)`.
    pub fn pitch(self) -> f64 {
        self.pitch
    }
    /// Returns the rotation about the vertical axis, in `[0, 2π)`.
    pub fn yaw(self) -> f64 {
        self.yaw
    }

    /// Adds a delta to each angle, wrapping back into `[0, 2π)`.
    pub fn rotate_by(&mut self, dpitch: f64, dyaw: f64) {
        self.pitch = wrap_angle(self.pitch + dpitch);
        self.yaw = wrap_angle(self.yaw + dyaw);
    }
}

/// Wraps an angle in radians into `[0, 2π)`.
fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // `rem_euclid` can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU { wrapped - TAU } else { wrapped }
}

/// Converts pointer events over the canvas into viewpoint rotation.
///
/// Horizontal pointer movement turns into yaw and vertical movement into
/// pitch, scaled by a per-pixel sensitivity. Movement only counts while the
/// pointer is held down; a double-press snaps back to the baseline rotation.
#[derive(Debug)]
pub struct DragController {
    rotation: RotationState,
    baseline: RotationState,
    sensitivity: f64,
    dragging: bool,
}
impl DragController {
    /// Constructs a controller resting at `baseline`, rotating `sensitivity`
    /// radians per pixel of pointer movement.
    pub fn new(baseline: RotationState, sensitivity: f64) -> Self {
        Self {
            rotation: baseline,
            baseline,
            sensitivity,
            dragging: false,
        }
    }

    /// Returns the current viewpoint rotation.
    pub fn rotation(&self) -> RotationState {
        self.rotation
    }
    /// Returns whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Handles the pointer being pressed over the canvas.
    pub fn on_press(&mut self) {
        self.dragging = true;
    }
    /// Handles the pointer being released, wherever it ends up.
    pub fn on_release(&mut self) {
        self.dragging = false;
    }
    /// Handles the pointer moving by `(dx, dy)` pixels. Does nothing unless a
    /// drag is in progress.
    pub fn on_move(&mut self, dx: f64, dy: f64) {
        if self.dragging {
            self.rotation
                .rotate_by(dy * self.sensitivity, dx * self.sensitivity);
        }
    }
    /// Handles a double-press: snaps the viewpoint back to the baseline,
    /// whether or not a drag is in progress.
    pub fn on_reset(&mut self) {
        self.rotation = self.baseline;
    }
}
