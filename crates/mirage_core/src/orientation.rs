//! # Cloud Orientation
//!
//! Whole-cloud rotation scalars, replaced as one value per landmark frame.
//!
//! The orientation is a render-time transform: it composes with the
//! integrator's output instead of mutating particle positions. The wrist
//! landmark steers it - normalized `[0, 1]` detector coordinates map
//! linearly onto `[0, pi]` radians per axis.

use std::f32::consts::PI;

/// Rotation of the rendered cloud about the vertical (yaw) and horizontal
/// (pitch) axes, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    /// Rotation about the vertical axis, driven by wrist X.
    pub yaw: f32,
    /// Rotation about the horizontal axis, driven by wrist Y.
    pub pitch: f32,
}

impl Orientation {
    /// Derives an orientation from normalized wrist coordinates.
    ///
    /// `yaw = x * pi`, `pitch = y * pi`. Inputs outside `[0, 1]` are not
    /// clamped; the detector contract already bounds them.
    #[inline]
    #[must_use]
    pub fn from_wrist(x: f32, y: f32) -> Self {
        Self {
            yaw: x * PI,
            pitch: y * PI,
        }
    }
}
