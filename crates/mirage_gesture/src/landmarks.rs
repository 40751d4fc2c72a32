//! # Hand Landmark Schema
//!
//! The detector emits 21 ordered, normalized 3D points per hand. Indices
//! carry fixed anatomical meaning; this module re-expresses the ones the
//! engine consumes as named accessors so no caller ever touches a raw
//! index.
//!
//! ## Coordinate convention
//!
//! `x` and `y` are normalized image coordinates in roughly `[0, 1]` with
//! the origin at the top-left, so a **smaller** `y` means **higher** in
//! the image (an extended finger points toward small `y`). `z` is relative
//! depth.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{FrameError, FrameResult};

/// Number of landmarks in one detector frame.
pub const LANDMARK_COUNT: usize = 21;

/// Wrist landmark index.
pub const WRIST: usize = 0;
/// Thumb fingertip index.
pub const THUMB_TIP: usize = 4;
/// Index-finger PIP joint index.
pub const INDEX_PIP: usize = 6;
/// Index fingertip index.
pub const INDEX_TIP: usize = 8;
/// Middle-finger PIP joint index.
pub const MIDDLE_PIP: usize = 10;
/// Middle fingertip index.
pub const MIDDLE_TIP: usize = 12;
/// Pinky PIP joint index.
pub const PINKY_PIP: usize = 18;
/// Pinky fingertip index.
pub const PINKY_TIP: usize = 20;

/// One normalized 3D hand-joint position.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized image X, roughly `[0, 1]`.
    pub x: f32,
    /// Normalized image Y, roughly `[0, 1]` (smaller = higher).
    pub y: f32,
    /// Relative depth.
    pub z: f32,
}

impl Landmark {
    /// Creates a new landmark.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another landmark in the XY image plane.
    ///
    /// Depth is ignored: gesture thresholds are defined in image space.
    #[inline]
    #[must_use]
    pub fn xy_distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One validated detector frame: exactly 21 ordered landmarks.
///
/// Immutable once built. Construction is the only place the point count is
/// checked; everything downstream is statically safe.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandFrame {
    /// The 21 landmarks in detector order.
    points: [Landmark; LANDMARK_COUNT],
}

impl HandFrame {
    /// Validates a raw landmark slice into a frame.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::WrongLandmarkCount`] unless the slice holds
    /// exactly [`LANDMARK_COUNT`] points. Callers treat that the same as
    /// "no hand detected": skip the frame, keep the last state.
    pub fn from_landmarks(points: &[Landmark]) -> FrameResult<Self> {
        let points: [Landmark; LANDMARK_COUNT] =
            points
                .try_into()
                .map_err(|_| FrameError::WrongLandmarkCount {
                    expected: LANDMARK_COUNT,
                    actual: points.len(),
                })?;
        Ok(Self { points })
    }

    /// Returns all landmarks in detector order.
    #[inline]
    #[must_use]
    pub const fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }

    /// Wrist (landmark 0) - steers the whole-cloud orientation.
    #[inline]
    #[must_use]
    pub const fn wrist(&self) -> Landmark {
        self.points[WRIST]
    }

    /// Thumb fingertip (landmark 4).
    #[inline]
    #[must_use]
    pub const fn thumb_tip(&self) -> Landmark {
        self.points[THUMB_TIP]
    }

    /// Index-finger PIP joint (landmark 6).
    #[inline]
    #[must_use]
    pub const fn index_pip(&self) -> Landmark {
        self.points[INDEX_PIP]
    }

    /// Index fingertip (landmark 8) - pinch partner and color source.
    #[inline]
    #[must_use]
    pub const fn index_tip(&self) -> Landmark {
        self.points[INDEX_TIP]
    }

    /// Middle-finger PIP joint (landmark 10).
    #[inline]
    #[must_use]
    pub const fn middle_pip(&self) -> Landmark {
        self.points[MIDDLE_PIP]
    }

    /// Middle fingertip (landmark 12).
    #[inline]
    #[must_use]
    pub const fn middle_tip(&self) -> Landmark {
        self.points[MIDDLE_TIP]
    }

    /// Pinky PIP joint (landmark 18).
    #[inline]
    #[must_use]
    pub const fn pinky_pip(&self) -> Landmark {
        self.points[PINKY_PIP]
    }

    /// Pinky fingertip (landmark 20).
    #[inline]
    #[must_use]
    pub const fn pinky_tip(&self) -> Landmark {
        self.points[PINKY_TIP]
    }
}

impl From<[Landmark; LANDMARK_COUNT]> for HandFrame {
    fn from(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }
}
