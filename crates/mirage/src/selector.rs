//! # Target Selector
//!
//! Runs once per delivered landmark frame, on the detector's cadence:
//!
//! 1. classify the frame into a gesture decision
//! 2. on a shape decision, generate the shape and swap in the new target
//!    buffer (a single move - no partially written buffer is observable)
//! 3. on `NoChange`, leave the target alone - particles keep approaching
//!    whatever was last set, including the initial settled scatter
//! 4. always: re-derive the cloud orientation from the wrist and the
//!    uniform color from the index fingertip
//!
//! The selector owns the shape random source, so a seeded session replays
//! identical target buffers frame for frame.

use mirage_core::{Orientation, ParticleCloud};
use mirage_gesture::{classify, cloud_color, Gesture, HandFrame};
use mirage_shapes::{ShapeKind, ShapeSeed};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// What one frame did to the cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutcome {
    /// The classifier's decision for this frame.
    pub gesture: Gesture,
    /// The orientation derived from the wrist, replaced wholesale.
    pub orientation: Orientation,
}

/// Converts gesture decisions into target buffer swaps.
pub struct TargetSelector {
    /// Random source for shape scatter/jitter.
    rng: ChaCha8Rng,
}

impl TargetSelector {
    /// Creates a selector from a shape seed.
    #[must_use]
    pub fn new(seed: ShapeSeed) -> Self {
        Self { rng: seed.rng() }
    }

    /// Applies one landmark frame to the cloud.
    ///
    /// Replaces the target buffer on a shape decision, and always updates
    /// color and orientation - the original interaction keeps tracking the
    /// hand even while the gesture stays `NoChange`.
    pub fn apply(&mut self, cloud: &mut ParticleCloud, frame: &HandFrame) -> FrameOutcome {
        let gesture = classify(frame);
        if let Some(kind) = shape_for(gesture) {
            debug!(?gesture, count = cloud.count(), "gesture matched, swapping target buffer");
            cloud.set_targets(kind.generate(cloud.count(), &mut self.rng));
        }

        cloud.set_uniform_color(cloud_color(frame));

        let wrist = frame.wrist();
        FrameOutcome {
            gesture,
            orientation: Orientation::from_wrist(wrist.x, wrist.y),
        }
    }
}

/// Maps a gesture decision to the shape it selects, if any.
const fn shape_for(gesture: Gesture) -> Option<ShapeKind> {
    match gesture {
        Gesture::Heart => Some(ShapeKind::Heart),
        Gesture::Saturn => Some(ShapeKind::Saturn),
        Gesture::Scatter => Some(ShapeKind::Scatter),
        Gesture::NoChange => None,
    }
}
