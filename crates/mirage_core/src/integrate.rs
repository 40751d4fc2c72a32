//! # Integration Engine
//!
//! First-order exponential smoothing of particle positions toward the
//! current target buffer:
//!
//! ```text
//! current[i] += (target[i] - current[i]) * alpha
//! ```
//!
//! This is a discrete-time low-pass filter. The step is tick-indexed, not
//! wall-clock-indexed: perceived morph speed is tied to the render rate.
//! For `alpha` in `(0, 1]` the distance to the target shrinks by a factor
//! of `1 - alpha` per tick - monotone convergence, no overshoot.

use crate::cloud::ParticleCloud;

/// Default smoothing factor.
pub const DEFAULT_ALPHA: f32 = 0.1;

/// Per-tick exponential smoothing toward the target buffer.
#[derive(Clone, Copy, Debug)]
pub struct Integrator {
    /// Smoothing factor in `(0, 1]`. `1.0` snaps to the target in one tick.
    alpha: f32,
}

impl Integrator {
    /// Creates an integrator with the given smoothing factor.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is not in `(0, 1]`.
    #[must_use]
    pub fn new(alpha: f32) -> Self {
        assert!(
            alpha > 0.0 && alpha <= 1.0,
            "smoothing factor must be in (0, 1], got {alpha}"
        );
        Self { alpha }
    }

    /// Returns the smoothing factor.
    #[inline]
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Advances every coordinate one tick toward its target.
    ///
    /// Runs once per render tick, independent of the detector cadence.
    /// Reads whatever target buffer is currently installed - a stale
    /// target is fine, the cloud just keeps converging toward it.
    /// Marks position data as needing upload afterwards.
    pub fn step(&self, cloud: &mut ParticleCloud) {
        let (positions, targets) = cloud.positions_mut_targets();
        for (current, target) in positions.iter_mut().zip(targets) {
            *current += (*target - *current) * self.alpha;
        }
        cloud.mark_positions_dirty();
    }
}

impl Default for Integrator {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}
