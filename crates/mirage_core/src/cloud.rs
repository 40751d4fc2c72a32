//! # Particle Cloud Storage
//!
//! Fixed-size, structure-of-arrays particle storage.
//!
//! Three parallel flat arrays hold the cloud's attributes:
//!
//! | array       | meaning                        | mutated by            |
//! |-------------|--------------------------------|-----------------------|
//! | `positions` | where each particle is now     | every render tick     |
//! | `targets`   | where each particle is heading | every matched gesture |
//! | `colors`    | per-particle RGB               | every landmark frame  |
//!
//! All three are exactly `3 * count` long at all times, and flat index
//! `3i..3i+3` refers to particle `i` in every array. The arrays are sized
//! once at construction and never reallocated.

use rand::Rng;

/// Number of `f32` components per particle in each attribute array.
pub const COMPONENTS: usize = 3;

/// Fixed-size particle cloud.
///
/// The cloud starts settled: initial targets equal the initial positions,
/// so nothing moves until a gesture installs a new target buffer.
///
/// # Example
///
/// ```rust,ignore
/// let mut cloud = ParticleCloud::new(6000, 10.0, &mut rng);
/// assert_eq!(cloud.positions().len(), 6000 * 3);
/// ```
pub struct ParticleCloud {
    /// Current positions, `3 * count` components.
    positions: Vec<f32>,
    /// Target positions, `3 * count` components.
    targets: Vec<f32>,
    /// Per-particle RGB colors, `3 * count` components.
    colors: Vec<f32>,
    /// Number of particles.
    count: usize,
    /// Positions changed since the last render view was taken.
    positions_dirty: bool,
    /// Colors changed since the last render view was taken.
    colors_dirty: bool,
}

impl ParticleCloud {
    /// Creates a new cloud of `count` particles.
    ///
    /// Positions are scattered uniformly in `[-spread / 2, spread / 2)` per
    /// coordinate, targets are initialized to the same values (the cloud
    /// starts settled) and colors are uniform random in `[0, 1)`.
    ///
    /// `count == 0` is valid and yields empty attribute arrays.
    #[must_use]
    pub fn new<R: Rng>(count: usize, spread: f32, rng: &mut R) -> Self {
        let flat = count * COMPONENTS;

        let mut positions = Vec::with_capacity(flat);
        let mut colors = Vec::with_capacity(flat);
        for _ in 0..flat {
            positions.push((rng.gen::<f32>() - 0.5) * spread);
            colors.push(rng.gen::<f32>());
        }
        let targets = positions.clone();

        Self {
            positions,
            targets,
            colors,
            count,
            positions_dirty: true,
            colors_dirty: true,
        }
    }

    /// Returns the number of particles.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the current position array (`3 * count` components).
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Returns the target position array (`3 * count` components).
    #[inline]
    #[must_use]
    pub fn targets(&self) -> &[f32] {
        &self.targets
    }

    /// Returns the color array (`3 * count` components).
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Replaces the whole target buffer by move.
    ///
    /// This is the only way targets change: a single move-in swap, so the
    /// integration step can never observe a partially written buffer.
    /// The previous targets are discarded; particles already in flight
    /// simply start easing toward the new destination.
    ///
    /// # Panics
    ///
    /// Panics if `targets.len() != 3 * count`.
    pub fn set_targets(&mut self, targets: Vec<f32>) {
        assert_eq!(
            targets.len(),
            self.count * COMPONENTS,
            "target buffer length must be 3 * particle count"
        );
        self.targets = targets;
    }

    /// Broadcasts one RGB triple to every particle.
    pub fn set_uniform_color(&mut self, rgb: [f32; 3]) {
        for chunk in self.colors.chunks_exact_mut(COMPONENTS) {
            chunk.copy_from_slice(&rgb);
        }
        self.colors_dirty = true;
    }

    /// Splits a mutable position borrow from a shared target borrow.
    ///
    /// Used by the integrator, which reads targets while writing positions.
    #[inline]
    pub(crate) fn positions_mut_targets(&mut self) -> (&mut [f32], &[f32]) {
        (&mut self.positions, &self.targets)
    }

    /// Marks position data as needing upload to the renderer.
    #[inline]
    pub(crate) fn mark_positions_dirty(&mut self) {
        self.positions_dirty = true;
    }

    /// Whether positions changed since `clear_dirty` was last called.
    #[inline]
    #[must_use]
    pub const fn positions_dirty(&self) -> bool {
        self.positions_dirty
    }

    /// Whether colors changed since `clear_dirty` was last called.
    #[inline]
    #[must_use]
    pub const fn colors_dirty(&self) -> bool {
        self.colors_dirty
    }

    /// Clears both dirty flags.
    ///
    /// Called after the renderer has consumed the attribute arrays.
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.positions_dirty = false;
        self.colors_dirty = false;
    }
}
