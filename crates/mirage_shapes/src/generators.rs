//! # Shape Generators
//!
//! Pure transforms from a particle count to a flat target buffer.
//!
//! Three shapes:
//!
//! - **Heart**: a parametric heart curve sampled with an independent random
//!   parameter per particle, plus random depth. Repeated calls give a fresh
//!   point cloud with the same silhouette density.
//! - **Saturn**: a deterministic Fibonacci-style sphere for the first 40%
//!   of particles, a randomly scattered flat ring for the rest.
//! - **Scatter**: unstructured uniform noise in a centered cube.
//!
//! All generators are total over any count, including zero.

use std::f32::consts::TAU;
use std::f64::consts::PI;

use rand::Rng;

/// Scale applied to the parametric heart curve.
pub const HEART_SCALE: f32 = 0.4;

/// Fraction of particles assigned to the saturn sphere group.
pub const SPHERE_SHARE: f64 = 0.4;

/// Radius of the saturn sphere.
pub const SPHERE_RADIUS: f64 = 4.0;

/// Inner radius of the saturn ring.
pub const RING_INNER_RADIUS: f32 = 6.0;

/// Radial width of the saturn ring (outer radius is inner + width).
pub const RING_WIDTH: f32 = 3.0;

/// Half-thickness of the ring along Y.
pub const RING_HALF_THICKNESS: f32 = 0.25;

/// Edge length of the scatter cube, centered on the origin.
pub const SCATTER_EXTENT: f32 = 15.0;

/// The named target shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Parametric heart curve with per-particle jitter.
    Heart,
    /// Fibonacci sphere plus scattered ring.
    Saturn,
    /// Uniform noise, no structure.
    Scatter,
}

impl ShapeKind {
    /// Generates a full target buffer for this shape.
    #[must_use]
    pub fn generate<R: Rng>(self, count: usize, rng: &mut R) -> Vec<f32> {
        match self {
            Self::Heart => heart(count, rng),
            Self::Saturn => saturn(count, rng),
            Self::Scatter => scatter(count, rng),
        }
    }
}

/// Index of the first ring particle in a saturn cloud of `count` particles.
///
/// Computed as `floor(0.4 * count)`. The boundary is identical on every
/// invocation, so particles never migrate between the sphere and ring
/// groups across regenerations.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn sphere_split(count: usize) -> usize {
    (count as f64 * SPHERE_SHARE).floor() as usize
}

/// Samples the parametric heart curve.
///
/// Per particle: an independent angle `t` in `[0, 2pi)`, then
///
/// ```text
/// x = 0.4 * 16 sin^3 t
/// y = 0.4 * (13 cos t - 5 cos 2t - 2 cos 3t - cos 4t)
/// z = uniform(-1, 1)
/// ```
#[must_use]
pub fn heart<R: Rng>(count: usize, rng: &mut R) -> Vec<f32> {
    let mut targets = Vec::with_capacity(count * 3);
    for _ in 0..count {
        let t = rng.gen::<f32>() * TAU;
        let sin_t = t.sin();

        let x = HEART_SCALE * 16.0 * sin_t * sin_t * sin_t;
        let y = HEART_SCALE
            * (13.0 * t.cos()
                - 5.0 * (2.0 * t).cos()
                - 2.0 * (3.0 * t).cos()
                - (4.0 * t).cos());
        let z = (rng.gen::<f32>() - 0.5) * 2.0;

        targets.push(x);
        targets.push(y);
        targets.push(z);
    }
    targets
}

/// Places a deterministic sphere with a scattered ring around it.
///
/// Particles below [`sphere_split`] land on a Fibonacci-style spherical
/// lattice of radius 4 - a pure function of the index and count. The rest
/// scatter onto a flat ring on the XZ plane with radius in `[6, 9)` and
/// `y` in `[-0.25, 0.25)`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn saturn<R: Rng>(count: usize, rng: &mut R) -> Vec<f32> {
    let mut targets = Vec::with_capacity(count * 3);
    let split = sphere_split(count);
    let sphere_n = count as f64 * SPHERE_SHARE;

    for i in 0..count {
        if i < split {
            // Golden-angle spacing: near-uniform coverage of the sphere.
            let phi = (-1.0 + 2.0 * i as f64 / sphere_n).acos();
            let theta = (sphere_n * PI).sqrt() * phi;

            targets.push((SPHERE_RADIUS * theta.cos() * phi.sin()) as f32);
            targets.push((SPHERE_RADIUS * theta.sin() * phi.sin()) as f32);
            targets.push((SPHERE_RADIUS * phi.cos()) as f32);
        } else {
            let angle = rng.gen::<f32>() * TAU;
            let radius = RING_INNER_RADIUS + rng.gen::<f32>() * RING_WIDTH;

            targets.push(radius * angle.cos());
            targets.push((rng.gen::<f32>() - 0.5) * (2.0 * RING_HALF_THICKNESS));
            targets.push(radius * angle.sin());
        }
    }
    targets
}

/// Fills the buffer with unstructured uniform noise.
///
/// Every coordinate is independent `uniform(-7.5, 7.5)`.
#[must_use]
pub fn scatter<R: Rng>(count: usize, rng: &mut R) -> Vec<f32> {
    let mut targets = Vec::with_capacity(count * 3);
    for _ in 0..count * 3 {
        targets.push((rng.gen::<f32>() - 0.5) * SCATTER_EXTENT);
    }
    targets
}
