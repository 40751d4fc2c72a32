//! # MIRAGE Core
//!
//! Fixed-size particle cloud storage and the per-tick integration engine.
//!
//! ## Architecture Rules
//!
//! 1. **Allocate once** - all three attribute arrays are sized at startup
//!    and never grow or shrink during a session
//! 2. **Data-oriented layout** - positions, targets and colors are parallel
//!    flat `f32` arrays (`3 * N` each), indexed `3i..3i+3` for particle `i`
//! 3. **Whole-value replacement** - targets are swapped in by move and
//!    orientation is replaced as one value, so a reader never observes a
//!    half-written update
//!
//! ## Example
//!
//! ```rust,ignore
//! use mirage_core::{Integrator, ParticleCloud};
//!
//! let mut rng = rand::thread_rng();
//! let mut cloud = ParticleCloud::new(6000, 10.0, &mut rng);
//! let integrator = Integrator::default();
//!
//! // Render tick: ease every particle toward its target.
//! integrator.step(&mut cloud);
//! ```

pub mod cloud;
pub mod integrate;
pub mod orientation;

pub use cloud::ParticleCloud;
pub use integrate::Integrator;
pub use orientation::Orientation;
