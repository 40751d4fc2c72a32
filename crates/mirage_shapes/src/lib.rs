//! # MIRAGE Shapes
//!
//! Target shape generation for the particle cloud.
//!
//! Each generator maps a particle count to a freshly allocated flat target
//! buffer (`3 * count` components, `xyz` per particle). Generators never
//! read the previous target; the caller installs the result with a single
//! buffer swap.
//!
//! ## Determinism
//!
//! Structured parts of a shape (the saturn sphere lattice) depend only on
//! the particle index and count. Scattered parts (heart sampling, ring
//! placement, uniform scatter) draw from a caller-supplied random source,
//! so a seeded generator reproduces the exact same cloud.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mirage_shapes::{ShapeKind, ShapeSeed};
//!
//! let mut rng = ShapeSeed::new(42).rng();
//! let targets = ShapeKind::Heart.generate(6000, &mut rng);
//! assert_eq!(targets.len(), 6000 * 3);
//! ```

pub mod generators;
pub mod seed;

pub use generators::{heart, saturn, scatter, sphere_split, ShapeKind};
pub use seed::ShapeSeed;
