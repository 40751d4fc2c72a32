//! # Shape Seed
//!
//! Deterministic seeding for the shape generators.
//!
//! ## Determinism Guarantee
//!
//! Given the same `ShapeSeed`, the generators produce **exactly** the same
//! target buffers on any platform, any time. An unseeded session derives
//! its seed from the system clock instead.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed for the scatter/jitter random source.
///
/// All randomized shape placement derives from this seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeSeed(u64);

impl ShapeSeed {
    /// Creates a new shape seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives a sub-seed for a specific purpose (e.g., initial scatter vs
    /// shape jitter).
    ///
    /// Uses a hash function to create independent streams from one seed.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        // FNV-1a hash mixing
        let mut hash = self.0;
        hash ^= purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }

    /// Builds the concrete random source for this seed.
    #[must_use]
    pub fn rng(self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.0)
    }

    /// Derives a seed from the system clock (non-reproducible sessions).
    ///
    /// Sessions that do not care about replay still get a fresh cloud per
    /// run without pulling OS entropy into the dependency tree.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_clock() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64);
        Self(nanos).derive(0x5EED)
    }
}

impl Default for ShapeSeed {
    fn default() -> Self {
        Self(0xC0FF_EE00_D15C_0BA1)
    }
}
