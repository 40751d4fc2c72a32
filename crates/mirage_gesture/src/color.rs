//! # Color Mapper
//!
//! Derives one RGB triple per frame from the index fingertip. The whole
//! cloud wears the same color; it is re-broadcast on every detector result
//! with no interpolation, so color changes are instantaneous.

use crate::landmarks::HandFrame;

/// Maps the index fingertip position to the uniform cloud color.
///
/// `r = tip.x`, `g = tip.y`, `b = 1 - tip.x`. With normalized landmark
/// coordinates the triple stays in `[0, 1]` per channel.
#[inline]
#[must_use]
pub fn cloud_color(frame: &HandFrame) -> [f32; 3] {
    let tip = frame.index_tip();
    [tip.x, tip.y, 1.0 - tip.x]
}
