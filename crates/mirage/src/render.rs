//! # Rendering Collaborator Boundary
//!
//! The engine does not draw. Once per tick it hands the current attribute
//! arrays and orientation to a [`RenderSink`] and moves on; whatever the
//! sink does with them (GPU upload, logging, nothing) is its business.
//!
//! Dirty flags tell the sink which arrays actually changed since the last
//! view, so an implementation can skip redundant uploads.

use bytemuck::cast_slice;
use mirage_core::Orientation;

/// One tick's worth of drawable state, borrowed from the engine.
#[derive(Debug)]
pub struct RenderView<'a> {
    /// Current particle positions, `3 * count` components.
    pub positions: &'a [f32],
    /// Per-particle colors, `3 * count` components.
    pub colors: &'a [f32],
    /// Whole-cloud rotation, applied at draw time.
    pub orientation: Orientation,
    /// Positions changed since the previous view.
    pub positions_dirty: bool,
    /// Colors changed since the previous view.
    pub colors_dirty: bool,
}

impl RenderView<'_> {
    /// Position data as raw bytes, ready for a vertex buffer upload.
    #[inline]
    #[must_use]
    pub fn position_bytes(&self) -> &[u8] {
        cast_slice(self.positions)
    }

    /// Color data as raw bytes, ready for a vertex buffer upload.
    #[inline]
    #[must_use]
    pub fn color_bytes(&self) -> &[u8] {
        cast_slice(self.colors)
    }
}

/// The drawing collaborator.
pub trait RenderSink {
    /// Draws one frame from the given view.
    fn draw(&mut self, view: &RenderView<'_>);

    /// Forwards a viewport resize. The engine itself has no reaction to
    /// size changes; this is pass-through for the sink's projection.
    fn resize(&mut self, width: u32, height: u32);
}

/// A sink that discards everything. Useful in tests and benchmarks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn draw(&mut self, _view: &RenderView<'_>) {}

    fn resize(&mut self, _width: u32, _height: u32) {}
}
