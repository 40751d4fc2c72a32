//! # MIRAGE Gesture
//!
//! The hand-pose side of the engine: a typed 21-point landmark schema,
//! the gesture classifier and the fingertip color mapper.
//!
//! ## CRITICAL RULE
//!
//! A `HandFrame` can only be built through validation. Once one exists,
//! every landmark accessor is total - no bounds checks, no panics, no way
//! to index outside the detector schema. A frame with the wrong point
//! count is rejected at the boundary and treated exactly like "no hand
//! detected".

pub mod classify;
pub mod color;
pub mod error;
pub mod landmarks;

pub use classify::{classify, Gesture, PINCH_THRESHOLD};
pub use color::cloud_color;
pub use error::FrameError;
pub use landmarks::{HandFrame, Landmark, LANDMARK_COUNT};
