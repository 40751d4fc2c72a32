//! # Gesture Error Types
//!
//! All errors that can occur on the landmark ingestion path.
//!
//! The taxonomy is deliberately narrow: a missing hand is not an error
//! (the detector simply delivers nothing), so the only failure left is a
//! frame that does not match the detector's fixed schema.

use thiserror::Error;

/// Errors produced while validating a raw landmark frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// The frame did not carry exactly the expected number of landmarks.
    #[error("malformed landmark frame: expected {expected} points, got {actual}")]
    WrongLandmarkCount {
        /// Points required by the detector schema.
        expected: usize,
        /// Points actually delivered.
        actual: usize,
    },
}

/// Result type for frame validation.
pub type FrameResult<T> = Result<T, FrameError>;
