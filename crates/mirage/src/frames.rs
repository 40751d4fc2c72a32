//! # Frame Channel
//!
//! Landmark delivery from the tracking collaborator to the engine.
//!
//! The detector completes frames at its own irregular cadence; the render
//! tick consumes them at vsync. Neither side waits for the other:
//!
//! - the sender never blocks - when the channel is full the frame is
//!   dropped (the next one supersedes it anyway)
//! - the receiver drains everything pending and keeps only the newest
//!   frame, so a tick always works with the most recently completed
//!   detector result
//!
//! "No hand detected" needs no message at all: the detector simply does
//! not send, and the engine keeps animating toward the last target.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use mirage_gesture::HandFrame;

/// Creates a connected sender/receiver pair with the given capacity.
///
/// # Panics
///
/// Panics if `capacity` is zero (a rendezvous channel would make the
/// detector block on the render tick).
#[must_use]
pub fn frame_channel(capacity: usize) -> (FrameSender, FrameReceiver) {
    assert!(capacity > 0, "frame channel capacity must be at least 1");
    let (sender, receiver) = bounded(capacity);
    (FrameSender { sender }, FrameReceiver { receiver })
}

/// Handle held by the tracking collaborator.
#[derive(Clone)]
pub struct FrameSender {
    sender: Sender<HandFrame>,
}

impl FrameSender {
    /// Delivers a completed frame (non-blocking).
    ///
    /// Returns `false` if the frame was dropped - channel full (the engine
    /// is behind; newer frames supersede this one) or receiver gone.
    #[inline]
    pub fn send(&self, frame: HandFrame) -> bool {
        match self.sender.try_send(frame) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                tracing::warn!("frame channel full, dropping landmark frame");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Handle held by the engine.
pub struct FrameReceiver {
    receiver: Receiver<HandFrame>,
}

impl FrameReceiver {
    /// Drains all pending frames and returns the newest, if any.
    ///
    /// Frames skipped here were already superseded when the tick ran;
    /// consuming every detector result is explicitly not a guarantee.
    #[inline]
    #[must_use]
    pub fn latest(&self) -> Option<HandFrame> {
        let mut newest = None;
        while let Ok(frame) = self.receiver.try_recv() {
            newest = Some(frame);
        }
        newest
    }

    /// Returns the number of frames waiting in the channel.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }
}
