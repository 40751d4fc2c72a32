//! # MIRAGE
//!
//! A 6000-particle point cloud that morphs between target shapes steered
//! by a live hand-pose signal.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                          MIRAGE ENGINE                               │
//! ├──────────────────────────────────────────────────────────────────────┤
//! │                                                                      │
//! │   detector cadence (irregular)          render cadence (vsync)       │
//! │                                                                      │
//! │  ┌────────────┐   HandFrame   ┌───────────────┐                      │
//! │  │  Tracking  │──────────────>│ FrameChannel  │                      │
//! │  │(collaborator)              │ (latest wins) │                      │
//! │  └────────────┘               └───────┬───────┘                      │
//! │                                       │                              │
//! │                                       ▼                              │
//! │  ┌──────────────────────────────────────────────────────┐            │
//! │  │                     MorphEngine::tick                │            │
//! │  │                                                      │            │
//! │  │  TargetSelector: classify ─> swap targets            │            │
//! │  │                  wrist ────> orientation             │            │
//! │  │                  fingertip ─> uniform color          │            │
//! │  │  Integrator:     positions ease toward targets       │            │
//! │  └──────────────────────────┬───────────────────────────┘            │
//! │                             │ RenderView                             │
//! │                             ▼                                        │
//! │                     ┌──────────────┐                                 │
//! │                     │  RenderSink  │  (drawing collaborator)         │
//! │                     └──────────────┘                                 │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything shared between the two cadences is replaced as a whole
//! value - the target buffer by move, orientation as one struct - so a
//! tick never observes a half-written update. Stale targets are fine by
//! design: a silent detector just means the cloud keeps converging toward
//! wherever it was last sent.
//!
//! ## Modules
//!
//! - `frames`: detector-to-engine frame delivery
//! - `selector`: gesture decision to buffer/color/orientation updates
//! - `engine`: render-tick orchestration and session stats
//! - `config`: startup configuration
//! - `render`: the rendering collaborator boundary

pub mod config;
pub mod engine;
pub mod frames;
pub mod render;
pub mod selector;

pub use config::{ConfigError, EngineConfig};
pub use engine::{MorphEngine, SessionStats};
pub use frames::{frame_channel, FrameReceiver, FrameSender};
pub use render::{NullSink, RenderSink, RenderView};
pub use selector::{FrameOutcome, TargetSelector};

// Re-export commonly used types from the member crates.
pub use mirage_core::{Integrator, Orientation, ParticleCloud};
pub use mirage_gesture::{classify, cloud_color, Gesture, HandFrame, Landmark};
pub use mirage_shapes::{ShapeKind, ShapeSeed};
