//! # Morph Engine
//!
//! The render-tick orchestrator. One cooperative execution context drives
//! two cadences:
//!
//! - **detector cadence**: whenever a landmark frame has been delivered,
//!   the next tick runs the target selector on the newest one
//! - **render cadence**: every tick runs the integrator and publishes a
//!   [`RenderView`](crate::render::RenderView)
//!
//! A tick always runs to completion before the next handler; shared state
//! is only ever replaced as whole values. There is no guarantee every
//! detector result is consumed, nor that every tick has a fresh one -
//! both directions of staleness are part of the contract.

use mirage_core::{Integrator, Orientation, ParticleCloud};
use mirage_gesture::{Gesture, HandFrame};
use mirage_shapes::ShapeSeed;
use tracing::info;

use crate::config::EngineConfig;
use crate::frames::{frame_channel, FrameReceiver, FrameSender};
use crate::render::RenderView;
use crate::selector::TargetSelector;

/// Counters accumulated over a session.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStats {
    /// Render ticks executed.
    pub ticks: u64,
    /// Landmark frames applied to the cloud.
    pub frames_applied: u64,
    /// Frames superseded before a tick could consume them.
    pub frames_skipped: u64,
    /// Heart decisions.
    pub hearts: u64,
    /// Saturn decisions.
    pub saturns: u64,
    /// Scatter decisions.
    pub scatters: u64,
    /// Frames that matched no gesture rule.
    pub no_changes: u64,
}

impl SessionStats {
    /// Records one applied frame's decision.
    fn record(&mut self, gesture: Gesture) {
        self.frames_applied += 1;
        match gesture {
            Gesture::Heart => self.hearts += 1,
            Gesture::Saturn => self.saturns += 1,
            Gesture::Scatter => self.scatters += 1,
            Gesture::NoChange => self.no_changes += 1,
        }
    }
}

/// The gesture-driven particle morphing engine.
///
/// Owns all mutable session state: the cloud, the integrator, the target
/// selector with its random source, the frame receiver and the current
/// orientation. Created together with the [`FrameSender`] the tracking
/// collaborator pushes into.
pub struct MorphEngine {
    /// The particle cloud, allocated once.
    cloud: ParticleCloud,
    /// Per-tick exponential smoothing.
    integrator: Integrator,
    /// Gesture decision to target/color/orientation updates.
    selector: TargetSelector,
    /// Inbox for detector frames.
    frames: FrameReceiver,
    /// Current whole-cloud rotation.
    orientation: Orientation,
    /// Session counters.
    stats: SessionStats,
}

impl MorphEngine {
    /// Builds an engine and the frame sender feeding it.
    ///
    /// A configured seed makes the whole session deterministic (initial
    /// scatter and every generated shape); without one the seed comes
    /// from the clock.
    ///
    /// # Panics
    ///
    /// Panics if the config was not validated: smoothing outside `(0, 1]`
    /// or a zero frame capacity.
    #[must_use]
    pub fn new(config: &EngineConfig) -> (Self, FrameSender) {
        let seed = config.seed.map_or_else(ShapeSeed::from_clock, ShapeSeed::new);
        info!(
            particle_count = config.particle_count,
            seed = seed.value(),
            "initializing morph engine"
        );

        // Independent streams: the initial scatter must not disturb the
        // shape sequence replay.
        let mut init_rng = seed.derive(0).rng();
        let cloud = ParticleCloud::new(config.particle_count, config.initial_spread, &mut init_rng);
        let selector = TargetSelector::new(seed.derive(1));

        let (sender, receiver) = frame_channel(config.frame_capacity);

        let engine = Self {
            cloud,
            integrator: Integrator::new(config.smoothing),
            selector,
            frames: receiver,
            orientation: Orientation::default(),
            stats: SessionStats::default(),
        };
        (engine, sender)
    }

    /// Runs one render tick.
    ///
    /// Consumes the newest pending landmark frame (if any) through the
    /// selector, then integrates positions toward the current target.
    pub fn tick(&mut self) {
        let pending = self.frames.pending_count();
        if let Some(frame) = self.frames.latest() {
            self.stats.frames_skipped += pending.saturating_sub(1) as u64;
            self.apply_frame(&frame);
        }

        self.integrator.step(&mut self.cloud);
        self.stats.ticks += 1;
    }

    /// Applies one landmark frame directly.
    ///
    /// The embedded path for callers that deliver frames themselves
    /// instead of going through the channel.
    pub fn apply_frame(&mut self, frame: &HandFrame) {
        let outcome = self.selector.apply(&mut self.cloud, frame);
        self.orientation = outcome.orientation;
        self.stats.record(outcome.gesture);
    }

    /// Takes the drawable state for this tick and clears the dirty flags.
    pub fn render_view(&mut self) -> RenderView<'_> {
        let positions_dirty = self.cloud.positions_dirty();
        let colors_dirty = self.cloud.colors_dirty();
        self.cloud.clear_dirty();

        RenderView {
            positions: self.cloud.positions(),
            colors: self.cloud.colors(),
            orientation: self.orientation,
            positions_dirty,
            colors_dirty,
        }
    }

    /// Returns the particle cloud.
    #[inline]
    #[must_use]
    pub fn cloud(&self) -> &ParticleCloud {
        &self.cloud
    }

    /// Returns the current whole-cloud orientation.
    #[inline]
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the session counters.
    #[inline]
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }
}
