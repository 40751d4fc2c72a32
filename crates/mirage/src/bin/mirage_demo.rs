//! Synthetic-detector demo.
//!
//! Stands in for the camera + hand-tracking pipeline: a background thread
//! scripts a pinch, a raised middle finger and an open hand through the
//! frame channel while the main loop ticks the engine at ~60 Hz against a
//! logging sink.
//!
//! Run with: `cargo run --bin mirage_demo [config.toml]`

use std::thread;
use std::time::Duration;

use mirage::{
    EngineConfig, FrameSender, HandFrame, Landmark, MorphEngine, RenderSink, RenderView,
};
use mirage_gesture::LANDMARK_COUNT;
use tracing::{info, trace};

/// Detector cadence: slower and more irregular than the render tick.
const DETECTOR_INTERVAL: Duration = Duration::from_millis(33);

/// Render cadence, roughly vsync at 60 Hz.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Ticks to run before printing the summary.
const TICKS: u32 = 360;

/// A sink that logs what a renderer would upload.
#[derive(Default)]
struct LoggingSink {
    /// Uploads a real renderer would have performed.
    uploads: u64,
}

impl RenderSink for LoggingSink {
    fn draw(&mut self, view: &RenderView<'_>) {
        if view.positions_dirty || view.colors_dirty {
            self.uploads += 1;
        }
        trace!(
            yaw = view.orientation.yaw,
            pitch = view.orientation.pitch,
            position_bytes = view.position_bytes().len(),
            "draw"
        );
    }

    fn resize(&mut self, width: u32, height: u32) {
        info!(width, height, "viewport resized");
    }
}

/// Builds a frame around a resting hand, then lets the caller pose it.
fn posed_frame(pose: impl FnOnce(&mut [Landmark; LANDMARK_COUNT])) -> HandFrame {
    let mut points = [Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
    points[4] = Landmark::new(0.2, 0.5, 0.0);
    points[8] = Landmark::new(0.8, 0.5, 0.0);
    pose(&mut points);
    HandFrame::from(points)
}

/// Scripts the detector: pinch, then middle up, then open hand, with the
/// wrist drifting so the orientation visibly follows.
fn run_detector(sender: &FrameSender) {
    let phases: [fn(&mut [Landmark; LANDMARK_COUNT]); 3] = [
        // Pinch: thumb and index tips together.
        |points| {
            points[4] = Landmark::new(0.50, 0.50, 0.0);
            points[8] = Landmark::new(0.52, 0.51, 0.0);
        },
        // Middle finger raised above its PIP joint.
        |points| {
            points[12] = Landmark::new(0.5, 0.30, 0.0);
            points[10] = Landmark::new(0.5, 0.45, 0.0);
        },
        // Open hand: index and pinky extended.
        |points| {
            points[8] = Landmark::new(0.8, 0.30, 0.0);
            points[6] = Landmark::new(0.8, 0.45, 0.0);
            points[20] = Landmark::new(0.3, 0.30, 0.0);
            points[18] = Landmark::new(0.3, 0.45, 0.0);
        },
    ];

    for (phase, pose) in phases.iter().enumerate() {
        info!(phase, "detector phase");
        for step in 0..20_u32 {
            #[allow(clippy::cast_precision_loss)]
            let drift = step as f32 / 40.0;
            let frame = posed_frame(|points| {
                points[0] = Landmark::new(0.3 + drift, 0.5 - drift * 0.5, 0.0);
                pose(points);
            });
            sender.send(frame);
            thread::sleep(DETECTOR_INTERVAL);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match EngineConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load {path}: {err}");
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    let (mut engine, sender) = MorphEngine::new(&config);
    let mut sink = LoggingSink::default();
    sink.resize(1280, 720);

    let detector = thread::spawn(move || run_detector(&sender));

    for _ in 0..TICKS {
        engine.tick();
        let view = engine.render_view();
        sink.draw(&view);
        thread::sleep(TICK_INTERVAL);
    }

    detector.join().expect("detector thread panicked");

    let stats = engine.stats();
    info!(
        ticks = stats.ticks,
        frames_applied = stats.frames_applied,
        frames_skipped = stats.frames_skipped,
        hearts = stats.hearts,
        saturns = stats.saturns,
        scatters = stats.scatters,
        no_changes = stats.no_changes,
        uploads = sink.uploads,
        "session complete"
    );
}
