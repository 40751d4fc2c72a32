//! # Gesture Pipeline Verification Tests
//!
//! End-to-end runs through the full engine: scripted landmark frames go in
//! through the frame channel, render ticks integrate, and the resulting
//! buffers are checked against the shape contracts.
//!
//! Run with: cargo test --test gesture_pipeline -- --nocapture

use mirage::{EngineConfig, Gesture, HandFrame, Landmark, MorphEngine};
use mirage_gesture::LANDMARK_COUNT;
use mirage_shapes::sphere_split;

// ============================================================================
// FRAME HELPERS
// ============================================================================

fn posed_frame(pose: impl FnOnce(&mut [Landmark; LANDMARK_COUNT])) -> HandFrame {
    let mut points = [Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
    points[4] = Landmark::new(0.2, 0.5, 0.0);
    points[8] = Landmark::new(0.8, 0.5, 0.0);
    pose(&mut points);
    HandFrame::from(points)
}

fn pinch_frame() -> HandFrame {
    posed_frame(|points| {
        points[4] = Landmark::new(0.50, 0.50, 0.0);
        points[8] = Landmark::new(0.52, 0.51, 0.0);
    })
}

fn middle_up_frame() -> HandFrame {
    posed_frame(|points| {
        points[12] = Landmark::new(0.5, 0.30, 0.0);
        points[10] = Landmark::new(0.5, 0.45, 0.0);
    })
}

fn open_hand_frame() -> HandFrame {
    posed_frame(|points| {
        points[8] = Landmark::new(0.8, 0.30, 0.0);
        points[6] = Landmark::new(0.8, 0.45, 0.0);
        points[20] = Landmark::new(0.3, 0.30, 0.0);
        points[18] = Landmark::new(0.3, 0.45, 0.0);
    })
}

fn test_config(count: usize) -> EngineConfig {
    EngineConfig {
        particle_count: count,
        seed: Some(1234),
        ..EngineConfig::default()
    }
}

// ============================================================================
// SCENARIO 1: PINCH -> HEART
// ============================================================================

#[test]
fn verify_pinch_converges_onto_heart_silhouette() {
    let (mut engine, sender) = MorphEngine::new(&test_config(512));
    assert!(sender.send(pinch_frame()));

    for _ in 0..500 {
        engine.tick();
    }

    let cloud = engine.cloud();
    for (i, chunk) in cloud.positions().chunks_exact(3).enumerate() {
        assert!(
            chunk[0].abs() <= 0.4 * 16.0 + 1e-2,
            "particle {i} x = {} escaped the heart envelope",
            chunk[0]
        );
        assert!(
            chunk[1].abs() <= 0.4 * 17.4 + 1e-2,
            "particle {i} y = {} escaped the heart envelope",
            chunk[1]
        );
        assert!(chunk[2].abs() <= 1.0 + 1e-2);
    }

    let stats = engine.stats();
    assert_eq!(stats.hearts, 1);
    assert_eq!(stats.frames_applied, 1);
}

// ============================================================================
// SCENARIO 2: MIDDLE UP -> SATURN, THEN DETECTOR STALL
// ============================================================================

#[test]
fn verify_saturn_target_held_through_detector_stall() {
    let (mut engine, sender) = MorphEngine::new(&test_config(500));
    assert!(sender.send(middle_up_frame()));
    engine.tick();

    let split = sphere_split(500);
    let held = engine.cloud().targets().to_vec();

    // Sphere group sits on radius 4; ring group on the XZ annulus.
    for chunk in held[..split * 3].chunks_exact(3) {
        let r = (chunk[0] * chunk[0] + chunk[1] * chunk[1] + chunk[2] * chunk[2]).sqrt();
        assert!((r - 4.0).abs() < 1e-3, "sphere point at radius {r}");
    }
    for chunk in held[split * 3..].chunks_exact(3) {
        let xz = (chunk[0] * chunk[0] + chunk[2] * chunk[2]).sqrt();
        assert!((6.0 - 1e-3..9.0).contains(&xz), "ring point at radius {xz}");
        assert!(chunk[1].abs() <= 0.25);
    }

    // Detector stalls: rendering continues, the target never changes.
    for _ in 0..100 {
        engine.tick();
    }
    assert_eq!(engine.cloud().targets(), &held[..]);
    assert_eq!(engine.stats().ticks, 101);
}

// ============================================================================
// SCENARIO 3: GESTURE SEQUENCE AND PRECEDENCE
// ============================================================================

#[test]
fn verify_gesture_sequence_drives_all_three_shapes() {
    let (mut engine, sender) = MorphEngine::new(&test_config(256));

    for frame in [pinch_frame(), middle_up_frame(), open_hand_frame()] {
        assert!(sender.send(frame));
        for _ in 0..60 {
            engine.tick();
        }
    }

    let stats = engine.stats();
    assert_eq!(stats.hearts, 1);
    assert_eq!(stats.saturns, 1);
    assert_eq!(stats.scatters, 1);

    // Last shape wins: the cloud has mostly converged into the scatter
    // cube (60 ticks leaves a small residual from the ring radius).
    for &p in engine.cloud().positions() {
        assert!(p.abs() <= 7.5 + 0.1);
    }
}

#[test]
fn verify_pinch_beats_middle_up_end_to_end() {
    // One frame satisfying rule 1 and rule 2 at once.
    let both = posed_frame(|points| {
        points[4] = Landmark::new(0.50, 0.50, 0.0);
        points[8] = Landmark::new(0.52, 0.51, 0.0);
        points[12] = Landmark::new(0.5, 0.30, 0.0);
        points[10] = Landmark::new(0.5, 0.45, 0.0);
    });
    assert_eq!(mirage::classify(&both), Gesture::Heart);

    let (mut engine, sender) = MorphEngine::new(&test_config(64));
    assert!(sender.send(both));
    engine.tick();

    let stats = engine.stats();
    assert_eq!(stats.hearts, 1);
    assert_eq!(stats.saturns, 0);
}

// ============================================================================
// COLOR AND ORIENTATION FOLLOW THE HAND
// ============================================================================

#[test]
fn verify_color_and_orientation_track_the_frame() {
    let (mut engine, sender) = MorphEngine::new(&test_config(64));

    let frame = posed_frame(|points| {
        points[0] = Landmark::new(0.25, 0.75, 0.0);
        points[8] = Landmark::new(0.9, 0.1, 0.0);
    });
    assert!(sender.send(frame));
    engine.tick();

    // Color: (x8, y8, 1 - x8) broadcast to every particle.
    for chunk in engine.cloud().colors().chunks_exact(3) {
        assert!((chunk[0] - 0.9).abs() < 1e-6);
        assert!((chunk[1] - 0.1).abs() < 1e-6);
        assert!((chunk[2] - 0.1).abs() < 1e-5);
    }

    // Orientation: wrist * pi per axis.
    let o = engine.orientation();
    assert!((o.yaw - 0.25 * std::f32::consts::PI).abs() < 1e-6);
    assert!((o.pitch - 0.75 * std::f32::consts::PI).abs() < 1e-6);
}

// ============================================================================
// MALFORMED FRAMES FAIL CLOSED AT THE BOUNDARY
// ============================================================================

#[test]
fn verify_malformed_frame_cannot_enter_the_pipeline() {
    let short = [Landmark::default(); 20];
    let err = HandFrame::from_landmarks(&short).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed landmark frame: expected 21 points, got 20"
    );

    // The engine only ever sees validated frames; a rejected frame is
    // indistinguishable from "no hand detected".
    let (mut engine, _sender) = MorphEngine::new(&test_config(32));
    engine.tick();
    assert_eq!(engine.stats().frames_applied, 0);
}
