//! # Gesture Classifier
//!
//! One landmark frame in, one discrete decision out.
//!
//! Rules are evaluated in a fixed precedence order, first match wins:
//!
//! 1. **Pinch** (thumb tip near index tip in the image plane) -> Heart
//! 2. **Middle finger raised** (tip above its PIP joint)      -> Saturn
//! 3. **Open hand** (index and pinky both extended)           -> Scatter
//! 4. otherwise                                               -> NoChange
//!
//! Classification is pure and per-frame: no hysteresis, no debounce.
//! Rapid flicker between gestures across consecutive frames is accepted
//! behavior, not something to smooth away here.

use crate::landmarks::HandFrame;

/// Maximum thumb-to-index XY distance that still counts as a pinch,
/// in normalized landmark units.
pub const PINCH_THRESHOLD: f32 = 0.05;

/// The per-frame gesture decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Pinch detected: morph to the heart shape.
    Heart,
    /// Middle finger raised: morph to the saturn shape.
    Saturn,
    /// Open hand: scatter the cloud.
    Scatter,
    /// No rule matched: leave the current target untouched.
    NoChange,
}

/// Classifies one frame.
///
/// Smaller `y` means higher in the image, so "finger extended upward"
/// reads as `tip.y < pip.y`.
#[must_use]
pub fn classify(frame: &HandFrame) -> Gesture {
    let pinch = frame.thumb_tip().xy_distance(frame.index_tip()) < PINCH_THRESHOLD;
    if pinch {
        return Gesture::Heart;
    }

    let middle_raised = frame.middle_tip().y < frame.middle_pip().y;
    if middle_raised {
        return Gesture::Saturn;
    }

    let open_hand = frame.index_tip().y < frame.index_pip().y
        && frame.pinky_tip().y < frame.pinky_pip().y;
    if open_hand {
        return Gesture::Scatter;
    }

    Gesture::NoChange
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{
        Landmark, INDEX_PIP, INDEX_TIP, LANDMARK_COUNT, MIDDLE_PIP, MIDDLE_TIP, PINKY_TIP,
        PINKY_PIP, THUMB_TIP,
    };

    /// A resting hand that matches no rule: thumb and index far apart,
    /// every tracked tip level with its PIP joint.
    fn resting_hand() -> [Landmark; LANDMARK_COUNT] {
        let mut points = [Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        points[THUMB_TIP] = Landmark::new(0.2, 0.5, 0.0);
        points[INDEX_TIP] = Landmark::new(0.8, 0.5, 0.0);
        points
    }

    #[test]
    fn test_no_rule_matches_gives_no_change() {
        let frame = HandFrame::from(resting_hand());
        assert_eq!(classify(&frame), Gesture::NoChange);
    }

    #[test]
    fn test_pinch_gives_heart() {
        // Thumb at (0.50, 0.50), index at (0.52, 0.51): distance ~0.022.
        let mut points = resting_hand();
        points[THUMB_TIP] = Landmark::new(0.50, 0.50, 0.0);
        points[INDEX_TIP] = Landmark::new(0.52, 0.51, 0.0);

        let frame = HandFrame::from(points);
        assert_eq!(classify(&frame), Gesture::Heart);
    }

    #[test]
    fn test_middle_raised_gives_saturn() {
        // Middle tip above its PIP joint, pinch distance well open (0.3).
        let mut points = resting_hand();
        points[THUMB_TIP] = Landmark::new(0.3, 0.5, 0.0);
        points[INDEX_TIP] = Landmark::new(0.6, 0.5, 0.0);
        points[MIDDLE_TIP] = Landmark::new(0.5, 0.30, 0.0);
        points[MIDDLE_PIP] = Landmark::new(0.5, 0.45, 0.0);

        let frame = HandFrame::from(points);
        assert_eq!(classify(&frame), Gesture::Saturn);
    }

    #[test]
    fn test_open_hand_gives_scatter() {
        let mut points = resting_hand();
        points[INDEX_TIP] = Landmark::new(0.8, 0.30, 0.0);
        points[INDEX_PIP] = Landmark::new(0.8, 0.45, 0.0);
        points[PINKY_TIP] = Landmark::new(0.3, 0.30, 0.0);
        points[PINKY_PIP] = Landmark::new(0.3, 0.45, 0.0);

        let frame = HandFrame::from(points);
        assert_eq!(classify(&frame), Gesture::Scatter);
    }

    #[test]
    fn test_pinch_wins_over_middle_raised() {
        // Frame satisfies both rule 1 and rule 2: precedence says Heart.
        let mut points = resting_hand();
        points[THUMB_TIP] = Landmark::new(0.50, 0.50, 0.0);
        points[INDEX_TIP] = Landmark::new(0.52, 0.51, 0.0);
        points[MIDDLE_TIP] = Landmark::new(0.5, 0.30, 0.0);
        points[MIDDLE_PIP] = Landmark::new(0.5, 0.45, 0.0);

        let frame = HandFrame::from(points);
        assert_eq!(classify(&frame), Gesture::Heart);
    }

    #[test]
    fn test_middle_raised_wins_over_open_hand() {
        let mut points = resting_hand();
        points[MIDDLE_TIP] = Landmark::new(0.5, 0.30, 0.0);
        points[MIDDLE_PIP] = Landmark::new(0.5, 0.45, 0.0);
        points[INDEX_TIP] = Landmark::new(0.8, 0.30, 0.0);
        points[INDEX_PIP] = Landmark::new(0.8, 0.45, 0.0);
        points[PINKY_TIP] = Landmark::new(0.3, 0.30, 0.0);
        points[PINKY_PIP] = Landmark::new(0.3, 0.45, 0.0);

        let frame = HandFrame::from(points);
        assert_eq!(classify(&frame), Gesture::Saturn);
    }

    #[test]
    fn test_one_extended_finger_is_not_open_hand() {
        // Index extended but pinky curled: rule 3 needs both.
        let mut points = resting_hand();
        points[INDEX_TIP] = Landmark::new(0.8, 0.30, 0.0);
        points[INDEX_PIP] = Landmark::new(0.8, 0.45, 0.0);

        let frame = HandFrame::from(points);
        assert_eq!(classify(&frame), Gesture::NoChange);
    }

    #[test]
    fn test_pinch_threshold_is_exclusive() {
        // Exactly at the threshold: not a pinch.
        let mut points = resting_hand();
        points[THUMB_TIP] = Landmark::new(0.50, 0.5, 0.0);
        points[INDEX_TIP] = Landmark::new(0.55, 0.5, 0.0);

        let frame = HandFrame::from(points);
        assert_eq!(classify(&frame), Gesture::NoChange);
    }
}
