//! Geometric sign classification over one hand's 21 tracked landmarks.
//!
//! Pure per-frame heuristics: finger extension is judged by comparing each
//! tip's planar distance from the wrist against its PIP joint's, and the
//! resulting shape is matched against an ordered rule table.

use crate::geometry::distance_2d;
use crate::types::{GestureLabel, Point3};

/// A well-formed hand frame carries exactly this many landmarks.
pub const HAND_LANDMARKS: usize = 21;

const WRIST: usize = 0;
const THUMB_IP: usize = 3;
const THUMB_TIP: usize = 4;
const INDEX_TIP: usize = 8;
const MIDDLE_MCP: usize = 9;

// Tip/PIP joint pairs for index, middle, ring, pinky.
const FINGER_JOINTS: [(usize, usize); 4] = [(8, 6), (12, 10), (16, 14), (20, 18)];

// The thumb moves laterally rather than curling toward the wrist, so its
// extension is judged by clearance from the middle-finger knuckle instead.
const THUMB_SPREAD_MIN: f32 = 0.05;
const PINCH_MAX: f32 = 0.05;

/// Boolean shape summary of one hand frame, the input alphabet of the rule
/// table below.
#[derive(Clone, Copy, Debug)]
pub struct HandShape {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
    /// Thumb tip sits above its IP joint in screen space (y grows downward).
    pub thumb_tip_above_ip: bool,
    /// Thumb tip touches the index tip.
    pub pinch: bool,
}

impl HandShape {
    /// Extracts the shape summary, or `None` for a malformed frame.
    pub fn from_landmarks(hand: &[Point3]) -> Option<HandShape> {
        if hand.len() != HAND_LANDMARKS {
            return None;
        }

        let wrist = hand[WRIST];
        let extended =
            |(tip, pip): (usize, usize)| distance_2d(hand[tip], wrist) > distance_2d(hand[pip], wrist);
        let [index, middle, ring, pinky] = FINGER_JOINTS.map(extended);

        Some(HandShape {
            thumb: distance_2d(hand[THUMB_TIP], hand[MIDDLE_MCP]) > THUMB_SPREAD_MIN,
            index,
            middle,
            ring,
            pinky,
            thumb_tip_above_ip: hand[THUMB_TIP].y < hand[THUMB_IP].y,
            pinch: distance_2d(hand[THUMB_TIP], hand[INDEX_TIP]) < PINCH_MAX,
        })
    }
}

/// Ordered decision table: the first matching rule wins. The order is part
/// of the contract — a thumbs-up must be caught before the bare-fist rule,
/// and the open palm before any partial-extension shape.
static RULES: &[(fn(&HandShape) -> bool, GestureLabel)] = &[
    (
        |s| s.thumb && s.index && s.middle && s.ring && s.pinky,
        GestureLabel::Hello,
    ),
    (
        |s| !s.thumb && s.index && s.middle && !s.ring && !s.pinky,
        GestureLabel::Victory,
    ),
    (
        |s| !s.index && !s.middle && !s.ring && !s.pinky && s.thumb_tip_above_ip,
        GestureLabel::Good,
    ),
    (
        |s| s.thumb && s.index && !s.middle && !s.ring && s.pinky,
        GestureLabel::Love,
    ),
    (
        |s| !s.thumb && s.index && !s.middle && !s.ring && !s.pinky,
        GestureLabel::Look,
    ),
    (
        |s| !s.thumb && !s.index && !s.middle && !s.ring && !s.pinky,
        GestureLabel::Help,
    ),
    (
        |s| s.thumb && !s.index && !s.middle && !s.ring && s.pinky,
        GestureLabel::Call,
    ),
    (
        |s| s.pinch && s.middle && s.ring && s.pinky,
        GestureLabel::Thanks,
    ),
];

/// Maps one hand frame to a sign label. Fails closed: a frame without
/// exactly 21 landmarks, or a shape no rule covers, yields `None`.
pub fn classify(hand: &[Point3]) -> Option<GestureLabel> {
    let shape = HandShape::from_landmarks(hand)?;
    RULES
        .iter()
        .find(|(rule, _)| rule(&shape))
        .map(|&(_, label)| label)
}
