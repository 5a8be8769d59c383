//! Facial-expression heuristics over the tracked face mesh.
//!
//! Two measurements drive everything: the mouth's height/width ratio and the
//! average eyelid opening. Alarm (wide mouth, wide eyes) outranks the smile
//! check; anything else is neutral.

use crate::geometry::distance_3d;
use crate::types::{EmotionLabel, Point3};

/// Minimum face-mesh size; frames with fewer landmarks classify as neutral.
pub const FACE_LANDMARKS: usize = 468;

const UPPER_LIP: usize = 13;
const LOWER_LIP: usize = 14;
const MOUTH_LEFT: usize = 61;
const MOUTH_RIGHT: usize = 291;
const LEFT_EYE_TOP: usize = 159;
const LEFT_EYE_BOTTOM: usize = 145;
const RIGHT_EYE_TOP: usize = 386;
const RIGHT_EYE_BOTTOM: usize = 374;

// Fixed calibration constants in normalized mesh units. There is no
// per-user neutral-face baseline; accuracy degrades on faces far from the
// tuning set.
const MOUTH_OPEN_RATIO: f32 = 0.5;
const EYES_WIDE_MIN: f32 = 0.035;

/// Maps one face frame to an emotion label. Fail-soft: a frame with fewer
/// than 468 landmarks reads as `Neutral`, never an error.
pub fn classify(face: &[Point3]) -> EmotionLabel {
    if face.len() < FACE_LANDMARKS {
        return EmotionLabel::Neutral;
    }

    let mouth_height = distance_3d(face[UPPER_LIP], face[LOWER_LIP]);
    let mouth_width = distance_3d(face[MOUTH_LEFT], face[MOUTH_RIGHT]);
    let mouth_ratio = mouth_height / mouth_width;

    let avg_eye_open = (distance_3d(face[LEFT_EYE_TOP], face[LEFT_EYE_BOTTOM])
        + distance_3d(face[RIGHT_EYE_TOP], face[RIGHT_EYE_BOTTOM]))
        / 2.0;

    if mouth_ratio > MOUTH_OPEN_RATIO && avg_eye_open > EYES_WIDE_MIN {
        return EmotionLabel::Urgent;
    }

    // Corner lift: both mouth corners above the upper lip (y grows downward).
    if face[MOUTH_LEFT].y < face[UPPER_LIP].y && face[MOUTH_RIGHT].y < face[UPPER_LIP].y {
        return EmotionLabel::Happy;
    }

    EmotionLabel::Neutral
}
