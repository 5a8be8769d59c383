//! Synthesized landmark fixtures for the module tests.
//!
//! Hands follow the 21-point numbering (wrist 0, thumb 1-4, then four
//! fingers of four joints each); faces are a flat 468-point mesh with only
//! the landmarks the classifier reads placed meaningfully. All coordinates
//! are normalized with y growing downward.

use crate::types::Point3;

fn p(x: f32, y: f32) -> Point3 {
    Point3::new(x, y, 0.0)
}

// Finger columns, knuckle row at y 0.55, wrist at (0.50, 0.90).
const FINGER_X: [f32; 4] = [0.40, 0.50, 0.58, 0.66];

/// Builds a hand with each digit extended or curled. The thumb flag picks
/// between a laterally spread thumb (tip clear of the middle knuckle, below
/// its IP joint) and one tucked against the palm.
pub fn hand(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> Vec<Point3> {
    let mut points = vec![Point3::default(); 21];
    points[0] = p(0.50, 0.90);

    if thumb {
        points[1] = p(0.42, 0.80);
        points[2] = p(0.38, 0.74);
        points[3] = p(0.34, 0.68);
        points[4] = p(0.24, 0.70);
    } else {
        points[1] = p(0.44, 0.78);
        points[2] = p(0.42, 0.70);
        points[3] = p(0.46, 0.56);
        points[4] = p(0.48, 0.58);
    }

    for (finger, extended) in [index, middle, ring, pinky].into_iter().enumerate() {
        let x = FINGER_X[finger];
        let base = 5 + finger * 4;
        points[base] = p(x, 0.55);
        points[base + 1] = p(x, 0.44);
        if extended {
            points[base + 2] = p(x, 0.36);
            points[base + 3] = p(x, 0.28);
        } else {
            points[base + 2] = p(x, 0.52);
            points[base + 3] = p(x, 0.62);
        }
    }

    points
}

/// Fist with the thumb raised: all four fingers curled, thumb tip above its
/// IP joint and clear of the palm.
pub fn thumbs_up() -> Vec<Point3> {
    let mut points = hand(false, false, false, false, false);
    points[1] = p(0.42, 0.78);
    points[2] = p(0.36, 0.70);
    points[3] = p(0.32, 0.62);
    points[4] = p(0.30, 0.52);
    points
}

/// OK sign: thumb and index tips touching, the other three fingers up.
pub fn ok_sign() -> Vec<Point3> {
    let mut points = hand(false, true, true, true, true);
    // Curl the index into the circle.
    points[6] = p(0.40, 0.44);
    points[7] = p(0.42, 0.40);
    points[8] = p(0.44, 0.46);
    // Thumb reaches up to meet it.
    points[1] = p(0.44, 0.78);
    points[2] = p(0.42, 0.70);
    points[3] = p(0.44, 0.60);
    points[4] = p(0.44, 0.48);
    points
}

fn base_face() -> Vec<Point3> {
    let mut points = vec![Point3::new(0.5, 0.5, 0.0); 468];
    // Lips and mouth corners.
    points[13] = p(0.50, 0.60);
    points[14] = p(0.50, 0.62);
    points[61] = p(0.44, 0.61);
    points[291] = p(0.56, 0.61);
    // Eyelids, nearly relaxed.
    points[159] = p(0.44, 0.400);
    points[145] = p(0.44, 0.425);
    points[386] = p(0.56, 0.400);
    points[374] = p(0.56, 0.425);
    points
}

/// Resting face: closed mouth, relaxed eyes, level mouth corners.
pub fn neutral_face() -> Vec<Point3> {
    base_face()
}

/// Smiling face: both mouth corners lifted above the upper lip.
pub fn happy_face() -> Vec<Point3> {
    let mut points = base_face();
    points[61] = p(0.44, 0.58);
    points[291] = p(0.56, 0.58);
    points
}

/// Alarmed face: mouth wide open and eyes wide.
pub fn urgent_face() -> Vec<Point3> {
    let mut points = base_face();
    points[14] = p(0.50, 0.68);
    points[145] = p(0.44, 0.44);
    points[374] = p(0.56, 0.44);
    points
}
