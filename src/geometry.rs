use crate::types::Point3;

/// Euclidean distance in the image plane, ignoring depth. The hand rules
/// compare x/y only; tracker z is on a different scale per hand.
pub fn distance_2d(a: Point3, b: Point3) -> f32 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Full 3D Euclidean distance, used by the face-mesh heuristics.
pub fn distance_3d(a: Point3, b: Point3) -> f32 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2) + (a.z - b.z).powi(2)).sqrt()
}
