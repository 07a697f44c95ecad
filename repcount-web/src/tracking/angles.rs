//! Joint angle calculation using dot product
//!
//! Angle at the middle landmark between the two segments that meet there,
//! e.g. shoulder-elbow-wrist for the elbow or hip-knee-ankle for the knee.

use nalgebra::Vector2;

use super::frame::Landmark;

/// Segments shorter than this (normalized units) have no usable direction
pub const MIN_SEGMENT_LENGTH: f32 = 1e-6;

/// Calculate the angle at vertex `b` in degrees, 0-180
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
/// with v1 = a - b and v2 = c - b. Only x/y are used.
///
/// Returns `None` when either segment has zero length (duplicate or
/// collapsed landmarks) or a coordinate is not finite.
///
/// - 180° = fully straight
/// - 90° = right angle
/// - 0° = folded back on itself
pub fn joint_angle(a: &Landmark, b: &Landmark, c: &Landmark) -> Option<f32> {
    let v1 = Vector2::new(a.x - b.x, a.y - b.y);
    let v2 = Vector2::new(c.x - b.x, c.y - b.y);

    let mag1 = v1.norm();
    let mag2 = v2.norm();
    // Negated so NaN magnitudes are rejected too
    if !(mag1 >= MIN_SEGMENT_LENGTH && mag2 >= MIN_SEGMENT_LENGTH) {
        return None;
    }

    let ratio = v1.dot(&v2) / (mag1 * mag2);
    if !ratio.is_finite() {
        return None;
    }

    // Rounding can push the ratio just past ±1, which acos rejects
    let cos_angle = ratio.clamp(-1.0, 1.0);

    Some(cos_angle.acos().to_degrees())
}
