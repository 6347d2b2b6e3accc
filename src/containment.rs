use super::*;

/// Nearest point of the closed triangular region. Out-of-plane points are
/// pulled onto the plane as well.
pub fn clamp_to_triangle(triangle: &Triangle, point: &Point3) -> Point3 {
    triangle.closest_point(point)
}

#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[inline]
pub fn is_unit(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}
