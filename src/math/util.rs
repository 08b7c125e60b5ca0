use super::Point2d;

/// The angle in radians of the direction of travel from `from` to `to`.
///
/// Measured anticlockwise from the positive x-axis, in the range `(-π, π]`.
pub fn heading(from: Point2d, to: Point2d) -> f64 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}
