use crate::util::Interval;
use super::{Point2d, Vector2d};

/// A parametric curve in 2D space.
pub trait ParametricCurve2d {
    /// Samples the parametric curve.
    fn sample(&self, t: f64) -> Point2d;

    /// Returns the minimum and maximum t-values that define the bounds of the curve.
    fn bounds(&self) -> Interval<f64>;

    /// Samples the derivative of the parametric curve.
    ///
    /// The default implementation approximates the derivative by sampling
    /// two very nearby points along the curve.
    fn sample_dt(&self, t: f64) -> Vector2d {
        let delta = self.bounds().length() * 0.0001;
        let p1 = self.sample(t);
        let p2 = self.sample(t + delta);
        (p2 - p1) / delta
    }
}

/// Samples `count` points along the curve, evenly spaced in `t`.
///
/// The first point is sampled at the lower bound and the last at the upper bound.
/// Spacing is uniform in the curve parameter, not in arc length, so points bunch
/// up where the curve moves slowly. `count` must be at least 2.
pub fn uniform_points_along_curve(curve: &impl ParametricCurve2d, count: usize) -> Vec<Point2d> {
    debug_assert!(count >= 2);
    let bounds = curve.bounds();
    let steps = (count - 1) as f64;
    (0..count)
        .map(|i| curve.sample(bounds.lerp(i as f64 / steps)))
        .collect()
}
