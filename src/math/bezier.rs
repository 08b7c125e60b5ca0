use cgmath::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::util::Interval;
use super::{Point2d, Vector2d};
use super::curve::ParametricCurve2d;

/// A cubic bezier curve
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubicBezier2d {
    points: [Point2d; 4]
}

/// The power-basis form of a [CubicBezier2d].
///
/// `p(t) = a·t³ + b·t² + c·t + start`, evaluated independently on each axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicCoefficients {
    pub a: Vector2d,
    pub b: Vector2d,
    pub c: Vector2d,
    pub start: Point2d,
}

impl CubicBezier2d {
    pub const fn new(points: &[Point2d; 4]) -> Self {
        Self { points: *points }
    }

    /// Creates a curve from its start point, two control points and end point.
    #[allow(clippy::too_many_arguments)]
    pub fn from_coords(
        start_x: f64,
        start_y: f64,
        control_a_x: f64,
        control_a_y: f64,
        control_b_x: f64,
        control_b_y: f64,
        end_x: f64,
        end_y: f64,
    ) -> Self {
        Self::new(&[
            Point2d::new(start_x, start_y),
            Point2d::new(control_a_x, control_a_y),
            Point2d::new(control_b_x, control_b_y),
            Point2d::new(end_x, end_y),
        ])
    }

    pub fn points(&self) -> &[Point2d; 4] {
        &self.points
    }

    pub fn start(&self) -> Point2d {
        self.points[0]
    }

    /// The control point on the start side.
    pub fn control_a(&self) -> Point2d {
        self.points[1]
    }

    /// The control point on the end side.
    pub fn control_b(&self) -> Point2d {
        self.points[2]
    }

    pub fn end(&self) -> Point2d {
        self.points[3]
    }

    /// Converts the curve to power-basis polynomial coefficients.
    pub fn coefficients(&self) -> CubicCoefficients {
        let [p0, p1, p2, p3] = self.points;
        let c = 3.0 * (p1 - p0);
        let b = 3.0 * (p2 - p1) - c;
        let a = (p3 - p0) - c - b;
        CubicCoefficients { a, b, c, start: p0 }
    }
}

impl ParametricCurve2d for CubicBezier2d {
    fn sample(&self, t: f64) -> Point2d {
        let t1 = 1.0 - t;
        Point2d::from_vec(t1 * t1 * t1 * self.points[0].to_vec()
            + 3.0 * t1 * t1 * t * self.points[1].to_vec()
            + 3.0 * t1 * t * t * self.points[2].to_vec()
            + t * t * t * self.points[3].to_vec())
    }

    fn bounds(&self) -> Interval<f64> {
        Interval { min: 0.0, max: 1.0 }
    }

    fn sample_dt(&self, t: f64) -> Vector2d {
        let t1 = 1.0 - t;
        (-3.0 * t1 * t1) * self.points[0].to_vec()
            + (9.0 * t * t - 12.0 * t + 3.0) * self.points[1].to_vec()
            + (-9.0 * t * t + 6.0 * t) * self.points[2].to_vec()
            + (3.0 * t * t) * self.points[3].to_vec()
    }
}

impl ParametricCurve2d for CubicCoefficients {
    fn sample(&self, t: f64) -> Point2d {
        self.start + (self.a * (t * t * t) + self.b * (t * t) + self.c * t)
    }

    fn bounds(&self) -> Interval<f64> {
        Interval { min: 0.0, max: 1.0 }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::{Rng, SeedableRng};

    fn random_curve(rng: &mut impl Rng) -> CubicBezier2d {
        let mut point = || Point2d::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
        CubicBezier2d::new(&[point(), point(), point(), point()])
    }

    #[test]
    fn coefficients() {
        let curve = CubicBezier2d::from_coords(0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0);
        let poly = curve.coefficients();
        assert_eq!(poly.c, Vector2d::new(0.0, 30.0));
        assert_eq!(poly.b, Vector2d::new(30.0, -30.0));
        assert_eq!(poly.a, Vector2d::new(-20.0, 0.0));
        assert_eq!(poly.start, Point2d::new(0.0, 0.0));
    }

    #[test]
    fn power_basis_matches_bernstein() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"Vegemite sandwhich is not fun...");
        for _i in 0..100 {
            let curve = random_curve(&mut rng);
            let poly = curve.coefficients();
            for j in 0..=10 {
                let t = j as f64 / 10.0;
                let p1 = curve.sample(t);
                let p2 = poly.sample(t);
                assert_approx_eq!(p1.x, p2.x, 1e-9);
                assert_approx_eq!(p1.y, p2.y, 1e-9);
            }
            assert_eq!(poly.sample(0.0), curve.start());
        }
    }

    #[test]
    fn derivative() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"Vegemite sandwhich is not fun...");
        for _i in 0..100 {
            let curve = random_curve(&mut rng);
            let poly = curve.coefficients();
            let t = rng.gen_range(0.0..0.99);
            let exact = curve.sample_dt(t);
            let approx = poly.sample_dt(t);
            assert_approx_eq!(exact.x, approx.x, 0.5);
            assert_approx_eq!(exact.y, approx.y, 0.5);
        }
    }
}
