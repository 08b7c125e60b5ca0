//! Drawing a curve through an external 2D path-stroking context.

use std::convert::Infallible;

use crate::math::{CubicBezier2d, Point2d};

/// A 2D drawing context that can stroke paths.
///
/// Mirrors the path API of an HTML canvas. Failures are reported through
/// the context's own error type.
pub trait PathContext {
    type Error;

    fn begin_path(&mut self) -> Result<(), Self::Error>;

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;

    /// Adds a cubic bezier segment from the current point to `(x, y)`.
    fn bezier_curve_to(
        &mut self,
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    ) -> Result<(), Self::Error>;

    fn stroke(&mut self) -> Result<(), Self::Error>;
}

/// Strokes the curve as a single path.
pub fn stroke_curve<C: PathContext + ?Sized>(curve: &CubicBezier2d, ctx: &mut C) -> Result<(), C::Error> {
    let (start, a, b, end) = (curve.start(), curve.control_a(), curve.control_b(), curve.end());
    ctx.begin_path()?;
    ctx.move_to(start.x, start.y)?;
    ctx.bezier_curve_to(a.x, a.y, b.x, b.y, end.x, end.y)?;
    ctx.stroke()
}

/// A single call made on a [PathContext].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCommand {
    BeginPath,
    MoveTo(Point2d),
    BezierCurveTo(Point2d, Point2d, Point2d),
    Stroke,
}

/// A [PathContext] that records the calls made on it.
#[derive(Clone, Debug, Default)]
pub struct PathRecorder {
    pub commands: Vec<PathCommand>,
}

impl PathRecorder {
    pub fn new() -> Self {
        Default::default()
    }
}

impl PathContext for PathRecorder {
    type Error = Infallible;

    fn begin_path(&mut self) -> Result<(), Self::Error> {
        self.commands.push(PathCommand::BeginPath);
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), Self::Error> {
        self.commands.push(PathCommand::MoveTo(Point2d::new(x, y)));
        Ok(())
    }

    fn bezier_curve_to(
        &mut self,
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    ) -> Result<(), Self::Error> {
        self.commands.push(PathCommand::BezierCurveTo(
            Point2d::new(cp1x, cp1y),
            Point2d::new(cp2x, cp2y),
            Point2d::new(x, y),
        ));
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), Self::Error> {
        self.commands.push(PathCommand::Stroke);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn strokes_in_order() {
        let curve = CubicBezier2d::from_coords(40.0, 20.0, 150.0, 600.0, 300.0, 0.0, 600.0, 460.0);
        let mut recorder = PathRecorder::new();
        stroke_curve(&curve, &mut recorder).unwrap();
        assert_eq!(
            recorder.commands,
            vec![
                PathCommand::BeginPath,
                PathCommand::MoveTo(Point2d::new(40.0, 20.0)),
                PathCommand::BezierCurveTo(
                    Point2d::new(150.0, 600.0),
                    Point2d::new(300.0, 0.0),
                    Point2d::new(600.0, 460.0),
                ),
                PathCommand::Stroke,
            ]
        );
    }
}
