use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::{heading, uniform_points_along_curve, CubicBezier2d, Point2d};
use crate::render::{stroke_curve, PathContext};
use crate::{RepeatMode, TraversalError};

/// Settings used to build a [CurveTraversal].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraversalConfig {
    /// The number of points to sample along the curve.
    pub resolution: usize,
    /// The behaviour at the end of the path.
    pub repeat_mode: RepeatMode,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            resolution: 100,
            repeat_mode: RepeatMode::Stop,
        }
    }
}

/// Steps an object along a cubic bezier curve, one sampled point at a time.
///
/// The caller drives progression: each call to [CurveTraversal::next_point]
/// advances by one sample, and what happens at the end of the path is governed
/// by the [RepeatMode].
#[derive(Clone, Debug)]
pub struct CurveTraversal {
    /// The curve being traversed.
    curve: CubicBezier2d,
    /// The sampled points, in order from the start of the curve to the end.
    points: Vec<Point2d>,
    /// Whether `points` has been built by `create_point_data`.
    sampled: bool,
    /// The index of the next point to return, in the current direction of travel.
    cursor: usize,
    /// Whether the path is currently being travelled from end to start.
    reversed: bool,
    /// Set once a `Stop` traversal has reached the end point.
    at_end: bool,
    /// The behaviour at the end of the path.
    repeat_mode: RepeatMode,
    /// The most recently computed direction of travel in radians.
    direction: f64,
}

impl CurveTraversal {
    /// Creates a traversal of the curve with the given start point, control points and end point.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_x: f64,
        start_y: f64,
        control_a_x: f64,
        control_a_y: f64,
        control_b_x: f64,
        control_b_y: f64,
        end_x: f64,
        end_y: f64,
    ) -> Self {
        Self::from_curve(CubicBezier2d::from_coords(
            start_x,
            start_y,
            control_a_x,
            control_a_y,
            control_b_x,
            control_b_y,
            end_x,
            end_y,
        ))
    }

    /// Creates a traversal of the given curve.
    ///
    /// The path initially holds only the start point; call
    /// [CurveTraversal::create_point_data] before traversing it.
    pub fn from_curve(curve: CubicBezier2d) -> Self {
        Self {
            curve,
            points: vec![curve.start()],
            sampled: false,
            cursor: 0,
            reversed: false,
            at_end: false,
            repeat_mode: RepeatMode::default(),
            direction: 0.0,
        }
    }

    /// Creates a traversal of the given curve, sampled and configured as per `config`.
    pub fn from_config(curve: CubicBezier2d, config: &TraversalConfig) -> Result<Self, TraversalError> {
        let mut traversal = Self::from_curve(curve);
        traversal.set_repeat_mode(config.repeat_mode);
        traversal.create_point_data(config.resolution)?;
        Ok(traversal)
    }

    /// The curve being traversed.
    pub fn curve(&self) -> &CubicBezier2d {
        &self.curve
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat_mode
    }

    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.repeat_mode = mode;
    }

    /// Whether a [RepeatMode::Stop] traversal has come to rest at the end point.
    ///
    /// Always false under the other repeat modes.
    pub fn is_at_end(&self) -> bool {
        self.at_end && self.repeat_mode == RepeatMode::Stop
    }

    /// The sampled points, in order from the start of the curve to the end.
    pub fn points(&self) -> &[Point2d] {
        &self.points
    }

    /// The index of the next point to be returned, counted along the current direction of travel.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Samples `length` points along the curve, evenly spaced in the curve parameter.
    ///
    /// The first point is exactly the start point. Any previous samples are
    /// replaced, and the traversal restarts from the beginning of the new path.
    pub fn create_point_data(&mut self, length: usize) -> Result<&[Point2d], TraversalError> {
        if length < 2 {
            return Err(TraversalError::InvalidLength { length });
        }

        let poly = self.curve.coefficients();
        debug!(
            "sampling {} points (a = {:?}, b = {:?}, c = {:?})",
            length, poly.a, poly.b, poly.c
        );
        self.points = uniform_points_along_curve(&poly, length);
        self.points[0] = self.curve.start();
        self.sampled = true;
        self.cursor = 0;
        self.reversed = false;
        self.at_end = false;

        Ok(&self.points)
    }

    /// Strokes the curve into the given drawing context.
    pub fn render<C: PathContext + ?Sized>(&self, ctx: &mut C) -> Result<(), C::Error> {
        stroke_curve(&self.curve, ctx)
    }

    /// Returns the current point and advances to the next one.
    ///
    /// On the call that runs off the end of the path:
    /// * [RepeatMode::Stop] returns the exact end point of the curve, and keeps
    ///   doing so on every later call.
    /// * [RepeatMode::PingPong] returns the last point and turns around, so the
    ///   following call returns the second-to-last point.
    /// * [RepeatMode::Loop] returns the last point, and the following call
    ///   returns the first point.
    pub fn next_point(&mut self) -> Result<Point2d, TraversalError> {
        if !self.sampled {
            return Err(TraversalError::NotSampled);
        }

        let point = self.point_at(self.cursor);
        self.cursor += 1;
        if self.cursor < self.points.len() {
            return Ok(point);
        }

        match self.repeat_mode {
            RepeatMode::Stop => {
                if !self.at_end {
                    trace!("reached end of path at {:?}", self.curve.end());
                }
                self.at_end = true;
                self.cursor -= 1;
                Ok(self.curve.end())
            }
            RepeatMode::PingPong => {
                trace!("bouncing at {:?}", point);
                self.at_end = false;
                self.reversed = !self.reversed;
                self.cursor = 1;
                Ok(point)
            }
            RepeatMode::Loop => {
                trace!("looping back to {:?}", self.curve.start());
                self.at_end = false;
                self.cursor = 0;
                Ok(point)
            }
        }
    }

    /// The current direction of travel in radians, in the range `(-π, π]`.
    ///
    /// Measured from the point under the cursor towards the point after it.
    /// When there is no point after it, the last computed direction is
    /// returned instead (zero if none has been computed yet).
    pub fn direction_radian(&mut self) -> f64 {
        if self.cursor + 1 < self.points.len() {
            let current = self.point_at(self.cursor);
            let next = self.point_at(self.cursor + 1);
            self.direction = heading(current, next);
        }
        self.direction
    }

    /// The point at `idx` along the current direction of travel.
    fn point_at(&self, idx: usize) -> Point2d {
        if self.reversed {
            self.points[self.points.len() - 1 - idx]
        } else {
            self.points[idx]
        }
    }
}
