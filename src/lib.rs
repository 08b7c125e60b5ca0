//! Sampling and stepwise traversal of cubic bezier curves.
//!
//! A [CurveTraversal] samples a cubic bezier curve at evenly spaced parameter
//! values, then hands out one point per call so that an object can be moved
//! along the curve by an external animation loop.

pub use cgmath;
pub use error::TraversalError;
pub use render::{PathCommand, PathContext, PathRecorder};
pub use repeat::RepeatMode;
pub use traversal::{CurveTraversal, TraversalConfig};
pub use util::Interval;

mod error;
pub mod math;
mod render;
mod repeat;
mod traversal;
mod util;
