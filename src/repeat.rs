//! End-of-path behaviour for curve traversal.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::TraversalError;

/// What a [CurveTraversal](crate::CurveTraversal) does once it runs off the end of its path.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RepeatMode {
    /// Traverse once, then hold at the end point.
    #[default]
    Stop,
    /// Reverse direction and head back the way it came.
    PingPong,
    /// Jump back to the start point.
    Loop,
}

impl TryFrom<u8> for RepeatMode {
    type Error = TraversalError;

    /// Converts a numeric mode code: 0 stops, 1 ping-pongs and 2 loops.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(RepeatMode::Stop),
            1 => Ok(RepeatMode::PingPong),
            2 => Ok(RepeatMode::Loop),
            _ => Err(TraversalError::InvalidRepeatMode(code.to_string())),
        }
    }
}

impl From<RepeatMode> for u8 {
    fn from(mode: RepeatMode) -> u8 {
        match mode {
            RepeatMode::Stop => 0,
            RepeatMode::PingPong => 1,
            RepeatMode::Loop => 2,
        }
    }
}

impl FromStr for RepeatMode {
    type Err = TraversalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stop" => Ok(RepeatMode::Stop),
            "pingpong" | "ping-pong" | "ping_pong" => Ok(RepeatMode::PingPong),
            "loop" => Ok(RepeatMode::Loop),
            _ => Err(TraversalError::InvalidRepeatMode(s.to_owned())),
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RepeatMode::Stop => "stop",
            RepeatMode::PingPong => "pingpong",
            RepeatMode::Loop => "loop",
        };
        f.write_str(name)
    }
}
