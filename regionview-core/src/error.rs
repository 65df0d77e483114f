//! Error types for building region coordinate systems

use crate::types::Position;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegionError {
    #[error("Malformed interval: {feature_type} {start}-{stop} has start after stop")]
    MalformedInterval {
        feature_type: String,
        start: Position,
        stop: Position,
    },

    #[error("Empty region set: no intervals left to build a coordinate system from")]
    EmptyRegionSet,

    #[error("Padding must be non-negative, got {0}")]
    NegativePadding(Position),

    #[error("Padding of {padding} bases around position {position} leaves the coordinate range")]
    PaddingOutOfRange { padding: Position, position: Position },

    #[error("Invalid track width: {0} pixels")]
    InvalidWidth(f64),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Input/Output error: {0}")]
    Io(String),
}

impl RegionError {
    pub fn parse<S: Into<String>>(line: usize, message: S) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for RegionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RegionError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.line(), err.to_string())
    }
}

pub type RegionResult<T> = Result<T, RegionError>;
