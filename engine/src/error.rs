use std::fmt;

use thiserror::Error;

/// Which side of the grid a dimension value describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Height,
    Width,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Height => f.write_str("height"),
            Axis::Width => f.write_str("width"),
        }
    }
}

/// A proposed grid dimension was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("{axis} `{input}` is not a whole number. Please enter valid numbers between {min} and {max}.")]
    NotANumber {
        axis: Axis,
        input: String,
        min: usize,
        max: usize,
    },
    #[error("{axis} {value} is out of range. Please enter valid numbers between {min} and {max}.")]
    OutOfRange {
        axis: Axis,
        value: i64,
        min: usize,
        max: usize,
    },
}

impl DimensionError {
    pub fn axis(&self) -> Axis {
        match self {
            DimensionError::NotANumber { axis, .. } | DimensionError::OutOfRange { axis, .. } => *axis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error(transparent)]
    InvalidDimensions(#[from] DimensionError),
    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
    #[error("malformed pattern at line {line}: {reason}")]
    MalformedPattern { line: usize, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse simulation config")]
    Parse(#[from] toml::de::Error),
    #[error("invalid simulation config: {0}")]
    Invalid(String),
}
