use crate::error::{Axis, DimensionError};

pub const MIN_DIMENSION: usize = 3;
pub const MAX_DIMENSION: usize = 40;

/// A `(height, width)` pair that has passed validation against some [`Bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    height: usize,
    width: usize,
}

impl Dimensions {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }
}

/// Inclusive range every grid side must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            min: MIN_DIMENSION,
            max: MAX_DIMENSION,
        }
    }
}

impl Bounds {
    pub fn new(min: usize, max: usize) -> Self {
        Bounds { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min as i64 && value <= self.max as i64
    }

    /// Range check a single side.
    pub fn check(&self, axis: Axis, value: i64) -> Result<usize, DimensionError> {
        if self.contains(value) {
            Ok(value as usize)
        } else {
            Err(DimensionError::OutOfRange {
                axis,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Parse raw user text into a side length.
    ///
    /// Only integer literals are accepted (surrounding whitespace is ignored), so
    /// `"abc"`, `""` and `"12.5"` are all rejected before any range check runs.
    pub fn parse(&self, axis: Axis, raw: &str) -> Result<usize, DimensionError> {
        let value = raw.trim().parse::<i64>().map_err(|_| DimensionError::NotANumber {
            axis,
            input: raw.to_owned(),
            min: self.min,
            max: self.max,
        })?;
        self.check(axis, value)
    }

    pub fn validate(&self, height: i64, width: i64) -> Result<Dimensions, DimensionError> {
        let height = self.check(Axis::Height, height)?;
        let width = self.check(Axis::Width, width)?;
        Ok(Dimensions { height, width })
    }

    pub fn parse_pair(&self, height: &str, width: &str) -> Result<Dimensions, DimensionError> {
        let height = self.parse(Axis::Height, height)?;
        let width = self.parse(Axis::Width, width)?;
        Ok(Dimensions { height, width })
    }
}

/// Validate against the default `[3, 40]` bounds.
pub fn validate_dimensions(height: i64, width: i64) -> Result<Dimensions, DimensionError> {
    Bounds::default().validate(height, width)
}
