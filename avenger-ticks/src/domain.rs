use serde::{Deserialize, Serialize};

use crate::error::TickError;

/// The `(min, max)` interval an axis represents.
///
/// The bounds keep the order the caller supplied: `min > max` describes a
/// descending axis, and tick sequences computed for it are descending too.
/// Either bound may be infinite. Neither may be NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberDomain {
    pub min: f64,
    pub max: f64,
}

impl NumberDomain {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether the caller supplied the bounds in descending order
    pub fn is_reversed(&self) -> bool {
        self.min > self.max
    }

    /// The bounds in ascending order
    pub fn normalized(&self) -> (f64, f64) {
        valid_interval(self.min, self.max)
    }

    pub fn is_infinite(&self) -> bool {
        self.min.is_infinite() || self.max.is_infinite()
    }

    pub fn validate(&self) -> Result<(), TickError> {
        if self.min.is_nan() || self.max.is_nan() {
            return Err(TickError::NanDomain {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Put ticks computed in ascending order into the caller's bound order
    pub(crate) fn orient(&self, mut ticks: Vec<f64>) -> Vec<f64> {
        if self.is_reversed() {
            ticks.reverse();
        }
        ticks
    }
}

impl From<(f64, f64)> for NumberDomain {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

impl From<[f64; 2]> for NumberDomain {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

/// Order an interval ascending.
pub fn valid_interval(min: f64, max: f64) -> (f64, f64) {
    if min > max {
        (max, min)
    } else {
        (min, max)
    }
}
