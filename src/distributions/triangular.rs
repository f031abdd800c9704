//! The triangular distribution.

use crate::distribution::Distribution;
use crate::error::DistributionError;

/// The triangular distribution on `[low, high]` with mode `mode`.
///
/// Density rises linearly from 0 at `low` to its peak at `mode`, then falls
/// linearly to 0 at `high`. `mode` may coincide with either endpoint, giving
/// a right- or left-triangular density (the top-level constructor handles
/// these via the flipped-sampler branch).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangular {
    low: f64,
    mode: f64,
    high: f64,
}

impl Triangular {
    /// Constructs a triangular distribution. Requires `low <= mode <= high`
    /// with `low < high`.
    pub fn new(low: f64, mode: f64, high: f64) -> Result<Self, DistributionError> {
        if !(low <= mode && mode <= high && low < high) {
            return Err(DistributionError::DegenerateTriangular { low, mode, high });
        }
        Ok(Self { low, mode, high })
    }
}

impl Distribution for Triangular {
    fn mode(&self) -> f64 {
        self.mode
    }
    fn prob(&self, x: f64) -> f64 {
        if x < self.low || x > self.high {
            0.0
        } else if x < self.mode {
            2.0 * (x - self.low) / ((self.high - self.low) * (self.mode - self.low))
        } else if x > self.mode {
            2.0 * (self.high - x) / ((self.high - self.low) * (self.high - self.mode))
        } else {
            2.0 / (self.high - self.low)
        }
    }
    fn survival(&self, x: f64) -> f64 {
        if x <= self.low {
            1.0
        } else if x >= self.high {
            0.0
        } else if x <= self.mode {
            1.0 - (x - self.low).powi(2) / ((self.high - self.low) * (self.mode - self.low))
        } else {
            (self.high - x).powi(2) / ((self.high - self.low) * (self.high - self.mode))
        }
    }
    fn quantile(&self, p: f64) -> f64 {
        let split = (self.mode - self.low) / (self.high - self.low);
        if p <= split {
            if self.mode == self.low {
                return self.low;
            }
            self.low + (p * (self.high - self.low) * (self.mode - self.low)).sqrt()
        } else {
            if self.mode == self.high {
                return self.high;
            }
            self.high - ((1.0 - p) * (self.high - self.low) * (self.high - self.mode)).sqrt()
        }
    }
}
