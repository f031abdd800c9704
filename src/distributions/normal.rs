//! The normal distribution and its one-sided half.

use crate::distribution::Distribution;
use crate::distributions::special::{erf, erfc, erfinv};
use crate::error::DistributionError;

/// The normal distribution with arbitrary mean and standard deviation.
///
/// ```text
/// f(x) = exp(-(x - mean)^2 / (2 sigma^2)) / (sigma sqrt(2 pi))
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Normal {
    /// Constructs a normal distribution. `std_dev` must be strictly positive.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, DistributionError> {
        if std_dev <= 0.0 {
            return Err(DistributionError::NonPositiveStdDev(std_dev));
        }
        Ok(Self { mean, std_dev })
    }
}

impl Distribution for Normal {
    fn mode(&self) -> f64 {
        self.mean
    }
    fn prob(&self, x: f64) -> f64 {
        let d = (x - self.mean) / self.std_dev;
        (-0.5 * d * d).exp() / (self.std_dev * (2.0 * std::f64::consts::PI).sqrt())
    }
    fn survival(&self, x: f64) -> f64 {
        0.5 * erfc((x - self.mean) / (self.std_dev * std::f64::consts::SQRT_2))
    }
    fn quantile(&self, p: f64) -> f64 {
        if p <= 0.0 {
            return f64::NEG_INFINITY;
        }
        if p >= 1.0 {
            return f64::INFINITY;
        }
        self.mean - self.std_dev * std::f64::consts::SQRT_2 * erfinv(1.0 - 2.0 * p)
    }
}

/// One side of a normal distribution, folded at its mean.
///
/// `positive` selects which side: `true` keeps the half above `mean` (density
/// decreasing away from the mode, a plain one-sided construction); `false`
/// keeps the half below it (density increasing toward the mode from
/// `-infinity`, which the top-level constructor handles by flipping).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfNormal {
    mean: f64,
    std_dev: f64,
    positive: bool,
}

impl HalfNormal {
    /// Constructs the upper half (`[mean, +inf)`) of a normal distribution.
    pub fn upper(mean: f64, std_dev: f64) -> Result<Self, DistributionError> {
        if std_dev <= 0.0 {
            return Err(DistributionError::NonPositiveStdDev(std_dev));
        }
        Ok(Self {
            mean,
            std_dev,
            positive: true,
        })
    }

    /// Constructs the lower half (`(-inf, mean]`) of a normal distribution.
    pub fn lower(mean: f64, std_dev: f64) -> Result<Self, DistributionError> {
        if std_dev <= 0.0 {
            return Err(DistributionError::NonPositiveStdDev(std_dev));
        }
        Ok(Self {
            mean,
            std_dev,
            positive: false,
        })
    }
}

impl Distribution for HalfNormal {
    fn mode(&self) -> f64 {
        self.mean
    }
    fn prob(&self, x: f64) -> f64 {
        let d = (x - self.mean) / self.std_dev;
        2.0 * (-0.5 * d * d).exp() / (self.std_dev * (2.0 * std::f64::consts::PI).sqrt())
    }
    fn survival(&self, x: f64) -> f64 {
        let z = (x - self.mean) / (self.std_dev * std::f64::consts::SQRT_2);
        if self.positive {
            erfc(z)
        } else {
            -erf(z)
        }
    }
    fn quantile(&self, p: f64) -> f64 {
        if self.positive {
            if p >= 1.0 {
                return f64::INFINITY;
            }
            self.mean + self.std_dev * std::f64::consts::SQRT_2 * erfinv(p)
        } else {
            if p <= 0.0 {
                return f64::NEG_INFINITY;
            }
            self.mean - self.std_dev * std::f64::consts::SQRT_2 * erfinv(1.0 - p)
        }
    }
}
