//! The gamma distribution, and its `shape = 1` special case (the
//! exponential distribution).

use crate::distribution::Distribution;
use crate::distributions::special::{gamma_ur, ln_gamma};
use crate::error::DistributionError;
use crate::search::search_float;

/// The gamma distribution, parameterized by shape `k` and scale `theta`.
///
/// ```text
/// f(x) = x^(k - 1) exp(-x / theta) / (Gamma(k) theta^k)
/// ```
///
/// For `k < 1` the density diverges as `x -> 0`; the resulting table has an
/// infinite peak. For `k >= 1` the mode sits at `(k - 1) theta`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gamma {
    shape: f64,
    scale: f64,
}

impl Gamma {
    /// Constructs a gamma distribution. Both `shape` and `scale` must be
    /// strictly positive.
    pub fn new(shape: f64, scale: f64) -> Result<Self, DistributionError> {
        if shape <= 0.0 {
            return Err(DistributionError::NonPositiveShape(shape));
        }
        if scale <= 0.0 {
            return Err(DistributionError::NonPositiveScale(scale));
        }
        Ok(Self { shape, scale })
    }
}

impl Distribution for Gamma {
    fn mode(&self) -> f64 {
        if self.shape >= 1.0 {
            (self.shape - 1.0) * self.scale
        } else {
            0.0
        }
    }
    fn prob(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            return if self.shape < 1.0 {
                f64::INFINITY
            } else if self.shape == 1.0 {
                1.0 / self.scale
            } else {
                0.0
            };
        }
        ((self.shape - 1.0) * x.ln() - x / self.scale - ln_gamma(self.shape) - self.shape * self.scale.ln()).exp()
    }
    fn survival(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 1.0;
        }
        gamma_ur(self.shape, x / self.scale)
    }
    fn quantile(&self, p: f64) -> f64 {
        if p <= 0.0 {
            return 0.0;
        }
        if p >= 1.0 {
            return f64::INFINITY;
        }
        search_float(|x| self.survival(x) <= 1.0 - p)
    }
}

/// The exponential distribution: a gamma distribution with `shape = 1`,
/// given its own closed-form density/survival/quantile rather than routing
/// through the incomplete gamma function.
///
/// ```text
/// f(x) = exp(-x / theta) / theta
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exponential {
    scale: f64,
}

impl Exponential {
    /// Constructs an exponential distribution. `scale` must be strictly
    /// positive.
    pub fn new(scale: f64) -> Result<Self, DistributionError> {
        if scale <= 0.0 {
            return Err(DistributionError::NonPositiveScale(scale));
        }
        Ok(Self { scale })
    }
}

impl Distribution for Exponential {
    fn mode(&self) -> f64 {
        0.0
    }
    fn prob(&self, x: f64) -> f64 {
        (-x / self.scale).exp() / self.scale
    }
    fn survival(&self, x: f64) -> f64 {
        (-x / self.scale).exp()
    }
    fn quantile(&self, p: f64) -> f64 {
        -self.scale * (1.0 - p).ln()
    }
}
