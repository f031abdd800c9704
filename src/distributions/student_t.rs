//! Student's t distribution (standardized: location 0, scale 1).

use crate::distribution::Distribution;
use crate::distributions::special::{beta_reg, ln_beta};
use crate::error::DistributionError;
use crate::search::search_float;

/// The standardized Student's t distribution with `dof` degrees of freedom.
///
/// ```text
/// f(t) = Gamma((dof+1)/2) / (sqrt(dof pi) Gamma(dof/2)) * (1 + t^2/dof)^(-(dof+1)/2)
/// ```
///
/// Symmetric about 0; expressed in terms of the regularized incomplete beta
/// function of `dof / (dof + t^2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StudentT {
    dof: f64,
}

impl StudentT {
    /// Constructs a Student's t distribution. `dof` must be strictly
    /// positive.
    pub fn new(dof: f64) -> Result<Self, DistributionError> {
        if dof <= 0.0 {
            return Err(DistributionError::NonPositiveDegreesOfFreedom(dof));
        }
        Ok(Self { dof })
    }
}

impl Distribution for StudentT {
    fn mode(&self) -> f64 {
        0.0
    }
    fn prob(&self, t: f64) -> f64 {
        (-ln_beta(0.5, self.dof / 2.0) - 0.5 * self.dof.ln() - (self.dof + 1.0) / 2.0 * (1.0 + t * t / self.dof).ln())
            .exp()
    }
    fn survival(&self, t: f64) -> f64 {
        if t == 0.0 {
            return 0.5;
        }
        let x = self.dof / (self.dof + t * t);
        let tail = 0.5 * beta_reg(self.dof / 2.0, 0.5, x);
        if t > 0.0 {
            tail
        } else {
            1.0 - tail
        }
    }
    fn quantile(&self, p: f64) -> f64 {
        if p <= 0.0 {
            return f64::NEG_INFINITY;
        }
        if p >= 1.0 {
            return f64::INFINITY;
        }
        search_float(|t| self.survival(t) <= 1.0 - p)
    }
}
