//! Errors produced when constructing one of the reference distributions in
//! [`crate::distributions`] with an invalid parameter.

use thiserror::Error;

/// A parameter passed to one of [`crate::distributions`]'s constructors
/// violates that distribution's domain.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DistributionError {
    #[error("standard deviation must be positive, got {0}")]
    NonPositiveStdDev(f64),
    #[error("shape parameter must be positive, got {0}")]
    NonPositiveShape(f64),
    #[error("scale parameter must be positive, got {0}")]
    NonPositiveScale(f64),
    #[error("beta shape parameters must both exceed 1 for a unique interior mode, got alpha={alpha}, beta={beta}")]
    NonUnimodalBeta { alpha: f64, beta: f64 },
    #[error("triangular distribution requires low <= mode <= high and low < high, got low={low}, mode={mode}, high={high}")]
    DegenerateTriangular { low: f64, mode: f64, high: f64 },
    #[error("degrees of freedom must be positive, got {0}")]
    NonPositiveDegreesOfFreedom(f64),
}
