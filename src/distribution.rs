//! The `Distribution` capability and the adapter algebra over it.
//!
//! A [`Distribution`] supplies the four analytic functions the Ziggurat
//! construction needs: [`mode`](Distribution::mode),
//! [`prob`](Distribution::prob), [`survival`](Distribution::survival) and
//! [`quantile`](Distribution::quantile). The adapters in this module wrap one
//! distribution to produce a derived one, re-expressing those four functions
//! in terms of the base distribution's. They carry no state of their own
//! beyond what they own of the base, and cache nothing; every call
//! re-evaluates the base.
//!
//! Adapters own their base distribution by value rather than by reference, so
//! that a constructed sampler (which must outlive the function call that
//! built it) can own its whole adapter chain with no lifetime parameter. A
//! blanket impl over `&D` lets a caller compose adapters over a borrowed
//! distribution when it would rather not clone one.

/// A continuous univariate probability distribution, described analytically
/// rather than by sampling.
///
/// Implementations must keep the four methods mutually consistent: `survival`
/// is `1 - CDF`, monotonically non-increasing; `quantile` is the generalized
/// inverse of `1 - survival`; `mode` is the (assumed unique) maximizer of
/// `prob`. The Ziggurat constructor additionally requires the distribution be
/// unimodal; violating this is a precondition failure, not a recoverable
/// error, and produces an undefined (possibly looping) table build.
pub trait Distribution {
    /// The abscissa maximizing the density.
    fn mode(&self) -> f64;
    /// The probability density at `x`.
    fn prob(&self, x: f64) -> f64;
    /// `P(X > x)`.
    fn survival(&self, x: f64) -> f64;
    /// The inverse of `1 - survival`, evaluated at `p`.
    fn quantile(&self, p: f64) -> f64;
}

impl<'a, D: Distribution + ?Sized> Distribution for &'a D {
    fn mode(&self) -> f64 {
        (**self).mode()
    }
    fn prob(&self, x: f64) -> f64 {
        (**self).prob(x)
    }
    fn survival(&self, x: f64) -> f64 {
        (**self).survival(x)
    }
    fn quantile(&self, p: f64) -> f64 {
        (**self).quantile(p)
    }
}

/// Re-expresses a distribution so that its mode sits at 0.
#[derive(Clone)]
pub struct ZeroMode<D> {
    base: D,
    mode: f64,
}

impl<D: Distribution> ZeroMode<D> {
    pub fn new(base: D) -> Self {
        let mode = base.mode();
        Self { base, mode }
    }

    /// The base distribution's original mode, i.e. how far this adapter
    /// shifted it to land on 0.
    pub fn shift(&self) -> f64 {
        self.mode
    }
}

impl<D: Distribution> Distribution for ZeroMode<D> {
    fn mode(&self) -> f64 {
        0.0
    }
    fn prob(&self, x: f64) -> f64 {
        self.base.prob(x + self.mode)
    }
    fn survival(&self, x: f64) -> f64 {
        self.base.survival(x + self.mode)
    }
    fn quantile(&self, p: f64) -> f64 {
        self.base.quantile(p) - self.mode
    }
}

/// Bounds a distribution from below, at its mode, renormalizing by
/// `base.survival(mode)`.
#[derive(Clone)]
pub struct TruncateBelow<D> {
    base: D,
}

impl<D: Distribution> TruncateBelow<D> {
    pub fn new(base: D) -> Self {
        Self { base }
    }
}

impl<D: Distribution> Distribution for TruncateBelow<D> {
    fn mode(&self) -> f64 {
        self.base.mode()
    }
    fn prob(&self, x: f64) -> f64 {
        self.base.prob(x) / self.base.survival(self.mode())
    }
    fn survival(&self, x: f64) -> f64 {
        self.base.survival(x) / self.base.survival(self.mode())
    }
    fn quantile(&self, p: f64) -> f64 {
        let s_mode = self.base.survival(self.mode());
        self.base.quantile(1.0 - (1.0 - p) * s_mode)
    }
}

/// Bounds a distribution from above, at its mode, renormalizing by
/// `1 - base.survival(mode)`.
#[derive(Clone)]
pub struct TruncateAbove<D> {
    base: D,
}

impl<D: Distribution> TruncateAbove<D> {
    pub fn new(base: D) -> Self {
        Self { base }
    }
}

impl<D: Distribution> Distribution for TruncateAbove<D> {
    fn mode(&self) -> f64 {
        self.base.mode()
    }
    fn prob(&self, x: f64) -> f64 {
        self.base.prob(x) / (1.0 - self.base.survival(self.mode()))
    }
    fn survival(&self, x: f64) -> f64 {
        // `TruncateAbove` re-weights 1-survival by the mass at or below the
        // mode; non-increase of the result follows from `base.survival`
        // being non-increasing, but is cheap to double-check while tables
        // are built (see `table::ZigguratTable::build`).
        1.0 - (1.0 - self.base.survival(x)) / (1.0 - self.base.survival(self.mode()))
    }
    fn quantile(&self, p: f64) -> f64 {
        self.base.quantile(p * (1.0 - self.base.survival(self.mode())))
    }
}

/// Reflects a distribution about its mode.
#[derive(Clone)]
pub struct Flip<D> {
    base: D,
}

impl<D: Distribution> Flip<D> {
    pub fn new(base: D) -> Self {
        Self { base }
    }
}

impl<D: Distribution> Distribution for Flip<D> {
    fn mode(&self) -> f64 {
        self.base.mode()
    }
    fn prob(&self, x: f64) -> f64 {
        self.base.prob(2.0 * self.mode() - x)
    }
    fn survival(&self, x: f64) -> f64 {
        1.0 - self.base.survival(2.0 * self.mode() - x)
    }
    fn quantile(&self, p: f64) -> f64 {
        2.0 * self.mode() - self.base.quantile(1.0 - p)
    }
}
