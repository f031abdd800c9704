//! The Ziggurat table: N equal-area strips over a zero-mode, one-sided
//! distribution, plus the flags needed to handle an unbounded tail or peak.

use crate::distribution::Distribution;
use crate::search::search_float;

/// Number of strips, fixed at build time. `2^10`; raising this further erodes
/// the floating-point accuracy of the `A(splits[i]) <= (i+1)/N` invariant
/// (see the distilled specification's design notes).
pub const BITS: u32 = 10;
/// `2^BITS`.
pub const N: usize = 1 << BITS;

/// A built Ziggurat table for a zero-mode, one-sided distribution.
///
/// Tables are immutable value types: two fixed-size arrays of `f64` plus a
/// handful of scalars, allocated inline wherever the table is stored (never
/// behind a heap-allocated graph).
#[derive(Clone)]
pub struct ZigguratTable {
    /// Strip splits, strictly decreasing; `splits[N-1] == 0.0`.
    pub splits: [f64; N],
    /// Density at each split, strictly increasing; `tops[N-1] == prob(0)`.
    pub tops: [f64; N],
    /// Outer edge of strip 0.
    pub tail_prev_split: f64,
    /// True iff the distribution's support is unbounded above.
    pub has_infinite_tail: bool,
    /// True iff the density diverges at the mode.
    pub has_infinite_peak: bool,
    /// The original (pre-zero-mode) mode of the distribution, added back to
    /// every sample drawn from this table.
    pub offset: f64,
}

impl ZigguratTable {
    /// Builds a table for `dist`, which must have mode 0, support entirely in
    /// `[0, +inf)`, and `survival(0) == 1`.
    ///
    /// `offset` is added to every value returned by a sampler built over this
    /// table; callers pass the distribution's original (pre-zero-mode) mode.
    ///
    /// This does not validate that `dist` is unimodal: an ill-formed
    /// distribution may make the boundary search loop or return a table that
    /// silently violates the strip invariants. That validation is the
    /// top-level constructor's responsibility, per the distilled
    /// specification.
    pub fn build<D: Distribution>(dist: &D, offset: f64) -> Self {
        debug_assert!(dist.mode() == 0.0, "table must be built on a zero-mode distribution");
        debug_assert!(
            (dist.survival(0.0) - 1.0).abs() < 1e-9,
            "table must be built on a distribution with survival(0) == 1"
        );

        // A(x) = x * prob(x) + survival(x), non-increasing from A(0)=1 to
        // A(+inf)=0.
        let strip_area = |x: f64| {
            if x.is_infinite() {
                0.0
            } else {
                x * dist.prob(x) + dist.survival(x)
            }
        };

        let mut splits = [0.0_f64; N];
        let mut tops = [0.0_f64; N];
        for i in 0..N - 1 {
            let threshold = (i + 1) as f64 / N as f64;
            let x = search_float(|x| strip_area(x) <= threshold);
            splits[i] = x;
            tops[i] = dist.prob(x);
        }
        splits[N - 1] = 0.0;
        tops[N - 1] = dist.prob(0.0);

        if cfg!(debug_assertions) {
            for i in 1..N {
                debug_assert!(
                    dist.survival(splits[i - 1]) >= dist.survival(splits[i]) - 1e-9,
                    "survival must be non-increasing across strip splits"
                );
            }
        }

        let mut tail_prev_split = dist.quantile(1.0);
        let has_infinite_tail = tail_prev_split.is_infinite();
        if has_infinite_tail {
            tail_prev_split = splits[0] + dist.survival(splits[0]) / tops[0];
        }
        let has_infinite_peak = tops[N - 1].is_infinite();

        Self {
            splits,
            tops,
            tail_prev_split,
            has_infinite_tail,
            has_infinite_peak,
            offset,
        }
    }
}
