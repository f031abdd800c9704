//! Monotone float search.
//!
//! Ziggurat strip boundaries are defined as the smallest abscissa at which a
//! monotone "strip area" predicate first becomes true. This module implements
//! that search once, independent of any particular distribution.

/// Returns the smallest finite `f64` for which `f` returns `true`, given that
/// `f` is monotonically non-decreasing (once true for some `x`, true for every
/// larger `x`).
///
/// Returns `f64::INFINITY` if `f` is false everywhere, and `f64::NEG_INFINITY`
/// if `f` is true everywhere.
///
/// Panics if `f` ever returns inconsistent results that drive the bracket to a
/// NaN endpoint; this indicates a malformed predicate, not a recoverable
/// condition.
pub fn search_float<F: Fn(f64) -> bool>(f: F) -> f64 {
    let mut start = -1.0_f64;
    let mut end = 1.0_f64;

    // Expand the upper bound until the predicate holds.
    while !f(end) && !end.is_infinite() {
        start = end;
        end *= 2.0;
    }
    if end.is_infinite() {
        if !f(f64::MAX) {
            return end;
        }
        end = f64::MAX;
    }

    // Expand the lower bound until the predicate no longer holds.
    while f(start) && !start.is_infinite() {
        end = start;
        start *= 2.0;
    }
    if start.is_infinite() {
        if f(f64::MIN) {
            return start;
        }
        start = f64::MIN;
    }

    assert!(
        !start.is_nan() && !end.is_nan(),
        "search_float: predicate produced a NaN bracket endpoint"
    );

    // Bisect until the midpoint collapses onto one of the endpoints.
    loop {
        let mid = (start + end) / 2.0;
        if mid == start || mid == end {
            return if f(start) { start } else { end };
        }
        if f(mid) {
            end = mid;
        } else {
            start = mid;
        }
    }
}
