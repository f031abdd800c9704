//! The sampler shapes built on top of a [`ZigguratTable`], and the top-level
//! constructor that classifies an arbitrary distribution and assembles the
//! right shape.

use rand_core::RngCore;

use crate::distribution::{Distribution, Flip, TruncateAbove, TruncateBelow, ZeroMode};
use crate::table::{ZigguratTable, N};

/// Draws one uniform in `[0, 1)` from the PRNG, using the canonical
/// conversion (drop the low 11 bits, treat the remaining 53 as the mantissa
/// of a double in `[0, 1)`).
///
/// Every uniform consumed by a sampler — the index word's own conversion,
/// and every auxiliary wedge/tail/peak draw — goes through either this
/// function or [`signed_uniform`], both of which pull directly from the
/// caller-supplied `rng`. No sampler ever wraps, clones, or reseeds a PRNG
/// internally; see the distilled specification's "auxiliary uniforms" design
/// note.
#[inline]
pub(crate) fn uniform01<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
}

/// Draws a signed uniform in `(-1, 1)` from the high bits of a PRNG word,
/// leaving the low [`crate::table::BITS`] bits free to double as a strip
/// index (used by [`SymmetricSampler`]).
#[inline]
pub(crate) fn signed_uniform_from(word: u64) -> f64 {
    ((word as i64) >> crate::table::BITS) as f64 / (1u64 << 53) as f64
}

/// A one-sided sampler: the distribution lives entirely on one side of its
/// mode. This is the workhorse every other sampler shape is built from.
pub struct OneSidedSampler {
    table: ZigguratTable,
    dist: Box<dyn Distribution>,
}

impl OneSidedSampler {
    /// Builds a one-sided sampler over `dist`, which need not already have
    /// its mode at 0 — this wraps it in [`ZeroMode`] itself.
    pub fn build<D: Distribution + 'static>(dist: D) -> Self {
        let zero_mode = ZeroMode::new(dist);
        let offset = zero_mode.shift();
        let table = ZigguratTable::build(&zero_mode, offset);
        Self {
            table,
            dist: Box::new(zero_mode),
        }
    }

    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> f64 {
        let t = &self.table;
        let r = rng.next_u64();
        let i = (r & (N as u64 - 1)) as usize;
        let mut x = (r >> 11) as f64 / (1u64 << 53) as f64;

        loop {
            let prev = if i == 0 { t.tail_prev_split } else { t.splits[i - 1] };
            x *= prev;

            if x < t.splits[i] {
                return x + t.offset;
            }

            let top = t.tops[i];

            if i == 0 && t.has_infinite_tail {
                return self.dist.quantile(1.0 - (prev - x) * top) + t.offset;
            }

            if i == N - 1 && t.has_infinite_peak {
                let prev_top = t.tops[N - 2];
                loop {
                    let candidate = self
                        .dist
                        .quantile((self.dist.survival(0.0) - self.dist.survival(prev)) * uniform01(rng));
                    if uniform01(rng) > prev_top / self.dist.prob(candidate) {
                        return candidate + t.offset;
                    }
                }
            }

            let bottom = if i == 0 { 0.0 } else { t.tops[i - 1] };
            if uniform01(rng) < (self.dist.prob(x) - bottom) / (top - bottom) {
                return x + t.offset;
            }
            x = uniform01(rng);
        }
    }
}

/// A sampler for a distribution symmetric about its mode. Built over the
/// *truncated-below* (right) half; the sign of each draw is folded in
/// directly from the high bits of the same PRNG word that supplies the
/// strip index, so a full double-sided sample costs one table lookup and one
/// PRNG word on the fast path.
pub struct SymmetricSampler {
    table: ZigguratTable,
    dist: Box<dyn Distribution>,
}

impl SymmetricSampler {
    /// Builds a symmetric sampler over `dist`. `dist` should already be the
    /// right-half (truncated-below) view of the symmetric distribution; the
    /// crate's `sampler::build_symmetric` entry point does this wrapping for
    /// callers.
    pub fn build<D: Distribution + 'static>(dist: D) -> Self {
        let zero_mode = ZeroMode::new(dist);
        let offset = zero_mode.shift();
        let table = ZigguratTable::build(&zero_mode, offset);
        Self {
            table,
            dist: Box::new(zero_mode),
        }
    }

    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> f64 {
        let t = &self.table;
        let r = rng.next_u64();
        let i = (r & (N as u64 - 1)) as usize;
        let mut x = signed_uniform_from(r);

        loop {
            let prev = if i == 0 { t.tail_prev_split } else { t.splits[i - 1] };
            x *= prev;

            if x.abs() < t.splits[i] {
                return x + t.offset;
            }

            let top = t.tops[i];

            if i == 0 && t.has_infinite_tail {
                return if x < 0.0 {
                    -self.dist.quantile(1.0 - (prev + x) * top) + t.offset
                } else {
                    self.dist.quantile(1.0 - (prev - x) * top) + t.offset
                };
            }

            if i == N - 1 && t.has_infinite_peak {
                let prev_top = t.tops[N - 2];
                loop {
                    let candidate = self
                        .dist
                        .quantile((self.dist.survival(0.0) - self.dist.survival(prev)) * uniform01(rng));
                    if uniform01(rng) > prev_top / self.dist.prob(candidate) {
                        return candidate + t.offset;
                    }
                }
            }

            let bottom = if i == 0 { 0.0 } else { t.tops[i - 1] };
            if uniform01(rng) < (self.dist.prob(x) - bottom) / (top - bottom) {
                return x + t.offset;
            }
            // A rejected candidate is redrawn as a plain non-negative
            // uniform, exactly as the reference implementation does; the
            // sign is only ever reintroduced by the next full PRNG word at
            // the top of a fresh call.
            x = uniform01(rng);
        }
    }
}

/// A two-part sampler: the mode is interior to the support, with positive
/// mass on both sides. Delegates to one of two one-sided samplers, chosen by
/// a coin weighted on `survival(mode)`.
pub struct TwoPartSampler {
    right_side_prob: f64,
    left: Box<Ziggurat>,
    right: Box<Ziggurat>,
}

impl TwoPartSampler {
    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> f64 {
        if uniform01(rng) < self.right_side_prob {
            self.right.sample(rng)
        } else {
            self.left.sample(rng)
        }
    }
}

/// A wrapper used when the input distribution has zero survival at its mode
/// (the mode is the supremum of the support). Reflects the inner sampler's
/// draws about the mode.
pub struct FlippedSampler {
    inner: Box<Ziggurat>,
    mode: f64,
}

impl FlippedSampler {
    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> f64 {
        2.0 * self.mode - self.inner.sample(rng)
    }
}

/// A constructed Ziggurat sampler, classified by [`build`] into whichever
/// shape fits the input distribution.
///
/// Tables are immutable once built; `sample` takes the PRNG by `&mut`
/// reference on every call rather than owning it, so a single sampler can be
/// driven by any bit source the caller chooses, and two-part/flipped
/// samplers share one PRNG stream with their inner one-sided samplers with
/// no extra indirection.
pub enum Ziggurat {
    OneSided(OneSidedSampler),
    TwoPart(TwoPartSampler),
    Flipped(FlippedSampler),
}

impl Ziggurat {
    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Ziggurat::OneSided(s) => s.sample(rng),
            Ziggurat::TwoPart(s) => s.sample(rng),
            Ziggurat::Flipped(s) => s.sample(rng),
        }
    }
}

/// Classifies `dist` and builds the appropriate sampler shape.
///
/// - `survival(mode) == 0`: the mode is the supremum of the support — builds
///   a [`FlippedSampler`] around a one-sided sampler over the flipped
///   distribution.
/// - `survival(mode) != 1`: the mode is interior with mass on both sides —
///   builds a [`TwoPartSampler`] whose right arm samples the
///   truncated-below half directly and whose left arm recurses (the
///   truncated-above half always has `survival(mode) == 0` in its own frame,
///   so the recursive call lands back in the first branch and flips it onto
///   `[mode, +inf)`).
/// - otherwise (`survival(mode) == 1`): the distribution lives entirely
///   above its mode — builds a plain one-sided sampler.
///
/// Panics only insofar as the underlying table build panics: on a
/// NaN-producing (malformed) distribution. Does not itself validate that
/// `dist` is unimodal; see the distilled specification's precondition on the
/// top-level constructor.
pub fn build<D: Distribution + Clone + 'static>(dist: D) -> Ziggurat {
    let mode = dist.mode();
    let s_mode = dist.survival(mode);

    if s_mode == 0.0 {
        let inner = build(Flip::new(dist));
        Ziggurat::Flipped(FlippedSampler {
            inner: Box::new(inner),
            mode,
        })
    } else if s_mode != 1.0 {
        let right = build(TruncateBelow::new(dist.clone()));
        let left = build(TruncateAbove::new(dist));
        Ziggurat::TwoPart(TwoPartSampler {
            right_side_prob: s_mode,
            left: Box::new(left),
            right: Box::new(right),
        })
    } else {
        Ziggurat::OneSided(OneSidedSampler::build(dist))
    }
}

/// Builds a symmetric sampler for a distribution symmetric about its mode.
///
/// Callers choose this entry point instead of [`build`] when they know the
/// distribution is symmetric: it produces a table half the size conceptually
/// needed (the right half only) and draws both the magnitude and the sign of
/// each sample from a single PRNG word on the fast path.
pub fn build_symmetric<D: Distribution + 'static>(dist: D) -> SymmetricSampler {
    SymmetricSampler::build(TruncateBelow::new(dist))
}
