//! A generic Ziggurat sampler for arbitrary unimodal continuous
//! distributions.
//!
//! Given any type implementing [`Distribution`] — four analytic functions:
//! [`mode`](Distribution::mode), [`prob`](Distribution::prob),
//! [`survival`](Distribution::survival) and
//! [`quantile`](Distribution::quantile) — [`sampler::build`] classifies it
//! and constructs a table-driven sampler that draws values from it in
//! amortized constant time. [`sampler::build_symmetric`] does the same for
//! distributions known in advance to be symmetric about their mode, at half
//! the table size.
//!
//! [`distributions`] supplies a handful of common distributions against
//! which to exercise the sampler; most users of this crate will bring their
//! own.
//!
//! ```
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256StarStar;
//! use ziggurat::distributions::Normal;
//! use ziggurat::sampler;
//!
//! let normal = Normal::new(0.0, 1.0).unwrap();
//! let sampler = sampler::build_symmetric(normal);
//! let mut rng = Xoshiro256StarStar::seed_from_u64(0);
//! let _x: f64 = sampler.sample(&mut rng);
//! ```

pub use distribution::{Distribution, Flip, TruncateAbove, TruncateBelow, ZeroMode};
pub use error::DistributionError;
pub use sampler::Ziggurat;

pub mod distribution;
pub mod distributions;
pub mod error;
pub mod sampler;
mod search;
mod table;
