//! End-to-end coverage for the Normal/HalfNormal reference distributions:
//! the symmetric sampler, the plain one-sided sampler, and the
//! flipped-sampler branch, all against their own analytic CDF/survival.

mod common;

use common::{collisions, goodness_of_fit, util};
use ziggurat::distributions::{HalfNormal, Normal};
use ziggurat::sampler;
use ziggurat::Distribution;

/// `E[X^m]` for a `Normal(mean, std_dev)`, for the small `m` exercised here.
fn normal_moment(mean: f64, std_dev: f64, m: u64) -> f64 {
    match m {
        1 => mean,
        2 => mean * mean + std_dev * std_dev,
        3 => mean.powi(3) + 3.0 * mean * std_dev * std_dev,
        4 => mean.powi(4) + 6.0 * mean * mean * std_dev * std_dev + 3.0 * std_dev.powi(4),
        _ => unimplemented!("normal_moment only supports m in 1..=4"),
    }
}

/// Standard Normal, 100 000 samples, fixed seed=1: the distilled
/// specification's scenario 1.
#[test]
fn standard_normal_end_to_end_scenario() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    let sampler = sampler::build_symmetric(normal);
    let mut rng = util::scenario_rng();

    let n = 100_000;
    let mut samples = vec![0.0; n];
    for x in samples.iter_mut() {
        *x = sampler.sample(&mut rng);
    }

    let mean: f64 = samples.iter().sum::<f64>() / n as f64;
    let var: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
    assert!(mean.abs() < 0.02, "sample mean {mean} too far from 0");
    assert!((var - 1.0).abs() < 0.02, "sample variance {var} too far from 1");

    let mut ad_samples = samples.clone();
    goodness_of_fit::anderson_darling(
        "standard normal",
        &mut ad_samples,
        |x| normal.survival(-x).ln(),
        |x| normal.survival(x).ln(),
        0.0001,
    );
    goodness_of_fit::moments("standard normal", &samples, |m| normal_moment(0.0, 1.0, m), 4, 0.0001);
}

/// A non-standard Normal (nonzero mean, nonunit std dev) through the same
/// symmetric-sampler path, checked against its own moments.
#[test]
fn general_normal_moments_match() {
    let mean = 2.2;
    let std_dev = 3.4;
    let normal = Normal::new(mean, std_dev).unwrap();
    let sampler = sampler::build_symmetric(normal);
    let mut rng = util::test_rng();

    let n = 200_000;
    let samples: Vec<f64> = (0..n).map(|_| sampler.sample(&mut rng)).collect();
    goodness_of_fit::moments("general normal", &samples, |m| normal_moment(mean, std_dev, m), 2, 0.0001);
}

/// The upper half-normal (`[mean, +inf)`, density decreasing away from the
/// mode) exercises the plain one-sided sampler branch directly.
#[test]
fn half_normal_upper_is_one_sided() {
    let half = HalfNormal::upper(0.0, 1.0).unwrap();
    assert_eq!(half.survival(half.mode()), 1.0);
    let sampler = sampler::build(half);
    let mut rng = util::test_rng();

    for _ in 0..50_000 {
        let x = sampler.sample(&mut rng);
        assert!(x.is_finite());
        assert!(x >= 0.0, "upper half-normal sample {x} should be >= mean");
    }
}

/// The lower half-normal (`(-inf, mean]`, density increasing toward the
/// mode from below) has zero survival at its mode and so exercises the
/// flipped-sampler branch.
#[test]
fn half_normal_lower_is_flipped() {
    let half = HalfNormal::lower(0.0, 1.0).unwrap();
    assert_eq!(half.survival(half.mode()), 0.0);
    let sampler = sampler::build(half);
    let mut rng = util::test_rng();

    for _ in 0..50_000 {
        let x = sampler.sample(&mut rng);
        assert!(x.is_finite());
        assert!(x <= 0.0, "lower half-normal sample {x} should be <= mean");
    }
}

#[test]
fn normal_collisions() {
    let mean = -1.7;
    let std_dev = 2.8;
    let normal = Normal::new(mean, std_dev).unwrap();
    let sampler = sampler::build_symmetric(normal);
    let rng = util::test_rng();

    collisions(
        rng,
        |rng| sampler.sample(rng),
        |x| 1.0 - normal.survival(x),
        20,
        64,
        10,
        0.05,
    );
}
