//! The Knuth collision test (1981), used as an independent uniformity check
//! alongside the Anderson-Darling and moment tests.

use rand_core::RngCore;
use std::collections::HashSet;

/// The upper-tail p-value for the exact distribution of collision events.
///
/// `k`: number of urns, `n`: number of balls, `c`: number of collisions.
fn p_value(k: u64, n: u64, c: u64) -> f64 {
    let epsilon = 1e-20;
    let k_f64 = k as f64;
    let mut a = vec![0.0_f64; 1 + n as usize];

    a[1] = 1.0;
    let mut j0 = 1;
    let mut j1 = 1;
    for _ in 1..n {
        j1 += 1;
        for j in (j0..=j1).rev() {
            let v = j as f64 / k_f64;
            a[j] = a[j] * v + a[j - 1] * (1.0 + 1.0 / k_f64 - v);
        }
        if a[j0] < epsilon {
            a[j0] = 0.0;
            j0 += 1;
        }
        if a[j1] < epsilon {
            a[j1] = 0.0;
            j1 -= 1;
        }
    }
    if (n - c) > j1 as u64 {
        return 1.0;
    }
    if (n - c) < j0 as u64 {
        return 0.0;
    }
    let mut cdf = 0.0;
    for j in ((n - c) as usize)..=j1 {
        cdf += a[j];
    }
    1.0 - cdf
}

/// Throws `n` balls into `k = 2^dimension` urns (urns chosen via `cdf`
/// applied to each drawn sample) and checks the resulting collision count
/// against its exact distribution. Repeated `test_count` times and averaged,
/// per Knuth's suggested urn-to-ball ratio.
#[allow(dead_code)]
pub fn collisions<R: RngCore, F: Fn(&mut R) -> f64, C: Fn(f64) -> f64>(
    mut rng: R,
    sample: F,
    cdf: C,
    dimension: u8,
    urn_to_ball_ratio: u64,
    test_count: u64,
    p_value_threshold: f64,
) {
    let k = 1u64 << dimension;
    let n = k / urn_to_ball_ratio;
    let k_float = k as f64;
    let find_urn = |r: f64| ((r * k_float) as u64).min(k - 1);

    let mut p_value_sum = 0.0;
    for _ in 0..test_count {
        let mut seen = HashSet::new();
        let mut collision_count = 0u64;
        for _ in 0..n {
            let r = cdf(sample(&mut rng));
            let urn = find_urn(r);
            if !seen.insert(urn) {
                collision_count += 1;
            }
        }
        p_value_sum += p_value(k, n, collision_count);
    }

    let p = p_value_sum / test_count as f64;
    assert!(p > p_value_threshold, "average collision-test p-value {p} below threshold {p_value_threshold}");
}
