//! Anderson-Darling and moment-matching goodness-of-fit tests, ported from
//! the original reference implementation's helper test functions.

/// The Marsaglia-Marsaglia normal approximation to the null distribution of
/// the Anderson-Darling statistic, returning the upper-tail p-value.
fn anderson_darling_p_value(a2: f64, n: f64) -> f64 {
    let g1 = |x: f64| x.sqrt() * (1.0 - x) * (49.0 * x - 102.0);
    let g2 = |x: f64| -0.00022633 + (6.54034 - (14.6538 - (14.458 - (8.259 - 1.91864 * x) * x) * x) * x) * x;
    let g3 =
        |x: f64| -130.2137 + (745.2337 - (1705.091 - (1950.646 - (1116.360 - 255.7844 * x) * x) * x) * x) * x;

    let y = if a2 < 2.0 {
        (-1.2337141 / a2).exp()
            * (2.00012 + (0.247105 - (0.0649821 - (0.0347962 - (0.0116720 - 0.00168691 * a2) * a2) * a2) * a2) * a2)
            / a2.sqrt()
    } else {
        (-(1.0776 - (2.30695 - (0.43424 - (0.082433 - (0.008056 - 0.0003146 * a2) * a2) * a2) * a2) * a2).exp()).exp()
    };

    let mut p = y;
    if y > 0.8 {
        p += g3(y) / n;
    } else {
        let c = 0.01265 + 0.1757 / n;
        if y < c {
            p += (((0.0037 / n + 0.00078) / n + 0.00006) / n) * g1(y / c);
        } else {
            p += (0.04213 + 0.01365 / n) / n * g2((y - c) / (0.8 - c));
        }
    }
    1.0 - p
}

/// Tests `samples` against a distribution's log-CDF and log-survival
/// functions via the Anderson-Darling statistic. False positive rate is
/// `2 * alpha`.
#[allow(dead_code)]
pub fn anderson_darling<FCdf, FSf>(name: &str, samples: &mut [f64], log_cdf: FCdf, log_sf: FSf, alpha: f64)
where
    FCdf: Fn(f64) -> f64,
    FSf: Fn(f64) -> f64,
{
    let n = samples.len() as f64;
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let mut a2 = -n;
    for i in 1..=samples.len() {
        let lcdfz = log_cdf(samples[i - 1]);
        let lsfz = log_sf(samples[samples.len() - i]);
        a2 -= (2 * i - 1) as f64 / n * (lcdfz + lsfz);
    }

    let p = anderson_darling_p_value(a2, n);
    assert!(
        p >= alpha && p <= 1.0 - alpha,
        "{name}: Anderson-Darling p-value {p} (A^2={a2}) outside [{alpha}, {}] over {} samples",
        1.0 - alpha,
        samples.len()
    );
}

/// Tests that the empirical `m`-th moment of `samples` is consistent with
/// the analytic moments `e_xm` (`E[X^m]`) and `e_xm2` (`E[X^(2m)]`), via a
/// normal approximation to the sampling distribution of the mean. False
/// positive rate is `2 * alpha`.
///
/// Requires `e_xm2 > e_xm^2` (the variance of `X^m` must be positive) or the
/// normal approximation doesn't apply.
#[allow(dead_code)]
pub fn moment(name: &str, samples: &[f64], m: u64, e_xm: f64, e_xm2: f64, alpha: f64) {
    assert!(
        e_xm2 > e_xm * e_xm,
        "{name}: invalid moments for moment test: E[X^{m}]={e_xm}, E[X^{}]={e_xm2}",
        2 * m
    );

    let n = samples.len() as f64;
    let mut sm = 0.0;
    for (i, &x) in samples.iter().enumerate() {
        assert!(!x.is_nan(), "{name}: sample {i} of {} is NaN", samples.len());
        sm += x.powi(m as i32);
    }
    let mean = sm / n;
    let sigma = ((e_xm2 - e_xm * e_xm) / n).sqrt();
    let z = (mean - e_xm) / sigma;
    let p = 0.5 * ziggurat::distributions::special::erfc(-z / std::f64::consts::SQRT_2);

    assert!(
        p >= alpha && p <= 1.0 - alpha,
        "{name}: E[X^{m}] sample mean {mean} (expected {e_xm}, sigma {sigma}) has p-value {p} outside [{alpha}, {}]",
        1.0 - alpha
    );
}

/// Runs [`moment`] for `m = 1..=end`, with analytic moments supplied by
/// `moment_fn`.
#[allow(dead_code)]
pub fn moments<F: Fn(u64) -> f64>(name: &str, samples: &[f64], moment_fn: F, end: u64, alpha: f64) {
    for m in 1..=end {
        moment(name, samples, m, moment_fn(m), moment_fn(2 * m), alpha);
    }
}
