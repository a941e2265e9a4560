//! Numeric safety helpers shared by the pipeline.
//!
//! Every division and variance-dependent calculation in the feature
//! extractor routes through these helpers so the fallback policy for
//! degenerate arithmetic lives in one auditable place: a zero-valued
//! denominator or zero-variance window resolves to a documented default,
//! never to NaN or infinity.

/// Minimum threshold below which a denominator or standard deviation is
/// treated as zero.
pub const MIN_STD_THRESHOLD: f64 = 1e-10;

/// Divide `num` by `den`, returning `fallback` when the denominator is
/// effectively zero or either operand is non-finite.
#[must_use]
pub fn safe_div(num: f64, den: f64, fallback: f64) -> f64 {
    if !num.is_finite() || !den.is_finite() || den.abs() < MIN_STD_THRESHOLD {
        return fallback;
    }
    let out = num / den;
    if out.is_finite() { out } else { fallback }
}

/// Arithmetic mean. Returns 0.0 for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (N-1 denominator).
///
/// Fewer than two values have no dispersion and return 0.0.
#[must_use]
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Median of a slice. Returns 0.0 for an empty slice.
///
/// Non-finite values are excluded before sorting.
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    let mut finite: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    if finite.is_empty() {
        return 0.0;
    }
    finite.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = finite.len();
    if n % 2 == 1 {
        finite[n / 2]
    } else {
        (finite[n / 2 - 1] + finite[n / 2]) / 2.0
    }
}

/// Pearson correlation between two equal-length slices.
///
/// A length mismatch, fewer than two observations, or zero variance in
/// either series yields 0.0 (the neutral value), never NaN.
#[must_use]
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return 0.0;
    }
    let mx = mean(x);
    let my = mean(y);
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mx;
        let dy = b - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    let denom = (var_x * var_y).sqrt();
    safe_div(cov, denom, 0.0)
}

/// Lag-k autocorrelation of a series: Pearson correlation between the
/// series and itself shifted by `lag` observations.
///
/// Returns 0.0 when the series is too short for the requested lag.
#[must_use]
pub fn autocorrelation(values: &[f64], lag: usize) -> f64 {
    if lag == 0 || values.len() <= lag + 1 {
        return 0.0;
    }
    let head = &values[..values.len() - lag];
    let tail = &values[lag..];
    pearson(head, tail)
}

/// Clamp a value to the unit interval.
#[must_use]
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
