//! Descriptive statistics over plain value slices
//!
//! Undefined results are `None`, never a sentinel number.

/// Arithmetic mean; `None` for an empty slice
pub fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64)
}

/// Round to two decimals for display
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format an optional metric with two decimals
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", round2(v)),
        None => "n/a".to_string(),
    }
}

/// Quantile of ascending-sorted values with linear interpolation.
///
/// `q` is in `[0, 1]`. `None` for an empty slice.
pub fn quantile(sorted: &[i64], q: f64) -> Option<f64> {
    match sorted.len() {
        0 => None,
        1 => Some(sorted[0] as f64),
        n => {
            let h = (n - 1) as f64 * q.clamp(0.0, 1.0);
            let lo = h.floor() as usize;
            let hi = (lo + 1).min(n - 1);
            let frac = h - lo as f64;
            Some(sorted[lo] as f64 + frac * (sorted[hi] - sorted[lo]) as f64)
        }
    }
}

/// Pearson correlation coefficient.
///
/// `None` when the series differ in length, have fewer than two points,
/// or either has zero variance.
pub fn pearson(x: &[i64], y: &[i64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi as f64 - mean_x;
        let dy = yi as f64 - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0))
}
