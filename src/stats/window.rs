//! Trailing rolling-window statistics.
//!
//! Each statistic is aligned with its input: position `i` covers the window
//! ending at `i`, and the first `window - 1` positions are `NAN` because no
//! full trailing window exists there yet.

/// Compute the trailing rolling mean over `window` values.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    if values.is_empty() || window == 0 {
        return vec![f64::NAN; values.len()];
    }

    let n = values.len();
    let mut result = vec![f64::NAN; n];
    for i in 0..n {
        if i + 1 < window {
            continue;
        }
        let segment = &values[i + 1 - window..i + 1];
        result[i] = segment.iter().sum::<f64>() / window as f64;
    }
    result
}

/// Compute the trailing rolling sample variance (n-1 denominator).
pub fn rolling_var(values: &[f64], window: usize) -> Vec<f64> {
    if values.is_empty() || window < 2 {
        return vec![f64::NAN; values.len()];
    }

    let n = values.len();
    let mut result = vec![f64::NAN; n];
    for i in 0..n {
        if i + 1 < window {
            continue;
        }
        let segment = &values[i + 1 - window..i + 1];
        let mean = segment.iter().sum::<f64>() / window as f64;
        let var = segment.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
            / (window - 1) as f64;
        result[i] = var;
    }
    result
}

/// Compute the trailing rolling sample standard deviation.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    rolling_var(values, window).iter().map(|v| v.sqrt()).collect()
}
