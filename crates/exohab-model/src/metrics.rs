//! Regression error metrics.

/// Mean absolute error. Zero for empty input.
pub fn mean_absolute_error(truth: &[f64], predicted: &[f64]) -> f64 {
    debug_assert_eq!(truth.len(), predicted.len());
    if truth.is_empty() {
        return 0.0;
    }
    truth
        .iter()
        .zip(predicted)
        .map(|(t, p)| (t - p).abs())
        .sum::<f64>()
        / truth.len() as f64
}

/// Coefficient of determination. `None` when the truth has no variance.
pub fn r2_score(truth: &[f64], predicted: &[f64]) -> Option<f64> {
    debug_assert_eq!(truth.len(), predicted.len());
    if truth.is_empty() {
        return None;
    }
    let mean = truth.iter().sum::<f64>() / truth.len() as f64;
    let ss_tot: f64 = truth.iter().map(|t| (t - mean).powi(2)).sum();
    if ss_tot <= f64::EPSILON {
        return None;
    }
    let ss_res: f64 = truth.iter().zip(predicted).map(|(t, p)| (t - p).powi(2)).sum();
    Some(1.0 - ss_res / ss_tot)
}
