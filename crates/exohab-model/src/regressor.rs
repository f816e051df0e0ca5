//! Black-box regression capability.

use exohab_common::Result;

/// Anything that can learn `features → target` and answer for new rows.
///
/// Implementations:
/// - `RandomForest` (default)
/// - `DecisionTree`
/// - Stubs in tests
pub trait Regressor: Send + Sync {
    /// Fit on row-major features. `features.len()` must equal `targets.len()`.
    fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<()>;

    /// Predict one row. Fails with `ModelNotTrained` before `fit`.
    fn predict_one(&self, features: &[f64]) -> Result<f64>;

    fn is_fitted(&self) -> bool;

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>> {
        features.iter().map(|row| self.predict_one(row)).collect()
    }
}

/// Shared argument checks for `fit` implementations.
pub(crate) fn check_training_data(features: &[Vec<f64>], targets: &[f64]) -> Result<usize> {
    use exohab_common::ExohabError;

    if features.is_empty() {
        return Err(ExohabError::InsufficientData { rows: 0, required: 1 });
    }
    if features.len() != targets.len() {
        return Err(anyhow::anyhow!(
            "feature rows ({}) and targets ({}) differ in length",
            features.len(),
            targets.len()
        )
        .into());
    }
    let width = features[0].len();
    if width == 0 || features.iter().any(|row| row.len() != width) {
        return Err(anyhow::anyhow!("feature rows must share a non-zero width").into());
    }
    Ok(width)
}
