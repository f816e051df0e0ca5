//! Single-planet ML habitability score.

use exohab_common::{PlanetParams, Result};
use exohab_ranker::MAX_SCORE;

use crate::trainer::TrainedModel;

pub struct Predictor<'a> {
    model: &'a TrainedModel,
}

impl<'a> Predictor<'a> {
    pub fn new(model: &'a TrainedModel) -> Self {
        Self { model }
    }

    /// Model output rounded to two decimals and clamped to [0, 100].
    /// The regressor is not bounded itself, only its training target was.
    /// Non-finite output is an error rather than a score.
    pub fn predict(&self, params: &PlanetParams) -> Result<f64> {
        let raw = self.model.predict_raw(params)?;
        if !raw.is_finite() {
            return Err(anyhow::anyhow!("regressor returned non-finite output {raw}").into());
        }
        Ok(round2(raw).clamp(0.0, MAX_SCORE))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
