//! Holdout training of the habitability regressor.

use std::fmt;

use exohab_common::{ExohabError, PlanetParams, Result, TrainingConfig};
use exohab_ranker::ScoredPlanet;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::forest::RandomForest;
use crate::metrics::{mean_absolute_error, r2_score};
use crate::regressor::Regressor;
use crate::split::train_test_split;

/// Features (eight physical parameters) and target (rule habitability) per row.
pub fn feature_matrix(table: &[ScoredPlanet]) -> (Vec<Vec<f64>>, Vec<f64>) {
    table
        .iter()
        .map(|p| (p.params().as_array().to_vec(), p.rule_habitability_score))
        .unzip()
}

/// Held-out evaluation of a training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    pub train_rows: usize,
    pub test_rows: usize,
    /// Mean absolute error on the held-out rows
    pub mae: f64,
    pub r2: Option<f64>,
}

/// A fitted regressor. Immutable: it only answers predictions.
pub struct TrainedModel {
    regressor: Box<dyn Regressor>,
}

impl TrainedModel {
    /// Wrap a regressor that has already been fitted.
    pub fn from_fitted(regressor: Box<dyn Regressor>) -> Result<Self> {
        if !regressor.is_fitted() {
            return Err(ExohabError::ModelNotTrained);
        }
        Ok(Self { regressor })
    }

    /// Unrounded, unclamped model output.
    pub fn predict_raw(&self, params: &PlanetParams) -> Result<f64> {
        self.regressor.predict_one(&params.as_array())
    }
}

impl fmt::Debug for TrainedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrainedModel").finish_non_exhaustive()
    }
}

pub struct ModelTrainer {
    config: TrainingConfig,
}

impl ModelTrainer {
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train the default random forest.
    pub fn train(&self, table: &[ScoredPlanet]) -> Result<(TrainedModel, TrainingReport)> {
        let forest = RandomForest::new(self.config.n_estimators, self.config.seed);
        self.train_with(table, Box::new(forest))
    }

    /// Split, fit `regressor` on the training rows, score it on the held-out rows.
    #[instrument(skip_all, fields(rows = table.len()))]
    pub fn train_with(
        &self,
        table: &[ScoredPlanet],
        mut regressor: Box<dyn Regressor>,
    ) -> Result<(TrainedModel, TrainingReport)> {
        let required = self.config.min_rows.max(2);
        if table.len() < required {
            return Err(ExohabError::InsufficientData { rows: table.len(), required });
        }

        let split = train_test_split(table.len(), self.config.test_fraction, self.config.seed)?;
        let (features, targets) = feature_matrix(table);

        let x_train: Vec<Vec<f64>> = split.train.iter().map(|&i| features[i].clone()).collect();
        let y_train: Vec<f64> = split.train.iter().map(|&i| targets[i]).collect();
        let x_test: Vec<Vec<f64>> = split.test.iter().map(|&i| features[i].clone()).collect();
        let y_test: Vec<f64> = split.test.iter().map(|&i| targets[i]).collect();

        info!(
            train = x_train.len(),
            test = x_test.len(),
            "Fitting habitability model"
        );
        regressor.fit(&x_train, &y_train)?;

        let predicted = regressor.predict(&x_test)?;
        let report = TrainingReport {
            train_rows: x_train.len(),
            test_rows: x_test.len(),
            mae: mean_absolute_error(&y_test, &predicted),
            r2: r2_score(&y_test, &predicted),
        };
        info!(mae = report.mae, r2 = ?report.r2, "Model trained");

        Ok((TrainedModel::from_fitted(regressor)?, report))
    }
}
