//! exohab-model: Learns the rule-based habitability score.
//!
//! The trainer fits any [`Regressor`] to the eight physical parameters with
//! `rule_habitability_score` as target, holds out a seeded 20% partition and
//! reports its mean absolute error. The default regressor is a
//! [`RandomForest`] of 100 CART trees.
//!
//! # Example
//! ```rust
//! use exohab_common::{PlanetParams, PlanetRecord, TrainingConfig};
//! use exohab_model::{ModelTrainer, Predictor};
//! use exohab_ranker::score_table;
//!
//! # fn main() -> exohab_common::Result<()> {
//! let records: Vec<PlanetRecord> = (0..40)
//!     .map(|i| {
//!         let f = i as f64;
//!         PlanetRecord::new(
//!             format!("P{i}"),
//!             PlanetParams::from_array([0.5 + f * 0.05, 0.2 + f * 0.1, 50.0 + f * 10.0,
//!                 200.0 + f * 4.0, 5000.0 + f * 40.0, 1.0, 1.0, 0.0]),
//!         )
//!     })
//!     .collect();
//! let table = score_table(records);
//!
//! let trainer = ModelTrainer::new(TrainingConfig { n_estimators: 10, ..Default::default() });
//! let (model, report) = trainer.train(&table)?;
//! println!("held-out MAE: {:.2}", report.mae);
//!
//! let score = Predictor::new(&model).predict(table[0].params())?;
//! assert!((0.0..=100.0).contains(&score));
//! # Ok(())
//! # }
//! ```

pub mod regressor;
pub mod tree;
pub mod forest;
pub mod split;
pub mod metrics;
pub mod trainer;
pub mod predictor;

pub use regressor::Regressor;
pub use tree::{DecisionTree, TreeConfig};
pub use forest::{MaxFeatures, RandomForest};
pub use split::{train_test_split, SplitIndices};
pub use metrics::{mean_absolute_error, r2_score};
pub use trainer::{feature_matrix, ModelTrainer, TrainedModel, TrainingReport};
pub use predictor::Predictor;
