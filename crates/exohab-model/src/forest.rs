//! Random forest regressor: bagged CART trees, averaged.

use exohab_common::{ExohabError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::regressor::{check_training_data, Regressor};
use crate::tree::{DecisionTree, TreeConfig};

/// Features considered at each split.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum MaxFeatures {
    All,
    Sqrt,
    Fraction(f64),
    Count(usize),
}

impl MaxFeatures {
    pub fn resolve(&self, n_features: usize) -> usize {
        let k = match *self {
            MaxFeatures::All => n_features,
            MaxFeatures::Sqrt => (n_features as f64).sqrt().round() as usize,
            MaxFeatures::Fraction(f) => (n_features as f64 * f).round() as usize,
            MaxFeatures::Count(c) => c,
        };
        k.clamp(1, n_features.max(1))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    pub n_estimators: usize,
    pub max_features: MaxFeatures,
    pub bootstrap: bool,
    pub seed: u64,
    pub tree_config: TreeConfig,
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Forest of `n_estimators` fully grown trees over all features, bootstrapped.
    pub fn new(n_estimators: usize, seed: u64) -> Self {
        Self {
            n_estimators,
            max_features: MaxFeatures::All,
            bootstrap: true,
            seed,
            tree_config: TreeConfig::default(),
            trees: Vec::new(),
        }
    }

    pub fn with_max_features(mut self, max_features: MaxFeatures) -> Self {
        self.max_features = max_features;
        self
    }

    pub fn with_bootstrap(mut self, bootstrap: bool) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    pub fn with_tree_config(mut self, tree_config: TreeConfig) -> Self {
        self.tree_config = tree_config;
        self
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }
}

impl Regressor for RandomForest {
    fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<()> {
        let width = check_training_data(features, targets)?;
        if self.n_estimators == 0 {
            return Err(ExohabError::Config("n_estimators must be at least 1".into()));
        }

        let n = features.len();
        let tree_config = TreeConfig {
            max_features: Some(self.max_features.resolve(width)),
            ..self.tree_config.clone()
        };

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut trees = Vec::with_capacity(self.n_estimators);
        for t in 0..self.n_estimators {
            let mut tree_rng = StdRng::seed_from_u64(rng.gen());
            let sample: Vec<usize> = if self.bootstrap {
                (0..n).map(|_| tree_rng.gen_range(0..n)).collect()
            } else {
                (0..n).collect()
            };

            let mut tree = DecisionTree::new(tree_config.clone());
            tree.fit_sample(features, targets, sample, &mut tree_rng)?;
            debug!(tree = t, nodes = tree.n_nodes(), depth = tree.depth(), "Grew tree");
            trees.push(tree);
        }

        self.trees = trees;
        Ok(())
    }

    fn predict_one(&self, features: &[f64]) -> Result<f64> {
        if self.trees.is_empty() {
            return Err(ExohabError::ModelNotTrained);
        }
        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.predict_one(features)?;
        }
        Ok(total / self.trees.len() as f64)
    }

    fn is_fitted(&self) -> bool {
        !self.trees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave(n: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
        let features: Vec<Vec<f64>> = (0..n)
            .map(|i| vec![i as f64 / n as f64, ((i * 31) % n) as f64 / n as f64])
            .collect();
        let targets: Vec<f64> = features
            .iter()
            .map(|x| 50.0 + 40.0 * (x[0] * 6.0).sin() + 5.0 * x[1])
            .collect();
        (features, targets)
    }

    #[test]
    fn test_max_features_resolve() {
        assert_eq!(MaxFeatures::All.resolve(8), 8);
        assert_eq!(MaxFeatures::Sqrt.resolve(8), 3);
        assert_eq!(MaxFeatures::Fraction(0.5).resolve(8), 4);
        assert_eq!(MaxFeatures::Count(20).resolve(8), 8);
        assert_eq!(MaxFeatures::Count(0).resolve(8), 1);
    }

    #[test]
    fn test_forest_grows_requested_trees() {
        let (features, targets) = wave(60);
        let mut forest = RandomForest::new(12, 42);
        forest.fit(&features, &targets).unwrap();
        assert_eq!(forest.trees().len(), 12);
        assert!(forest.is_fitted());
    }

    #[test]
    fn test_same_seed_same_predictions() {
        let (features, targets) = wave(80);
        let mut a = RandomForest::new(10, 7).with_max_features(MaxFeatures::Sqrt);
        let mut b = RandomForest::new(10, 7).with_max_features(MaxFeatures::Sqrt);
        a.fit(&features, &targets).unwrap();
        b.fit(&features, &targets).unwrap();
        assert_eq!(a.predict(&features).unwrap(), b.predict(&features).unwrap());
    }

    #[test]
    fn test_predictions_within_target_range() {
        let (features, targets) = wave(80);
        let mut forest = RandomForest::new(15, 1);
        forest.fit(&features, &targets).unwrap();

        let lo = targets.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = targets.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        for probe in [vec![-10.0, -10.0], vec![0.5, 0.5], vec![10.0, 10.0]] {
            let y = forest.predict_one(&probe).unwrap();
            assert!(y >= lo - 1e-9 && y <= hi + 1e-9);
        }
    }

    #[test]
    fn test_without_bootstrap_all_features_trees_agree() {
        let (features, targets) = wave(40);
        let mut forest = RandomForest::new(3, 5).with_bootstrap(false);
        forest.fit(&features, &targets).unwrap();
        let first = forest.trees()[0].predict(&features).unwrap();
        for tree in forest.trees() {
            assert_eq!(tree.predict(&features).unwrap(), first);
        }
    }

    #[test]
    fn test_unfitted_and_empty() {
        let forest = RandomForest::new(5, 0);
        assert!(matches!(forest.predict_one(&[0.0]), Err(ExohabError::ModelNotTrained)));

        let mut zero = RandomForest::new(0, 0);
        assert!(zero.fit(&[vec![1.0]], &[1.0]).is_err());
    }
}
