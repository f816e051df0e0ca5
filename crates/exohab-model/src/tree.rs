//! CART regression tree.
//!
//! Splits minimise the summed squared error of the two children. Thresholds
//! sit halfway between consecutive distinct feature values, and rows with
//! `x <= threshold` go left. With the default config the tree grows until
//! every leaf is pure or holds a single distinct row.

use exohab_common::{ExohabError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::regressor::{check_training_data, Regressor};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Maximum depth; `None` grows until leaves are pure
    pub max_depth: Option<usize>,
    /// Smallest node that may still be split
    pub min_samples_split: usize,
    /// Smallest child a split may produce
    pub min_samples_leaf: usize,
    /// Features drawn at random per split; `None` considers all of them
    pub max_features: Option<usize>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    sse: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    config: TreeConfig,
    seed: u64,
    nodes: Vec<Node>,
    n_features: usize,
}

impl DecisionTree {
    pub fn new(config: TreeConfig) -> Self {
        Self {
            config,
            seed: 0,
            nodes: Vec::new(),
            n_features: 0,
        }
    }

    /// Seed for per-split feature sampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| matches!(n, Node::Leaf { .. })).count()
    }

    pub fn depth(&self) -> usize {
        fn walk(nodes: &[Node], id: usize) -> usize {
            match nodes[id] {
                Node::Leaf { .. } => 0,
                Node::Split { left, right, .. } => 1 + walk(nodes, left).max(walk(nodes, right)),
            }
        }
        if self.nodes.is_empty() {
            0
        } else {
            walk(&self.nodes, 0)
        }
    }

    /// Fit on the rows listed in `sample` (repeats allowed, as in a bootstrap).
    pub(crate) fn fit_sample(
        &mut self,
        features: &[Vec<f64>],
        targets: &[f64],
        sample: Vec<usize>,
        rng: &mut StdRng,
    ) -> Result<()> {
        self.n_features = check_training_data(features, targets)?;
        if sample.is_empty() {
            return Err(ExohabError::InsufficientData { rows: 0, required: 1 });
        }
        self.nodes.clear();
        self.build(features, targets, sample, 0, rng);
        Ok(())
    }

    fn build(
        &mut self,
        features: &[Vec<f64>],
        targets: &[f64],
        mut indices: Vec<usize>,
        depth: usize,
        rng: &mut StdRng,
    ) -> usize {
        let n = indices.len();
        let (sum, sum_sq) = indices.iter().fold((0.0, 0.0), |(s, sq), &i| {
            (s + targets[i], sq + targets[i] * targets[i])
        });
        let mean = sum / n as f64;
        let sse = sum_sq - sum * sum / n as f64;

        let id = self.nodes.len();
        self.nodes.push(Node::Leaf { value: mean });

        let depth_reached = self.config.max_depth.is_some_and(|d| depth >= d);
        if depth_reached || n < self.config.min_samples_split || sse <= 1e-12 {
            return id;
        }

        let Some(best) = self.best_split(features, targets, &mut indices, rng) else {
            return id;
        };

        let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|&i| features[i][best.feature] <= best.threshold);

        let left = self.build(features, targets, left_idx, depth + 1, rng);
        let right = self.build(features, targets, right_idx, depth + 1, rng);
        self.nodes[id] = Node::Split {
            feature: best.feature,
            threshold: best.threshold,
            left,
            right,
        };
        id
    }

    fn candidate_features(&self, rng: &mut StdRng) -> Vec<usize> {
        match self.config.max_features {
            Some(k) if k > 0 && k < self.n_features => {
                rand::seq::index::sample(rng, self.n_features, k).into_vec()
            }
            _ => (0..self.n_features).collect(),
        }
    }

    fn best_split(
        &self,
        features: &[Vec<f64>],
        targets: &[f64],
        indices: &mut [usize],
        rng: &mut StdRng,
    ) -> Option<BestSplit> {
        let n = indices.len();
        let min_leaf = self.config.min_samples_leaf.max(1);
        let (total_sum, total_sq) = indices.iter().fold((0.0, 0.0), |(s, sq), &i| {
            (s + targets[i], sq + targets[i] * targets[i])
        });

        let mut best: Option<BestSplit> = None;
        for feature in self.candidate_features(rng) {
            indices.sort_by(|&a, &b| features[a][feature].total_cmp(&features[b][feature]));

            let mut left_sum = 0.0;
            let mut left_sq = 0.0;
            for pos in 0..n - 1 {
                let y = targets[indices[pos]];
                left_sum += y;
                left_sq += y * y;

                let left_n = pos + 1;
                let right_n = n - left_n;
                if left_n < min_leaf || right_n < min_leaf {
                    continue;
                }
                let here = features[indices[pos]][feature];
                let next = features[indices[pos + 1]][feature];
                if next <= here {
                    continue;
                }

                let right_sum = total_sum - left_sum;
                let right_sq = total_sq - left_sq;
                let sse = (left_sq - left_sum * left_sum / left_n as f64)
                    + (right_sq - right_sum * right_sum / right_n as f64);

                if best.as_ref().map_or(true, |b| sse < b.sse - 1e-12) {
                    let mut threshold = here + (next - here) / 2.0;
                    if threshold >= next {
                        threshold = here;
                    }
                    best = Some(BestSplit { feature, threshold, sse });
                }
            }
        }
        best
    }
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new(TreeConfig::default())
    }
}

impl Regressor for DecisionTree {
    fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.fit_sample(features, targets, (0..features.len()).collect(), &mut rng)
    }

    fn predict_one(&self, features: &[f64]) -> Result<f64> {
        if self.nodes.is_empty() {
            return Err(ExohabError::ModelNotTrained);
        }
        if features.len() != self.n_features {
            return Err(anyhow::anyhow!(
                "expected {} features, got {}",
                self.n_features,
                features.len()
            )
            .into());
        }

        let mut id = 0;
        loop {
            match self.nodes[id] {
                Node::Leaf { value } => return Ok(value),
                Node::Split { feature, threshold, left, right } => {
                    id = if features[feature] <= threshold { left } else { right };
                }
            }
        }
    }

    fn is_fitted(&self) -> bool {
        !self.nodes.is_empty()
    }
}
