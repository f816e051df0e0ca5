//! Name lookup over the scored table.
//!
//! Names are matched case-insensitively after trimming. When the source has
//! several rows with the same name (the archive lists one row per published
//! solution), the first row in table order wins.

use std::collections::HashMap;

use exohab_common::{normalise_name, ExohabError, Result};
use exohab_model::{Predictor, TrainedModel};
use exohab_ranker::{ScoreBreakdown, ScoredPlanet};
use tracing::debug;

/// The three scores reported for one planet.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetScores {
    pub name: String,
    pub ml_habitability: f64,
    pub rule_habitability: f64,
    pub terraformability: f64,
    pub breakdown: ScoreBreakdown,
}

/// Immutable once built: table and model are only read.
#[derive(Debug)]
pub struct LookupService {
    table: Vec<ScoredPlanet>,
    index: HashMap<String, usize>,
    model: TrainedModel,
}

impl LookupService {
    pub fn new(table: Vec<ScoredPlanet>, model: TrainedModel) -> Self {
        let mut index = HashMap::with_capacity(table.len());
        for (row, planet) in table.iter().enumerate() {
            let key = planet.record.lookup_key();
            if index.contains_key(&key) {
                debug!(planet = %planet.name(), row, "Duplicate name, keeping first row");
                continue;
            }
            index.insert(key, row);
        }
        Self { table, index, model }
    }

    /// Number of distinct lookup keys.
    pub fn distinct_names(&self) -> usize {
        self.index.len()
    }

    pub fn find(&self, query: &str) -> Option<&ScoredPlanet> {
        self.index
            .get(&normalise_name(query))
            .map(|&row| &self.table[row])
    }

    /// Resolve `query` and gather all three scores.
    pub fn lookup(&self, query: &str) -> Result<PlanetScores> {
        let planet = self
            .find(query)
            .ok_or_else(|| ExohabError::NotFound(query.trim().to_string()))?;

        let ml_habitability = Predictor::new(&self.model).predict(planet.params())?;
        Ok(PlanetScores {
            name: planet.name().to_string(),
            ml_habitability,
            rule_habitability: planet.rule_habitability_score,
            terraformability: planet.terraformability_score,
            breakdown: planet.breakdown(),
        })
    }
}
