//! Scores attached to cleaned records.

use exohab_common::{PlanetParams, PlanetRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::habitability::{habitability_score, HabitabilityComponents};
use crate::terraform::{terraformability_score, TerraformComponents};

/// A cleaned record with both rule-based scores, computed once at load time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredPlanet {
    pub record: PlanetRecord,
    pub rule_habitability_score: f64,
    pub terraformability_score: f64,
}

impl ScoredPlanet {
    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn params(&self) -> &PlanetParams {
        &self.record.params
    }

    /// Recompute the sub-scores behind the stored totals.
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown::compute(&self.record.params)
    }
}

/// Per-component view of both scores. Both sides are `None` for gas giants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub habitability: Option<HabitabilityComponents>,
    pub terraform: Option<TerraformComponents>,
}

impl ScoreBreakdown {
    pub fn compute(params: &PlanetParams) -> Self {
        Self {
            habitability: HabitabilityComponents::compute(params),
            terraform: TerraformComponents::compute(params),
        }
    }

    pub fn is_gas_giant(&self) -> bool {
        self.habitability.is_none()
    }
}

pub fn score_record(record: PlanetRecord) -> ScoredPlanet {
    let rule_habitability_score = habitability_score(&record.params);
    let terraformability_score = terraformability_score(&record.params);
    debug!(
        planet = %record.name,
        habitability = rule_habitability_score,
        terraformability = terraformability_score,
        "Scored planet"
    );
    ScoredPlanet {
        record,
        rule_habitability_score,
        terraformability_score,
    }
}

/// Score every record, keeping table order.
pub fn score_table(records: Vec<PlanetRecord>) -> Vec<ScoredPlanet> {
    let scored: Vec<ScoredPlanet> = records.into_iter().map(score_record).collect();
    let nonzero = scored.iter().filter(|p| p.rule_habitability_score > 0.0).count();
    info!(
        "Scored {} planets ({} with non-zero habitability)",
        scored.len(),
        nonzero
    );
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use exohab_test_utils::{earth_like_params, hot_jupiter_params, record, synthetic_records};

    #[test]
    fn test_score_table_preserves_order() {
        let table = score_table(vec![
            record("Earth Twin", earth_like_params()),
            record("Hot Jupiter", hot_jupiter_params()),
        ]);
        assert_eq!(table[0].name(), "Earth Twin");
        assert_eq!(table[0].rule_habitability_score, 100.0);
        assert_eq!(table[0].terraformability_score, 100.0);
        assert_eq!(table[1].rule_habitability_score, 0.0);
        assert_eq!(table[1].terraformability_score, 0.0);
    }

    #[test]
    fn test_breakdown_matches_stored_totals() {
        for planet in score_table(synthetic_records(200, 7)) {
            let breakdown = planet.breakdown();
            let h = breakdown.habitability.map(|c| c.total()).unwrap_or(0.0);
            let t = breakdown.terraform.map(|c| c.total()).unwrap_or(0.0);
            assert_eq!(h, planet.rule_habitability_score);
            assert_eq!(t, planet.terraformability_score);
            assert_eq!(breakdown.is_gas_giant(), planet.params().radius > 3.0);
        }
    }

    #[test]
    fn test_large_radius_zeroes_both_scores() {
        for planet in score_table(synthetic_records(300, 11)) {
            if planet.params().radius > 3.0 {
                assert_eq!(planet.rule_habitability_score, 0.0);
                assert_eq!(planet.terraformability_score, 0.0);
            }
        }
    }
}
