//! Terraformability score: gravity, temperature, atmosphere retention, liquid water.
//!
//! T = min(100, (gravity + temperature + atmosphere + water) × 2.5), T = 0 when radius > 3.
//! Each sub-score tops out at 10, so four perfect sub-scores give exactly 100.

use exohab_common::PlanetParams;
use serde::{Deserialize, Serialize};

use crate::{is_gas_giant, MAX_SCORE};

const SUBSCORE_SCALE: f64 = 2.5;

/// Penalises deviation from one Earth mass.
pub fn gravity_score(mass: f64) -> f64 {
    (10.0 - (mass - 1.0).abs() * 2.0).max(0.0)
}

/// Peaks at 288 K, zero outside [230, 330] K.
pub fn terraform_temperature_score(equilibrium_temp: f64) -> f64 {
    if (230.0..=330.0).contains(&equilibrium_temp) {
        (10.0 - (equilibrium_temp - 288.0).abs() / 10.0).max(0.0)
    } else {
        0.0
    }
}

/// Ability to hold an atmosphere, banded on mass only.
/// `_radius` is accepted but not used: the bands depend on mass only.
pub fn atmosphere_potential(mass: f64, _radius: f64) -> f64 {
    if mass <= 0.5 {
        0.0
    } else if mass <= 2.5 {
        10.0
    } else if mass > 5.0 {
        2.0
    } else {
        5.0
    }
}

/// 10 inside the liquid-water range [273, 373] K.
pub fn water_score(equilibrium_temp: f64) -> f64 {
    if (273.0..=373.0).contains(&equilibrium_temp) {
        10.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TerraformComponents {
    pub gravity: f64,
    pub temperature: f64,
    pub atmosphere: f64,
    pub water: f64,
}

impl TerraformComponents {
    /// `None` for gas giants.
    pub fn compute(params: &PlanetParams) -> Option<Self> {
        if is_gas_giant(params.radius) {
            return None;
        }
        Some(Self {
            gravity: gravity_score(params.mass),
            temperature: terraform_temperature_score(params.equilibrium_temp),
            atmosphere: atmosphere_potential(params.mass, params.radius),
            water: water_score(params.equilibrium_temp),
        })
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.gravity, self.temperature, self.atmosphere, self.water]
    }

    pub fn total(&self) -> f64 {
        (self.as_array().iter().sum::<f64>() * SUBSCORE_SCALE).min(MAX_SCORE)
    }
}

pub fn terraformability_score(params: &PlanetParams) -> f64 {
    TerraformComponents::compute(params)
        .map(|c| c.total())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use exohab_test_utils::{earth_like_params, hot_jupiter_params};
    use proptest::prelude::*;

    #[test]
    fn test_gravity_score() {
        assert_eq!(gravity_score(1.0), 10.0);
        assert_eq!(gravity_score(3.0), 6.0);
        assert_eq!(gravity_score(0.0), 8.0);
        assert_eq!(gravity_score(6.0), 0.0);
        assert_eq!(gravity_score(40.0), 0.0);
    }

    #[test]
    fn test_temperature_window() {
        assert_eq!(terraform_temperature_score(288.0), 10.0);
        assert!((terraform_temperature_score(230.0) - 4.2).abs() < 1e-9);
        assert_eq!(terraform_temperature_score(229.9), 0.0);
        assert_eq!(terraform_temperature_score(330.1), 0.0);
    }

    #[test]
    fn test_atmosphere_bands_ignore_radius() {
        assert_eq!(atmosphere_potential(0.5, 1.0), 0.0);
        assert_eq!(atmosphere_potential(0.51, 1.0), 10.0);
        assert_eq!(atmosphere_potential(2.5, 1.0), 10.0);
        assert_eq!(atmosphere_potential(3.0, 1.0), 5.0);
        assert_eq!(atmosphere_potential(5.0, 1.0), 5.0);
        assert_eq!(atmosphere_potential(5.01, 1.0), 2.0);
        assert_eq!(atmosphere_potential(1.0, 0.1), atmosphere_potential(1.0, 2.9));
    }

    #[test]
    fn test_water_range() {
        assert_eq!(water_score(273.0), 10.0);
        assert_eq!(water_score(373.0), 10.0);
        assert_eq!(water_score(272.9), 0.0);
        assert_eq!(water_score(373.1), 0.0);
    }

    #[test]
    fn test_earth_analogue_is_perfect() {
        assert_eq!(terraformability_score(&earth_like_params()), 100.0);
    }

    #[test]
    fn test_partial_score() {
        let mut params = earth_like_params();
        params.mass = 3.0; // gravity 6, atmosphere 5
        params.equilibrium_temp = 250.0; // temperature 6.2, no water
        let expected = (6.0 + 6.2 + 5.0 + 0.0) * 2.5;
        assert!((terraformability_score(&params) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_gas_giant_scores_zero() {
        assert_eq!(terraformability_score(&hot_jupiter_params()), 0.0);
        let mut params = earth_like_params();
        params.radius = 3.5;
        assert!(TerraformComponents::compute(&params).is_none());
        assert_eq!(terraformability_score(&params), 0.0);
    }

    proptest! {
        #[test]
        fn prop_terraformability_in_range(
            radius in 0.0f64..20.0,
            mass in 0.0f64..2000.0,
            eqt in 0.0f64..3000.0,
        ) {
            let mut params = earth_like_params();
            params.radius = radius;
            params.mass = mass;
            params.equilibrium_temp = eqt;
            let score = terraformability_score(&params);
            prop_assert!((0.0..=MAX_SCORE).contains(&score));
            if radius > 3.0 {
                prop_assert_eq!(score, 0.0);
            }
        }
    }
}
