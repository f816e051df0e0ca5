//! Habitability score: mass, equilibrium temperature, host star and orbit.
//!
//! H = min(100, mass + temperature + star + stability), H = 0 when radius > 3.

use exohab_common::PlanetParams;
use serde::{Deserialize, Serialize};

use crate::{is_gas_giant, MAX_SCORE};

/// Favours Earth-like mass, tapers over super-Earths, zero above 5 M⊕.
pub fn mass_score(mass: f64) -> f64 {
    if mass <= 2.0 {
        mass * 10.0
    } else if mass <= 5.0 {
        20.0 - (mass - 2.0) * 5.0
    } else {
        0.0
    }
}

/// Peaks at 300 K, zero outside [200, 400] K.
pub fn temperature_score(equilibrium_temp: f64) -> f64 {
    if (200.0..=400.0).contains(&equilibrium_temp) {
        ((300.0 - (equilibrium_temp - 300.0).abs()) / 3.0).max(0.0)
    } else {
        0.0
    }
}

/// Rewards F/G/K hosts near solar temperature, zero outside [5000, 7000] K.
pub fn star_score(star_temp: f64) -> f64 {
    if (5000.0..=7000.0).contains(&star_temp) {
        ((7000.0 - (star_temp - 5800.0).abs()) / 100.0).max(0.0)
    } else {
        0.0
    }
}

/// Orbital stability proxy: 10 at a 365 day period, zero outside [50, 500] days.
pub fn stability_score(orbital_period: f64) -> f64 {
    if (50.0..=500.0).contains(&orbital_period) {
        (10.0 - (orbital_period - 365.0).abs() / 50.0).min(10.0)
    } else {
        0.0
    }
}

/// Sub-scores of the habitability total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HabitabilityComponents {
    pub mass: f64,
    pub temperature: f64,
    pub star: f64,
    pub stability: f64,
}

impl HabitabilityComponents {
    /// `None` for gas giants.
    pub fn compute(params: &PlanetParams) -> Option<Self> {
        if is_gas_giant(params.radius) {
            return None;
        }
        Some(Self {
            mass: mass_score(params.mass),
            temperature: temperature_score(params.equilibrium_temp),
            star: star_score(params.star_temp),
            stability: stability_score(params.orbital_period),
        })
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.mass, self.temperature, self.star, self.stability]
    }

    pub fn total(&self) -> f64 {
        // Only an unphysical negative mass can push the sum below zero.
        self.as_array().iter().sum::<f64>().clamp(0.0, MAX_SCORE)
    }
}

pub fn habitability_score(params: &PlanetParams) -> f64 {
    HabitabilityComponents::compute(params)
        .map(|c| c.total())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use exohab_test_utils::{earth_like_params, hot_jupiter_params};
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mass_score_breakpoints() {
        assert_eq!(mass_score(1.0), 10.0);
        assert_eq!(mass_score(2.0), 20.0);
        assert!(approx(mass_score(2.0001), 19.9995));
        assert_eq!(mass_score(5.0), 5.0);
        assert_eq!(mass_score(5.0001), 0.0);
        assert_eq!(mass_score(12.0), 0.0);
    }

    #[test]
    fn test_stability_score() {
        assert_eq!(stability_score(365.0), 10.0);
        assert_eq!(stability_score(49.0), 0.0);
        assert_eq!(stability_score(501.0), 0.0);
        assert!(approx(stability_score(50.0), 3.7));
        assert!(approx(stability_score(500.0), 7.3));
    }

    #[test]
    fn test_temperature_score() {
        assert!(approx(temperature_score(300.0), 100.0));
        assert!(approx(temperature_score(288.0), 96.0));
        assert!(approx(temperature_score(200.0), 200.0 / 3.0));
        assert_eq!(temperature_score(199.9), 0.0);
        assert_eq!(temperature_score(400.1), 0.0);
    }

    #[test]
    fn test_star_score() {
        assert!(approx(star_score(5800.0), 70.0));
        assert!(approx(star_score(5000.0), 62.0));
        assert!(approx(star_score(7000.0), 58.0));
        assert_eq!(star_score(4999.0), 0.0);
        assert_eq!(star_score(7001.0), 0.0);
    }

    #[test]
    fn test_sun_like_planet_scores_high() {
        let params = earth_like_params();
        let components = HabitabilityComponents::compute(&params).unwrap();
        assert_eq!(components.mass, 10.0);
        assert!(approx(components.temperature, 96.0));
        assert!(approx(components.star, 70.0));
        assert_eq!(components.stability, 10.0);
        // 186 before the clamp
        assert_eq!(habitability_score(&params), 100.0);
    }

    #[test]
    fn test_gas_giant_scores_zero() {
        assert_eq!(habitability_score(&hot_jupiter_params()), 0.0);

        let mut params = earth_like_params();
        params.radius = 3.0001;
        assert_eq!(habitability_score(&params), 0.0);
        assert!(HabitabilityComponents::compute(&params).is_none());

        params.radius = 3.0;
        assert!(habitability_score(&params) > 0.0);
    }

    #[test]
    fn test_cold_distant_planet_only_mass_counts() {
        let mut params = earth_like_params();
        params.equilibrium_temp = 150.0;
        params.star_temp = 3200.0;
        params.orbital_period = 900.0;
        assert_eq!(habitability_score(&params), 10.0);
    }

    proptest! {
        #[test]
        fn prop_habitability_in_range(
            radius in 0.0f64..20.0,
            mass in 0.0f64..2000.0,
            period in 0.0f64..5000.0,
            eqt in 0.0f64..3000.0,
            teff in 2000.0f64..12000.0,
        ) {
            let mut params = earth_like_params();
            params.radius = radius;
            params.mass = mass;
            params.orbital_period = period;
            params.equilibrium_temp = eqt;
            params.star_temp = teff;
            let score = habitability_score(&params);
            prop_assert!((0.0..=MAX_SCORE).contains(&score));
            if radius > 3.0 {
                prop_assert_eq!(score, 0.0);
            }
        }
    }
}
