//! Shared fixtures for Exohab tests: raw rows, cleaned records and
//! reproducible synthetic tables.

use exohab_common::{PlanetParams, PlanetRecord, RawPlanetRow, FEATURE_COUNT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Raw row with the given name and the eight cells in feature order.
pub fn raw_row(name: &str, cells: [&str; FEATURE_COUNT]) -> RawPlanetRow {
    let [radius, mass, period, eqt, teff, smass, srad, met] = cells.map(|c| Some(c.to_string()));
    RawPlanetRow {
        name: name.to_string(),
        radius,
        mass,
        orbital_period: period,
        equilibrium_temp: eqt,
        star_temp: teff,
        star_mass: smass,
        star_radius: srad,
        star_metallicity: met,
    }
}

/// Complete raw row describing an Earth analogue around a Sun-like star.
pub fn earth_like_row(name: &str) -> RawPlanetRow {
    raw_row(name, ["1.0", "1.0", "365", "288", "5800", "1.0", "1.0", "0.0"])
}

/// Earth analogue: radius 1, mass 1, 365 d orbit, 288 K, 5800 K host.
pub fn earth_like_params() -> PlanetParams {
    PlanetParams {
        radius: 1.0,
        mass: 1.0,
        orbital_period: 365.0,
        equilibrium_temp: 288.0,
        star_temp: 5800.0,
        star_mass: 1.0,
        star_radius: 1.0,
        star_metallicity: 0.0,
    }
}

/// Hot Jupiter: far outside the habitable radius cut.
pub fn hot_jupiter_params() -> PlanetParams {
    PlanetParams {
        radius: 13.4,
        mass: 318.0,
        orbital_period: 3.5,
        equilibrium_temp: 1450.0,
        star_temp: 6065.0,
        star_mass: 1.13,
        star_radius: 1.2,
        star_metallicity: 0.02,
    }
}

pub fn record(name: &str, params: PlanetParams) -> PlanetRecord {
    PlanetRecord::new(name, params)
}

/// Reproducible table of plausible planets spanning rocky worlds to giants.
pub fn synthetic_records(n: usize, seed: u64) -> Vec<PlanetRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let radius = rng.gen_range(0.4..4.5);
            let params = PlanetParams {
                radius,
                mass: rng.gen_range(0.1..8.0) * radius,
                orbital_period: rng.gen_range(1.0..700.0),
                equilibrium_temp: rng.gen_range(150.0..600.0),
                star_temp: rng.gen_range(3000.0..7500.0),
                star_mass: rng.gen_range(0.1..1.6),
                star_radius: rng.gen_range(0.1..2.0),
                star_metallicity: rng.gen_range(-0.5..0.5),
            };
            PlanetRecord::new(format!("Synth-{i} b"), params)
        })
        .collect()
}
