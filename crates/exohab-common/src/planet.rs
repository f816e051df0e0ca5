//! Planet rows as delivered by a dataset provider and as kept after cleaning.
//!
//! Column names follow the NASA Exoplanet Archive `ps` table so that a CSV
//! export from the archive deserialises straight into [`RawPlanetRow`].

use serde::{Deserialize, Serialize};

/// Number of physical parameters used as model features.
pub const FEATURE_COUNT: usize = 8;

/// Feature names in the fixed order produced by [`PlanetParams::as_array`].
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "radius",
    "mass",
    "orbital_period",
    "equilibrium_temp",
    "star_temp",
    "star_mass",
    "star_radius",
    "star_metallicity",
];

/// One row exactly as the provider delivered it.
/// Every numeric cell is kept as text; coercion happens in the loader.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawPlanetRow {
    #[serde(rename = "pl_name", default)]
    pub name: String,
    #[serde(rename = "pl_rade", default)]
    pub radius: Option<String>,          // Earth radii
    #[serde(rename = "pl_bmasse", default)]
    pub mass: Option<String>,            // Earth masses
    #[serde(rename = "pl_orbper", default)]
    pub orbital_period: Option<String>,  // days
    #[serde(rename = "pl_eqt", default)]
    pub equilibrium_temp: Option<String>,// Kelvin
    #[serde(rename = "st_teff", default)]
    pub star_temp: Option<String>,       // Kelvin
    #[serde(rename = "st_mass", default)]
    pub star_mass: Option<String>,       // solar masses
    #[serde(rename = "st_rad", default)]
    pub star_radius: Option<String>,     // solar radii
    #[serde(rename = "st_met", default)]
    pub star_metallicity: Option<String>,// dex
}

impl RawPlanetRow {
    /// Cells in feature order, paired with their feature name.
    pub fn cells(&self) -> [(&'static str, Option<&str>); FEATURE_COUNT] {
        [
            (FEATURE_NAMES[0], self.radius.as_deref()),
            (FEATURE_NAMES[1], self.mass.as_deref()),
            (FEATURE_NAMES[2], self.orbital_period.as_deref()),
            (FEATURE_NAMES[3], self.equilibrium_temp.as_deref()),
            (FEATURE_NAMES[4], self.star_temp.as_deref()),
            (FEATURE_NAMES[5], self.star_mass.as_deref()),
            (FEATURE_NAMES[6], self.star_radius.as_deref()),
            (FEATURE_NAMES[7], self.star_metallicity.as_deref()),
        ]
    }
}

/// The eight physical parameters of a planet and its host star.
/// Always complete: a row missing any of them never becomes a `PlanetParams`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlanetParams {
    pub radius: f64,
    pub mass: f64,
    pub orbital_period: f64,
    pub equilibrium_temp: f64,
    pub star_temp: f64,
    pub star_mass: f64,
    pub star_radius: f64,
    pub star_metallicity: f64,
}

impl PlanetParams {
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.radius,
            self.mass,
            self.orbital_period,
            self.equilibrium_temp,
            self.star_temp,
            self.star_mass,
            self.star_radius,
            self.star_metallicity,
        ]
    }

    pub fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        let [radius, mass, orbital_period, equilibrium_temp, star_temp, star_mass, star_radius, star_metallicity] =
            values;
        Self {
            radius,
            mass,
            orbital_period,
            equilibrium_temp,
            star_temp,
            star_mass,
            star_radius,
            star_metallicity,
        }
    }
}

/// A cleaned row of the working table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanetRecord {
    pub name: String,
    pub params: PlanetParams,
}

impl PlanetRecord {
    pub fn new(name: impl Into<String>, params: PlanetParams) -> Self {
        Self { name: name.into(), params }
    }

    /// Lookup key: trimmed, lowercased name.
    pub fn lookup_key(&self) -> String {
        normalise_name(&self.name)
    }
}

/// Normalise a planet name for case-insensitive matching.
pub fn normalise_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_roundtrip_keeps_feature_order() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let params = PlanetParams::from_array(values);
        assert_eq!(params.radius, 1.0);
        assert_eq!(params.star_metallicity, 8.0);
        assert_eq!(params.as_array(), values);
    }

    #[test]
    fn test_lookup_key_is_case_and_whitespace_insensitive() {
        let params = PlanetParams::from_array([1.0; FEATURE_COUNT]);
        let record = PlanetRecord::new("  TRAPPIST-1 e ", params);
        assert_eq!(record.lookup_key(), "trappist-1 e");
        assert_eq!(normalise_name("Trappist-1 E"), record.lookup_key());
    }

    #[test]
    fn test_raw_row_from_archive_csv() {
        let data = "pl_name,pl_rade,pl_bmasse,pl_orbper,pl_eqt,st_teff,st_mass,st_rad,st_met\n\
                    Kepler-442 b,1.34,2.36,112.3053,233,4402,0.61,0.6,-0.37\n\
                    K2-18 b,2.61,8.63,32.94,,3457,0.5,0.44,0.12\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<RawPlanetRow> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Kepler-442 b");
        assert_eq!(rows[0].radius.as_deref(), Some("1.34"));
        assert_eq!(rows[1].equilibrium_temp, None);
        assert_eq!(rows[1].cells()[3], ("equilibrium_temp", None));
    }
}
