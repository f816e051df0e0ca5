//! Numeric coercion and row filtering.
//!
//! A row enters the working table only if all eight physical parameters
//! parse as finite numbers. Nothing is imputed: one bad cell drops the row.

use exohab_common::{PlanetParams, PlanetRecord, RawPlanetRow, FEATURE_COUNT};
use tracing::{debug, info};

/// Outcome of cleaning a raw table.
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    pub records: Vec<PlanetRecord>,
    pub dropped: usize,
}

impl CleanReport {
    pub fn total(&self) -> usize {
        self.records.len() + self.dropped
    }
}

/// Coerce one cell to a number. Blank, unparsable and non-finite cells are missing.
pub fn parse_numeric(cell: Option<&str>) -> Option<f64> {
    let text = cell?.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Turn one raw row into a record, or `None` if anything is missing.
pub fn clean_row(row: &RawPlanetRow) -> Option<PlanetRecord> {
    let name = row.name.trim();
    if name.is_empty() {
        debug!("Dropping row without a name");
        return None;
    }

    let mut values = [0.0f64; FEATURE_COUNT];
    for (slot, (field, cell)) in values.iter_mut().zip(row.cells()) {
        match parse_numeric(cell) {
            Some(v) => *slot = v,
            None => {
                debug!(planet = name, field, value = ?cell, "Dropping row with missing value");
                return None;
            }
        }
    }

    Some(PlanetRecord::new(name, PlanetParams::from_array(values)))
}

/// Clean a whole table, preserving source order.
pub fn clean_rows(rows: &[RawPlanetRow]) -> CleanReport {
    let records: Vec<PlanetRecord> = rows.iter().filter_map(clean_row).collect();
    let dropped = rows.len() - records.len();
    info!(kept = records.len(), dropped, "Cleaned dataset");
    CleanReport { records, dropped }
}
