//! exohab-ranker: Rule-based habitability and terraformability scoring.
//!
//! Both scores share one shape: anything larger than [`GAS_GIANT_RADIUS`]
//! scores exactly zero, everything else is a sum of sub-component scores
//! clamped to [`MAX_SCORE`]. The model crate trains against these numbers,
//! so breakpoints and clamps must not drift.

pub mod habitability;
pub mod terraform;
pub mod scorer;

/// Planets above this radius (Earth radii) are treated as gas giants.
pub const GAS_GIANT_RADIUS: f64 = 3.0;

/// Upper bound of every reported score.
pub const MAX_SCORE: f64 = 100.0;

pub use habitability::{habitability_score, HabitabilityComponents};
pub use terraform::{terraformability_score, TerraformComponents};
pub use scorer::{score_record, score_table, ScoreBreakdown, ScoredPlanet};

/// True if the radius rules the planet out of both scores.
pub fn is_gas_giant(radius: f64) -> bool {
    radius > GAS_GIANT_RADIUS
}
