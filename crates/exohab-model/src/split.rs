//! Seeded holdout split.

use exohab_common::{ExohabError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Row indices of the two partitions.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitIndices {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Shuffle `0..n` with `seed`, hold out `ceil(n × test_fraction)` rows.
/// Both partitions always keep at least one row, so `n` must be at least 2.
pub fn train_test_split(n: usize, test_fraction: f64, seed: u64) -> Result<SplitIndices> {
    if n < 2 {
        return Err(ExohabError::InsufficientData { rows: n, required: 2 });
    }
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(ExohabError::Config(format!(
            "test fraction must be in (0, 1), got {test_fraction}"
        )));
    }

    let n_test = ((n as f64 * test_fraction).ceil() as usize).clamp(1, n - 1);

    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let train = order.split_off(n_test);
    Ok(SplitIndices { train, test: order })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eighty_twenty() {
        let split = train_test_split(100, 0.2, 42).unwrap();
        assert_eq!(split.test.len(), 20);
        assert_eq!(split.train.len(), 80);
    }

    #[test]
    fn test_partitions_cover_every_row_once() {
        let split = train_test_split(37, 0.2, 3).unwrap();
        let mut all: Vec<usize> = split.train.iter().chain(&split.test).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..37).collect::<Vec<_>>());
        assert_eq!(split.test.len(), 8); // ceil(7.4)
    }

    #[test]
    fn test_seed_is_reproducible() {
        assert_eq!(train_test_split(50, 0.2, 42).unwrap(), train_test_split(50, 0.2, 42).unwrap());
        assert_ne!(train_test_split(50, 0.2, 42).unwrap(), train_test_split(50, 0.2, 43).unwrap());
    }

    #[test]
    fn test_two_rows_split_one_one() {
        let split = train_test_split(2, 0.2, 42).unwrap();
        assert_eq!(split.train.len(), 1);
        assert_eq!(split.test.len(), 1);
    }

    #[test]
    fn test_too_few_rows() {
        assert!(matches!(
            train_test_split(1, 0.2, 42),
            Err(ExohabError::InsufficientData { rows: 1, required: 2 })
        ));
        assert!(matches!(
            train_test_split(0, 0.2, 42),
            Err(ExohabError::InsufficientData { rows: 0, .. })
        ));
    }

    #[test]
    fn test_bad_fraction() {
        assert!(matches!(train_test_split(10, 0.0, 1), Err(ExohabError::Config(_))));
        assert!(matches!(train_test_split(10, 1.0, 1), Err(ExohabError::Config(_))));
    }
}
