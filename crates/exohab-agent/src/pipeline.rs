//! Startup pipeline: load → clean → score → train.

use exohab_common::{Result, TrainingConfig};
use exohab_ingestion::DatasetLoader;
use exohab_model::{ModelTrainer, TrainingReport};
use exohab_ranker::score_table;
use tracing::info;

use crate::lookup::LookupService;

/// What startup produced, for the console banner.
#[derive(Debug, Clone)]
pub struct StartupSummary {
    pub records: usize,
    pub dropped: usize,
    pub training: TrainingReport,
}

/// Run every startup stage in order. Any failure here is fatal.
pub async fn build_service(
    loader: &DatasetLoader,
    training: &TrainingConfig,
) -> Result<(LookupService, StartupSummary)> {
    let cleaned = loader.load().await?;
    let dropped = cleaned.dropped;

    let table = score_table(cleaned.records);
    let (model, report) = ModelTrainer::new(training.clone()).train(&table)?;

    let summary = StartupSummary {
        records: table.len(),
        dropped,
        training: report,
    };
    info!(
        records = summary.records,
        dropped = summary.dropped,
        mae = summary.training.mae,
        "Startup complete"
    );
    Ok((LookupService::new(table, model), summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use exohab_common::ExohabError;
    use exohab_ingestion::MockDatasetProvider;
    use exohab_test_utils::{earth_like_row, raw_row};

    fn training() -> TrainingConfig {
        TrainingConfig { n_estimators: 4, ..Default::default() }
    }

    #[tokio::test]
    async fn test_pipeline_end_to_end() {
        let provider = MockDatasetProvider::new()
            .with(earth_like_row("Earth Twin"))
            .with(raw_row("Mars-ish", ["0.53", "0.11", "687", "210", "5800", "1", "1", "0"]))
            .with(raw_row("Broken", ["0.53", "N/A", "687", "210", "5800", "1", "1", "0"]))
            .with(raw_row("Giant", ["11.2", "300", "4", "1400", "6000", "1.1", "1.2", "0.1"]));
        let loader = DatasetLoader::new(Box::new(provider));

        let (service, summary) = build_service(&loader, &training()).await.unwrap();
        assert_eq!(summary.records, 3);
        assert_eq!(summary.dropped, 1);
        assert_eq!(summary.training.test_rows, 1);
        assert!(service.find("broken").is_none());

        let giant = service.lookup("GIANT").unwrap();
        assert_eq!(giant.rule_habitability, 0.0);
        assert_eq!(giant.terraformability, 0.0);
    }

    #[tokio::test]
    async fn test_single_usable_row_is_insufficient() {
        let provider = MockDatasetProvider::new().with(earth_like_row("Only"));
        let loader = DatasetLoader::new(Box::new(provider));
        let err = build_service(&loader, &training()).await.unwrap_err();
        assert!(matches!(err, ExohabError::InsufficientData { rows: 1, .. }));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_fatal() {
        let loader = DatasetLoader::new(Box::new(MockDatasetProvider::new().failing("HTTP 502")));
        let err = build_service(&loader, &training()).await.unwrap_err();
        assert!(matches!(err, ExohabError::Fetch(_)));
    }
}
