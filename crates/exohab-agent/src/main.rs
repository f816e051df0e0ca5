//! Exohab: Exoplanet habitability & terraformability explorer
//! Entry point for the interactive binary.

mod lookup;
mod pipeline;
mod repl;

use exohab_common::Config;
use exohab_ingestion::DatasetLoader;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("exohab=info,warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Exohab starting up...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    let loader = DatasetLoader::from_config(&config.dataset)?;
    info!("Loading dataset from {}", loader.provider_name());

    let (service, summary) = pipeline::build_service(&loader, &config.training).await?;

    println!(
        "Loaded {} planets, {} distinct names ({} incomplete rows dropped). Model held-out MAE: {:.2}",
        summary.records,
        service.distinct_names(),
        summary.dropped,
        summary.training.mae
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let stats = repl::run(&service, &config.lookup, stdin, tokio::io::stdout()).await?;
    info!(found = stats.found, not_found = stats.not_found, "Session ended");

    Ok(())
}
