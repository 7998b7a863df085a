//! `launchboard serve` — Load the dataset and start the dashboard server.

use std::path::PathBuf;

use launchboard_config::AppConfig;
use launchboard_core::DashboardContext;

pub async fn run(
    port_override: Option<u16>,
    dataset_override: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }
    if let Some(dataset) = dataset_override {
        config.dataset.path = dataset;
    }

    let context = DashboardContext::load(&config.dataset.path).map_err(|e| {
        tracing::error!(error = %e, "Dataset could not be loaded");
        format!("Failed to load dataset: {e}")
    })?;

    println!("🚀 {}", config.dashboard.title);
    println!(
        "   Dataset:   {} ({} launches)",
        config.dataset.path.display(),
        context.records().len()
    );
    println!("   Listening: http://{}", config.bind_addr());

    launchboard_gateway::serve(config, context).await?;

    Ok(())
}
