//! `launchboard inspect` — Summarize the dataset the dashboard would serve.

use std::path::PathBuf;

use launchboard_config::AppConfig;
use launchboard_core::{DashboardContext, SiteSelection, proportion};

pub async fn run(dataset_override: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    if let Some(dataset) = dataset_override {
        config.dataset.path = dataset;
    }

    let context = DashboardContext::load(&config.dataset.path)?;
    print!("{}", summary(&context, &config));
    Ok(())
}

fn summary(context: &DashboardContext, config: &AppConfig) -> String {
    let bounds = context.bounds();
    let domain = bounds.snapped(config.slider.step);
    let successes = proportion(context.records(), &SiteSelection::All);

    let mut out = String::new();
    out.push_str("📊 Launch Dataset\n");
    out.push_str("================\n");
    out.push_str(&format!("  File:      {}\n", config.dataset.path.display()));
    out.push_str(&format!("  Launches:  {}\n", context.records().len()));
    out.push_str(&format!("  Sites:     {}\n", context.site_count()));
    out.push_str(&format!("  Payload:   {} – {} kg\n", bounds.min, bounds.max));
    out.push_str(&format!(
        "  Slider:    {} – {} kg, step {}\n",
        domain.min, domain.max, config.slider.step
    ));

    out.push_str("\n  Options:\n");
    for option in context.options() {
        out.push_str(&format!("    {:<16} {}\n", option.value.as_str(), option.label));
    }

    out.push_str("\n  Successful launches per site:\n");
    for slice in &successes.slices {
        out.push_str(&format!("    {:<16} {}\n", slice.label, slice.value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchboard_core::{LaunchRecord, OutcomeClass};

    #[test]
    fn summary_lists_sites_and_counts() {
        let context = DashboardContext::from_records(vec![
            LaunchRecord::new("A", 500.0, OutcomeClass::Success, "v1"),
            LaunchRecord::new("A", 1500.0, OutcomeClass::Failure, "v1"),
            LaunchRecord::new("B", 2500.0, OutcomeClass::Success, "v2"),
        ]);
        let text = summary(&context, &AppConfig::default());

        assert!(text.contains("Launches:  3"));
        assert!(text.contains("Sites:     2"));
        assert!(text.contains("All Sites"));
        assert!(text.contains("500 – 2500 kg"));
        assert!(text.contains("0 – 3000 kg, step 1000"));
    }
}
