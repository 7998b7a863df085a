//! `launchboard config` — Configuration management commands.

use launchboard_config::AppConfig;
use launchboard_core::DashboardContext;

pub async fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    let config = match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");
            config
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    };

    let mut warnings = Vec::new();
    if !AppConfig::config_path().exists() {
        warnings.push("No config file; running on defaults".to_string());
    }

    match DashboardContext::load(&config.dataset.path) {
        Ok(context) if context.records().is_empty() => {
            warnings.push("Dataset has no rows; charts will be empty".to_string());
        }
        Ok(context) => {
            println!(
                "   ✅ Dataset loaded: {} launches across {} sites",
                context.records().len(),
                context.site_count()
            );
        }
        Err(e) => {
            println!("   ❌ {e}");
            return Err(e.into());
        }
    }

    if warnings.is_empty() {
        println!("   ✅ All checks passed");
    } else {
        println!();
        for w in &warnings {
            println!("   ⚠️  {w}");
        }
    }

    println!();
    println!("   Dataset:  {}", config.dataset.path.display());
    println!("   Gateway:  {}", config.bind_addr());
    println!("   Step:     {}", config.slider.step);

    Ok(())
}

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub async fn path() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}
