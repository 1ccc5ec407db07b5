use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use teamcal_core::config::TeamcalConfig;

pub fn run(config: &TeamcalConfig) -> Result<()> {
    let config_path = TeamcalConfig::config_path()?;

    if !config_path.exists() {
        TeamcalConfig::create_default_config(&config_path)
            .context("Failed to create default config")?;
        println!(
            "{}",
            format!("Created {}", config_path.display()).green()
        );
    }

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Exports:    {}", config.export_path().display());
    if let Some(events) = config.events_path() {
        println!("  Events:     {}", events.display());
    }

    println!();
    println!("{}", "Effective settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {}", line);
    }

    Ok(())
}
