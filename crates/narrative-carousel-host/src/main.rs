//! Narrative carousel replay entry point.

use std::error::Error;
use std::path::PathBuf;

use narrative_carousel::domain::config::NarrativeConfig;
use narrative_carousel_host::error::AppError;
use narrative_carousel_host::loader::load_document;
use narrative_carousel_host::replay::{Script, run_replay};
use tracing_subscriber::EnvFilter;

fn required_path(name: &str) -> Result<PathBuf, AppError> {
    std::env::var(name)
        .map(PathBuf::from)
        .map_err(|_| AppError::Config(format!("{name} environment variable must be set")))
}

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config_path = required_path("CAROUSEL_CONFIG")?;
    let script_path = required_path("CAROUSEL_SCRIPT")?;
    tracing::info!(
        config = %config_path.display(),
        script = %script_path.display(),
        "Starting carousel replay"
    );

    let config: NarrativeConfig = load_document(&config_path)?;
    let script: Script = load_document(&script_path)?;

    let report = run_replay(config, &script)?;
    tracing::info!(
        steps = report.steps.len(),
        handed_off_to = report.handed_off_to.as_deref(),
        "Replay finished"
    );

    println!("{}", serde_json::to_string_pretty(&report).map_err(AppError::from)?);

    Ok(())
}
