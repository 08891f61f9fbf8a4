use anyhow::Result;
use clap::Parser;
use sonatina::{CONFIG_DIRECTORY, LOG_FILE, app_core::Sonatina, config::CliArgs};
use std::{fs::File, sync::Mutex};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = CliArgs::parse().into_config()?;
    init_logging();

    tracing::info!(title = %config.title, source = %config.source, "starting");
    Sonatina::new(config)?.run()?;
    Ok(())
}

// Logs go to a file; the terminal belongs to the UI
fn init_logging() {
    let Some(dir) = dirs::config_dir().map(|dir| dir.join(CONFIG_DIRECTORY)) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join(LOG_FILE)) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "sonatina=info".into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}
