use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::strip_file_scheme;

/// Construction-time settings of a control. Immutable once the control
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub title: String,
    pub source: String,
}

impl PlayerConfig {
    pub fn new(title: impl Into<String>, source: impl Into<String>) -> Self {
        PlayerConfig {
            title: title.into(),
            source: source.into(),
        }
    }

    /// Title defaults to the file stem of the source.
    pub fn from_source(source: impl Into<String>) -> Self {
        let source = source.into();
        let title = Path::new(strip_file_scheme(&source))
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| source.clone());

        PlayerConfig { title, source }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_str = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config at {}", path.display()))?;

        let config = toml::from_str::<PlayerConfig>(&file_str)
            .with_context(|| format!("Malformed config at {}", path.display()))?;

        Ok(config)
    }
}

#[derive(Parser, Debug)]
#[command(name = "sonatina")]
#[command(about = "A minimal terminal audio player control")]
#[command(version)]
pub struct CliArgs {
    /// Media file to play
    #[arg(required_unless_present = "config")]
    pub source: Option<String>,

    /// Label shown above the controls
    #[arg(short, long)]
    pub title: Option<String>,

    /// TOML file with `title` and `source`
    #[arg(short, long, conflicts_with = "source")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    pub fn into_config(self) -> Result<PlayerConfig> {
        let mut config = match (self.config, self.source) {
            (Some(path), _) => PlayerConfig::load_from_file(path)?,
            (None, Some(source)) => PlayerConfig::from_source(source),
            (None, None) => return Err(anyhow!("No media source given")),
        };

        if let Some(title) = self.title {
            config.title = title;
        }

        Ok(config)
    }
}
