//! Pipeline configuration.
//!
//! Stored as TOML at `<config dir>/mailroom/config.toml`:
//!
//! ```toml
//! [pipeline]
//! handlers = ["spy", "thief", "inspector"]
//!
//! [spy]
//! watched = "Austin Powers"
//!
//! [thief]
//! min_cost = 50
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::logging::LogSink;
use crate::service::handlers::AUSTIN_POWERS;
use crate::service::{Inspector, MailService, Spy, Thief, UntrustworthyMailWorker};

/// Handler stages that can appear in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerKind {
    Spy,
    Thief,
    Inspector,
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerKind::Spy => write!(f, "spy"),
            HandlerKind::Thief => write!(f, "thief"),
            HandlerKind::Inspector => write!(f, "inspector"),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pipeline: PipelineConfig,
    pub spy: SpyConfig,
    pub thief: ThiefConfig,
}

/// Handler order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub handlers: Vec<HandlerKind>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            handlers: vec![HandlerKind::Spy, HandlerKind::Thief, HandlerKind::Inspector],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpyConfig {
    /// Name whose correspondence is logged in full.
    pub watched: String,
}

impl Default for SpyConfig {
    fn default() -> Self {
        Self {
            watched: AUSTIN_POWERS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThiefConfig {
    /// Minimum declared value worth stealing.
    pub min_cost: i64,
}

impl Default for ThiefConfig {
    fn default() -> Self {
        Self { min_cost: 50 }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Cannot find config directory")?;
        Ok(config_dir.join("mailroom").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load from a specific file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse TOML text. Missing sections and fields take their defaults.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Invalid config")?;
        Ok(config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Build a worker with the configured handlers, in order.
    pub fn build_worker(&self, sink: Arc<dyn LogSink>) -> UntrustworthyMailWorker {
        let services = self.pipeline.handlers.iter().map(|kind| -> Box<dyn MailService> {
            match kind {
                HandlerKind::Spy => Box::new(Spy::new(self.spy.watched.clone(), sink.clone())),
                HandlerKind::Thief => Box::new(Thief::new(self.thief.min_cost)),
                HandlerKind::Inspector => Box::new(Inspector::new()),
            }
        });
        let worker = UntrustworthyMailWorker::new(services);
        tracing::debug!(
            handlers = ?self.pipeline.handlers,
            "Pipeline built"
        );
        worker
    }
}
