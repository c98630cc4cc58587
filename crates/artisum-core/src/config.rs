use crate::checksum::{
    ChecksumAlgorithmFactorySelector, ChecksumError, DEFAULT_BUFFER_SIZE, MD5, SHA_1,
};
use crate::extract::{ExtractorChain, UnknownExtractor};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("buffer_size must be at least 1")]
    ZeroBufferSize,
    #[error(transparent)]
    Algorithm(#[from] ChecksumError),
    #[error(transparent)]
    Extractor(#[from] UnknownExtractor),
}

/// Timeouts for artifact GETs (optional `[http]` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub connect_timeout_secs: u64,
    /// Whole-transfer limit.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 300,
        }
    }
}

impl HttpConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Global configuration loaded from `~/.config/artisum/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtisumConfig {
    /// Read window for checksum calculation, in bytes.
    pub buffer_size: usize,
    /// Algorithms computed by `artisum checksum` when none are given.
    pub algorithms: Vec<String>,
    /// Header conventions tried, in order, when fetching.
    pub extractors: Vec<String>,
    pub http: HttpConfig,
}

impl Default for ArtisumConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            algorithms: vec![SHA_1.to_string(), MD5.to_string()],
            extractors: vec!["digest".to_string()],
            http: HttpConfig::default(),
        }
    }
}

impl ArtisumConfig {
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize);
        }
        self.selector().select_all(&self.algorithms)?;
        ExtractorChain::from_names(&self.extractors)?;
        Ok(())
    }

    /// Built-in registry with this config's read window.
    pub fn selector(&self) -> ChecksumAlgorithmFactorySelector {
        ChecksumAlgorithmFactorySelector::default().with_buffer_size(self.buffer_size)
    }

    pub fn extractor_chain(&self) -> std::result::Result<ExtractorChain, UnknownExtractor> {
        ExtractorChain::from_names(&self.extractors)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("artisum")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ArtisumConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ArtisumConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<ArtisumConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ArtisumConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
