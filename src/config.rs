use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::summary::extract::{
    DEFAULT_FALLBACK_KEY_POINTS, DEFAULT_MAX_FOLLOW_UP, DEFAULT_MAX_KEY_POINTS,
};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ConvlogConfig {
    pub general: GeneralConfig,
    pub storage: StorageConfig,
    pub summary: SummaryConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub store_path: String,
    pub log_path: String,
    /// Take `<store_path>.lock` around each append + render.
    pub lock: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SummaryConfig {
    pub max_key_points: usize,
    /// Leading sentences used as key points when no keyword matches.
    pub fallback_key_points: usize,
    pub max_follow_up: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// Characters of the answer shown in a rendered entry.
    pub max_preview_chars: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let dir = default_convlog_dir();
        Self {
            store_path: dir
                .join("conversation_data.json")
                .to_string_lossy()
                .into_owned(),
            log_path: dir
                .join("AI_Conversation_Log.md")
                .to_string_lossy()
                .into_owned(),
            lock: true,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_key_points: DEFAULT_MAX_KEY_POINTS,
            fallback_key_points: DEFAULT_FALLBACK_KEY_POINTS,
            max_follow_up: DEFAULT_MAX_FOLLOW_UP,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_preview_chars: 200,
        }
    }
}

/// Returns `~/.convlog/`, or `./.convlog/` when there is no home directory.
pub fn default_convlog_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".convlog")
}

/// Returns the default config file path: `~/.convlog/config.toml`
pub fn default_config_path() -> PathBuf {
    default_convlog_dir().join("config.toml")
}

impl ConvlogConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            ConvlogConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (CONVLOG_STORE, CONVLOG_LOG, CONVLOG_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CONVLOG_STORE") {
            self.storage.store_path = val;
        }
        if let Ok(val) = std::env::var("CONVLOG_LOG") {
            self.storage.log_path = val;
        }
        if let Ok(val) = std::env::var("CONVLOG_LOG_LEVEL") {
            self.general.log_level = val;
        }
    }

    pub fn resolved_store_path(&self) -> PathBuf {
        expand_tilde(&self.storage.store_path)
    }

    pub fn resolved_log_path(&self) -> PathBuf {
        expand_tilde(&self.storage.log_path)
    }

    /// Lock file guarding the store, or `None` when locking is disabled.
    pub fn resolved_lock_path(&self) -> Option<PathBuf> {
        self.storage.lock.then(|| {
            let mut name = self.resolved_store_path().into_os_string();
            name.push(".lock");
            PathBuf::from(name)
        })
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
