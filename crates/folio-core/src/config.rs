use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::Language;

/// Backend used during local development when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Public submit endpoint of the form relay.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Environment variable overriding `api_base`.
pub const ENV_API_URL: &str = "FOLIO_API_URL";

/// Environment variable overriding `relay.access_key`.
pub const ENV_RELAY_KEY: &str = "FOLIO_RELAY_KEY";

/// Root URL of the backend serving JSON content and uploaded files.
///
/// Stored without a trailing `/` so that joining with an absolute path
/// (`/api/home`, `/uploads/x.png`) never doubles the separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ApiBase(String);

impl ApiBase {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        Self(trimmed.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins a path beginning with `/` onto the base.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl From<String> for ApiBase {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<ApiBase> for String {
    fn from(b: ApiBase) -> Self {
        b.0
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Form relay settings (`[relay]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Multipart submit endpoint.
    pub endpoint: String,
    /// Static access key sent as the `access_key` form field. Empty = not configured.
    #[serde(default)]
    pub access_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            access_key: String::new(),
        }
    }
}

/// Global configuration loaded from `~/.config/folio/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Backend root for `/api/...` and `/uploads/...`.
    #[serde(default)]
    pub api_base: ApiBase,
    /// Language used for fallback strings when none is requested.
    #[serde(default)]
    pub default_language: Language,
    #[serde(default)]
    pub relay: RelayConfig,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            api_base: ApiBase::default(),
            default_language: Language::default(),
            relay: RelayConfig::default(),
        }
    }
}

impl FolioConfig {
    /// Applies `FOLIO_API_URL` / `FOLIO_RELAY_KEY` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary lookup. Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_base = ApiBase::new(url);
        }
        if let Some(key) = lookup(ENV_RELAY_KEY) {
            self.relay.access_key = key.trim().to_string();
        }
        self
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("folio")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists,
/// then apply environment overrides.
pub fn load_or_init() -> Result<FolioConfig> {
    let path = config_path()?;
    Ok(load_at(&path)?.with_env_overrides())
}

/// Load configuration from `path`, writing defaults there if it does not exist.
/// Environment overrides are not applied.
pub fn load_at(path: &Path) -> Result<FolioConfig> {
    if !path.exists() {
        let default_cfg = FolioConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("writing default config to {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: FolioConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
