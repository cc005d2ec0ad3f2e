use crate::probe::ProbeOptions;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration loaded from `~/.config/urlsmith/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlsmithConfig {
    /// Total probe deadline in milliseconds (connect + transfer).
    pub probe_timeout_ms: u64,
    /// Maximum redirect hops a probe will follow.
    pub max_redirects: u32,
    /// Optional custom User-Agent header for probes.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for UrlsmithConfig {
    fn default() -> Self {
        Self {
            probe_timeout_ms: 10_000,
            max_redirects: 30,
            user_agent: None,
        }
    }
}

impl UrlsmithConfig {
    /// Probe options derived from this configuration.
    pub fn probe_options(&self) -> ProbeOptions {
        ProbeOptions {
            timeout: Duration::from_millis(self.probe_timeout_ms),
            max_redirects: self.max_redirects,
            user_agent: self.user_agent.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlsmith")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlsmithConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlsmithConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UrlsmithConfig = toml::from_str(&data)?;
    Ok(cfg)
}
