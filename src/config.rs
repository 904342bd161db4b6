use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use crate::model::{FileConfig, LauncherConfig};

pub const DEFAULT_API_URL: &str = "https://backendcontrole-production.up.railway.app";
pub const API_URL_ENV: &str = "LAUNCHER_API_URL";
pub const STATE_DIR_ENV: &str = "LAUNCHER_STATE_DIR";

const STATE_DIR_NAME: &str = ".neolauncher";
const CONFIG_FILE: &str = "config.json";

/// Values given on the command line; they win over everything else.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub state_dir: Option<PathBuf>,
}

impl LauncherConfig {
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// Flag, then environment, then `config.json`, then the built-in default.
    pub fn resolve_with(
        overrides: ConfigOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let state_dir = match overrides
            .state_dir
            .or_else(|| env(STATE_DIR_ENV).filter(|s| !s.trim().is_empty()).map(PathBuf::from))
        {
            Some(dir) => dir,
            None => default_state_dir()?,
        };

        let file = read_file_config(&state_dir)?;
        let raw = overrides
            .api_url
            .or_else(|| env(API_URL_ENV).filter(|s| !s.trim().is_empty()))
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            api_url: normalize_api_url(&raw)?,
            state_dir,
        })
    }

    pub fn log_file(&self) -> PathBuf {
        self.state_dir.join("launcher.log")
    }
}

pub fn default_state_dir() -> Result<PathBuf> {
    let home = home::home_dir().context("determine home directory")?;
    Ok(home.join(STATE_DIR_NAME))
}

pub fn read_file_config(state_dir: &Path) -> Result<FileConfig> {
    let path = state_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let bytes = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FileConfig =
        serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

fn normalize_api_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        anyhow::bail!("api url must not be empty");
    }
    let parsed = url::Url::parse(trimmed).with_context(|| format!("invalid api url {}", trimmed))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("api url must use http or https (got {})", parsed.scheme());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
