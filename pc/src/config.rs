//! PromptCat configuration types and loading

use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main PromptCat configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the fragment store; defaults to `topics/` next to the binary
    pub base_dir: Option<PathBuf>,

    /// Fragment file extension, without the dot
    pub extension: String,

    /// Text placed between fragment bodies
    pub separator: String,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: None,
            extension: crate::DEFAULT_EXTENSION.to_string(),
            separator: crate::DEFAULT_SEPARATOR.to_string(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// 1. Explicit `--config` path (must load)
    /// 2. User config: `~/.config/promptcat/promptcat.yml`
    /// 3. Defaults
    ///
    /// Nothing relative to the working directory is consulted, so the tool
    /// behaves the same wherever it is invoked from.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        if let Some(user_config) = Self::user_config_path()
            && user_config.exists()
        {
            match Self::load_from_file(&user_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                }
            }
        }

        Ok(Self::default())
    }

    /// Load just the log level, before logging is initialized
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let path = config_path.cloned().or_else(Self::user_config_path)?;
        Self::load_from_file(&path).ok()?.log_level
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("promptcat").join("promptcat.yml"))
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Fragment store root: the configured directory, or `topics/` beside the
    /// running executable
    pub fn resolve_base_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.base_dir {
            return Ok(dir.clone());
        }
        install_topics_dir()
    }
}

/// `topics/` in the directory holding the running executable
pub fn install_topics_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to get current executable")?;
    let exe = fs::canonicalize(&exe).unwrap_or(exe);
    let dir = exe
        .parent()
        .ok_or_else(|| eyre!("Executable has no parent directory: {}", exe.display()))?;
    Ok(dir.join(crate::TOPICS_DIR))
}
