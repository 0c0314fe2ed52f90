use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The built-in page table, shipped with the binary. Reproduces the three
/// admin pages this helper was written for.
const DEFAULT_PAGES: &str = include_str!("default_pages.toml");

/// Config file probed in the working directory when --config is not given.
const CONFIG_FILE: &str = ".fetch-patcher.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Page {path}: {apis} api names but {fetches} fetch calls (must match one-to-one)")]
    ArityMismatch {
        path: String,
        apis: usize,
        fetches: usize,
    },
}

/// The page table: an ordered list of files to patch. Order is the order
/// pages appear in the TOML, and the run iterates in that order.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub pages: Vec<PageConfig>,
}

/// Per-page fetch configuration. The string fragments carry their own
/// indentation so the rendered template lines up with the target file.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// Path to the page component, relative to the working directory.
    pub path: PathBuf,

    /// Names the API responses are destructured into (e.g. "logsRes").
    pub apis: Vec<String>,

    /// One fetch(...) call per entry in `apis`, same order.
    pub fetches: Vec<String>,

    /// Statements that move the fetched responses into component state.
    pub states: Vec<String>,

    /// useState declarations the page needs for the fetched data.
    /// Loaded and kept with the page, but never written out (the patch
    /// stops at the import line).
    #[serde(default)]
    #[allow(dead_code)]
    pub state_vars: Vec<String>,
}

impl Config {
    /// Resolve the page table for this run: an explicit --config path wins,
    /// then .fetch-patcher.toml in the working directory, then the built-in
    /// table.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let local = Path::new(CONFIG_FILE);
                if local.exists() {
                    Self::load_from(local)
                } else {
                    let config: Config = toml::from_str(DEFAULT_PAGES)?;
                    config.validate()?;
                    Ok(config)
                }
            }
        }
    }

    /// Load from a specific path (also used by tests).
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the positional-correspondence invariant: each page must have
    /// exactly one fetch call per api name.
    fn validate(&self) -> Result<(), ConfigError> {
        for page in &self.pages {
            if page.apis.len() != page.fetches.len() {
                return Err(ConfigError::ArityMismatch {
                    path: page.path.display().to_string(),
                    apis: page.apis.len(),
                    fetches: page.fetches.len(),
                });
            }
        }
        Ok(())
    }
}
