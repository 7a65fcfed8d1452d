//! CLI configuration, loadable from TOML.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use skube_resolver::{PatternsCache, config_dir};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SKUBE_CONFIG";

/// File name looked up inside the skube config directory.
pub const CONFIG_FILE: &str = "skube.toml";

/// How the final intent is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single-line JSON.
    Json,
    /// Indented JSON.
    #[default]
    Pretty,
}

/// Top-level configuration for the `skube` binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CliConfig {
    /// Kube context whose learned patterns are used for name resolution.
    /// None skips resolution unless `--context` is given.
    #[serde(default)]
    pub context: Option<String>,
    /// Override for the pattern cache directory.
    #[serde(default)]
    pub patterns_dir: Option<PathBuf>,
    /// Rewrite captured names to the closest known resource names.
    #[serde(default = "default_resolve_names")]
    pub resolve_names: bool,
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_resolve_names() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            context: None,
            patterns_dir: None,
            resolve_names: default_resolve_names(),
            output: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from `$SKUBE_CONFIG`, else `<config dir>/skube.toml`.
    ///
    /// A missing file means defaults; a malformed one is an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(path) => PathBuf::from(path),
            None => match config_dir() {
                Ok(dir) => dir.join(CONFIG_FILE),
                Err(e) => {
                    tracing::debug!(error = %e, "no config directory, using defaults");
                    return Ok(Self::default());
                }
            },
        };
        Self::load_from(&path)
    }

    /// Like [`from_file`](Self::from_file), but a missing file yields defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let config = Self::from_file(path)
            .map_err(|e| e.context(format!("invalid config file {}", path.display())))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Cache holding the learned cluster patterns.
    pub fn patterns_cache(&self) -> anyhow::Result<PatternsCache> {
        match &self.patterns_dir {
            Some(dir) => Ok(PatternsCache::new(dir)),
            None => Ok(PatternsCache::default_location()?),
        }
    }
}
