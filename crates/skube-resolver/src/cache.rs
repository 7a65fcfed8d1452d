//! Read-only access to the pattern cache files left by the learner.
//!
//! One JSON file per kube context under `<config dir>/patterns/`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use skube_protocol::ClusterPatterns;

use crate::error::{PatternsError, PatternsResult};

/// A corpus older than this is due for a refresh.
pub const CACHE_TTL_HOURS: i64 = 24;

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[/:\\ *?"<>|]"#).expect("valid regex"));

/// skube's configuration directory: `$XDG_CONFIG_HOME/skube`, else
/// `$HOME/.config/skube`.
pub fn config_dir() -> PatternsResult<PathBuf> {
    config_dir_from(
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
    )
}

fn config_dir_from(xdg: Option<OsString>, home: Option<OsString>) -> PatternsResult<PathBuf> {
    let non_empty = |v: Option<OsString>| v.filter(|v| !v.is_empty()).map(PathBuf::from);

    if let Some(xdg) = non_empty(xdg) {
        return Ok(xdg.join("skube"));
    }
    if let Some(home) = non_empty(home) {
        return Ok(home.join(".config").join("skube"));
    }
    Err(PatternsError::NoConfigDir)
}

/// Context names become file names; path and shell metacharacters turn into `_`.
pub fn sanitize_context_name(context: &str) -> String {
    UNSAFE_FILENAME_CHARS.replace_all(context, "_").into_owned()
}

/// Directory of per-context corpus files.
#[derive(Debug, Clone)]
pub struct PatternsCache {
    dir: PathBuf,
}

impl PatternsCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<config dir>/patterns`.
    pub fn default_location() -> PatternsResult<Self> {
        Ok(Self::new(config_dir()?.join("patterns")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, context: &str) -> PathBuf {
        self.dir
            .join(format!("{}.json", sanitize_context_name(context)))
    }

    /// Load the corpus learned for `context`.
    ///
    /// A missing file, or one written for a different context, yields an
    /// empty corpus tagged with `context`.
    pub fn load(&self, context: &str) -> PatternsResult<ClusterPatterns> {
        let path = self.path_for(context);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(context, path = %path.display(), "no pattern cache yet");
                return Ok(ClusterPatterns::empty_for(context));
            }
            Err(source) => {
                return Err(PatternsError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };

        let patterns: ClusterPatterns =
            serde_json::from_str(&content).map_err(|source| PatternsError::Json {
                path: path.display().to_string(),
                source,
            })?;

        if patterns.kube_context != context {
            tracing::warn!(
                requested = context,
                found = %patterns.kube_context,
                "pattern cache belongs to another context, ignoring it"
            );
            return Ok(ClusterPatterns::empty_for(context));
        }

        tracing::debug!(
            context,
            namespaces = patterns.namespaces.len(),
            deployments = patterns.deployments.len(),
            "loaded pattern cache"
        );
        Ok(patterns)
    }

    /// True when the corpus is empty, was never stamped, or is older than
    /// [`CACHE_TTL_HOURS`] at `now`.
    pub fn is_stale(patterns: &ClusterPatterns, now: DateTime<Utc>) -> bool {
        if patterns.is_empty() {
            return true;
        }
        match patterns.last_updated {
            Some(updated) => now - updated > Duration::hours(CACHE_TTL_HOURS),
            None => true,
        }
    }
}
