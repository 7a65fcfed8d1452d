use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Template recorded when deployments are named after their namespace
/// (`billing-qa` in namespace `qa`).
pub const APP_NAMESPACE_PATTERN: &str = "{app}-{namespace}";

/// Dominant naming style detected across a cluster's resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamingConvention {
    #[serde(rename = "hyphen")]
    Hyphen,
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "underscore")]
    Underscore,
    #[serde(rename = "PascalCase")]
    PascalCase,
    #[serde(rename = "mixed")]
    Mixed,
    /// Any label this version does not know about.
    #[serde(other)]
    Unknown,
}

impl NamingConvention {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hyphen => "hyphen",
            Self::CamelCase => "camelCase",
            Self::Underscore => "underscore",
            Self::PascalCase => "PascalCase",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource names learned from a cluster scan.
///
/// Produced and persisted by the pattern learner; consumers only read it.
/// `deployments`, `services` and `pods` hold `namespace/name` entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterPatterns {
    /// Kubernetes context this corpus was learned from.
    pub kube_context: String,
    /// Cluster display name (optional).
    pub cluster_name: String,
    /// When the learner last refreshed the corpus.
    pub last_updated: Option<DateTime<Utc>>,
    pub namespaces: Vec<String>,
    /// App names taken from `app` labels, not namespace-scoped.
    pub common_apps: Vec<String>,
    pub deployments: Vec<String>,
    pub services: Vec<String>,
    pub pods: Vec<String>,
    /// Naming templates such as [`APP_NAMESPACE_PATTERN`].
    pub patterns: Vec<String>,
    pub multi_word_resources: Vec<String>,
    /// Pod name → `app` label.
    pub app_labels: HashMap<String, String>,
    pub naming_convention: Option<NamingConvention>,
}

impl ClusterPatterns {
    /// Empty corpus tagged with the context it stands in for.
    pub fn empty_for(kube_context: impl Into<String>) -> Self {
        Self {
            kube_context: kube_context.into(),
            ..Default::default()
        }
    }

    /// Nothing learned yet.
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty() && self.deployments.is_empty()
    }

    pub fn has_pattern(&self, pattern: &str) -> bool {
        self.patterns.iter().any(|p| p == pattern)
    }

    /// Split a `namespace/name` entry. Anything else is malformed.
    pub fn split_entry(entry: &str) -> Option<(&str, &str)> {
        let mut parts = entry.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(namespace), Some(name), None) => Some((namespace, name)),
            _ => None,
        }
    }
}
