//! Shared test harness for E2E integration tests.
//!
//! Writes a learned-pattern cache into a temp directory and runs phrases
//! through the same parse, resolve and check steps as the `skube` binary.

#![allow(dead_code)]

use std::path::Path;

use chrono::{Duration, Utc};
use serde_json::{Value, json};
use tempfile::TempDir;

use skube_cli::{IntentError, check_intent, resolve_intent};
use skube_protocol::Intent;
use skube_resolver::{PatternsCache, ResourceResolver};

/// Context the sample corpus is learned for.
pub const CONTEXT: &str = "kind-skube-dev";

/// Sample corpus in the learner's on-disk format.
pub fn sample_corpus() -> Value {
    json!({
        "kubeContext": CONTEXT,
        "clusterName": "skube-dev",
        "lastUpdated": (Utc::now() - Duration::hours(1)).to_rfc3339(),
        "namespaces": ["default", "qa", "staging", "production"],
        "commonApps": ["checkout", "notifications"],
        "deployments": [
            "qa/web-server",
            "qa/billing-qa",
            "staging/web-server",
            "production/web-server",
            "production/payment-gateway"
        ],
        "services": ["qa/web", "qa/billing", "production/payments"],
        "pods": [
            "qa/web-server-6d4cf56db6-abcde",
            "production/payment-gateway-7f9c8-zzk2p"
        ],
        "patterns": ["{app}-{namespace}"],
        "multiWordResources": ["web server", "payment gateway"],
        "appLabels": {"web-server-6d4cf56db6-abcde": "web-server"},
        "namingConvention": "hyphen"
    })
}

/// Temp pattern cache plus a resolver loaded from it.
pub struct TestHarness {
    dir: TempDir,
    pub cache: PatternsCache,
    pub resolver: ResourceResolver,
}

impl TestHarness {
    /// Harness over [`sample_corpus`].
    pub fn with_sample_data() -> Self {
        Self::with_corpus(&sample_corpus())
    }

    /// Harness with `corpus` written as the cache file for [`CONTEXT`].
    pub fn with_corpus(corpus: &Value) -> Self {
        Self::with_cache_file(&corpus.to_string())
    }

    /// Harness whose cache file for [`CONTEXT`] holds `contents` verbatim.
    pub fn with_cache_file(contents: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let cache = PatternsCache::new(dir.path());
        std::fs::write(cache.path_for(CONTEXT), contents).unwrap();
        let resolver = ResourceResolver::from_cache(&cache, CONTEXT);
        Self {
            dir,
            cache,
            resolver,
        }
    }

    /// Harness with an empty cache directory.
    pub fn without_cache() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let cache = PatternsCache::new(dir.path());
        let resolver = ResourceResolver::from_cache(&cache, CONTEXT);
        Self {
            dir,
            cache,
            resolver,
        }
    }

    pub fn cache_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Parse and resolve, without checking.
    pub fn resolve(&self, line: &str) -> Intent {
        let mut intent = parse(line);
        resolve_intent(&mut intent, &self.resolver);
        intent
    }

    /// Full pipeline as the binary runs it.
    pub fn run(&self, line: &str) -> Result<Intent, IntentError> {
        let intent = self.resolve(line);
        check_intent(&intent)?;
        Ok(intent)
    }
}

/// Parse a whitespace-separated phrase.
pub fn parse(line: &str) -> Intent {
    let words: Vec<&str> = line.split_whitespace().collect();
    skube_parser::parse(&words)
}
