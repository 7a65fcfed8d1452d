//! Resolve user-typed names against a learned cluster corpus.

use skube_protocol::{APP_NAMESPACE_PATTERN, ClusterPatterns};

use crate::cache::PatternsCache;
use crate::fuzzy::fuzzy_match_with_threshold;
use crate::naming::naming_variants;

/// Which `namespace/name` list of the corpus a lookup runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResourceKind {
    Deployment,
    Service,
    Pod,
}

/// Maps loosely typed names onto real resource names.
///
/// Holds an immutable corpus snapshot. Every lookup is a pure function of
/// the corpus and its arguments, and never fails: when nothing matches the
/// caller gets a normalized form of its own input back.
#[derive(Debug, Clone, Default)]
pub struct ResourceResolver {
    patterns: ClusterPatterns,
}

impl ResourceResolver {
    pub fn new(patterns: ClusterPatterns) -> Self {
        Self { patterns }
    }

    /// Resolver over an empty corpus; every lookup falls back to the input.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the corpus for `context` from `cache`, degrading to an empty
    /// corpus when it cannot be read.
    pub fn from_cache(cache: &PatternsCache, context: &str) -> Self {
        match cache.load(context) {
            Ok(patterns) => Self::new(patterns),
            Err(e) => {
                tracing::warn!(error = %e, context, "pattern cache unavailable, resolving without it");
                Self::new(ClusterPatterns::empty_for(context))
            }
        }
    }

    pub fn patterns(&self) -> &ClusterPatterns {
        &self.patterns
    }

    /// Resolve an app name (deployments are the app corpus).
    ///
    /// Order: exact deployment match, fuzzy deployment match, fuzzy match
    /// on label-derived app names, then the `{app}-{namespace}` pattern.
    pub fn resolve_app_name(&self, input: &str, namespace: Option<&str>) -> String {
        if input.is_empty() {
            return String::new();
        }
        let namespace = scope(namespace);
        let variants = self.variants(input);

        if let Some(name) = self.exact_match(ResourceKind::Deployment, &variants, namespace) {
            return resolved(input, name, "exact");
        }
        if let Some(name) = self.fuzzy_match(ResourceKind::Deployment, &variants, namespace) {
            return resolved(input, &name, "fuzzy");
        }
        if let Some(name) = variants
            .iter()
            .find_map(|v| fuzzy_match_with_threshold(v, &self.patterns.common_apps))
        {
            return resolved(input, name, "common_app");
        }
        if let Some(name) = namespace.and_then(|ns| self.pattern_match(&variants, ns)) {
            return resolved(input, name, "pattern");
        }

        fallback(input, variants)
    }

    pub fn resolve_service_name(&self, input: &str, namespace: Option<&str>) -> String {
        self.resolve_scoped(ResourceKind::Service, input, namespace)
    }

    pub fn resolve_pod_name(&self, input: &str, namespace: Option<&str>) -> String {
        self.resolve_scoped(ResourceKind::Pod, input, namespace)
    }

    /// Exact (case-insensitive) namespace, else the closest one within the
    /// adaptive threshold, else the input unchanged.
    pub fn resolve_namespace(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }

        if let Some(ns) = self
            .patterns
            .namespaces
            .iter()
            .find(|ns| ns.to_lowercase() == input.to_lowercase())
        {
            return resolved(input, ns, "exact");
        }
        if let Some(ns) = fuzzy_match_with_threshold(input, &self.patterns.namespaces) {
            return resolved(input, ns, "fuzzy");
        }

        input.to_string()
    }

    /// Whether any cluster data has been learned.
    pub fn has_patterns(&self) -> bool {
        !self.patterns.is_empty()
    }

    /// All deployment names, without their namespace prefix.
    pub fn deployment_names(&self) -> Vec<&str> {
        self.entries(ResourceKind::Deployment, None)
            .map(|(_, name)| name)
            .collect()
    }

    pub fn is_valid_namespace(&self, namespace: &str) -> bool {
        let wanted = namespace.to_lowercase();
        self.patterns
            .namespaces
            .iter()
            .any(|ns| ns.to_lowercase() == wanted)
    }

    // ── Strategies ──────────────────────────────────────────────

    fn resolve_scoped(&self, kind: ResourceKind, input: &str, namespace: Option<&str>) -> String {
        if input.is_empty() {
            return String::new();
        }
        let namespace = scope(namespace);
        let variants = self.variants(input);

        if let Some(name) = self.exact_match(kind, &variants, namespace) {
            return resolved(input, name, "exact");
        }
        if let Some(name) = self.fuzzy_match(kind, &variants, namespace) {
            return resolved(input, &name, "fuzzy");
        }

        fallback(input, variants)
    }

    fn variants(&self, input: &str) -> Vec<String> {
        naming_variants(input, self.patterns.naming_convention)
    }

    /// First variant with a case-insensitive name hit inside the namespace.
    fn exact_match(
        &self,
        kind: ResourceKind,
        variants: &[String],
        namespace: Option<&str>,
    ) -> Option<&str> {
        variants.iter().find_map(|variant| {
            let wanted = variant.to_lowercase();
            self.entries(kind, namespace)
                .find(|(_, name)| name.to_lowercase() == wanted)
                .map(|(_, name)| name)
        })
    }

    /// First variant with a fuzzy hit among names inside the namespace.
    fn fuzzy_match(
        &self,
        kind: ResourceKind,
        variants: &[String],
        namespace: Option<&str>,
    ) -> Option<String> {
        let candidates: Vec<&str> = self
            .entries(kind, namespace)
            .map(|(_, name)| name)
            .collect();
        variants.iter().find_map(|variant| {
            fuzzy_match_with_threshold(variant, &candidates).map(str::to_owned)
        })
    }

    /// `{app}-{namespace}`: look for `variant-namespace` among all deployments.
    fn pattern_match(&self, variants: &[String], namespace: &str) -> Option<&str> {
        if !self.patterns.has_pattern(APP_NAMESPACE_PATTERN) {
            return None;
        }
        variants.iter().find_map(|variant| {
            let wanted = format!("{variant}-{namespace}").to_lowercase();
            self.entries(ResourceKind::Deployment, None)
                .find(|(_, name)| name.to_lowercase() == wanted)
                .map(|(_, name)| name)
        })
    }

    /// Well-formed `namespace/name` entries of `kind`, filtered by namespace.
    fn entries<'a>(
        &'a self,
        kind: ResourceKind,
        namespace: Option<&str>,
    ) -> impl Iterator<Item = (&'a str, &'a str)> {
        let list = match kind {
            ResourceKind::Deployment => &self.patterns.deployments,
            ResourceKind::Service => &self.patterns.services,
            ResourceKind::Pod => &self.patterns.pods,
        };
        list.iter()
            .filter_map(|entry| ClusterPatterns::split_entry(entry))
            .filter(move |(ns, _)| namespace.is_none_or(|wanted| ns.eq_ignore_ascii_case(wanted)))
    }
}

/// Treat an empty namespace filter as no filter.
fn scope(namespace: Option<&str>) -> Option<&str> {
    namespace.filter(|ns| !ns.is_empty())
}

fn resolved(input: &str, name: &str, strategy: &'static str) -> String {
    tracing::debug!(input, resolved = name, strategy, "resolved name");
    name.to_string()
}

fn fallback(input: &str, variants: Vec<String>) -> String {
    let name = variants
        .into_iter()
        .next()
        .unwrap_or_else(|| input.to_string());
    tracing::debug!(input, resolved = %name, strategy = "fallback", "resolved name");
    name
}
