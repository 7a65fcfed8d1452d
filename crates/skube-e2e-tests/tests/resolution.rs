//! Name resolution against a learned corpus loaded from the on-disk cache.

mod helpers;

use chrono::Utc;
use pretty_assertions::assert_eq;
use serde_json::json;
use skube_protocol::{APP_NAMESPACE_PATTERN, ClusterPatterns, NamingConvention};
use skube_resolver::{PatternsCache, ResourceResolver};

use helpers::{CONTEXT, TestHarness, sample_corpus};

fn my_service_corpus(with_pattern: bool) -> ClusterPatterns {
    ClusterPatterns {
        deployments: vec!["qa/my-service-qa".into(), "qa/other-service".into()],
        patterns: if with_pattern {
            vec![APP_NAMESPACE_PATTERN.into()]
        } else {
            Vec::new()
        },
        naming_convention: Some(NamingConvention::Hyphen),
        ..Default::default()
    }
}

#[test]
fn app_namespace_pattern_resolves_suffixed_deployment() {
    let resolver = ResourceResolver::new(my_service_corpus(true));
    assert_eq!(resolver.resolve_app_name("my service", Some("qa")), "my-service-qa");
}

#[test]
fn without_pattern_fuzzy_match_still_finds_it() {
    let resolver = ResourceResolver::new(my_service_corpus(false));
    assert_eq!(resolver.resolve_app_name("my service", Some("qa")), "my-service-qa");
}

#[test]
fn empty_corpus_falls_back_to_hyphenated_input() {
    let harness = TestHarness::without_cache();
    assert!(!harness.resolver.has_patterns());
    assert_eq!(
        harness.resolver.resolve_app_name("my service", Some("qa")),
        "my-service"
    );
    assert_eq!(harness.resolver.resolve_namespace("qa"), "qa");
}

#[test]
fn cache_file_is_loaded_for_context() {
    let harness = TestHarness::with_sample_data();
    assert!(harness.resolver.has_patterns());
    assert!(harness.resolver.is_valid_namespace("production"));
    assert_eq!(harness.resolver.deployment_names().len(), 5);
    assert!(!PatternsCache::is_stale(harness.resolver.patterns(), Utc::now()));
    assert!(harness.cache.path_for(CONTEXT).starts_with(harness.cache_dir()));
}

#[test]
fn pipeline_fixes_typos() {
    let harness = TestHarness::with_sample_data();

    let intent = harness.run("logs of app web-srver in stagign").unwrap();
    assert_eq!(intent.namespace(), Some("staging"));
    assert_eq!(intent.app_name(), Some("web-server"));
}

#[test]
fn pipeline_resolves_app_via_namespace_pattern() {
    let harness = TestHarness::with_sample_data();
    let intent = harness.run("restart deployment billing in qa").unwrap();
    assert_eq!(intent.deployment_name(), Some("billing-qa"));
}

#[test]
fn pipeline_resolves_pods_and_services() {
    let harness = TestHarness::with_sample_data();

    let intent = harness
        .run("shell into pod payment-gateway-7f9c8-zzk2 in production")
        .unwrap();
    assert_eq!(intent.pod_name(), Some("payment-gateway-7f9c8-zzk2p"));

    let intent = harness.run("forward svc payment port 443 in production").unwrap();
    assert_eq!(intent.service_name(), Some("payments"));
    assert_eq!(intent.port(), Some("443"));
}

#[test]
fn namespace_scopes_lookups() {
    let harness = TestHarness::with_sample_data();
    // payment-gateway only exists in production
    let intent = harness.resolve("logs of app paymnt-gateway in qa");
    assert_eq!(intent.app_name(), Some("paymnt-gateway"));

    let intent = harness.resolve("logs of app paymnt-gateway in production");
    assert_eq!(intent.app_name(), Some("payment-gateway"));
}

#[test]
fn cache_for_other_context_is_ignored() {
    let mut corpus = sample_corpus();
    corpus["kubeContext"] = json!("some-other-cluster");
    let harness = TestHarness::with_corpus(&corpus);
    assert!(!harness.resolver.has_patterns());
    assert_eq!(harness.resolver.patterns().kube_context, CONTEXT);
}

#[test]
fn malformed_cache_degrades_to_empty_corpus() {
    let harness = TestHarness::with_cache_file("{ this is not json");
    assert!(harness.cache.load(CONTEXT).is_err());
    assert!(!harness.resolver.has_patterns());
    assert_eq!(
        harness.resolver.resolve_app_name("web server", None),
        "web-server"
    );
}

#[test]
fn malformed_entries_are_skipped() {
    let mut corpus = sample_corpus();
    corpus["deployments"] = json!(["qa/web-server", "no-namespace", "a/b/c"]);
    let harness = TestHarness::with_corpus(&corpus);
    assert_eq!(harness.resolver.deployment_names(), vec!["web-server"]);
}
