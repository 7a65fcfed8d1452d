//! Apply corpus-backed name resolution to a parsed intent.

use skube_protocol::{Intent, NameSlot};
use skube_resolver::ResourceResolver;

/// Rewrite captured names to their closest known spelling.
///
/// The namespace is resolved first and then scopes the other lookups.
/// Deployment names go through app resolution since deployments are the
/// app corpus.
pub fn resolve_intent(intent: &mut Intent, resolver: &ResourceResolver) {
    let mut namespace: Option<String> = None;

    intent.rewrite_names(|slot, value| {
        let scope = namespace.as_deref();
        let resolved = match slot {
            NameSlot::Namespace => resolver.resolve_namespace(value),
            NameSlot::App | NameSlot::Deployment => resolver.resolve_app_name(value, scope),
            NameSlot::Pod => resolver.resolve_pod_name(value, scope),
            NameSlot::Service => resolver.resolve_service_name(value, scope),
        };
        if slot == NameSlot::Namespace {
            namespace = Some(resolved.clone());
        }
        resolved
    });
}
