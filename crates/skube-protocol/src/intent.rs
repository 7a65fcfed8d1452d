use serde::{Deserialize, Serialize};

/// Canonical action a parsed command line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    // ── Resource listings ───────────────────────────────────────
    Pods,
    Deployments,
    Services,
    Namespaces,
    Nodes,
    ConfigMaps,
    Secrets,
    Ingresses,
    Pvcs,
    All,

    // ── Cluster views ───────────────────────────────────────────
    Status,
    Events,
    Metrics,
    Config,

    // ── Workload actions ────────────────────────────────────────
    Logs,
    Shell,
    Restart,
    Scale,
    Rollback,
    Forward,

    // ── Generic resource actions ────────────────────────────────
    Describe,
    Delete,
    Edit,
    Explain,
    Apply,
    Copy,

    // ── Standalone ──────────────────────────────────────────────
    Completion,
    Update,
    Help,
    Version,

    /// Placeholder for "get"/"list"/"show" before a resource keyword
    /// narrows it down.
    Get,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pods => "pods",
            Self::Deployments => "deployments",
            Self::Services => "services",
            Self::Namespaces => "namespaces",
            Self::Nodes => "nodes",
            Self::ConfigMaps => "configmaps",
            Self::Secrets => "secrets",
            Self::Ingresses => "ingresses",
            Self::Pvcs => "pvcs",
            Self::All => "all",
            Self::Status => "status",
            Self::Events => "events",
            Self::Metrics => "metrics",
            Self::Config => "config",
            Self::Logs => "logs",
            Self::Shell => "shell",
            Self::Restart => "restart",
            Self::Scale => "scale",
            Self::Rollback => "rollback",
            Self::Forward => "forward",
            Self::Describe => "describe",
            Self::Delete => "delete",
            Self::Edit => "edit",
            Self::Explain => "explain",
            Self::Apply => "apply",
            Self::Copy => "copy",
            Self::Completion => "completion",
            Self::Update => "update",
            Self::Help => "help",
            Self::Version => "version",
            Self::Get => "get",
        }
    }

    /// Listing commands that accept a trailing bare namespace
    /// ("pods qa", "events staging").
    pub fn is_namespaced_listing(&self) -> bool {
        matches!(
            self,
            Self::Pods
                | Self::Deployments
                | Self::Services
                | Self::Nodes
                | Self::ConfigMaps
                | Self::Secrets
                | Self::Ingresses
                | Self::Pvcs
                | Self::Events
                | Self::Status
                | Self::All
        )
    }

    /// Commands that operate on an arbitrary `<type> <name>` pair.
    pub fn is_generic_resource(&self) -> bool {
        matches!(
            self,
            Self::Delete | Self::Edit | Self::Explain | Self::Describe
        )
    }

    /// Commands that ignore everything after their optional argument.
    pub fn is_standalone(&self) -> bool {
        matches!(
            self,
            Self::Completion | Self::Update | Self::Help | Self::Version
        )
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured result of parsing one command line.
///
/// Every optional field is write-once: the first value stored wins and
/// later setters are no-ops. Setters return whether they took effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    command: Option<Command>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pod_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deployment_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    resource_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    port: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    replicas: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dest_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    search_term: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    follow: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    prefix: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    dry_run: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tail_lines: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_log_requests: Option<u32>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Store `value` in an empty slot. Empty strings never count as a value.
fn fill(slot: &mut Option<String>, value: &str) -> bool {
    if slot.is_some() || value.is_empty() {
        return false;
    }
    *slot = Some(value.to_string());
    true
}

macro_rules! write_once_fields {
    ($($field:ident => $setter:ident),+ $(,)?) => {
        impl Intent {
            $(
                pub fn $field(&self) -> Option<&str> {
                    self.$field.as_deref()
                }

                pub fn $setter(&mut self, value: &str) -> bool {
                    fill(&mut self.$field, value)
                }
            )+
        }
    };
}

/// Primary name slots. At most one of them is ever filled; a setter
/// refuses while any of them holds a value.
macro_rules! target_name_fields {
    ($($field:ident => $setter:ident),+ $(,)?) => {
        impl Intent {
            $(
                pub fn $field(&self) -> Option<&str> {
                    self.$field.as_deref()
                }

                pub fn $setter(&mut self, value: &str) -> bool {
                    !self.has_target_name() && fill(&mut self.$field, value)
                }
            )+
        }
    };
}

target_name_fields! {
    app_name => set_app_name,
    pod_name => set_pod_name,
    service_name => set_service_name,
    deployment_name => set_deployment_name,
    resource_name => set_resource_name,
}

write_once_fields! {
    namespace => set_namespace,
    resource_type => set_resource_type,
    port => set_port,
    replicas => set_replicas,
    file_path => set_file_path,
    source_path => set_source_path,
    dest_path => set_dest_path,
    search_term => set_search_term,
}

impl Intent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn command(&self) -> Option<Command> {
        self.command
    }

    /// Set the command unless a specific one is already in place.
    ///
    /// The `Get` placeholder may always be narrowed ("list pods").
    pub fn set_command(&mut self, command: Command) -> bool {
        match self.command {
            None | Some(Command::Get) => {
                self.command = Some(command);
                true
            }
            Some(_) => false,
        }
    }

    /// Unconditionally take over the command slot. Used by standalone
    /// commands such as `help`.
    pub fn replace_command(&mut self, command: Command) {
        self.command = Some(command);
    }

    pub fn follow(&self) -> bool {
        self.follow
    }

    pub fn set_follow(&mut self) {
        self.follow = true;
    }

    pub fn prefix(&self) -> bool {
        self.prefix
    }

    pub fn set_prefix(&mut self) {
        self.prefix = true;
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn set_dry_run(&mut self) {
        self.dry_run = true;
    }

    pub fn tail_lines(&self) -> Option<u32> {
        self.tail_lines
    }

    pub fn set_tail_lines(&mut self, lines: u32) -> bool {
        if self.tail_lines.is_some() {
            return false;
        }
        self.tail_lines = Some(lines);
        true
    }

    pub fn max_log_requests(&self) -> Option<u32> {
        self.max_log_requests
    }

    pub fn set_max_log_requests(&mut self, requests: u32) -> bool {
        if self.max_log_requests.is_some() {
            return false;
        }
        self.max_log_requests = Some(requests);
        true
    }

    /// Whether any of the primary name slots (pod, app, deployment,
    /// service, generic resource name) is populated.
    pub fn has_target_name(&self) -> bool {
        self.pod_name.is_some()
            || self.app_name.is_some()
            || self.deployment_name.is_some()
            || self.service_name.is_some()
            || self.resource_name.is_some()
    }

    /// Reclassify a name captured as a pod into the deployment slot.
    ///
    /// Only applies while no deployment name is set. This is the single
    /// place a populated name field moves after being written.
    pub fn promote_pod_to_deployment(&mut self) -> bool {
        if self.deployment_name.is_some() {
            return false;
        }
        match self.pod_name.take() {
            Some(name) => {
                self.deployment_name = Some(name);
                true
            }
            None => false,
        }
    }

    /// Swap name fields for resolved spellings. Resolution only rewrites
    /// values that were already captured, so it bypasses write-once.
    pub fn rewrite_names(&mut self, mut rewrite: impl FnMut(NameSlot, &str) -> String) {
        let slots = [
            (NameSlot::Namespace, &mut self.namespace),
            (NameSlot::App, &mut self.app_name),
            (NameSlot::Pod, &mut self.pod_name),
            (NameSlot::Service, &mut self.service_name),
            (NameSlot::Deployment, &mut self.deployment_name),
        ];
        for (slot, value) in slots {
            if let Some(current) = value.as_deref() {
                let resolved = rewrite(slot, current);
                if !resolved.is_empty() {
                    *value = Some(resolved);
                }
            }
        }
    }
}

/// Name-bearing fields that can be rewritten after resolution, in the
/// order [`Intent::rewrite_names`] visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSlot {
    Namespace,
    App,
    Pod,
    Service,
    Deployment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_writer_wins() {
        let mut intent = Intent::new();
        assert!(intent.set_namespace("qa"));
        assert!(!intent.set_namespace("prod"));
        assert_eq!(intent.namespace(), Some("qa"));
    }

    #[test]
    fn empty_value_does_not_fill_slot() {
        let mut intent = Intent::new();
        assert!(!intent.set_pod_name(""));
        assert!(intent.set_pod_name("web-0"));
        assert_eq!(intent.pod_name(), Some("web-0"));
    }

    #[test]
    fn get_placeholder_can_be_narrowed() {
        let mut intent = Intent::new();
        assert!(intent.set_command(Command::Get));
        assert!(intent.set_command(Command::Pods));
        assert!(!intent.set_command(Command::Logs));
        assert_eq!(intent.command(), Some(Command::Pods));
    }

    #[test]
    fn replace_command_overrides() {
        let mut intent = Intent::new();
        intent.set_command(Command::Logs);
        intent.replace_command(Command::Help);
        assert_eq!(intent.command(), Some(Command::Help));
    }

    #[test]
    fn numeric_fields_are_write_once() {
        let mut intent = Intent::new();
        assert!(intent.set_tail_lines(50));
        assert!(!intent.set_tail_lines(10));
        assert_eq!(intent.tail_lines(), Some(50));
        assert!(intent.max_log_requests().is_none());
    }

    #[test]
    fn promote_pod_moves_name() {
        let mut intent = Intent::new();
        intent.set_pod_name("backend");
        assert!(intent.promote_pod_to_deployment());
        assert_eq!(intent.pod_name(), None);
        assert_eq!(intent.deployment_name(), Some("backend"));
    }

    #[test]
    fn promote_pod_without_pod_is_noop() {
        let mut intent = Intent::new();
        assert!(!intent.promote_pod_to_deployment());

        intent.set_deployment_name("api");
        assert!(!intent.promote_pod_to_deployment());
        assert_eq!(intent.deployment_name(), Some("api"));
        assert_eq!(intent.pod_name(), None);
    }

    #[test]
    fn only_one_target_name_is_kept() {
        let mut intent = Intent::new();
        assert!(intent.set_pod_name("web"));
        assert!(!intent.set_app_name("api"));
        assert!(!intent.set_service_name("web"));
        assert!(!intent.set_deployment_name("web"));
        assert!(!intent.set_resource_name("web"));
        assert_eq!(intent.pod_name(), Some("web"));
        assert_eq!(intent.app_name(), None);

        // a resource type still pairs with a resource name
        let mut intent = Intent::new();
        assert!(intent.set_resource_type("pod"));
        assert!(intent.set_resource_name("web-1"));
        assert!(!intent.set_pod_name("web-1"));
    }

    #[test]
    fn promoted_name_still_blocks_other_names() {
        let mut intent = Intent::new();
        intent.set_pod_name("backend");
        intent.promote_pod_to_deployment();
        assert!(!intent.set_pod_name("backend-0"));
        assert_eq!(intent.deployment_name(), Some("backend"));
    }

    #[test]
    fn has_target_name_tracks_all_name_slots() {
        let mut intent = Intent::new();
        assert!(!intent.has_target_name());
        intent.set_resource_name("my-secret");
        assert!(intent.has_target_name());
    }

    #[test]
    fn rewrite_names_only_touches_populated_slots() {
        let mut intent = Intent::new();
        intent.set_namespace("stagign");
        intent.set_app_name("web server");
        let mut seen = Vec::new();
        intent.rewrite_names(|slot, value| {
            seen.push(slot);
            match slot {
                NameSlot::Namespace => "staging".to_string(),
                _ => value.replace(' ', "-"),
            }
        });
        assert_eq!(seen, vec![NameSlot::Namespace, NameSlot::App]);
        assert_eq!(intent.namespace(), Some("staging"));
        assert_eq!(intent.app_name(), Some("web-server"));
    }

    #[test]
    fn command_serialization() {
        assert_eq!(
            serde_json::to_string(&Command::ConfigMaps).unwrap(),
            r#""configmaps""#
        );
        assert_eq!(serde_json::to_string(&Command::Pvcs).unwrap(), r#""pvcs""#);
        assert_eq!(Command::Forward.to_string(), "forward");
    }

    #[test]
    fn intent_serialization_skips_unset_fields() {
        let mut intent = Intent::new();
        intent.set_command(Command::Pods);
        intent.set_namespace("qa");
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json, serde_json::json!({"command": "pods", "namespace": "qa"}));
    }

    #[test]
    fn intent_roundtrip() {
        let mut intent = Intent::new();
        intent.set_command(Command::Logs);
        intent.set_app_name("myapp");
        intent.set_follow();
        intent.set_tail_lines(100);
        let json = serde_json::to_string(&intent).unwrap();
        let back: Intent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, intent);
    }

    #[test]
    fn command_groups() {
        assert!(Command::Pods.is_namespaced_listing());
        assert!(!Command::Namespaces.is_namespaced_listing());
        assert!(Command::Explain.is_generic_resource());
        assert!(!Command::Apply.is_generic_resource());
        assert!(Command::Help.is_standalone());
    }
}
