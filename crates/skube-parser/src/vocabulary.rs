//! Fixed keyword tables. All lookups expect a lowercased word.

use skube_protocol::Command;

/// Filler words skipped wherever they appear.
pub fn is_stop_word(word: &str) -> bool {
    matches!(
        word,
        "the"
            | "a"
            | "an"
            | "my"
            | "our"
            | "your"
            | "please"
            | "plz"
            | "kindly"
            | "me"
            | "us"
            | "for"
            | "target"
            | "resource"
            | "resources"
            | "object"
            | "objects"
            | "here"
            | "now"
    )
}

/// Words that introduce a location or target rather than name one.
pub fn is_preposition(word: &str) -> bool {
    matches!(word, "in" | "from" | "into" | "of" | "to")
}

/// A word that ends a `deployment <name>` style shortcut instead of
/// being taken as the name.
pub fn is_name_boundary(word: &str) -> bool {
    is_stop_word(word) || matches!(word, "in" | "from" | "to")
}

/// Command verbs and their synonyms.
pub fn command_alias(word: &str) -> Option<Command> {
    let command = match word {
        "completion" => Command::Completion,
        "update" => Command::Update,
        "version" | "-v" | "--version" => Command::Version,
        "help" | "-h" | "--help" => Command::Help,
        "apply" | "create" => Command::Apply,
        "delete" | "remove" | "destroy" => Command::Delete,
        "edit" | "change" | "modify" => Command::Edit,
        "use" | "switch" | "config" => Command::Config,
        "copy" | "cp" => Command::Copy,
        "explain" | "what" => Command::Explain,
        "logs" | "log" | "monitor" | "tail" => Command::Logs,
        "shell" | "exec" | "ssh" | "connect" => Command::Shell,
        "restart" | "reboot" | "bounce" => Command::Restart,
        "scale" | "resize" => Command::Scale,
        "rollback" | "undo" | "revert" => Command::Rollback,
        "forward" | "port-forward" | "tunnel" => Command::Forward,
        "describe" | "inspect" | "details" => Command::Describe,
        "status" | "health" => Command::Status,
        "events" | "history" => Command::Events,
        "get" | "list" | "show" | "fetch" | "give" | "check" => Command::Get,
        _ => return None,
    };
    Some(command)
}

/// Resource keywords, normalized to the singular kind name.
pub fn resource_alias(word: &str) -> Option<&'static str> {
    let kind = match word {
        "namespace" | "namespaces" | "ns" => "namespace",
        "pod" | "pods" => "pod",
        "deployment" | "deployments" | "deploy" => "deployment",
        "service" | "services" | "svc" => "service",
        "node" | "nodes" | "no" => "node",
        "configmap" | "configmaps" | "cm" => "configmap",
        "secret" | "secrets" => "secret",
        "ingress" | "ingresses" | "ing" => "ingress",
        "persistentvolumeclaim" | "persistentvolumeclaims" | "pvc" => "persistentvolumeclaim",
        _ => return None,
    };
    Some(kind)
}

/// Resource keywords that turn a bare `get` into a listing command.
pub fn listing_command(word: &str) -> Option<Command> {
    let command = match word {
        "namespaces" | "ns" => Command::Namespaces,
        "pods" | "pod" => Command::Pods,
        "deployments" | "deploy" => Command::Deployments,
        "services" | "svc" => Command::Services,
        "nodes" | "no" => Command::Nodes,
        "configmaps" | "cm" => Command::ConfigMaps,
        "secrets" => Command::Secrets,
        "ingresses" | "ing" => Command::Ingresses,
        "persistentvolumeclaims" | "pvc" => Command::Pvcs,
        "all" => Command::All,
        _ => return None,
    };
    Some(command)
}
