//! Required-field checks before an intent is handed to a dispatcher.

use skube_protocol::{Command, Intent};

/// An intent that cannot be acted on, with the usage line that fixes it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntentError {
    #[error("no command recognized\nUsage: skube <command> [target] [in <namespace>]")]
    NoCommand,
    #[error("{command} needs {needs}\nUsage: {usage}")]
    Incomplete {
        command: Command,
        needs: &'static str,
        usage: &'static str,
    },
}

/// Reject intents missing the fields their command needs.
pub fn check_intent(intent: &Intent) -> Result<(), IntentError> {
    let Some(command) = intent.command() else {
        return Err(IntentError::NoCommand);
    };

    let has = |field: Option<&str>| field.is_some();
    let missing = match command {
        Command::Get => Some(("a resource type", "skube get <resource> [in <namespace>]")),
        Command::Logs if !has(intent.pod_name()) && !has(intent.app_name()) => Some((
            "a pod or app",
            "skube logs from app <name> in <namespace>",
        )),
        Command::Shell if !has(intent.pod_name()) => {
            Some(("a pod name", "skube shell into pod <name> in <namespace>"))
        }
        Command::Restart if !has(intent.pod_name()) && !has(intent.deployment_name()) => Some((
            "a deployment or pod name",
            "skube restart deployment <name> in <namespace>",
        )),
        Command::Scale if !has(intent.deployment_name()) || !has(intent.replicas()) => Some((
            "a deployment and replicas",
            "skube scale deployment <name> to <N> in <namespace>",
        )),
        Command::Rollback if !has(intent.deployment_name()) => Some((
            "a deployment name",
            "skube rollback deployment <name> in <namespace>",
        )),
        Command::Forward
            if (!has(intent.service_name()) && !has(intent.pod_name()))
                || !has(intent.port()) =>
        {
            Some((
                "a service and port",
                "skube forward service <name> port <port> in <namespace>",
            ))
        }
        Command::Describe | Command::Delete | Command::Edit
            if !has(intent.resource_type()) || !has(intent.resource_name()) =>
        {
            Some((
                "a resource type and name",
                "skube describe <resource> <name> in <namespace>",
            ))
        }
        Command::Explain if !has(intent.resource_type()) => {
            Some(("a resource type", "skube explain <resource>"))
        }
        Command::Apply if !has(intent.file_path()) => {
            Some(("a file path", "skube apply file <filename>"))
        }
        Command::Copy if !has(intent.source_path()) || !has(intent.dest_path()) => Some((
            "a source and destination",
            "skube copy file <src> to <dest>",
        )),
        Command::Config => match intent.resource_type() {
            Some("context") if !has(intent.resource_name()) => {
                Some(("a context name", "skube use context <name>"))
            }
            Some("namespace") if !has(intent.resource_name()) => {
                Some(("a namespace name", "skube use namespace <name>"))
            }
            _ => None,
        },
        Command::Completion if !has(intent.resource_type()) => {
            Some(("a shell type", "skube completion <zsh|bash>"))
        }
        _ => None,
    };

    match missing {
        Some((needs, usage)) => Err(IntentError::Incomplete {
            command,
            needs,
            usage,
        }),
        None => Ok(()),
    }
}
