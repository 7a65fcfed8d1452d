//! Fallback for tokens no recognizer claimed.

use skube_protocol::{Command, Intent};

/// Field a bare token ended up in, for trace output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Inferred {
    Port,
    Replicas,
    Namespace,
    Pod,
    Deployment,
    Service,
    ResourceType,
    ResourceName,
    SourcePath,
    DestPath,
}

/// Place a bare token from context. `input` is the whole lowercased
/// command line, searched for the `scale`/`forward`/`port` keywords that
/// decide what a number means.
pub(crate) fn infer(token: &str, input: &str, intent: &mut Intent) -> Option<Inferred> {
    port_or_replicas(token, input, intent)
        .or_else(|| namespace(token, intent))
        .or_else(|| primary_name(token, intent))
}

fn port_or_replicas(token: &str, input: &str, intent: &mut Intent) -> Option<Inferred> {
    if token.contains(':') && intent.command() != Some(Command::Copy) && intent.set_port(token) {
        return Some(Inferred::Port);
    }

    if token.parse::<i64>().is_err() || intent.port().is_some() || intent.replicas().is_some() {
        return None;
    }
    if input.contains("scale") {
        intent.set_replicas(token);
        Some(Inferred::Replicas)
    } else if input.contains("forward") || input.contains("port") {
        intent.set_port(token);
        Some(Inferred::Port)
    } else {
        None
    }
}

/// Bare token after a listing command or after a name: the namespace.
fn namespace(token: &str, intent: &mut Intent) -> Option<Inferred> {
    if token.starts_with('-') || intent.namespace().is_some() {
        return None;
    }
    let listing = intent.command().is_some_and(|c| c.is_namespaced_listing());
    if (listing || intent.has_target_name()) && intent.set_namespace(token) {
        return Some(Inferred::Namespace);
    }
    None
}

/// First bare token names the command's primary target.
fn primary_name(token: &str, intent: &mut Intent) -> Option<Inferred> {
    if intent.has_target_name() {
        return None;
    }

    let command = intent.command()?;
    match command {
        Command::Logs | Command::Shell | Command::Restart => {
            intent.set_pod_name(token).then_some(Inferred::Pod)
        }
        Command::Scale | Command::Rollback => intent
            .set_deployment_name(token)
            .then_some(Inferred::Deployment),
        Command::Forward => intent.set_service_name(token).then_some(Inferred::Service),
        c if c.is_generic_resource() => {
            if intent.set_resource_type(token) {
                Some(Inferred::ResourceType)
            } else {
                intent
                    .set_resource_name(token)
                    .then_some(Inferred::ResourceName)
            }
        }
        Command::Copy => {
            if intent.set_source_path(token) {
                Some(Inferred::SourcePath)
            } else {
                intent.set_dest_path(token).then_some(Inferred::DestPath)
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_command(command: Command) -> Intent {
        let mut intent = Intent::new();
        intent.set_command(command);
        intent
    }

    #[test]
    fn colon_token_is_a_port() {
        let mut intent = with_command(Command::Forward);
        intent.set_service_name("web");
        assert_eq!(infer("8080:80", "forward web 8080:80", &mut intent), Some(Inferred::Port));
        assert_eq!(intent.port(), Some("8080:80"));
        assert_eq!(intent.namespace(), None);
    }

    #[test]
    fn colon_token_in_copy_is_a_path() {
        let mut intent = with_command(Command::Copy);
        assert_eq!(
            infer("web-1:/tmp/x", "copy web-1:/tmp/x .", &mut intent),
            Some(Inferred::SourcePath)
        );
        assert_eq!(intent.port(), None);
    }

    #[test]
    fn number_follows_keyword_anywhere_in_input() {
        let mut intent = with_command(Command::Scale);
        intent.set_deployment_name("api");
        assert_eq!(infer("5", "scale api 5", &mut intent), Some(Inferred::Replicas));
        assert_eq!(intent.replicas(), Some("5"));

        let mut intent = with_command(Command::Logs);
        intent.set_pod_name("web");
        assert_eq!(infer("9000", "logs web 9000 port", &mut intent), Some(Inferred::Port));

        // substring match on the whole line, namespace names included
        let mut intent = with_command(Command::Logs);
        intent.set_pod_name("web");
        assert_eq!(
            infer("5", "logs web 5 in scale-test", &mut intent),
            Some(Inferred::Replicas)
        );
        assert_eq!(intent.replicas(), Some("5"));
        assert_eq!(intent.port(), None);
    }

    #[test]
    fn number_without_keyword_falls_through() {
        let mut intent = with_command(Command::Pods);
        assert_eq!(infer("42", "pods 42", &mut intent), Some(Inferred::Namespace));
        assert_eq!(intent.namespace(), Some("42"));
    }

    #[test]
    fn listing_takes_namespace() {
        let mut intent = with_command(Command::Events);
        assert_eq!(infer("qa", "events qa", &mut intent), Some(Inferred::Namespace));
        assert_eq!(infer("prod", "events qa prod", &mut intent), None);
    }

    #[test]
    fn flag_like_token_is_never_a_namespace() {
        let mut intent = with_command(Command::Pods);
        assert_eq!(infer("--wide", "pods --wide", &mut intent), None);
        assert_eq!(intent.namespace(), None);
    }

    #[test]
    fn name_then_namespace() {
        let mut intent = with_command(Command::Logs);
        assert_eq!(infer("MyApp", "logs myapp qa", &mut intent), Some(Inferred::Pod));
        assert_eq!(infer("qa", "logs myapp qa", &mut intent), Some(Inferred::Namespace));
        assert_eq!(intent.pod_name(), Some("MyApp"));
    }

    #[test]
    fn primary_name_by_command() {
        let mut intent = with_command(Command::Rollback);
        infer("api", "rollback api", &mut intent);
        assert_eq!(intent.deployment_name(), Some("api"));

        let mut intent = with_command(Command::Forward);
        infer("web", "forward web", &mut intent);
        assert_eq!(intent.service_name(), Some("web"));

        let mut intent = with_command(Command::Describe);
        infer("node", "describe node n1", &mut intent);
        infer("n1", "describe node n1", &mut intent);
        assert_eq!(intent.resource_type(), Some("node"));
        assert_eq!(intent.resource_name(), Some("n1"));
    }

    #[test]
    fn copy_fills_source_then_dest() {
        let mut intent = with_command(Command::Copy);
        infer("a.txt", "copy a.txt b.txt", &mut intent);
        infer("b.txt", "copy a.txt b.txt", &mut intent);
        assert_eq!(intent.source_path(), Some("a.txt"));
        assert_eq!(intent.dest_path(), Some("b.txt"));
    }

    #[test]
    fn no_command_leaves_token_unplaced() {
        let mut intent = Intent::new();
        assert_eq!(infer("backend", "backend", &mut intent), None);
        assert_eq!(intent, Intent::new());
    }
}
