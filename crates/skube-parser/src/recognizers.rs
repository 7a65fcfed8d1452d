//! Recognizers, tried in order on every token. The first one that does
//! not [`Step::Pass`] claims it.

use skube_protocol::{Command, Intent};

use crate::cursor::{Step, TokenCursor};
use crate::vocabulary::{
    command_alias, is_name_boundary, is_preposition, is_stop_word, listing_command,
    resource_alias,
};

pub(crate) type Recognizer = fn(&TokenCursor<'_>, &mut Intent) -> Step;

/// Dispatch order, with names used in trace output.
pub(crate) const CHAIN: [(&str, Recognizer); 5] = [
    ("stop_word", stop_word),
    ("command", command),
    ("resource", resource),
    ("modifier", modifier),
    ("preposition", preposition),
];

fn stop_word(cursor: &TokenCursor<'_>, _intent: &mut Intent) -> Step {
    match cursor.keyword(0) {
        Some(word) if is_stop_word(word) => Step::Consumed(0),
        _ => Step::Pass,
    }
}

// ── Commands ────────────────────────────────────────────────────

fn command(cursor: &TokenCursor<'_>, intent: &mut Intent) -> Step {
    let Some(word) = cursor.keyword(0) else {
        return Step::Pass;
    };

    match word {
        "get" => return get(cursor, intent),
        "check" if cursor.keyword(1) == Some("usage") => return check_usage(cursor, intent),
        "show" => {
            if let Some(step) = show(cursor, intent) {
                return step;
            }
        }
        _ => {}
    }

    let Some(command) = command_alias(word) else {
        return Step::Pass;
    };

    if command.is_standalone() {
        intent.replace_command(command);
        if matches!(command, Command::Completion | Command::Help)
            && let Some(arg) = cursor.peek(1)
        {
            intent.set_resource_type(arg);
        }
        return Step::Halt;
    }

    intent.set_command(command);

    match command {
        Command::Apply => {
            if matches!(cursor.keyword(1), Some("file" | "-f"))
                && let Some(path) = cursor.peek(2)
            {
                intent.set_file_path(path);
                return Step::Consumed(2);
            }
        }
        Command::Config => match cursor.keyword(1) {
            Some("context") => return switch_target(cursor, intent, "context"),
            Some("namespace" | "ns") => return switch_target(cursor, intent, "namespace"),
            _ => {}
        },
        Command::Copy if cursor.keyword(1) == Some("file") => return Step::Consumed(1),
        Command::Explain if word == "what" && cursor.keyword(1) == Some("is") => {
            return Step::Consumed(1);
        }
        _ => {}
    }

    Step::Consumed(0)
}

/// `get <resource>`, `get last <N>` or a bare `get`.
fn get(cursor: &TokenCursor<'_>, intent: &mut Intent) -> Step {
    if let Some(listing) = cursor.keyword(1).and_then(listing_command) {
        intent.set_command(listing);
        // The resource word stays for the next pass, except `all`, which
        // no later recognizer would claim.
        return Step::Consumed(usize::from(listing == Command::All));
    }

    intent.set_command(Command::Get);

    if cursor.keyword(1) == Some("last")
        && let Some(lines) = cursor.peek(2).and_then(|t| t.parse::<u32>().ok())
    {
        intent.set_tail_lines(lines);
        return Step::Consumed(2);
    }

    Step::Consumed(0)
}

/// `check usage [stop words] <type>` asks for metrics.
fn check_usage(cursor: &TokenCursor<'_>, intent: &mut Intent) -> Step {
    intent.set_command(Command::Metrics);
    take_metrics_type(cursor, intent, 2).unwrap_or(Step::Consumed(1))
}

/// `show [stop words] status|events|config|metrics`. `None` leaves `show`
/// to the alias table.
fn show(cursor: &TokenCursor<'_>, intent: &mut Intent) -> Option<Step> {
    let (offset, _) = cursor.peek_past_stop_words(1)?;

    match cursor.keyword(offset)? {
        "status" => {
            intent.set_command(Command::Status);
        }
        "events" => {
            intent.set_command(Command::Events);
        }
        "config" => {
            intent.set_command(Command::Config);
            intent.set_resource_type("view");
        }
        "metrics" => {
            intent.set_command(Command::Metrics);
            return Some(
                take_metrics_type(cursor, intent, offset + 1).unwrap_or(Step::Consumed(offset)),
            );
        }
        _ => return None,
    }

    Some(Step::Consumed(offset))
}

/// Resource type for a metrics query, found at or after `from`.
fn take_metrics_type(cursor: &TokenCursor<'_>, intent: &mut Intent, from: usize) -> Option<Step> {
    let (offset, token) = cursor.peek_past_stop_words(from)?;
    if is_preposition(&token.to_lowercase()) {
        return None;
    }
    intent.set_resource_type(token);
    Some(Step::Consumed(offset))
}

/// `use context <name>` / `use namespace <name>`.
fn switch_target(cursor: &TokenCursor<'_>, intent: &mut Intent, target: &str) -> Step {
    intent.set_resource_type(target);
    match cursor.peek(2) {
        Some(name) => {
            intent.set_resource_name(name);
            Step::Consumed(2)
        }
        None => Step::Consumed(1),
    }
}

// ── Resource keywords ───────────────────────────────────────────

fn resource(cursor: &TokenCursor<'_>, intent: &mut Intent) -> Step {
    let Some(word) = cursor.keyword(0) else {
        return Step::Pass;
    };

    if word == "app" {
        if intent.app_name().is_none()
            && let Some(name) = cursor.peek(1)
        {
            intent.set_app_name(name);
            return Step::Consumed(1);
        }
        return Step::Consumed(0);
    }

    let Some(kind) = resource_alias(word) else {
        return Step::Pass;
    };

    if let Some(listing) = listing_command(word)
        && matches!(intent.command(), None | Some(Command::Get))
    {
        intent.set_command(listing);
        return Step::Consumed(0);
    }

    if intent.command().is_some_and(|c| c.is_generic_resource()) {
        intent.set_resource_type(kind);
        return Step::Consumed(0);
    }

    // "restart the backend deployment": backend was taken for a pod.
    if kind == "deployment" && intent.promote_pod_to_deployment() {
        return Step::Consumed(0);
    }

    let slot_free = match kind {
        "deployment" => intent.deployment_name().is_none(),
        "service" => intent.service_name().is_none(),
        "namespace" => intent.namespace().is_none(),
        _ => return Step::Consumed(0),
    };
    let next_is_name = cursor.keyword(1).is_some_and(|next| !is_name_boundary(next));
    if !(slot_free && next_is_name) {
        return Step::Consumed(0);
    }

    let Some(name) = cursor.peek(1) else {
        return Step::Consumed(0);
    };
    match kind {
        "deployment" => intent.set_deployment_name(name),
        "service" => intent.set_service_name(name),
        _ => intent.set_namespace(name),
    };
    Step::Consumed(1)
}

// ── Flags and modifiers ─────────────────────────────────────────

fn modifier(cursor: &TokenCursor<'_>, intent: &mut Intent) -> Step {
    let Some(word) = cursor.keyword(0) else {
        return Step::Pass;
    };

    match word {
        "--dry-run" => {
            intent.set_dry_run();
            Step::Consumed(0)
        }
        "to" => match cursor.peek(1) {
            Some(value) => {
                if intent.command() == Some(Command::Copy) {
                    intent.set_dest_path(value);
                } else {
                    intent.set_replicas(value);
                }
                Step::Consumed(1)
            }
            None => Step::Consumed(0),
        },
        "port" => take_value(cursor, intent, Intent::set_port),
        "-n" | "--namespace" => take_value(cursor, intent, Intent::set_namespace),
        "follow" | "-f" => {
            intent.set_follow();
            Step::Consumed(0)
        }
        "prefix" | "prefixes" | "with" => {
            if cursor.keyword(1) == Some("prefix") {
                intent.set_prefix();
                Step::Consumed(1)
            } else {
                if word != "with" {
                    intent.set_prefix();
                }
                Step::Consumed(0)
            }
        }
        "search" | "find" | "filter" | "grep" => match cursor.peek(1) {
            Some(term) => {
                intent.set_search_term(term.trim_matches(['"', '\'']));
                Step::Consumed(1)
            }
            None => Step::Consumed(0),
        },
        "max" => {
            if cursor.keyword(1) == Some("log")
                && cursor.keyword(2) == Some("requests")
                && let Some(n) = cursor.peek(3).and_then(|t| t.parse::<u32>().ok())
            {
                intent.set_max_log_requests(n);
                return Step::Consumed(3);
            }
            if let Some(n) = cursor.peek(1).and_then(|t| t.parse::<u32>().ok()) {
                intent.set_max_log_requests(n);
                return Step::Consumed(1);
            }
            Step::Consumed(0)
        }
        _ => Step::Pass,
    }
}

/// Store the next token with `set`, claiming both.
fn take_value(
    cursor: &TokenCursor<'_>,
    intent: &mut Intent,
    set: fn(&mut Intent, &str) -> bool,
) -> Step {
    match cursor.peek(1) {
        Some(value) => {
            set(intent, value);
            Step::Consumed(1)
        }
        None => Step::Consumed(0),
    }
}

// ── Prepositions ────────────────────────────────────────────────

fn preposition(cursor: &TokenCursor<'_>, intent: &mut Intent) -> Step {
    let Some(word) = cursor.keyword(0) else {
        return Step::Pass;
    };

    match word {
        "of" => {
            let Some((offset, token)) = cursor.peek_past_stop_words(1) else {
                return Step::Consumed(0);
            };
            match token.to_lowercase().as_str() {
                kind @ ("app" | "pod") => {
                    let Some(name) = cursor.peek(offset + 1) else {
                        return Step::Consumed(offset);
                    };
                    if kind == "app" {
                        intent.set_app_name(name);
                    } else {
                        intent.set_pod_name(name);
                    }
                    Step::Consumed(offset + 1)
                }
                _ => {
                    intent.set_app_name(token);
                    Step::Consumed(offset)
                }
            }
        }
        "from" | "in" | "into" => match cursor.keyword(1) {
            Some(kind @ ("pod" | "deployment" | "service" | "namespace" | "app" | "file")) => {
                let Some(name) = cursor.peek(2) else {
                    return Step::Consumed(1);
                };
                match kind {
                    "pod" => intent.set_pod_name(name),
                    "deployment" => intent.set_deployment_name(name),
                    "service" => intent.set_service_name(name),
                    "namespace" => intent.set_namespace(name),
                    "app" => intent.set_app_name(name),
                    _ => match intent.command() {
                        Some(Command::Apply) => intent.set_file_path(name),
                        Some(Command::Copy) => intent.set_source_path(name),
                        _ => false,
                    },
                };
                Step::Consumed(2)
            }
            Some(_) => take_value(cursor, intent, Intent::set_namespace),
            None => Step::Consumed(0),
        },
        _ => Step::Pass,
    }
}
