//! skube command-line front end.
//!
//! Wires the parser and the resource resolver together: read the config,
//! parse the phrase, optionally rewrite names against the learned cluster
//! patterns, and reject intents that are missing required fields.

pub mod args;
pub mod check;
pub mod config;
pub mod resolve;

pub use args::{ArgsError, CliArgs};
pub use check::{IntentError, check_intent};
pub use config::{CliConfig, OutputFormat};
pub use resolve::resolve_intent;
