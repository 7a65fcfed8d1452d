//! Natural-language command parsing for skube.
//!
//! Turns already shell-split words ("logs of web in qa", "scale api to 3")
//! into an [`Intent`](skube_protocol::Intent). Parsing is a single left to
//! right pass: each token is offered to a fixed chain of recognizers, and
//! whatever none of them claims is placed by context.

pub mod cursor;
pub mod engine;
mod infer;
mod recognizers;
pub mod vocabulary;

pub use cursor::{Step, TokenCursor};
pub use engine::parse;
