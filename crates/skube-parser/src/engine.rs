//! Parse loop: walk the tokens, offer each to the recognizer chain, and
//! fall back to inference for anything left unclaimed.

use skube_protocol::Intent;

use crate::cursor::{Step, TokenCursor};
use crate::infer::infer;
use crate::recognizers::CHAIN;

/// Parse already shell-split words into an [`Intent`].
///
/// Never fails. Unknown words are dropped and ambiguous phrasing is
/// settled by the first recognizer that claims a token; every field keeps
/// the first value written to it.
pub fn parse<S: AsRef<str>>(args: &[S]) -> Intent {
    let mut tokens: Vec<&str> = args.iter().map(|arg| arg.as_ref()).collect();
    let mut intent = Intent::new();

    // Namespace-first phrasing: "in qa logs of web".
    if tokens.len() > 1 && tokens[0].eq_ignore_ascii_case("in") {
        intent.set_namespace(tokens[1]);
        tokens.drain(..2);
    }

    let input = tokens.join(" ").to_lowercase();
    let mut cursor = TokenCursor::new(tokens);

    while let Some(token) = cursor.peek(0) {
        let claimed = CHAIN.iter().find_map(|(name, recognize)| {
            match recognize(&cursor, &mut intent) {
                Step::Pass => None,
                step => Some((*name, step)),
            }
        });

        match claimed {
            Some((name, Step::Halt)) => {
                tracing::trace!(recognizer = name, token, "standalone command, stopping");
                break;
            }
            Some((name, Step::Consumed(extra))) => {
                tracing::trace!(recognizer = name, token, extra, "claimed");
                cursor.advance(1 + extra);
            }
            Some((_, Step::Pass)) | None => {
                let placed = infer(token, &input, &mut intent);
                tracing::trace!(token, ?placed, "inferred");
                cursor.advance(1);
            }
        }
    }

    tracing::debug!(?intent, "parsed command line");
    intent
}
