//! Token cursor shared by the recognizers.

use crate::vocabulary::is_stop_word;

/// Outcome of offering the current token to a recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Not mine; try the next recognizer.
    Pass,
    /// Claimed the current token plus this many lookahead tokens.
    Consumed(usize),
    /// Standalone command; stop parsing.
    Halt,
}

/// Forward-only view over the input tokens.
///
/// Recognizers only look; the parse loop is the only thing that moves
/// the cursor. Keyword lookups go through [`keyword`](Self::keyword),
/// which returns the lowercased token, while captured values come from
/// [`peek`](Self::peek) with the user's spelling intact.
#[derive(Debug)]
pub struct TokenCursor<'a> {
    tokens: Vec<&'a str>,
    lowered: Vec<String>,
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: Vec<&'a str>) -> Self {
        let lowered = tokens.iter().map(|t| t.to_lowercase()).collect();
        Self {
            tokens,
            lowered,
            pos: 0,
        }
    }

    /// Token `n` places ahead of the current one (`peek(0)` is current).
    pub fn peek(&self, n: usize) -> Option<&'a str> {
        self.tokens.get(self.pos + n).copied()
    }

    /// Lowercased form of [`peek`](Self::peek).
    pub fn keyword(&self, n: usize) -> Option<&str> {
        self.lowered.get(self.pos + n).map(String::as_str)
    }

    /// First token at or after offset `n` that is not a stop word.
    pub fn peek_past_stop_words(&self, n: usize) -> Option<(usize, &'a str)> {
        (n..)
            .map_while(|offset| self.keyword(offset).map(|word| (offset, word)))
            .find(|(_, word)| !is_stop_word(word))
            .and_then(|(offset, _)| self.peek(offset).map(|token| (offset, token)))
    }

    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.tokens.len());
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}
