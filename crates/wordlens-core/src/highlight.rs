use std::sync::Arc;

use wordlens_types::{HighlightResult, HighlightedToken, WordToken};

/// Marks the first case-insensitive whole-word match in a token sequence
#[derive(Debug, Clone)]
pub struct Highlighter {
    tokens: Arc<[WordToken]>,
}

impl Highlighter {
    pub fn new(tokens: Arc<[WordToken]>) -> Self {
        Self { tokens }
    }

    pub fn highlight(&self, term: &str) -> HighlightResult {
        let needle = term.to_lowercase();
        let mut matched = false;

        let tokens = self
            .tokens
            .iter()
            .map(|token| {
                let marked =
                    !needle.is_empty() && !matched && normalize_token(&token.text) == needle;
                matched |= marked;

                HighlightedToken {
                    index: token.index,
                    text: token.text.clone(),
                    marked,
                }
            })
            .collect();

        HighlightResult { matched, tokens }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lowercase the token and drop its first run of non-word characters.
///
/// Only the first run goes: `"Zelda:"` becomes `"zelda"` but `"(hello),"`
/// becomes `"hello),"`.
pub fn normalize_token(token: &str) -> String {
    let lowered = token.to_lowercase();

    let Some(start) = lowered.find(|c: char| !is_word_char(c)) else {
        return lowered;
    };

    let end = lowered[start..]
        .find(is_word_char)
        .map_or(lowered.len(), |offset| start + offset);

    format!("{}{}", &lowered[..start], &lowered[end..])
}
