use std::sync::Arc;

use wordlens_types::WordToken;

/// Paragraph searched when no other text is configured
pub const DEFAULT_SAMPLE_TEXT: &str = "The Legend of Zelda: Breath of the Wild’s sheer freedom and sense of adventure is a remarkable achievement. Right from the start, the vast landscape of Hyrule is thrown completely open to you, and it constantly finds ways to pique your curiosity with mysterious landmarks, complex hidden puzzles, and enemy camps to raid for treasure and weapons. The fact that you can tackle any one of these things at your own pace and almost never get pulled to the main path is liberating, but the way all of Breath of the Wild’s systems fit elegantly into complex light survival game is even more impressive. I’ve been running around for over 50 hours and I still have plenty of mysteries left to track down and lots of wonderfully crafted puzzles to solve. I’m in awe of the scope and scale of this adventure, and I often find myself counting the hours until I can get back in.";

/// Immutable paragraph and its word tokens, cheap to clone
#[derive(Debug, Clone)]
pub struct SampleText {
    raw: Arc<str>,
    tokens: Arc<[WordToken]>,
}

impl SampleText {
    pub fn new(text: &str) -> Self {
        let tokens: Vec<WordToken> = text
            .split_whitespace()
            .enumerate()
            .map(|(index, word)| WordToken {
                index,
                text: word.to_string(),
            })
            .collect();

        tracing::debug!("Sample text split into {} tokens", tokens.len());

        Self {
            raw: Arc::from(text),
            tokens: Arc::from(tokens),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[WordToken] {
        &self.tokens
    }

    pub fn shared_tokens(&self) -> Arc<[WordToken]> {
        self.tokens.clone()
    }
}

impl Default for SampleText {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_TEXT)
    }
}
