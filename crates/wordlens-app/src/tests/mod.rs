
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use wordlens_dictionary::{DictionaryClient, LookupError, ProviderMetadata};
use wordlens_types::{Definition, DictionaryEntry, Meaning, Phonetic};

pub(crate) const SAMPLE: &str = "Say hello to the world, then say hello again.";

/// Entry for `word` with one meaning per part of speech
pub(crate) fn entry(word: &str, parts: &[&str]) -> DictionaryEntry {
    DictionaryEntry {
        word: word.to_string(),
        phonetics: vec![Phonetic {
            text: format!("/{word}/"),
            audio: Some(format!("https://audio/{word}.mp3")),
        }],
        meanings: parts
            .iter()
            .map(|part| Meaning {
                part_of_speech: part.to_string(),
                definitions: vec![Definition {
                    definition: format!("{word} as {part}"),
                    example: None,
                    synonyms: Vec::new(),
                }],
            })
            .collect(),
    }
}

/// Answers every lookup with three meanings, or fails when told to
pub(crate) struct MockClient {
    pub calls: AtomicUsize,
    pub fail: bool,
}

impl MockClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: true,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl DictionaryClient for MockClient {
    async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(LookupError::Status(500));
        }
        Ok(vec![entry(word, &["exclamation", "noun", "verb"])])
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "mock".to_string(),
            cached: false,
        }
    }
}
