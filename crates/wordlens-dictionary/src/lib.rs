use wordlens_types::DictionaryEntry;

pub mod cache;
pub mod cached;
pub mod client;

pub use cache::RequestCache;
pub use cached::CachedClient;
pub use client::{FreeDictionaryClient, parse_entries};

/// Dictionary lookup provider interface
#[async_trait::async_trait]
pub trait DictionaryClient: Send + Sync {
    /// Look up every entry the provider has for `word`
    async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub cached: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Empty lookup word")]
    EmptyWord,

    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("No definitions found for '{0}'")]
    NotFound(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}
