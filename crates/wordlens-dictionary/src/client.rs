use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use wordlens_types::DictionaryEntry;

use crate::{DictionaryClient, LookupError, ProviderMetadata};

/// Client for the public Free Dictionary API
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    api_url: Url,
}

impl FreeDictionaryClient {
    pub fn new(api_url: &str, timeout: Option<Duration>) -> Result<Self, LookupError> {
        let api_url =
            Url::parse(api_url).map_err(|e| LookupError::InvalidUrl(format!("{api_url}: {e}")))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_url,
        })
    }

    /// `{api_url}/{word}` with the word escaped as a single path segment
    pub fn entry_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl(self.api_url.to_string()))?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }
}

#[async_trait]
impl DictionaryClient for FreeDictionaryClient {
    async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        if word.trim().is_empty() {
            return Err(LookupError::EmptyWord);
        }

        let url = self.entry_url(word)?;
        tracing::debug!("[DICT] GET {}", url);

        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(LookupError::NotFound(word.to_string())),
            StatusCode::TOO_MANY_REQUESTS => return Err(LookupError::RateLimitExceeded),
            status if !status.is_success() => return Err(LookupError::Status(status.as_u16())),
            _ => {}
        }

        let body = response.text().await?;
        let entries = parse_entries(&body)?;
        tracing::debug!("[DICT] '{}': {} entries", word, entries.len());

        Ok(entries)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Free Dictionary API".to_string(),
            cached: false,
        }
    }
}

/// Parse a lookup response body, a JSON array of entries
pub fn parse_entries(body: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
    Ok(serde_json::from_str(body)?)
}
