use std::time::Duration;

use async_trait::async_trait;
use wordlens_types::DictionaryEntry;

use crate::cache::RequestCache;
use crate::{DictionaryClient, LookupError, ProviderMetadata};

const NAMESPACE: &str = "dict";

/// Wraps a client so repeated and concurrent lookups of a word share one request
pub struct CachedClient<C> {
    inner: C,
    cache: RequestCache<Vec<DictionaryEntry>>,
}

impl<C: DictionaryClient> CachedClient<C> {
    pub fn new(inner: C, ttl: Duration) -> Self {
        Self {
            inner,
            cache: RequestCache::new(ttl),
        }
    }

    pub fn cache(&self) -> &RequestCache<Vec<DictionaryEntry>> {
        &self.cache
    }
}

#[async_trait]
impl<C: DictionaryClient> DictionaryClient for CachedClient<C> {
    async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        self.cache
            .get_or_fetch(NAMESPACE, word, || self.inner.lookup(word))
            .await
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            cached: true,
            ..self.inner.metadata()
        }
    }
}
