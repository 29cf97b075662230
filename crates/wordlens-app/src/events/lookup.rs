use std::sync::Arc;

use kanal::AsyncSender;
use tokio::task::JoinHandle;
use wordlens_dictionary::DictionaryClient;
use wordlens_types::{AppEvent, DictionaryEntry};

use super::search::LookupRequest;

/// Look up a word, any failure becomes an empty result
pub async fn fetch_entries(client: &dyn DictionaryClient, term: &str) -> Vec<DictionaryEntry> {
    match client.lookup(term).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("[LOOKUP] '{}' failed: {}", term, e);
            Vec::new()
        }
    }
}

/// Run a lookup in the background and report back with `LookupFinished`
pub fn spawn_lookup(
    client: Arc<dyn DictionaryClient>,
    request: LookupRequest,
    event_tx: AsyncSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let entries = fetch_entries(client.as_ref(), &request.term).await;

        let event = AppEvent::LookupFinished {
            generation: request.generation,
            term: request.term,
            entries,
        };
        if let Err(e) = event_tx.send(event).await {
            tracing::debug!("[LOOKUP] Event loop gone: {}", e);
        }
    })
}
