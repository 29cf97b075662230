use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_debounce_ms() -> u64 {
    200
}

fn default_cache() -> bool {
    true
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_initial_term() -> String {
    "legend".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before an input change is committed
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// De-duplicate lookups through the request cache
    #[serde(default = "default_cache")]
    pub cache: bool,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// Term committed at startup, empty to start blank
    #[serde(default = "default_initial_term")]
    pub initial_term: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            cache: default_cache(),
            cache_ttl_secs: default_cache_ttl_secs(),
            initial_term: default_initial_term(),
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        let debounce_ms = env::var("DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_debounce_ms);

        let cache = env::var("SEARCH_CACHE")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or_else(default_cache);

        let cache_ttl_secs = env::var("SEARCH_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_cache_ttl_secs);

        let initial_term = env::var("INITIAL_TERM").unwrap_or_else(|_| default_initial_term());

        Self {
            debounce_ms,
            cache,
            cache_ttl_secs,
            initial_term,
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
