use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Dictionary lookup endpoint, the word is appended as a path segment
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout, 0 leaves it to the HTTP client
    pub timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: 0,
        }
    }
}

impl NetworkConfig {
    pub fn new() -> Self {
        let api_url = env::var("DICT_API_URL").unwrap_or_else(|_| default_api_url());

        let timeout_secs = env::var("DICT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Self {
            api_url,
            timeout_secs,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
