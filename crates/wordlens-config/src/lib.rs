use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::audio::AudioConfig;
use self::network::NetworkConfig;
use self::search::SearchConfig;
use self::ui::UiConfig;

pub mod audio;
pub mod network;
pub mod search;
pub mod ui;

pub use ui::PanelMode;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub search: SearchConfig,
    pub ui: UiConfig,
    pub audio: AudioConfig,

    /// Paragraph to search in, the built-in one is used when unset
    pub sample_text: Option<String>,
    /// File holding the paragraph, read when `sample_text` is unset
    pub sample_text_path: Option<String>,
}

impl Config {
    /// Build the config from environment variables
    pub fn new() -> Self {
        let sample_text_path = env::var("SAMPLE_TEXT_PATH").ok();

        Config {
            network: NetworkConfig::new(),
            search: SearchConfig::new(),
            ui: UiConfig::new(),
            audio: AudioConfig::new(),

            sample_text: None,
            sample_text_path,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Resolve the configured paragraph, if any
    pub fn load_sample_text(&self) -> Result<Option<String>, ConfigError> {
        if let Some(text) = &self.sample_text {
            return Ok(Some(text.clone()));
        }

        match &self.sample_text_path {
            Some(path) => {
                tracing::info!("Loading sample text from {}", path);
                Ok(Some(fs::read_to_string(path)?))
            }
            None => Ok(None),
        }
    }
}
