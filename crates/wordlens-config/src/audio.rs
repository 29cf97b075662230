use std::env;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// External player invoked with the audio URL as its only argument
    pub player: Option<String>,
}

impl AudioConfig {
    pub fn new() -> Self {
        let player = env::var("AUDIO_PLAYER").ok().filter(|p| !p.trim().is_empty());

        Self { player }
    }
}
