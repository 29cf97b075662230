use std::path::PathBuf;

use clap::Parser;
use wordlens_config::{Config, ConfigError, PanelMode};

#[derive(Parser, Debug)]
#[command(
    name = "wordlens",
    about = "Find a word in a paragraph and look it up in the dictionary",
    version
)]
pub struct Args {
    /// JSON config file, environment variables are used when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Send every lookup to the dictionary service.
    #[arg(long)]
    pub no_cache: bool,

    /// Show "No Results" instead of hiding the panel when nothing was found.
    #[arg(long)]
    pub placeholder: bool,

    /// Term searched at startup.
    #[arg(short, long)]
    pub term: Option<String>,

    /// File holding the paragraph to search in.
    #[arg(long)]
    pub text: Option<PathBuf>,
}

impl Args {
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::new(),
        };
        Ok(self.apply(config))
    }

    /// Flags win over whatever the config says
    pub fn apply(&self, mut config: Config) -> Config {
        if self.no_cache {
            config.search.cache = false;
        }
        if self.placeholder {
            config.ui.panel_mode = PanelMode::Placeholder;
        }
        if let Some(term) = &self.term {
            config.search.initial_term = term.clone();
        }
        if let Some(path) = &self.text {
            config.sample_text = None;
            config.sample_text_path = Some(path.display().to_string());
        }
        config
    }
}
