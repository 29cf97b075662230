use wordlens_config::Config;
use wordlens_core::SampleText;

/// Read-only state shared by every task
pub struct AppState {
    pub config: Config,
    pub sample: SampleText,
}

impl AppState {
    pub fn new(config: Config, sample: SampleText) -> Self {
        Self { config, sample }
    }
}
