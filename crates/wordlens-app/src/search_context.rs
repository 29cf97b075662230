use std::sync::Arc;

use kanal::AsyncSender;
use tokio::sync::mpsc;
use wordlens_dictionary::DictionaryClient;
use wordlens_types::AppEvent;

use crate::audio::AudioPlayer;
use crate::state::AppState;

/// Shared dependencies of the search event loop
#[derive(Clone)]
pub struct SearchContext {
    pub state: Arc<AppState>,
    pub client: Arc<dyn DictionaryClient>,
    pub player: Arc<dyn AudioPlayer>,
    /// Back into the event loop, used by lookup tasks
    pub event_tx: AsyncSender<AppEvent>,
    pub app_to_ui_tx: AsyncSender<AppEvent>,
    /// Raw input values on their way to the debouncer
    pub input_tx: mpsc::Sender<String>,
}
