use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordlens_core::Debouncer;
use wordlens_dictionary::DictionaryClient;
use wordlens_types::AppEvent;

use crate::audio::AudioPlayer;
use crate::events::event_loop;
use crate::io::watcher_io;
use crate::search_context::SearchContext;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),  // Frames
            ui_to_app: kanal::bounded_async(256), // Keystrokes, lookups, commits
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(
        &self,
        client: Arc<dyn DictionaryClient>,
        player: Arc<dyn AudioPlayer>,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();
        let (input_tx, input_rx) = mpsc::channel(256);

        let ctx = SearchContext {
            state: self.state.clone(),
            client,
            player,
            event_tx: self.channels.ui_to_app.0.clone(),
            app_to_ui_tx: self.channels.app_to_ui.0.clone(),
            input_tx,
        };

        // Event loop
        tasks.spawn(event_loop(
            ctx,
            self.channels.ui_to_app.1.clone(),
            self.cancel_token.child_token(),
        ));

        // Debouncer, raw input in, committed terms out
        let debouncer = Debouncer::new(self.state.config.search.debounce());
        let commit_tx = self.channels.ui_to_app.0.clone();
        let cancel = self.cancel_token.child_token();
        tasks.spawn(async move {
            debouncer
                .run(input_rx, commit_tx, AppEvent::SearchCommitted, cancel)
                .await;
            Ok(())
        });

        // UI loop
        tasks.spawn(wordlens_ui::ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.state.config.ui.clone(),
            self.cancel_token.child_token(),
        ));

        // Watcher IO
        tasks.spawn(watcher_io(
            self.channels.ui_to_app.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
