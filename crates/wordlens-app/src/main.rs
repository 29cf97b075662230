use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use wordlens_core::SampleText;
use wordlens_dictionary::{CachedClient, DictionaryClient, FreeDictionaryClient};

pub mod audio;
pub mod cli;
pub mod controller;
pub mod events;
pub mod io;
pub mod search_context;
pub mod state;

#[cfg(test)]
mod tests;

use self::cli::Args;
use self::controller::AppController;
use self::state::AppState;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    // Frames own stdout, logs go to stderr
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let config = args.load_config()?;
    tracing::debug!("Config: {:?}", config);

    let sample = match config.load_sample_text()? {
        Some(text) => SampleText::new(&text),
        None => SampleText::default(),
    };

    let client: Arc<dyn DictionaryClient> = {
        let client = FreeDictionaryClient::new(&config.network.api_url, config.network.timeout())?;
        if config.search.cache {
            Arc::new(CachedClient::new(client, config.search.cache_ttl()))
        } else {
            Arc::new(client)
        }
    };
    tracing::info!("Dictionary: {:?}", client.metadata());

    let player = audio::player_for(config.audio.player.as_deref());

    let state = Arc::new(AppState::new(config, sample));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(client, player);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => match result {
            Some(Ok(Ok(()))) => tracing::info!("Task finished, shutting down"),
            Some(Ok(Err(e))) => tracing::error!("Task failed: {e}"),
            Some(Err(e)) => tracing::error!("Task panicked: {e}"),
            None => {}
        }
    }

    controller.shutdown();
    let drained = tokio::time::timeout(Duration::from_secs(2), async {
        while let Some(result) = tasks.join_next().await {
            if let Ok(Err(e)) = result {
                tracing::warn!("Task failed during shutdown: {e}");
            }
        }
    })
    .await;
    if drained.is_err() {
        tracing::warn!("Tasks did not stop in time");
    }

    // The stdin reader sits on a blocking thread that cancellation cannot reach
    std::process::exit(0);
}
