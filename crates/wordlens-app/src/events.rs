use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use wordlens_types::{AppEvent, UiEvent};

use crate::search_context::SearchContext;

pub mod lookup;
pub mod search;

use lookup::spawn_lookup;
use search::{CommitOutcome, SearchController};

/// App's main loop, owns the search controller
pub async fn event_loop(
    ctx: SearchContext,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut controller = {
        let config = &ctx.state.config;
        SearchController::new(
            &ctx.state.sample,
            wordlens_ui::layout_metrics(&config.ui),
            &config.ui,
        )
    };

    // The initial term skips the debounce
    let initial = ctx.state.config.search.initial_term.clone();
    handle_events(&ctx, &mut controller, AppEvent::SearchCommitted(initial)).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => event?,
        };

        if !handle_events(&ctx, &mut controller, event).await? {
            break;
        }
    }

    tracing::info!("[EVENT_LOOP] Stopping");
    Ok(())
}

/// Handle one event, returns `false` once the app should stop
pub async fn handle_events(
    ctx: &SearchContext,
    controller: &mut SearchController,
    event: AppEvent,
) -> anyhow::Result<bool> {
    match event {
        AppEvent::InputChanged(text) => {
            tracing::trace!("[EVENT_LOOP] Input: '{}'", text);
            ctx.input_tx.send(text).await?;
        }
        AppEvent::SearchCommitted(term) => {
            if let CommitOutcome::Committed { lookup } = controller.commit(&term) {
                render(ctx, controller).await?;

                if let Some(request) = lookup {
                    spawn_lookup(ctx.client.clone(), request, ctx.event_tx.clone());
                }
            }
        }
        AppEvent::LookupFinished {
            generation,
            term,
            entries,
        } => {
            if controller.apply_lookup(generation, &term, entries) {
                render(ctx, controller).await?;
            }
        }
        AppEvent::UiEvent(UiEvent::NextMeaning) => {
            tracing::debug!("[EVENT_LOOP] Next meaning: {:?}", controller.next_meaning());
            render(ctx, controller).await?;
        }
        AppEvent::UiEvent(UiEvent::PrevMeaning) => {
            tracing::debug!("[EVENT_LOOP] Previous meaning: {:?}", controller.prev_meaning());
            render(ctx, controller).await?;
        }
        AppEvent::UiEvent(UiEvent::PlayAudio(index)) => match controller.audio_url(index) {
            Some(url) => {
                if let Err(e) = ctx.player.play(&url) {
                    tracing::error!("[AUDIO] Failed to play {}: {}", url, e);
                }
            }
            None => tracing::debug!("[AUDIO] No audio for phonetic {}", index + 1),
        },
        AppEvent::UiEvent(UiEvent::Close) => {
            if let Err(e) = ctx.app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Close)).await {
                tracing::debug!("[EVENT_LOOP] UI gone before close: {}", e);
            }
            return Ok(false);
        }
        AppEvent::Render(_) => {
            // UI-only event, ignore in backend
        }
    }

    Ok(true)
}

async fn render(ctx: &SearchContext, controller: &SearchController) -> anyhow::Result<()> {
    ctx.app_to_ui_tx
        .send(AppEvent::Render(Box::new(controller.view())))
        .await?;
    Ok(())
}
