use kanal::AsyncReceiver;
use tokio::io::{AsyncWriteExt, stdout};
use tokio_util::sync::CancellationToken;
use wordlens_config::ui::UiConfig;
use wordlens_types::AppEvent;

pub mod events;
pub mod frame;
pub mod panel;

pub use events::{Outcome, Presenter};
pub use frame::{RenderOptions, layout_metrics, render_frame};

/// Draw frames sent by the app until it closes the channel or asks to close
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    config: UiConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut presenter = Presenter::new(RenderOptions::from_config(&config));
    let mut out = stdout();

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = app_to_ui_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
        };

        match presenter.handle_event(event) {
            Outcome::Draw(frame) => {
                out.write_all(frame.as_bytes()).await?;
                out.flush().await?;
            }
            Outcome::Skip => {}
            Outcome::Close => break,
        }
    }

    tracing::info!("[UI] Loop stopping");
    Ok(())
}
