use kanal::AsyncSender;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use wordlens_types::{AppEvent, UiEvent};

/// Turn one line of terminal input into an app event.
///
/// Lines starting with `:` are commands, anything else is the new value of
/// the search field. Unknown commands yield `None`.
pub fn parse_input(line: &str) -> Option<AppEvent> {
    let line = line.trim_end_matches(['\r', '\n']);

    let Some(command) = line.strip_prefix(':') else {
        return Some(AppEvent::InputChanged(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    let event = match (parts.next()?, parts.next()) {
        ("n" | "next", None) => UiEvent::NextMeaning,
        ("p" | "prev", None) => UiEvent::PrevMeaning,
        ("q" | "quit", None) => UiEvent::Close,
        ("a" | "audio", Some(number)) => {
            let number: usize = number.parse().ok()?;
            UiEvent::PlayAudio(number.checked_sub(1)?)
        }
        ("a" | "audio", None) => UiEvent::PlayAudio(0),
        _ => return None,
    };

    Some(AppEvent::UiEvent(event))
}

/// Read terminal input lines and forward them as events
pub async fn watcher_io(
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    watch_lines(BufReader::new(tokio::io::stdin()), event_tx, cancel).await
}

/// Forward lines from `reader` until `:q` or cancellation. End of input
/// leaves the task waiting for cancellation so the app keeps running.
pub async fn watch_lines<R>(
    reader: R,
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    tracing::info!("Starting input watcher");

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            tracing::info!("Input closed, Ctrl+C to quit");
            cancel.cancelled().await;
            break;
        };

        match parse_input(&line) {
            Some(event) => {
                let close = matches!(event, AppEvent::UiEvent(UiEvent::Close));
                event_tx.send(event).await?;
                if close {
                    break;
                }
            }
            None => tracing::warn!("Unknown command: {}", line),
        }
    }

    tracing::info!("Input watcher stopping");
    Ok(())
}
