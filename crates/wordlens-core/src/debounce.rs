use std::time::Duration;

use kanal::AsyncSender;
use tokio::sync::mpsc::Receiver;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

/// Trailing-edge debounce: a value is forwarded only after `quiet` has
/// passed without a newer one arriving.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    quiet: Duration,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self { quiet }
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Run until the input closes, the output closes or `cancel` fires.
    /// A value still pending at that point is dropped.
    pub async fn run<T, U, F>(
        &self,
        mut input: Receiver<T>,
        output: AsyncSender<U>,
        mut map: F,
        cancel: CancellationToken,
    ) where
        F: FnMut(T) -> U,
    {
        let mut pending: Option<T> = None;
        let timer = time::sleep(self.quiet);
        tokio::pin!(timer);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                received = input.recv() => match received {
                    Some(value) => {
                        if pending.replace(value).is_some() {
                            tracing::trace!("[DEBOUNCE] Superseded pending value");
                        }
                        timer.as_mut().reset(Instant::now() + self.quiet);
                    }
                    None => break,
                },
                _ = &mut timer, if pending.is_some() => {
                    if let Some(value) = pending.take()
                        && output.send(map(value)).await.is_err()
                    {
                        tracing::debug!("[DEBOUNCE] Output closed");
                        break;
                    }
                }
            }
        }

        if pending.is_some() {
            tracing::debug!("[DEBOUNCE] Dropping pending value on shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn spawn(
        quiet: Duration,
    ) -> (
        mpsc::Sender<String>,
        kanal::AsyncReceiver<String>,
        CancellationToken,
    ) {
        let (in_tx, in_rx) = mpsc::channel(16);
        let (out_tx, out_rx) = kanal::unbounded_async();
        let cancel = CancellationToken::new();

        let token = cancel.clone();
        tokio::spawn(async move {
            Debouncer::new(quiet)
                .run(in_rx, out_tx, |v| v, token)
                .await;
        });

        (in_tx, out_rx, cancel)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_commits_last_value_once() {
        let (tx, rx, _cancel) = spawn(Duration::from_millis(200));

        for word in ["h", "he", "hel", "hell", "hello"] {
            tx.send(word.to_string()).await.unwrap();
            time::sleep(Duration::from_millis(50)).await;
        }

        time::sleep(Duration::from_millis(300)).await;

        assert_eq!(rx.try_recv().unwrap().as_deref(), Some("hello"));
        assert_eq!(rx.try_recv().unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_before_quiet_period() {
        let (tx, rx, _cancel) = spawn(Duration::from_millis(200));

        tx.send("legend".to_string()).await.unwrap();
        time::sleep(Duration::from_millis(150)).await;
        assert_eq!(rx.try_recv().unwrap(), None);

        time::sleep(Duration::from_millis(100)).await;
        assert_eq!(rx.try_recv().unwrap().as_deref(), Some("legend"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_windows_commit_separately() {
        let (tx, rx, _cancel) = spawn(Duration::from_millis(200));

        tx.send("zelda".to_string()).await.unwrap();
        time::sleep(Duration::from_millis(250)).await;
        tx.send("wild".to_string()).await.unwrap();
        time::sleep(Duration::from_millis(250)).await;

        assert_eq!(rx.try_recv().unwrap().as_deref(), Some("zelda"));
        assert_eq!(rx.try_recv().unwrap().as_deref(), Some("wild"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending() {
        let (tx, rx, cancel) = spawn(Duration::from_millis(200));

        tx.send("hyrule".to_string()).await.unwrap();
        time::sleep(Duration::from_millis(10)).await;
        cancel.cancel();
        time::sleep(Duration::from_millis(500)).await;

        // The sender is gone with the task, so either empty or closed
        assert!(matches!(rx.try_recv(), Ok(None) | Err(_)));
    }
}
