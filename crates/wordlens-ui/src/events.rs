use wordlens_types::{AppEvent, UiEvent};

use crate::frame::{RenderOptions, render_frame};

pub enum Outcome {
    /// Write this frame
    Draw(String),
    Skip,
    Close,
}

/// Turns app events into terminal frames
pub struct Presenter {
    options: RenderOptions,
    last_frame: Option<String>,
}

impl Presenter {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            last_frame: None,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Outcome {
        match event {
            AppEvent::Render(view) => {
                let frame = render_frame(&view, &self.options);
                if self.last_frame.as_ref() == Some(&frame) {
                    tracing::trace!("[UI] Frame unchanged");
                    return Outcome::Skip;
                }

                tracing::debug!(
                    "[UI] Drawing '{}' (matched: {})",
                    view.term,
                    view.highlight.matched
                );
                self.last_frame = Some(frame.clone());

                if self.options.color {
                    Outcome::Draw(format!("\x1b[2J\x1b[H{frame}"))
                } else {
                    Outcome::Draw(format!("{frame}\n"))
                }
            }
            AppEvent::UiEvent(UiEvent::Close) => {
                tracing::debug!("[UI] Close requested");
                Outcome::Close
            }
            _ => Outcome::Skip,
        }
    }
}
