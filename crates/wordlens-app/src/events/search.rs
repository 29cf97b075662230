use wordlens_config::ui::UiConfig;
use wordlens_core::{
    Highlighter, LayoutMetrics, PagerState, Preprocessor, SampleText, SearchPreprocessor,
    TextLayout, TranslationPanel,
};
use wordlens_types::{DictionaryEntry, HighlightResult, PanelPosition, ScreenView};

/// A lookup the controller wants issued, tagged with the search that asked for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub generation: u64,
    pub term: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Same term as the current one, nothing changed
    Unchanged,
    Committed { lookup: Option<LookupRequest> },
}

/// Owns the committed search term and everything derived from it
pub struct SearchController {
    highlighter: Highlighter,
    layout: TextLayout,
    panel_offset: f32,
    panel: TranslationPanel,
    term: String,
    highlight: HighlightResult,
    position: PanelPosition,
    generation: u64,
}

impl SearchController {
    pub fn new(sample: &SampleText, metrics: LayoutMetrics, ui: &UiConfig) -> Self {
        let highlighter = Highlighter::new(sample.shared_tokens());
        let highlight = highlighter.highlight("");

        Self {
            highlighter,
            layout: TextLayout::new(metrics),
            panel_offset: ui.panel_offset,
            panel: TranslationPanel::new(ui.panel_mode),
            term: String::new(),
            highlight,
            position: PanelPosition::default(),
            generation: 0,
        }
    }

    /// Commit a new search term: re-highlight, clear the panel, re-measure
    /// the panel position and hand back the lookup to run
    pub fn commit(&mut self, raw: &str) -> CommitOutcome {
        let term = SearchPreprocessor.process(raw);
        if self.generation > 0 && term == self.term {
            return CommitOutcome::Unchanged;
        }

        self.generation += 1;
        self.highlight = self.highlighter.highlight(&term);
        self.panel.clear();

        // No match leaves the panel where it was
        if let Some(position) = self.layout.panel_position(&self.highlight, self.panel_offset) {
            self.position = position;
        }

        tracing::info!(
            "[SEARCH] Committed '{}' (matched: {}, generation: {})",
            term,
            self.highlight.matched,
            self.generation
        );

        self.term = term;
        let lookup = (!self.term.is_empty()).then(|| LookupRequest {
            generation: self.generation,
            term: self.term.clone(),
        });

        CommitOutcome::Committed { lookup }
    }

    /// Show the first entry of a finished lookup. Results for a search that
    /// is no longer current are dropped; returns whether anything changed.
    pub fn apply_lookup(
        &mut self,
        generation: u64,
        term: &str,
        entries: Vec<DictionaryEntry>,
    ) -> bool {
        if generation != self.generation || term != self.term {
            tracing::debug!(
                "[SEARCH] Dropping stale lookup for '{}' (generation {} != {})",
                term,
                generation,
                self.generation
            );
            return false;
        }

        tracing::debug!("[SEARCH] Lookup for '{}': {} entries", term, entries.len());
        self.panel.set_entry(entries.into_iter().next());
        true
    }

    pub fn next_meaning(&mut self) -> PagerState {
        self.panel.next()
    }

    pub fn prev_meaning(&mut self) -> PagerState {
        self.panel.prev()
    }

    pub fn audio_url(&self, index: usize) -> Option<String> {
        self.panel.audio_url(index).map(str::to_string)
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn highlight(&self) -> &HighlightResult {
        &self.highlight
    }

    pub fn position(&self) -> PanelPosition {
        self.position
    }

    pub fn panel(&self) -> &TranslationPanel {
        &self.panel
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn view(&self) -> ScreenView {
        ScreenView {
            term: self.term.clone(),
            highlight: self.highlight.clone(),
            position: self.position,
            panel: self.panel.view(self.highlight.matched),
        }
    }
}
