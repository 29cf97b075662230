use wordlens_config::PanelMode;
use wordlens_types::{DictionaryEntry, Meaning, PanelView};

use crate::pager::{MeaningPager, PagerState};

/// Translation panel state: the displayed entry and its meaning cursor
#[derive(Debug, Clone)]
pub struct TranslationPanel {
    entry: Option<DictionaryEntry>,
    pager: MeaningPager,
    mode: PanelMode,
}

impl TranslationPanel {
    pub fn new(mode: PanelMode) -> Self {
        Self {
            entry: None,
            pager: MeaningPager::new(),
            mode,
        }
    }

    /// Replace the displayed entry, the cursor goes back to the first meaning
    pub fn set_entry(&mut self, entry: Option<DictionaryEntry>) {
        self.pager
            .reset(entry.as_ref().map_or(0, |e| e.meanings.len()));
        self.entry = entry;
    }

    pub fn clear(&mut self) {
        self.set_entry(None);
    }

    pub fn entry(&self) -> Option<&DictionaryEntry> {
        self.entry.as_ref()
    }

    pub fn next(&mut self) -> PagerState {
        self.pager.next()
    }

    pub fn prev(&mut self) -> PagerState {
        self.pager.prev()
    }

    pub fn pager(&self) -> &MeaningPager {
        &self.pager
    }

    pub fn active_meaning(&self) -> Option<&Meaning> {
        let index = self.pager.index()?;
        self.entry.as_ref()?.meanings.get(index)
    }

    /// Audio URL of the `index`-th phonetic, if it has one
    pub fn audio_url(&self, index: usize) -> Option<&str> {
        self.entry.as_ref()?.phonetics.get(index)?.audio_url()
    }

    /// What to draw given whether the search term was found in the text
    pub fn view(&self, matched: bool) -> PanelView {
        match (&self.entry, matched) {
            (Some(entry), true) => PanelView::Entry {
                entry: entry.clone(),
                meaning_index: self.pager.index().unwrap_or(0),
            },
            _ => match self.mode {
                PanelMode::Hide => PanelView::Hidden,
                PanelMode::Placeholder => PanelView::NoResults,
            },
        }
    }
}
