use crate::dictionary::DictionaryEntry;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw value of the search field, not yet debounced
    InputChanged(String),
    /// Search term committed after the quiet period
    SearchCommitted(String),
    LookupFinished {
        generation: u64,
        term: String,
        entries: Vec<DictionaryEntry>,
    },
    UiEvent(UiEvent),
    Render(Box<ScreenView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    NextMeaning,
    PrevMeaning,
    /// Zero-based phonetic index
    PlayAudio(usize),
    Close,
}

/// Whitespace-delimited piece of the sample text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedToken {
    pub index: usize,
    pub text: String,
    pub marked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightResult {
    pub matched: bool,
    pub tokens: Vec<HighlightedToken>,
}

impl HighlightResult {
    pub fn marked_index(&self) -> Option<usize> {
        self.tokens.iter().find(|t| t.marked).map(|t| t.index)
    }

    pub fn marked_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.marked).count()
    }
}

/// Where the translation panel is drawn, in layout units
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelPosition {
    pub left: f32,
    pub top: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    Hidden,
    NoResults,
    Entry {
        entry: DictionaryEntry,
        meaning_index: usize,
    },
}

/// Everything the presenter needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView {
    pub term: String,
    pub highlight: HighlightResult,
    pub position: PanelPosition,
    pub panel: PanelView,
}
