pub mod dictionary;
pub mod types;

pub use dictionary::{Definition, DictionaryEntry, Meaning, Phonetic};
pub use types::{
    AppEvent, HighlightResult, HighlightedToken, PanelPosition, PanelView, ScreenView, UiEvent,
    WordToken,
};
