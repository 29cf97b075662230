pub mod debounce;
pub mod highlight;
pub mod layout;
pub mod pager;
pub mod panel;
pub mod preprocess;
pub mod sample;

pub use debounce::Debouncer;
pub use highlight::Highlighter;
pub use layout::{LayoutMetrics, Rect, TextLayout, TokenBox};
pub use pager::{MeaningPager, PagerState};
pub use panel::TranslationPanel;
pub use preprocess::{Preprocessor, SearchPreprocessor};
pub use sample::SampleText;
