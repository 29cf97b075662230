use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default search term preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Full-width and compatibility forms fold to their plain letters
        text.nfkc().collect::<String>().trim().to_string()
    }
}

pub struct SearchPreprocessor;
impl Preprocessor for SearchPreprocessor {}
