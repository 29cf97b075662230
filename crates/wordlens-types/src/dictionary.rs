use serde::{Deserialize, Serialize};

/// One word's lookup record as returned by the dictionary service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

impl Phonetic {
    /// Playable audio URL, the service sends `""` when there is none
    pub fn audio_url(&self) -> Option<&str> {
        self.audio.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Part-of-speech grouped sense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default_to_absent() {
        let json = r#"[{
            "word": "hello",
            "phonetics": [{"text": "/həˈloʊ/", "audio": ""}, {"audio": "https://a/x.mp3"}],
            "meanings": [{
                "partOfSpeech": "exclamation",
                "definitions": [{"definition": "Used as a greeting."}]
            }]
        }]"#;

        let entries: Vec<DictionaryEntry> = serde_json::from_str(json).unwrap();
        let entry = &entries[0];

        assert_eq!(entry.phonetics[0].audio_url(), None);
        assert_eq!(entry.phonetics[1].text, "");
        assert_eq!(entry.phonetics[1].audio_url(), Some("https://a/x.mp3"));

        let definition = &entry.meanings[0].definitions[0];
        assert_eq!(definition.example, None);
        assert!(definition.synonyms.is_empty());
    }

    #[test]
    fn test_missing_collections() {
        let entry: DictionaryEntry = serde_json::from_str(r#"{"word": "zelda"}"#).unwrap();
        assert!(entry.phonetics.is_empty());
        assert!(entry.meanings.is_empty());
    }

    #[test]
    fn test_definition_without_text_keeps_entry() {
        let json = r#"{
            "word": "legend",
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [
                    {"example": "the legend of the hero"},
                    {"definition": "A traditional story."}
                ]
            }]
        }"#;

        let entry: DictionaryEntry = serde_json::from_str(json).unwrap();
        let definitions = &entry.meanings[0].definitions;

        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions[0].definition, "");
        assert_eq!(definitions[0].example.as_deref(), Some("the legend of the hero"));
        assert_eq!(definitions[1].definition, "A traditional story.");
    }
}
