use serde::Deserialize;

/// Everything the dataset knows about a single word.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordEntry {
    /// Normalized lookup key. The dataset keys its entries by word, so this is
    /// filled in when the entry is inserted into a [`crate::WordIndex`].
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default, rename = "audio")]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Definition {
    #[serde(rename = "definition")]
    pub text: String,
    #[serde(default)]
    pub example: Option<String>,
}

impl WordEntry {
    /// The pronunciation resource, if the dataset has a non-empty one.
    pub fn audio_url(&self) -> Option<&str> {
        self.audio_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn phonetic(&self) -> Option<&str> {
        self.phonetic.as_deref().filter(|phonetic| !phonetic.trim().is_empty())
    }

    /// Synonyms over all meanings, in dataset order.
    pub fn synonyms(&self) -> impl Iterator<Item = &str> {
        self.meanings
            .iter()
            .flat_map(|meaning| meaning.synonyms.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_dataset_entry() {
        let json = r#"{
            "phonetic": "/ɪˈfɛm(ə)rəl/",
            "audio": "https://example.com/ephemeral.mp3",
            "meanings": [{
                "partOfSpeech": "adjective",
                "definitions": [
                    { "definition": "Lasting for a very short time.", "example": "Fashions are ephemeral." },
                    { "definition": "Living for a day." }
                ],
                "synonyms": ["fleeting", "transitory"]
            }]
        }"#;

        let entry: WordEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.word, "");
        assert_eq!(entry.phonetic(), Some("/ɪˈfɛm(ə)rəl/"));
        assert_eq!(entry.audio_url(), Some("https://example.com/ephemeral.mp3"));
        assert_eq!(entry.meanings.len(), 1);

        let meaning = &entry.meanings[0];
        assert_eq!(meaning.part_of_speech, "adjective");
        assert_eq!(meaning.definitions[0].text, "Lasting for a very short time.");
        assert_eq!(
            meaning.definitions[0].example.as_deref(),
            Some("Fashions are ephemeral.")
        );
        assert_eq!(meaning.definitions[1].example, None);
    }

    #[test]
    fn test_missing_fields_default() {
        let json = r#"{ "meanings": [{ "partOfSpeech": "noun" }] }"#;

        let entry: WordEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.phonetic(), None);
        assert_eq!(entry.audio_url(), None);
        assert!(entry.meanings[0].definitions.is_empty());
        assert!(entry.meanings[0].synonyms.is_empty());
    }

    #[test]
    fn test_empty_audio_is_absent() {
        let json = r#"{ "audio": "", "phonetic": " " }"#;

        let entry: WordEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.audio_url(), None);
        assert_eq!(entry.phonetic(), None);
        assert!(entry.meanings.is_empty());
    }

    #[test]
    fn test_synonyms_span_meanings() {
        let json = r#"{
            "meanings": [
                { "partOfSpeech": "noun", "synonyms": ["chance", "luck"] },
                { "partOfSpeech": "verb", "synonyms": ["happen"] }
            ]
        }"#;

        let entry: WordEntry = serde_json::from_str(json).unwrap();
        assert_eq!(
            entry.synonyms().collect::<Vec<_>>(),
            vec!["chance", "luck", "happen"]
        );
    }
}
