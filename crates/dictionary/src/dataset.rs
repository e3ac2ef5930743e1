use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::{Definition, DictionaryError, Meaning, WordEntry, WordIndex};

/// The dataset file: `{ "words": { "<word>": { ... } } }`.
#[derive(Debug, Deserialize)]
pub struct DatasetDocument {
    /// Entries in document order, so that when two keys normalize to the
    /// same word the later one wins every time.
    #[serde(deserialize_with = "entries_in_order")]
    pub words: Vec<(String, WordEntry)>,
}

fn entries_in_order<'de, D>(deserializer: D) -> Result<Vec<(String, WordEntry)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, WordEntry)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map from word to entry")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, WordEntry>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

impl DatasetDocument {
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        serde_json::from_str(json).map_err(DictionaryError::Parse)
    }
}

impl From<DatasetDocument> for WordIndex {
    fn from(document: DatasetDocument) -> Self {
        document
            .words
            .into_iter()
            .map(|(word, mut entry)| {
                entry.word = word;
                entry
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Url(String),
    File(PathBuf),
}

impl From<&str> for DatasetSource {
    fn from(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            DatasetSource::Url(source.to_owned())
        } else {
            DatasetSource::File(PathBuf::from(source))
        }
    }
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetSource::Url(url) => f.write_str(url),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub struct DatasetLoader {
    client: reqwest::Client,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub async fn load(&self, source: &DatasetSource) -> Result<WordIndex, DictionaryError> {
        let document = match source {
            DatasetSource::Url(url) => self.fetch(url).await?,
            DatasetSource::File(path) => read_document(path).await?,
        };
        Ok(WordIndex::from(document))
    }

    /// Never fails: when the dataset can't be loaded the built-in
    /// [`fallback_index`] is used instead.
    pub async fn load_or_fallback(&self, source: &DatasetSource) -> WordIndex {
        match self.load(source).await {
            Ok(index) => {
                tracing::info!(%source, words = index.len(), "dataset loaded");
                index
            }
            Err(error) => {
                tracing::warn!(%source, %error, "failed to load dataset, using the built-in words");
                fallback_index()
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<DatasetDocument, DictionaryError> {
        let res: reqwest::Response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(DictionaryError::Fetch)?;
        let status = res.status();
        if !status.is_success() {
            return Err(DictionaryError::Status(status));
        }
        res.json::<DatasetDocument>()
            .await
            .map_err(DictionaryError::Deserialize)
    }
}

async fn read_document(path: &Path) -> Result<DatasetDocument, DictionaryError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DictionaryError::Io {
            path: path.to_owned(),
            source,
        })?;
    DatasetDocument::from_json(&json)
}

/// The two words available when no dataset can be loaded.
pub fn fallback_index() -> WordIndex {
    WordIndex::new([
        WordEntry {
            word: "serendipity".to_string(),
            phonetic: Some("/ˌsɛrənˈdɪpɪti/".to_string()),
            audio_url: Some(
                "https://api.dictionaryapi.dev/media/pronunciations/en/serendipity-us.mp3"
                    .to_string(),
            ),
            meanings: vec![Meaning {
                part_of_speech: "noun".to_string(),
                definitions: vec![Definition {
                    text: "The occurrence of events by chance in a happy or beneficial way."
                        .to_string(),
                    example: Some(
                        "A fortunate stroke of serendipity led to the discovery.".to_string(),
                    ),
                }],
                synonyms: strings(&["chance", "fortuity", "luck", "fluke"]),
            }],
        },
        WordEntry {
            word: "ephemeral".to_string(),
            phonetic: Some("/ɪˈfɛm(ə)rəl/".to_string()),
            audio_url: Some(
                "https://api.dictionaryapi.dev/media/pronunciations/en/ephemeral-us.mp3"
                    .to_string(),
            ),
            meanings: vec![Meaning {
                part_of_speech: "adjective".to_string(),
                definitions: vec![Definition {
                    text: "Lasting for a very short time.".to_string(),
                    example: Some("Fashions are ephemeral, but style is eternal.".to_string()),
                }],
                synonyms: strings(&["transitory", "short-lived", "fleeting", "momentary"]),
            }],
        },
    ])
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}
