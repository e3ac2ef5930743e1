use std::collections::BTreeMap;
use std::ops::Bound;

use rand::{seq::IteratorRandom, Rng};

use crate::{normalize, WordEntry};

pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// A lookup that found nothing. This is an ordinary outcome, the original
/// query is kept so it can be shown back to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no definition found for {query:?}")]
pub struct NotFound {
    pub query: String,
}

/// Read-only mapping from normalized word to its entry.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    entries: BTreeMap<String, WordEntry>,
}

impl WordIndex {
    pub fn new(entries: impl IntoIterator<Item = WordEntry>) -> Self {
        entries.into_iter().collect()
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-insensitive lookup.
    pub fn lookup(&self, query: &str) -> Result<&WordEntry, NotFound> {
        self.entries.get(&normalize(query)).ok_or_else(|| NotFound {
            query: query.to_owned(),
        })
    }

    /// Up to `limit` words starting with `prefix`, in key order. An empty
    /// prefix suggests nothing.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<&str> {
        let prefix = normalize(prefix);
        if prefix.is_empty() {
            return Vec::new();
        }
        // keys are sorted, so every match sits in one run starting at `prefix`
        self.entries
            .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
            .map(|(word, _)| word.as_str())
            .take_while(|word| word.starts_with(&prefix))
            .take(limit)
            .collect()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words().choose(rng)
    }
}

impl FromIterator<WordEntry> for WordIndex {
    fn from_iter<T: IntoIterator<Item = WordEntry>>(iter: T) -> Self {
        let mut entries = BTreeMap::new();
        for mut entry in iter {
            let word = normalize(&entry.word);
            if word.is_empty() {
                tracing::debug!("skipping dataset entry without a word");
                continue;
            }
            entry.word = word.clone();
            if entries.insert(word, entry).is_some() {
                tracing::debug!("duplicate dataset entry replaced");
            }
        }
        Self { entries }
    }
}
