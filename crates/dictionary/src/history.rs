use crate::normalize;

pub const MAX_HISTORY: usize = 10;

/// Most-recent-first list of searched words, without duplicates and never
/// longer than [`MAX_HISTORY`]. Persisting it is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    words: Vec<String>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the log from persisted state. Saved data is not trusted to
    /// uphold the invariants, so words are normalized, repeats and blanks
    /// dropped, and the result capped.
    pub fn restore<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut restored: Vec<String> = Vec::with_capacity(MAX_HISTORY);
        for word in words {
            let word = normalize(word.as_ref());
            if word.is_empty() || restored.contains(&word) {
                continue;
            }
            restored.push(word);
            if restored.len() == MAX_HISTORY {
                break;
            }
        }
        Self { words: restored }
    }

    /// Moves `word` to the front, evicting the oldest entry when full.
    /// Returns the new state.
    pub fn record(&mut self, word: &str) -> &[String] {
        let word = normalize(word);
        if word.is_empty() {
            return &self.words;
        }
        self.words.retain(|existing| *existing != word);
        self.words.insert(0, word);
        self.words.truncate(MAX_HISTORY);
        &self.words
    }

    pub fn all(&self) -> &[String] {
        &self.words
    }

    /// Zero-based position, most recent first.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.words.get(position).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let history = HistoryLog::new();
        assert!(history.is_empty());
        assert!(history.all().is_empty());
    }

    #[test]
    fn test_scenario() {
        let mut history = HistoryLog::new();
        assert_eq!(history.record("alpha"), ["alpha"]);
        assert_eq!(history.record("beta"), ["beta", "alpha"]);
        assert_eq!(history.record("alpha"), ["alpha", "beta"]);
        assert_eq!(history.all(), ["alpha", "beta"]);
    }

    #[test]
    fn test_record_twice_keeps_one() {
        let mut history = HistoryLog::new();
        history.record("dog");
        history.record("cat");
        history.record("cat");
        assert_eq!(history.all(), ["cat", "dog"]);
    }

    #[test]
    fn test_record_promotes_to_front() {
        let mut history = HistoryLog::new();
        history.record("w1");
        history.record("w2");
        history.record("w3");
        history.record("w1");
        assert_eq!(history.all(), ["w1", "w3", "w2"]);
    }

    #[test]
    fn test_record_is_case_normalized() {
        let mut history = HistoryLog::new();
        history.record("cat");
        history.record(" Cat ");
        assert_eq!(history.all(), ["cat"]);
    }

    #[test]
    fn test_record_ignores_blank() {
        let mut history = HistoryLog::new();
        history.record("cat");
        assert_eq!(history.record("  "), ["cat"]);
    }

    #[test]
    fn test_length_is_capped() {
        let mut history = HistoryLog::new();
        for i in 0..25 {
            history.record(&format!("word{i}"));
            assert!(history.len() <= MAX_HISTORY);
        }
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.get(0), Some("word24"));
        assert_eq!(history.get(MAX_HISTORY - 1), Some("word15"));
        assert_eq!(history.get(MAX_HISTORY), None);
    }

    #[test]
    fn test_promoting_at_capacity_evicts_nothing() {
        let mut history = HistoryLog::new();
        for i in 0..MAX_HISTORY {
            history.record(&format!("word{i}"));
        }
        history.record("word0");
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.get(0), Some("word0"));
        assert_eq!(history.get(MAX_HISTORY - 1), Some("word1"));
    }

    #[test]
    fn test_restore_upholds_invariants() {
        let saved = vec!["Cat", "dog", "cat", "", "bird"];
        let history = HistoryLog::restore(saved);
        assert_eq!(history.all(), ["cat", "dog", "bird"]);

        let saved = (0..15).map(|i| format!("word{i}"));
        let history = HistoryLog::restore(saved);
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.get(0), Some("word0"));
    }

    #[test]
    fn test_clear() {
        let mut history = HistoryLog::restore(["cat", "dog"]);
        history.clear();
        assert!(history.is_empty());
    }
}
