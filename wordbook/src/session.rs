use dictionary::{HistoryLog, WordIndex};

use crate::render::{
    displayed_synonyms, format_entry, format_history, format_not_found, format_suggestions,
};
use crate::storage::Storage;
use crate::theme::Theme;
use crate::utilities::{input, str_to_bool};

pub const HELP: &str = "\
Commands:
    <word>, define <word>   look up a word
    suggest <prefix>        words starting with <prefix>
    history [n]             recent searches, or search the n-th one again
    synonym <n>             look up the n-th synonym of the shown word
    audio                   pronunciation of the shown word
    random                  look up a random word
    theme [light|dark]      switch the colour theme
    clear                   forget the search history
    help                    show this message
    exit                    leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Suggest(String),
    History(Option<usize>),
    Synonym(usize),
    Audio,
    Random,
    Theme(Option<Theme>),
    Clear,
    Help,
    Exit,
    Invalid(String),
}

impl Command {
    /// `None` for a blank line.
    pub fn parse(line: &str) -> Option<Command> {
        let mut parts = line.split_ascii_whitespace();
        let command = parts.next()?;
        let rest = parts.collect::<Vec<&str>>().join(" ");
        let command = match command {
            "exit" | "leave" | "quit" | "e" | "q" | "l" => Command::Exit,
            "help" | "?" => Command::Help,
            "define" | "find" => {
                if rest.is_empty() {
                    Command::Invalid(format!("Usage: {command} <word>"))
                } else {
                    Command::Search(rest)
                }
            }
            "suggest" => Command::Suggest(rest),
            "history" => match position(&rest) {
                Ok(position) => Command::History(position),
                Err(invalid) => invalid,
            },
            "synonym" => match position(&rest) {
                Ok(Some(position)) => Command::Synonym(position),
                Ok(None) => Command::Invalid("Usage: synonym <n>".to_string()),
                Err(invalid) => invalid,
            },
            "audio" => Command::Audio,
            "random" => Command::Random,
            "clear" => Command::Clear,
            "theme" if rest.is_empty() => Command::Theme(None),
            "theme" => match rest.parse() {
                Ok(theme) => Command::Theme(Some(theme)),
                Err(error) => Command::Invalid(error.to_string()),
            },
            _ => Command::Search(line.trim().to_string()),
        };
        Some(command)
    }
}

/// 1-based list position as typed by the user.
fn position(arg: &str) -> Result<Option<usize>, Command> {
    if arg.is_empty() {
        return Ok(None);
    }
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(Command::Invalid(format!("Expected a positive number, got {arg:?}"))),
    }
}

/// Everything the terminal front end needs between two commands.
pub struct Session {
    index: WordIndex,
    history: HistoryLog,
    theme: Theme,
    storage: Storage,
    suggestion_limit: usize,
    shown: Option<String>,
}

impl Session {
    pub async fn start(index: WordIndex, storage: Storage, suggestion_limit: usize) -> Self {
        let history = match storage.load_history().await {
            Ok(words) => HistoryLog::restore(words),
            Err(error) => {
                tracing::warn!(%error, "failed to load search history");
                HistoryLog::new()
            }
        };
        let theme = storage.load_theme().await.unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to load theme preference");
            Theme::default()
        });
        tracing::debug!(history = history.len(), %theme, "session started");
        Self {
            index,
            history,
            theme,
            storage,
            suggestion_limit,
            shown: None,
        }
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The word currently on screen.
    pub fn shown(&self) -> Option<&str> {
        self.shown.as_deref()
    }

    pub async fn run(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Search(query) => {
                self.search(&query).await;
            }
            Command::Suggest(prefix) => {
                let suggestions = self.index.suggest(&prefix, self.suggestion_limit);
                match format_suggestions(&suggestions) {
                    Some(text) => println!("{text}"),
                    None => println!("No suggestions."),
                }
            }
            Command::History(None) => println!("{}", format_history(self.history.all())),
            Command::History(Some(n)) => match n.checked_sub(1).and_then(|i| self.history.get(i)) {
                Some(word) => {
                    let word = word.to_owned();
                    self.search(&word).await;
                }
                None => println!("There are only {} recent searches.", self.history.len()),
            },
            Command::Synonym(n) => match self.synonym(n) {
                Some(synonym) => {
                    self.search(&synonym).await;
                }
                None => println!("There is no synonym number {n}."),
            },
            Command::Audio => self.audio(),
            Command::Random => {
                let word = self.index.random_word(&mut rand::thread_rng()).map(str::to_owned);
                match word {
                    Some(word) => {
                        self.search(&word).await;
                    }
                    None => println!("The dictionary is empty."),
                }
            }
            Command::Theme(theme) => {
                let theme = theme.unwrap_or_else(|| self.theme.toggle());
                self.set_theme(theme).await;
                println!("Theme set to {}.", self.theme.heading(theme.as_str()));
            }
            Command::Clear => {
                if self.history.is_empty() {
                    println!("{}", format_history(self.history.all()));
                    return Ok(());
                }
                let answer = input("Clear your search history? (y/N): ")?.unwrap_or_default();
                if str_to_bool(answer).unwrap_or(false) {
                    self.clear_history().await;
                    println!("Cleared the search history.");
                }
            }
            Command::Help => println!("{HELP}"),
            Command::Invalid(message) => println!("{message}"),
            Command::Exit => {}
        }
        Ok(())
    }

    /// Shows the entry for `query` and records it in the history. Returns
    /// whether the word was found.
    pub async fn search(&mut self, query: &str) -> bool {
        if query.trim().is_empty() {
            return false;
        }
        match self.index.lookup(query) {
            Ok(entry) => {
                println!("{}", format_entry(entry, self.theme));
                let word = entry.word.clone();
                self.history.record(&word);
                self.shown = Some(word);
                self.persist_history().await;
                true
            }
            Err(not_found) => {
                tracing::debug!(%not_found);
                println!("{}", format_not_found(&not_found.query));
                false
            }
        }
    }

    /// The n-th (1-based) synonym listed for the word on screen.
    pub fn synonym(&self, n: usize) -> Option<String> {
        let entry = self.index.lookup(self.shown.as_deref()?).ok()?;
        displayed_synonyms(entry)
            .get(n.checked_sub(1)?)
            .map(|synonym| synonym.to_string())
    }

    fn audio(&self) {
        let Some(word) = self.shown.as_deref() else {
            println!("Look up a word first.");
            return;
        };
        match self.index.lookup(word).ok().and_then(|entry| entry.audio_url()) {
            Some(url) => println!("Pronunciation of '{word}': {url}"),
            None => {
                tracing::info!(word, "no pronunciation available");
                println!("No pronunciation available for '{word}'.");
            }
        }
    }

    pub async fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(error) = self.storage.save_theme(theme).await {
            tracing::warn!(%error, "failed to save theme preference");
        }
    }

    pub async fn clear_history(&mut self) {
        self.history.clear();
        self.persist_history().await;
    }

    async fn persist_history(&self) {
        if let Err(error) = self.storage.save_history(self.history.all()).await {
            tracing::warn!(%error, "failed to save search history");
        }
    }
}
