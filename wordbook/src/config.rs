use std::env;

use clap::Parser;
use dictionary::{DatasetSource, DEFAULT_SUGGESTION_LIMIT};

/// Look up words, their definitions and synonyms.
#[derive(Debug, Default, Parser)]
#[command(name = "wordbook", version)]
pub struct Args {
    /// Dataset file path or http(s) URL [env: WORDBOOK_DATASET]
    #[arg(long)]
    pub dataset: Option<String>,

    /// SQLite database holding history and theme [env: WORDBOOK_DATABASE]
    #[arg(long)]
    pub database: Option<String>,

    /// Maximum number of suggestions [env: WORDBOOK_SUGGESTIONS]
    #[arg(long)]
    pub suggestions: Option<usize>,

    /// Log filter, e.g. `info` or `dictionary=debug` [env: RUST_LOG]
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dataset: DatasetSource,
    pub database_url: String,
    pub suggestion_limit: usize,
    pub log_filter: String,
}

impl Config {
    /// Flags win over environment variables, which win over defaults.
    pub fn new(args: Args) -> Self {
        Self::resolve(args, |key| env::var(key).ok())
    }

    fn resolve(args: Args, var: impl Fn(&str) -> Option<String>) -> Self {
        let dataset = args
            .dataset
            .or_else(|| var("WORDBOOK_DATASET"))
            .unwrap_or_else(|| "dictionary.json".to_string());

        let database_url = args
            .database
            .or_else(|| var("WORDBOOK_DATABASE"))
            .unwrap_or_else(|| "sqlite://wordbook.db".to_string());

        let suggestion_limit = args
            .suggestions
            .or_else(|| var("WORDBOOK_SUGGESTIONS").and_then(|v| v.parse().ok()))
            .unwrap_or(DEFAULT_SUGGESTION_LIMIT);

        let log_filter = args
            .log_level
            .or_else(|| var("RUST_LOG"))
            .unwrap_or_else(|| "warn".to_string());

        Config {
            dataset: DatasetSource::from(dataset.as_str()),
            database_url,
            suggestion_limit,
            log_filter,
        }
    }
}
