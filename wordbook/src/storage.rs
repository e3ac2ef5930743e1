use sqlx::{migrate::MigrateDatabase, query, query_scalar, Pool, Sqlite, SqlitePool};

use crate::theme::Theme;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("failed to encode search history: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

const HISTORY_SLOT: &str = "dictionaryHistory";
const THEME_SLOT: &str = "dictionaryTheme";

/// Small key-value store holding the search history and theme preference.
pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    pub async fn initialize(database_url: &str) -> Result<Self> {
        if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
            Sqlite::create_database(database_url).await?;
        }
        let pool = SqlitePool::connect(database_url).await?;
        Self::with_pool(pool).await
    }

    /// Falls back to [`Storage::in_memory`] when the database can't be opened,
    /// so only persistence across runs is lost.
    pub async fn open_or_in_memory(database_url: &str) -> Result<Self> {
        match Self::initialize(database_url).await {
            Ok(storage) => Ok(storage),
            Err(error) => {
                tracing::warn!(database_url, %error, "history and theme will not be saved");
                Self::in_memory().await
            }
        }
    }

    /// A private database that disappears with the process.
    pub async fn in_memory() -> Result<Self> {
        // every in-memory connection is its own database, so keep exactly one
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: Pool<Sqlite>) -> Result<Self> {
        query("CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY NOT NULL, value TEXT NOT NULL)")
            .execute(&pool)
            .await?;
        Ok(Self { pool })
    }
}

impl Storage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let value = query_scalar::<_, String>("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        query(
            "INSERT INTO kv(key, value) VALUES(?, ?) ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Saved history, or nothing if the slot is empty or unreadable.
    pub async fn load_history(&self) -> Result<Vec<String>> {
        let Some(json) = self.get(HISTORY_SLOT).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&json) {
            Ok(words) => Ok(words),
            Err(error) => {
                tracing::warn!(%error, "discarding unreadable search history");
                Ok(Vec::new())
            }
        }
    }

    pub async fn save_history(&self, words: &[String]) -> Result<()> {
        let json = serde_json::to_string(words)?;
        self.set(HISTORY_SLOT, &json).await?;
        Ok(())
    }

    pub async fn load_theme(&self) -> Result<Theme> {
        let theme = self.get(THEME_SLOT).await?.and_then(|saved| match saved.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(error) => {
                tracing::warn!(%error, "ignoring saved theme");
                None
            }
        });
        Ok(theme.unwrap_or_default())
    }

    pub async fn save_theme(&self, theme: Theme) -> Result<()> {
        self.set(THEME_SLOT, theme.as_str()).await
    }
}
