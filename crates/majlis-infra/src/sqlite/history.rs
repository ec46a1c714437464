//! SQLite conversation snapshot store.
//!
//! Implements `HistoryStore` from `majlis-core` using sqlx with split
//! read/write pools. The whole conversation is stored as one JSON value
//! under a fixed namespaced key; every save is a full overwrite.

use chrono::Utc;
use majlis_core::session::history::HistoryStore;
use majlis_types::chat::ChatMessage;
use majlis_types::error::HistoryError;
use sqlx::Row;
use tracing::warn;

use super::pool::DatabasePool;

/// Fixed storage key for the single conversation snapshot.
const HISTORY_KEY: &str = "majlis:chat_history";

/// SQLite-backed implementation of `HistoryStore`.
pub struct SqliteHistoryStore {
    pool: DatabasePool,
}

impl SqliteHistoryStore {
    /// Create a new history store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl HistoryStore for SqliteHistoryStore {
    async fn load(&self) -> Result<Vec<ChatMessage>, HistoryError> {
        let row = sqlx::query("SELECT value FROM chat_history WHERE key = ?")
            .bind(HISTORY_KEY)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| HistoryError::Read(e.to_string()))?;

        let Some(row) = row else {
            return Ok(Vec::new());
        };

        let value: String = row
            .try_get("value")
            .map_err(|e| HistoryError::Read(e.to_string()))?;

        // Malformed stored text is not fatal: treat it as an empty
        // conversation and let the next save overwrite it.
        match serde_json::from_str::<Vec<ChatMessage>>(&value) {
            Ok(messages) => Ok(messages),
            Err(err) => {
                warn!(error = %err, "stored conversation snapshot is malformed, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, messages: &[ChatMessage]) -> Result<(), HistoryError> {
        let value = serde_json::to_string(messages)
            .map_err(|e| HistoryError::Write(format!("failed to serialize snapshot: {e}")))?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"INSERT INTO chat_history (key, value, updated_at)
               VALUES (?, ?, ?)
               ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"#,
        )
        .bind(HISTORY_KEY)
        .bind(&value)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| HistoryError::Write(e.to_string()))?;

        Ok(())
    }
}
