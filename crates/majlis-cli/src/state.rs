//! Application state wiring the session store together.
//!
//! The session store is generic over the history and assistant ports;
//! AppState pins it to the concrete infra implementations and constructs
//! it exactly once -- "one logical session per running client" holds by
//! construction, not via a hidden global.

use std::path::PathBuf;
use std::sync::Arc;

use majlis_core::session::SessionStore;
use majlis_infra::config::{load_global_config, resolve_data_dir};
use majlis_infra::http::assistant::HttpAssistantClient;
use majlis_infra::sqlite::history::SqliteHistoryStore;
use majlis_infra::sqlite::pool::DatabasePool;
use majlis_types::config::GlobalConfig;

/// Concrete type alias for the session store pinned to infra implementations.
pub type ConcreteSessionStore = SessionStore<SqliteHistoryStore, HttpAssistantClient>;

/// Shared application state for all CLI commands.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<ConcreteSessionStore>,
    pub config: GlobalConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: load config, connect to the
    /// database, hydrate the session store.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_global_config(&data_dir).await;

        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("majlis.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        let history = SqliteHistoryStore::new(db_pool);
        let assistant = HttpAssistantClient::from_config(&config)?;
        let session = Arc::new(SessionStore::new(history, assistant).await);

        tracing::debug!(
            data_dir = %data_dir.display(),
            endpoint = %config.api_endpoint,
            "application state initialized"
        );

        Ok(Self {
            session,
            config,
            data_dir,
        })
    }
}
