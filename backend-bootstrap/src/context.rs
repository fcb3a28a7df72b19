use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use backend_application::{AppState, Metrics};
use backend_domain::ports::KillEventRepository;
use backend_infrastructure::{AppConfig, SqliteKillStore};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let db_config = config.to_db_config();

        let store = Arc::new(
            SqliteKillStore::open(&db_config)
                .with_context(|| format!("failed to open database {}", db_config.db_path))?,
        );
        store.ensure_schema().await?;
        info!(
            "kill ledger ready at {} (dedupe_by_match_id={})",
            db_config.db_path, db_config.dedupe_by_match_id
        );

        let state = AppState {
            config: runtime_config,
            kill_repo: store.clone(),
            token_repo: store,
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
