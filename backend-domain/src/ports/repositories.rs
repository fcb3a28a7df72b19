use async_trait::async_trait;

use crate::entities::{KillEvent, PlayerStats, Token};
use crate::error::StoreError;

/// Append-only kill ledger plus the statistics queries answered from it.
#[async_trait]
pub trait KillEventRepository: Send + Sync {
    async fn ensure_schema(&self) -> anyhow::Result<()>;

    /// Stores one event. The write timestamp is assigned by the store.
    async fn append(&self, event: &KillEvent) -> Result<(), StoreError>;

    /// Resolves `lookup_key` (a player name or id) to an identity and
    /// aggregates its kills and deaths. `Ok(None)` means no activity was
    /// recorded for the key within the scope.
    async fn query_stats(
        &self,
        lookup_key: &str,
        server_scope: Option<&str>,
    ) -> Result<Option<PlayerStats>, StoreError>;

    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn token_exists(&self, token: &str) -> Result<bool, StoreError>;
    async fn insert_token(&self, token: &Token) -> Result<(), StoreError>;
}
