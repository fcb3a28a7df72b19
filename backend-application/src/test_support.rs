// In-memory ledger used by application tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use backend_domain::ports::{KillEventRepository, TokenRepository};
use backend_domain::{tally_events, KillEvent, PlayerStats, RuntimeConfig, StoreError, Token};

use crate::{AppState, Metrics};

#[derive(Default)]
pub struct MemoryLedger {
    pub events: Mutex<Vec<KillEvent>>,
    pub tokens: Mutex<Vec<Token>>,
    pub token_lookups: AtomicUsize,
    pub fail_writes: AtomicBool,
}

#[async_trait]
impl KillEventRepository for MemoryLedger {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn append(&self, event: &KillEvent) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailed("disk full".to_string()));
        }
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn query_stats(
        &self,
        lookup_key: &str,
        server_scope: Option<&str>,
    ) -> Result<Option<PlayerStats>, StoreError> {
        let events = self.events.lock().unwrap();
        Ok(tally_events(events.iter(), lookup_key, server_scope))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[async_trait]
impl TokenRepository for MemoryLedger {
    async fn token_exists(&self, token: &str) -> Result<bool, StoreError> {
        self.token_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.tokens.lock().unwrap().iter().any(|t| t.token == token))
    }

    async fn insert_token(&self, token: &Token) -> Result<(), StoreError> {
        let mut tokens = self.tokens.lock().unwrap();
        if tokens.iter().any(|t| t.token == token.token) {
            return Err(StoreError::WriteFailed("duplicate token".to_string()));
        }
        tokens.push(token.clone());
        Ok(())
    }
}

pub fn state_with(ledger: Arc<MemoryLedger>, config: RuntimeConfig) -> AppState {
    AppState {
        config,
        kill_repo: ledger.clone(),
        token_repo: ledger,
        metrics: Arc::new(Metrics::default()),
    }
}
