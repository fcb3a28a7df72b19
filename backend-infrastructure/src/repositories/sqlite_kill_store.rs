use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use backend_domain::{
    assemble_player_stats, DbConfig, KillEvent, KillEventRepository, PlayerIdentity, PlayerStats,
    StoreError, Token, TokenRepository,
};

use super::kill_schema::*;

pub const IN_MEMORY_PATH: &str = ":memory:";

/// Kill ledger and token table in one SQLite database.
///
/// Every read and write goes through the single connection behind `conn`, so
/// the mutex is the only serialization point for the whole store. Work runs on
/// the blocking pool to keep SQLite I/O off the async workers.
#[derive(Clone)]
pub struct SqliteKillStore {
    conn: Arc<Mutex<Connection>>,
    dedupe_by_match_id: bool,
}

impl SqliteKillStore {
    pub fn open(config: &DbConfig) -> Result<Self> {
        let conn = if config.db_path == IN_MEMORY_PATH {
            Connection::open_in_memory().context("failed to open in-memory sqlite database")?
        } else {
            let conn = Connection::open(&config.db_path).with_context(|| {
                format!("failed to open sqlite database at {}", config.db_path)
            })?;
            conn.execute_batch("PRAGMA journal_mode = WAL;")
                .context("failed to enable WAL journal")?;
            conn
        };
        conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))
            .context("failed to set sqlite busy timeout")?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            dedupe_by_match_id: config.dedupe_by_match_id,
        })
    }

    pub fn in_memory(dedupe_by_match_id: bool) -> Result<Self> {
        Self::open(&DbConfig {
            db_path: IN_MEMORY_PATH.to_string(),
            dedupe_by_match_id,
            busy_timeout_ms: 0,
        })
    }

    async fn run_blocking<T, F>(&self, on_failure: fn(String) -> StoreError, work: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| on_failure("sqlite connection lock poisoned".to_string()))?;
            work(&mut *guard).map_err(|err| on_failure(err.to_string()))
        })
        .await
        .map_err(|err| on_failure(format!("sqlite task failed: {}", err)))?
    }
}

fn create_schema(conn: &mut Connection, dedupe_by_match_id: bool) -> rusqlite::Result<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(CREATE_TOKENS_TABLE)?;
    tx.execute_batch(CREATE_KILL_DATA_TABLE)?;
    for index in CREATE_KILL_DATA_INDEXES {
        tx.execute_batch(index)?;
    }
    if dedupe_by_match_id {
        tx.execute_batch(CREATE_MATCH_ID_UNIQUE_INDEX)?;
    } else {
        tx.execute_batch(DROP_MATCH_ID_UNIQUE_INDEX)?;
    }
    tx.commit()
}

fn insert_kill_event(conn: &mut Connection, event: &KillEvent) -> rusqlite::Result<()> {
    let scope = event.server_scope();
    let attacker = &event.attacker;
    let victim = &event.victim;

    let tx = conn.transaction()?;
    tx.execute(
        INSERT_KILL_EVENT,
        params![
            event.match_id,
            event.server_id,
            event.server_name,
            scope.as_str(),
            event.game_mode,
            event.game_time,
            event.map,
            attacker.name,
            attacker.id,
            attacker.current_weapon,
            attacker.weapon_loadout[0],
            attacker.weapon_loadout[1],
            attacker.weapon_loadout[2],
            attacker.offhand_loadout[0],
            attacker.offhand_loadout[1],
            attacker.titan,
            attacker.position.x,
            attacker.position.y,
            attacker.position.z,
            victim.name,
            victim.id,
            victim.current_weapon,
            victim.weapon_loadout[0],
            victim.weapon_loadout[1],
            victim.weapon_loadout[2],
            victim.offhand_loadout[0],
            victim.offhand_loadout[1],
            victim.titan,
            victim.position.x,
            victim.position.y,
            victim.position.z,
            event.cause_of_death,
            event.distance,
        ],
    )?;
    tx.commit()
}

fn select_identity(
    conn: &Connection,
    sql: &str,
    scope: Option<&str>,
    lookup_key: &str,
) -> rusqlite::Result<Option<PlayerIdentity>> {
    conn.query_row(sql, params![scope, lookup_key], |row| {
        Ok(PlayerIdentity {
            name: row.get(0)?,
            id: row.get(1)?,
        })
    })
    .optional()
}

fn count_rows(conn: &Connection, sql: &str, scope: Option<&str>, lookup_key: &str) -> rusqlite::Result<u64> {
    let count: i64 = conn.query_row(sql, params![scope, lookup_key], |row| row.get(0))?;
    Ok(u64::try_from(count).unwrap_or_default())
}

fn select_player_stats(
    conn: &mut Connection,
    lookup_key: &str,
    scope: Option<&str>,
) -> rusqlite::Result<Option<PlayerStats>> {
    // One read transaction so the lookups and counts see the same rows.
    let tx = conn.transaction()?;
    let attacker = select_identity(&tx, SELECT_ATTACKER_CANDIDATE, scope, lookup_key)?;
    let victim = select_identity(&tx, SELECT_VICTIM_CANDIDATE, scope, lookup_key)?;
    if attacker.is_none() && victim.is_none() {
        return Ok(None);
    }
    let kills = count_rows(&tx, COUNT_KILLS, scope, lookup_key)?;
    let deaths = count_rows(&tx, COUNT_DEATHS, scope, lookup_key)?;
    tx.commit()?;

    Ok(assemble_player_stats(attacker, victim, kills, deaths))
}

#[async_trait]
impl KillEventRepository for SqliteKillStore {
    async fn ensure_schema(&self) -> Result<()> {
        let dedupe = self.dedupe_by_match_id;
        self.run_blocking(StoreError::WriteFailed, move |conn| create_schema(conn, dedupe))
            .await
            .context("failed to ensure kill ledger schema")
    }

    async fn append(&self, event: &KillEvent) -> Result<(), StoreError> {
        let event = event.clone();
        self.run_blocking(StoreError::WriteFailed, move |conn| insert_kill_event(conn, &event))
            .await
    }

    async fn query_stats(
        &self,
        lookup_key: &str,
        server_scope: Option<&str>,
    ) -> Result<Option<PlayerStats>, StoreError> {
        let lookup_key = lookup_key.to_string();
        let scope = server_scope.map(str::to_string);
        self.run_blocking(StoreError::ReadFailed, move |conn| {
            select_player_stats(conn, &lookup_key, scope.as_deref())
        })
        .await
    }

    async fn ping(&self) -> Result<()> {
        self.run_blocking(StoreError::ReadFailed, |conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
        })
        .await?;
        Ok(())
    }
}

#[async_trait]
impl TokenRepository for SqliteKillStore {
    async fn token_exists(&self, token: &str) -> Result<bool, StoreError> {
        let token = token.to_string();
        self.run_blocking(StoreError::ReadFailed, move |conn| {
            conn.query_row(SELECT_TOKEN, params![token], |_| Ok(()))
                .optional()
                .map(|found| found.is_some())
        })
        .await
    }

    async fn insert_token(&self, token: &Token) -> Result<(), StoreError> {
        let token = token.clone();
        self.run_blocking(StoreError::WriteFailed, move |conn| {
            conn.execute(INSERT_TOKEN, params![token.token, token.owner])
                .map(|_| ())
        })
        .await
    }
}
