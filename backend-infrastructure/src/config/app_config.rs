use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{DbConfig, RuntimeConfig};

pub const CONFIG_ENV: &str = "KILLSTATS_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config.toml";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub db_path: String,
    pub auth_disabled: bool,
    pub public_stats: bool,
    pub dedupe_by_match_id: bool,
    pub busy_timeout_ms: u64,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            db_path: "killstats.db".to_string(),
            auth_disabled: false,
            public_stats: false,
            dedupe_by_match_id: false,
            busy_timeout_ms: 5000,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&path)).await
    }

    pub async fn load_from(file_path: &Path) -> Result<Self> {
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            toml::from_str::<AppConfig>(&content)?
        } else {
            warn!("{} not found, using defaults", file_path.display());
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        self.bind_addr = self.bind_addr.trim().to_string();
        self.db_path = self.db_path.trim().to_string();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        if self.db_path == ":memory:" {
            return;
        }
        self.db_path = resolve_path(base, &self.db_path);
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.db_path.trim().is_empty() {
            return Err(anyhow!("db_path must not be empty"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        Ok(())
    }

    /// Applies the legacy `-p` flag: listen on every interface at `port`.
    pub fn set_port(&mut self, port: u16) {
        self.bind_addr = format!("0.0.0.0:{}", port);
    }

    /// Command-line flags win over both the file and the environment.
    pub fn apply_cli_overrides(&mut self, test_mode: bool, port: Option<u16>, db_path: Option<String>) {
        if test_mode {
            self.auth_disabled = true;
        }
        if let Some(port) = port {
            self.set_port(port);
        }
        if let Some(db_path) = db_path {
            self.db_path = db_path;
        }
        self.normalize();
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            auth_disabled: self.auth_disabled,
            public_stats: self.public_stats,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    pub fn to_db_config(&self) -> DbConfig {
        DbConfig {
            db_path: self.db_path.clone(),
            dedupe_by_match_id: self.dedupe_by_match_id,
            busy_timeout_ms: self.busy_timeout_ms,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("KILLSTATS_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("KILLSTATS_DB_PATH") {
            self.db_path = value;
        }
        if let Ok(value) = env::var("KILLSTATS_AUTH_DISABLED") {
            self.auth_disabled = value.parse().unwrap_or(self.auth_disabled);
        }
        if let Ok(value) = env::var("KILLSTATS_PUBLIC_STATS") {
            self.public_stats = value.parse().unwrap_or(self.public_stats);
        }
        if let Ok(value) = env::var("KILLSTATS_DEDUPE_BY_MATCH_ID") {
            self.dedupe_by_match_id = value.parse().unwrap_or(self.dedupe_by_match_id);
        }
        if let Ok(value) = env::var("KILLSTATS_BUSY_TIMEOUT_MS") {
            self.busy_timeout_ms = value.parse().unwrap_or(self.busy_timeout_ms);
        }
        if let Ok(value) = env::var("KILLSTATS_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("KILLSTATS_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
