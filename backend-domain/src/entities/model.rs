// Runtime configuration handed to the application and storage layers

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub auth_disabled: bool,
    pub public_stats: bool,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            auth_disabled: false,
            public_stats: false,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub db_path: String,
    pub dedupe_by_match_id: bool,
    pub busy_timeout_ms: u64,
}
