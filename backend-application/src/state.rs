use std::sync::Arc;

use backend_domain::ports::{KillEventRepository, TokenRepository};
use backend_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub kill_repo: Arc<dyn KillEventRepository>,
    pub token_repo: Arc<dyn TokenRepository>,
    pub metrics: Arc<Metrics>,
}
