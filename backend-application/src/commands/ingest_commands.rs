use tracing::{debug, error};

use crate::{AppError, AppState};
use backend_domain::KillEvent;

/// Appends one kill to the ledger. The event is stored as received; the
/// store assigns the timestamp and server scope.
pub async fn record_kill_event(state: &AppState, event: KillEvent) -> Result<(), AppError> {
    if let Err(err) = state.kill_repo.append(&event).await {
        state.metrics.record_ingest_error();
        error!("failed to store kill event (match {}): {}", event.match_id, err);
        return Err(err.into());
    }

    debug!(
        "stored kill {} -> {} on {}",
        event.attacker.name,
        event.victim.name,
        event.server_scope().as_str()
    );
    state.metrics.record_ingest();
    Ok(())
}
