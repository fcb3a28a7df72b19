use tracing::info;
use uuid::Uuid;

use crate::{AppError, AppState};
use backend_domain::Token;

/// Registers an access token for `owner`. A fresh random token is generated
/// when none is supplied.
pub async fn provision_token(
    state: &AppState,
    owner: &str,
    token: Option<String>,
) -> Result<Token, AppError> {
    let owner = owner.trim();
    if owner.is_empty() {
        return Err(AppError::BadRequest("owner must not be empty".to_string()));
    }

    let token = match token.map(|value| value.trim().to_string()) {
        Some(value) if value.is_empty() => {
            return Err(AppError::BadRequest("token must not be empty".to_string()))
        }
        Some(value) => value,
        None => Uuid::new_v4().simple().to_string(),
    };

    let record = Token {
        token,
        owner: owner.to_string(),
    };
    state.token_repo.insert_token(&record).await?;
    info!("provisioned token for {}", record.owner);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::{state_with, MemoryLedger};
    use backend_domain::RuntimeConfig;

    #[tokio::test]
    async fn generated_token_is_stored_for_owner() {
        let ledger = Arc::new(MemoryLedger::default());
        let state = state_with(ledger.clone(), RuntimeConfig::default());

        let token = provision_token(&state, "sticks", None).await.expect("provision");
        assert_eq!(token.owner, "sticks");
        assert_eq!(token.token.len(), 32);
        assert!(state.token_repo.token_exists(&token.token).await.expect("lookup"));
    }

    #[tokio::test]
    async fn explicit_token_is_kept_verbatim() {
        let ledger = Arc::new(MemoryLedger::default());
        let state = state_with(ledger, RuntimeConfig::default());

        let token = provision_token(&state, "sticks", Some("secret-1".to_string()))
            .await
            .expect("provision");
        assert_eq!(token.token, "secret-1");

        let err = provision_token(&state, "other", Some("secret-1".to_string()))
            .await
            .expect_err("duplicate");
        assert!(matches!(err, AppError::Store(_)));
    }

    #[tokio::test]
    async fn blank_owner_or_token_is_rejected() {
        let ledger = Arc::new(MemoryLedger::default());
        let state = state_with(ledger, RuntimeConfig::default());

        assert!(matches!(
            provision_token(&state, "  ", None).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            provision_token(&state, "sticks", Some(" ".to_string())).await,
            Err(AppError::BadRequest(_))
        ));
    }
}
