use axum::routing::{get, post};
use axum::Router;

use backend_application::AppState;

use crate::handlers::{auth_handlers, ingest_handlers, ops_handlers, player_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/auth", get(auth_handlers::check_token))
        .route("/data", post(ingest_handlers::ingest_kill))
        .route("/players/:lookup_key", get(player_handlers::get_player_stats))
        .route("/ops/health/live", get(ops_handlers::health_live))
        .route("/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use backend_application::Metrics;
    use async_trait::async_trait;
    use backend_domain::ports::{KillEventRepository, TokenRepository};
    use backend_domain::{KillEvent, PlayerStats, RuntimeConfig, StoreError, Token};
    use backend_infrastructure::SqliteKillStore;

    const TOKEN: &str = "test-token";

    async fn make_state(config: RuntimeConfig) -> AppState {
        let store = Arc::new(SqliteKillStore::in_memory(false).expect("open store"));
        store.ensure_schema().await.expect("schema");
        store
            .insert_token(&Token {
                token: TOKEN.to_string(),
                owner: "sticks".to_string(),
            })
            .await
            .expect("insert token");
        AppState {
            config,
            kill_repo: store.clone(),
            token_repo: store,
            metrics: Arc::new(Metrics::default()),
        }
    }

    /// Ledger whose storage is gone: every call fails.
    struct UnreachableLedger;

    #[async_trait]
    impl KillEventRepository for UnreachableLedger {
        async fn ensure_schema(&self) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("database unreachable"))
        }

        async fn append(&self, _event: &KillEvent) -> Result<(), StoreError> {
            Err(StoreError::WriteFailed("database unreachable".to_string()))
        }

        async fn query_stats(
            &self,
            _lookup_key: &str,
            _server_scope: Option<&str>,
        ) -> Result<Option<PlayerStats>, StoreError> {
            Err(StoreError::ReadFailed("database unreachable".to_string()))
        }

        async fn ping(&self) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("database unreachable"))
        }
    }

    #[async_trait]
    impl TokenRepository for UnreachableLedger {
        async fn token_exists(&self, _token: &str) -> Result<bool, StoreError> {
            Err(StoreError::ReadFailed("database unreachable".to_string()))
        }

        async fn insert_token(&self, _token: &Token) -> Result<(), StoreError> {
            Err(StoreError::WriteFailed("database unreachable".to_string()))
        }
    }

    fn post_kill(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/data")
            .header("token", TOKEN)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn get_with_token(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header("authorization", format!("Bearer {}", TOKEN))
            .body(Body::empty())
            .expect("request")
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn auth_route_checks_the_token() {
        let app = build_router(make_state(RuntimeConfig::default()).await);

        let ok = app.clone().oneshot(get_with_token("/auth")).await.expect("call");
        assert_eq!(ok.status(), StatusCode::OK);

        let rejected = app
            .oneshot(
                Request::builder()
                    .uri("/auth")
                    .header("token", "nope")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("call");
        assert_eq!(rejected.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(rejected).await["message"], "invalid token");
    }

    #[tokio::test]
    async fn ingested_kill_shows_up_in_player_stats() {
        let app = build_router(make_state(RuntimeConfig::default()).await);

        let body = r#"{"match_id":"m1","server_id":"S1","attacker_name":"A","attacker_id":"1","victim_name":"B","victim_id":"2"}"#;
        let response = app.clone().oneshot(post_kill(body)).await.expect("call");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(get_with_token("/players/A?server_id=S1"))
            .await
            .expect("call");
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["name"], "A");
        assert_eq!(json["uid"], "1");
        assert_eq!(json["kills"], 1);
        assert_eq!(json["deaths"], 0);
        assert_eq!(json["kd"], 1.0);

        let response = app
            .clone()
            .oneshot(get_with_token("/players/2?server_id="))
            .await
            .expect("call");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["deaths"], 1);

        let response = app
            .oneshot(get_with_token("/players/A?server_id=S2"))
            .await
            .expect("call");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn ingest_rejects_missing_token_and_bad_json() {
        let app = build_router(make_state(RuntimeConfig::default()).await);

        let unauthenticated = Request::builder()
            .method("POST")
            .uri("/data")
            .body(Body::from("{}"))
            .expect("request");
        let response = app.clone().oneshot(unauthenticated).await.expect("call");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app.oneshot(post_kill("{broken")).await.expect("call");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn public_stats_skip_the_token_check() {
        let config = RuntimeConfig {
            public_stats: true,
            ..RuntimeConfig::default()
        };
        let app = build_router(make_state(config).await);

        let request = Request::builder()
            .uri("/players/nobody")
            .body(Body::empty())
            .expect("request");
        let response = app.oneshot(request).await.expect("call");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_mode_accepts_requests_without_token() {
        let config = RuntimeConfig {
            auth_disabled: true,
            ..RuntimeConfig::default()
        };
        let app = build_router(make_state(config).await);

        let request = Request::builder()
            .method("POST")
            .uri("/data")
            .body(Body::from(r#"{"attacker_name":"A","victim_name":"B"}"#))
            .expect("request");
        let response = app.oneshot(request).await.expect("call");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_and_metrics_routes() {
        let app = build_router(make_state(RuntimeConfig::default()).await);

        let live = Request::builder()
            .uri("/ops/health/live")
            .body(Body::empty())
            .expect("request");
        assert_eq!(app.clone().oneshot(live).await.expect("call").status(), StatusCode::OK);

        let ready = Request::builder()
            .uri("/ops/health/ready")
            .body(Body::empty())
            .expect("request");
        assert_eq!(app.clone().oneshot(ready).await.expect("call").status(), StatusCode::OK);

        let metrics = app
            .oneshot(get_with_token("/ops/metrics/prometheus"))
            .await
            .expect("call");
        assert_eq!(metrics.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(metrics.into_body(), usize::MAX)
            .await
            .expect("read body");
        let text = String::from_utf8(bytes.to_vec()).expect("utf8");
        assert!(text.contains("killstats_ingest_events_total 0"));
    }

    #[tokio::test]
    async fn failed_write_is_a_500_without_storage_details() {
        // No schema: the insert fails inside SQLite.
        let store = Arc::new(SqliteKillStore::in_memory(false).expect("open store"));
        let state = AppState {
            config: RuntimeConfig {
                auth_disabled: true,
                ..RuntimeConfig::default()
            },
            kill_repo: store.clone(),
            token_repo: store,
            metrics: Arc::new(Metrics::default()),
        };
        let app = build_router(state);

        let request = Request::builder()
            .method("POST")
            .uri("/data")
            .body(Body::from(r#"{"attacker_name":"A","victim_name":"B","server_id":"S1"}"#))
            .expect("request");
        let response = app.oneshot(request).await.expect("call");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["message"], "database error");
    }

    #[tokio::test]
    async fn readiness_reports_503_when_ping_fails() {
        let ledger = Arc::new(UnreachableLedger);
        let state = AppState {
            config: RuntimeConfig::default(),
            kill_repo: ledger.clone(),
            token_repo: ledger,
            metrics: Arc::new(Metrics::default()),
        };
        let app = build_router(state);

        let ready = Request::builder()
            .uri("/ops/health/ready")
            .body(Body::empty())
            .expect("request");
        let response = app.clone().oneshot(ready).await.expect("call");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let live = Request::builder()
            .uri("/ops/health/live")
            .body(Body::empty())
            .expect("request");
        assert_eq!(app.oneshot(live).await.expect("call").status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn token_lookup_failure_is_a_500_not_a_401() {
        let ledger = Arc::new(UnreachableLedger);
        let state = AppState {
            config: RuntimeConfig::default(),
            kill_repo: ledger.clone(),
            token_repo: ledger,
            metrics: Arc::new(Metrics::default()),
        };
        let app = build_router(state);

        let response = app.oneshot(get_with_token("/auth")).await.expect("call");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
