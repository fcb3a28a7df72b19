use std::io::Read;

use anyhow::Result;
use axum::http::{header, HeaderMap};
use flate2::read::GzDecoder;

use backend_application::queries::token_queries;
use backend_application::AppState;
use backend_domain::{KillEvent, KillEventPayload};

use crate::error::HttpError;

const TOKEN_HEADER: &str = "token";

/// Rejects the request unless it carries a registered token or auth is
/// disabled for this process.
pub async fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), HttpError> {
    let token = extract_token(headers);
    token_queries::authenticate(state, token.as_deref()).await?;
    Ok(())
}

/// `Token: <value>` wins; `Authorization: Bearer <value>` is the fallback.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(TOKEN_HEADER).and_then(|v| v.to_str().ok()) {
        let token = value.trim();
        if !token.is_empty() {
            return Some(token.to_string());
        }
    }
    extract_bearer(headers)
}

pub fn parse_kill_event(headers: &HeaderMap, body: &[u8]) -> Result<KillEvent> {
    let content = maybe_gunzip(headers, body)?;
    let payload: KillEventPayload = serde_json::from_str(&content)?;
    Ok(payload.into())
}

fn maybe_gunzip(headers: &HeaderMap, body: &[u8]) -> Result<String> {
    if let Some(encoding) = headers.get(header::CONTENT_ENCODING) {
        if encoding.to_str().unwrap_or("") == "gzip" {
            let mut decoder = GzDecoder::new(body);
            let mut out = String::new();
            decoder.read_to_string(&mut out)?;
            return Ok(out);
        }
    }
    Ok(String::from_utf8(body.to_vec())?)
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?.trim();
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
