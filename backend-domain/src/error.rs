use thiserror::Error;

/// Failures raised by the kill ledger storage.
///
/// "Not found" is not an error: statistics lookups return `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
}
