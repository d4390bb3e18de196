use thiserror::Error;

/// Errors that can occur during canvas initialization and synchronization.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("snapshot length mismatch: expected {expected} bytes, got {actual}")]
    SnapshotLength { expected: usize, actual: usize },

    #[error("wire color {0} is out of range (valid: 0..=32)")]
    InvalidWireColor(u8),

    #[error("snapshot fetch failed: {0}")]
    SnapshotFetchFailed(String),

    #[error("live stream connection failed: {0}")]
    StreamConnectFailed(String),
}
