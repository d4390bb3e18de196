use thiserror::Error;
use voxcanvas_core::error::CanvasError;

/// Errors on the wire boundary. Malformed messages and bad colors are
/// isolated failures: the offending message is dropped and the stream
/// keeps going. A rejected edit is reported to the caller and the edit is
/// never applied locally.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed stream message: {0}")]
    MalformedMessage(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidCell(#[from] CanvasError),

    #[error("cell ({x}, {y}, {z}) is outside the canvas")]
    OutOfBounds { x: i32, y: i32, z: i32 },

    #[error("edit rejected by server: status {status}: {body}")]
    EditRejected { status: u16, body: String },
}
