//! Wire protocol for the live canvas: JSON stream messages pushed by the
//! server, and the REST paths for the snapshot fetch and draw submission.

use serde::Deserialize;
use voxcanvas_core::config::WorldConfig;
use voxcanvas_core::palette::{decode_wire, PaletteSelection};
use voxcanvas_core::types::{Cell, CellCoord};

use crate::error::ProtocolError;

/// Message pushed over the live stream. Tagged by `action`; the server
/// currently only pushes cell updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum StreamMessage {
    Update { x: i32, y: i32, z: i32, color: u8 },
}

/// A validated remote mutation, ready for the world's queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteUpdate {
    pub cell: CellCoord,
    pub value: Cell,
}

/// Decode one stream message into a validated update. Any failure here
/// means the message is dropped and reported; the rest of the stream is
/// unaffected.
pub fn decode_update(cfg: &WorldConfig, text: &str) -> Result<RemoteUpdate, ProtocolError> {
    let StreamMessage::Update { x, y, z, color } = serde_json::from_str(text)?;
    let cell = CellCoord::new(x, y, z);
    if !cfg.cell_in_bounds(cell) {
        return Err(ProtocolError::OutOfBounds { x, y, z });
    }
    let value = decode_wire(color)?;
    Ok(RemoteUpdate { cell, value })
}

/// Path of the full-snapshot endpoint for a canvas.
pub fn snapshot_path(canvas: &str) -> String {
    format!("/api/place/{canvas}/all")
}

/// Path of the live stream websocket for a canvas.
pub fn stream_path(canvas: &str) -> String {
    format!("/api/place/{canvas}/ws/")
}

/// Path of the draw endpoint for one edit. The wire value encodes the
/// selection: 0 erases, 1..=32 place a palette color.
pub fn draw_path(canvas: &str, cell: CellCoord, selection: PaletteSelection) -> String {
    format!(
        "/api/place/{canvas}/draw/{}/{}/{}/{}/client",
        cell.x,
        cell.y,
        cell.z,
        selection.to_wire()
    )
}
