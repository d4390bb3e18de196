//! Initial snapshot decoding. The server ships the whole canvas as a flat
//! byte buffer of length N³, index = x·N² + y·N + z, one wire cell value
//! per byte. The world is not renderable until this decodes completely.

use voxcanvas_core::config::WorldConfig;
use voxcanvas_core::error::CanvasError;
use voxcanvas_core::palette::decode_wire;
use voxcanvas_core::types::Cell;

use crate::grid::GridStore;

/// Decode a full snapshot into a grid store. A buffer of the wrong length
/// or a byte outside the wire range rejects the whole snapshot; a world is
/// never built from partial data.
pub fn decode_snapshot(cfg: &WorldConfig, bytes: &[u8]) -> Result<GridStore, CanvasError> {
    let expected = cfg.cell_count();
    if bytes.len() != expected {
        return Err(CanvasError::SnapshotLength {
            expected,
            actual: bytes.len(),
        });
    }

    let cells = bytes
        .iter()
        .map(|&b| decode_wire(b))
        .collect::<Result<Vec<Cell>, _>>()?;

    log::info!(
        "snapshot decoded: {} cells, {} filled",
        expected,
        cells.iter().filter(|c| c.is_filled()).count()
    );
    Ok(GridStore::from_cells(cfg, cells))
}
