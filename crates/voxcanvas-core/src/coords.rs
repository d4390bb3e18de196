//! Coordinate conversions between the three spaces the engine deals in:
//! absolute grid coordinates in [0, N), chunk/local decomposition, and the
//! renderer's centered coordinates in [-N/2, N/2).

use glam::IVec3;

use crate::config::WorldConfig;
use crate::types::{CellCoord, ChunkCoord};

/// Chunk owning an absolute cell coordinate.
pub fn cell_to_chunk(cfg: &WorldConfig, cell: CellCoord) -> ChunkCoord {
    cell / cfg.chunk_size
}

/// Position of a cell within its owning chunk, each axis in [0, C).
pub fn cell_to_local(cfg: &WorldConfig, cell: CellCoord) -> IVec3 {
    cell % cfg.chunk_size
}

/// Absolute grid coordinate of a chunk's minimum corner.
pub fn chunk_origin(cfg: &WorldConfig, chunk: ChunkCoord) -> CellCoord {
    chunk * cfg.chunk_size
}

/// Centered coordinate of an absolute grid coordinate. Lossless inverse of
/// [`centered_to_grid`].
pub fn grid_to_centered(cfg: &WorldConfig, cell: CellCoord) -> IVec3 {
    cell - IVec3::splat(cfg.half_extent())
}

/// Absolute grid coordinate of a centered coordinate. The renderer places
/// cell centers at half-integer positions; integer centered coordinates
/// map one-to-one onto grid cells by adding N/2.
pub fn centered_to_grid(cfg: &WorldConfig, centered: IVec3) -> CellCoord {
    centered + IVec3::splat(cfg.half_extent())
}

/// Linear raster index of a chunk coordinate (x-major, then y, then z).
/// The scheduler cursor walks the chunk space in this order.
pub fn chunk_index(cfg: &WorldConfig, chunk: ChunkCoord) -> usize {
    debug_assert!(cfg.chunk_in_bounds(chunk), "chunk {chunk} out of bounds");
    let n = cfg.chunks_per_axis() as usize;
    (chunk.x as usize) * n * n + (chunk.y as usize) * n + chunk.z as usize
}

/// Inverse of [`chunk_index`].
pub fn index_to_chunk(cfg: &WorldConfig, index: usize) -> ChunkCoord {
    let n = cfg.chunks_per_axis() as usize;
    debug_assert!(index < n * n * n, "chunk index {index} out of range");
    IVec3::new(
        (index / (n * n)) as i32,
        ((index / n) % n) as i32,
        (index % n) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> WorldConfig {
        WorldConfig::new(128, 16, 64)
    }

    #[test]
    fn test_cell_to_chunk() {
        let cfg = cfg();
        assert_eq!(cell_to_chunk(&cfg, IVec3::ZERO), IVec3::ZERO);
        assert_eq!(cell_to_chunk(&cfg, IVec3::new(15, 15, 15)), IVec3::ZERO);
        assert_eq!(cell_to_chunk(&cfg, IVec3::new(16, 0, 0)), IVec3::new(1, 0, 0));
        assert_eq!(cell_to_chunk(&cfg, IVec3::new(127, 127, 127)), IVec3::new(7, 7, 7));
    }

    #[test]
    fn test_chunk_local_roundtrip() {
        let cfg = cfg();
        let cell = IVec3::new(37, 120, 9);
        let chunk = cell_to_chunk(&cfg, cell);
        let local = cell_to_local(&cfg, cell);
        assert_eq!(chunk_origin(&cfg, chunk) + local, cell);
    }

    #[test]
    fn test_centered_roundtrip() {
        let cfg = cfg();
        for cell in [IVec3::ZERO, IVec3::new(127, 0, 64), IVec3::new(1, 2, 3)] {
            let centered = grid_to_centered(&cfg, cell);
            assert_eq!(centered_to_grid(&cfg, centered), cell);
        }
        // Grid origin sits at the centered minimum corner.
        assert_eq!(grid_to_centered(&cfg, IVec3::ZERO), IVec3::splat(-64));
    }

    #[test]
    fn test_chunk_index_raster_order() {
        let cfg = cfg();
        assert_eq!(chunk_index(&cfg, IVec3::ZERO), 0);
        assert_eq!(chunk_index(&cfg, IVec3::new(0, 0, 1)), 1);
        assert_eq!(chunk_index(&cfg, IVec3::new(0, 1, 0)), 8);
        assert_eq!(chunk_index(&cfg, IVec3::new(1, 0, 0)), 64);
        for idx in [0usize, 1, 63, 64, 200, 511] {
            assert_eq!(chunk_index(&cfg, index_to_chunk(&cfg, idx)), idx);
        }
    }
}
