//! World geometry and scheduling configuration. One `WorldConfig` is built
//! per canvas at load time and shared by every subsystem.

use crate::types::{CellCoord, ChunkCoord};

/// Default world side length in cells.
pub const DEFAULT_WORLD_SIZE: i32 = 128;

/// Default chunk side length in cells.
pub const DEFAULT_CHUNK_SIZE: i32 = 16;

/// Default per-tick chunk rebuild budget.
pub const DEFAULT_REBUILD_BUDGET: usize = 64;

/// Immutable world parameters, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldConfig {
    /// World side length N in cells.
    pub world_size: i32,
    /// Chunk side length C in cells. Must evenly divide `world_size`.
    pub chunk_size: i32,
    /// Maximum chunk rebuilds per scheduler tick.
    pub rebuild_budget: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORLD_SIZE, DEFAULT_CHUNK_SIZE, DEFAULT_REBUILD_BUDGET)
    }
}

impl WorldConfig {
    /// Build a config. Invalid geometry is a programming error, not a
    /// recoverable failure: panics if sizes are non-positive, the chunk
    /// size does not divide the world size, or the budget is zero.
    pub fn new(world_size: i32, chunk_size: i32, rebuild_budget: usize) -> Self {
        assert!(world_size > 0, "world_size must be positive, got {world_size}");
        assert!(chunk_size > 0, "chunk_size must be positive, got {chunk_size}");
        assert!(
            world_size % chunk_size == 0,
            "chunk_size {chunk_size} must evenly divide world_size {world_size}"
        );
        assert!(rebuild_budget > 0, "rebuild_budget must be nonzero");
        Self {
            world_size,
            chunk_size,
            rebuild_budget,
        }
    }

    /// Number of chunks along each axis (N / C).
    pub fn chunks_per_axis(&self) -> i32 {
        self.world_size / self.chunk_size
    }

    /// Total number of chunks in the world.
    pub fn chunk_count(&self) -> usize {
        let n = self.chunks_per_axis() as usize;
        n * n * n
    }

    /// Total number of cells in the world (N³), also the snapshot length.
    pub fn cell_count(&self) -> usize {
        let n = self.world_size as usize;
        n * n * n
    }

    /// Half the world side length; the centered coordinate system spans
    /// [-half_extent, half_extent) per axis.
    pub fn half_extent(&self) -> i32 {
        self.world_size / 2
    }

    /// Whether an absolute cell coordinate lies inside the world.
    pub fn cell_in_bounds(&self, cell: CellCoord) -> bool {
        cell.cmpge(CellCoord::ZERO).all() && cell.cmplt(CellCoord::splat(self.world_size)).all()
    }

    /// Whether a chunk coordinate lies inside the chunk grid.
    pub fn chunk_in_bounds(&self, chunk: ChunkCoord) -> bool {
        chunk.cmpge(ChunkCoord::ZERO).all()
            && chunk.cmplt(ChunkCoord::splat(self.chunks_per_axis())).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;

    #[test]
    fn test_default_config() {
        let cfg = WorldConfig::default();
        assert_eq!(cfg.world_size, 128);
        assert_eq!(cfg.chunk_size, 16);
        assert_eq!(cfg.rebuild_budget, 64);
        assert_eq!(cfg.chunks_per_axis(), 8);
        assert_eq!(cfg.chunk_count(), 512);
        assert_eq!(cfg.cell_count(), 128 * 128 * 128);
        assert_eq!(cfg.half_extent(), 64);
    }

    #[test]
    #[should_panic(expected = "evenly divide")]
    fn test_chunk_size_must_divide() {
        WorldConfig::new(100, 16, 64);
    }

    #[test]
    #[should_panic(expected = "rebuild_budget")]
    fn test_zero_budget_rejected() {
        WorldConfig::new(128, 16, 0);
    }

    #[test]
    fn test_bounds_checks() {
        let cfg = WorldConfig::new(32, 8, 4);
        assert!(cfg.cell_in_bounds(IVec3::ZERO));
        assert!(cfg.cell_in_bounds(IVec3::new(31, 31, 31)));
        assert!(!cfg.cell_in_bounds(IVec3::new(32, 0, 0)));
        assert!(!cfg.cell_in_bounds(IVec3::new(0, -1, 0)));

        assert!(cfg.chunk_in_bounds(IVec3::new(3, 3, 3)));
        assert!(!cfg.chunk_in_bounds(IVec3::new(4, 0, 0)));
    }
}
