//! Budgeted incremental rebuild scheduling. Rebuild cost is amortized
//! across frames: each tick performs at most `rebuild_budget` chunk
//! rebuilds and walks at most one full sweep of the chunk space. The
//! cursor persists between ticks so later chunks are never starved.

use voxcanvas_core::config::WorldConfig;
use voxcanvas_core::coords::index_to_chunk;
use voxcanvas_mesh::GridView;

use crate::registry::ChunkRegistry;

/// Result of one scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickStats {
    /// Chunk meshes rebuilt this tick.
    pub rebuilt: usize,
    /// Chunk slots the cursor advanced over (clean slots included).
    pub visited: usize,
}

/// Persistent raster-order cursor over the chunk space.
pub struct RebuildScheduler {
    cursor: usize,
}

impl Default for RebuildScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RebuildScheduler {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Advance the cursor, rebuilding dirty chunks as they are passed.
    /// Stops after `rebuild_budget` rebuilds or one full sweep, whichever
    /// comes first; skipping a clean chunk consumes sweep allowance but
    /// not rebuild budget.
    pub fn tick(
        &mut self,
        cfg: &WorldConfig,
        grid: &impl GridView,
        registry: &mut ChunkRegistry,
    ) -> TickStats {
        let total = cfg.chunk_count();
        let mut stats = TickStats::default();

        while stats.rebuilt < cfg.rebuild_budget && stats.visited < total {
            let chunk = index_to_chunk(cfg, self.cursor);
            if registry.is_dirty(cfg, chunk) {
                registry.rebuild(cfg, grid, chunk);
                stats.rebuilt += 1;
            }
            self.cursor = (self.cursor + 1) % total;
            stats.visited += 1;
        }

        if stats.rebuilt > 0 {
            log::debug!(
                "rebuild tick: {} rebuilt, {} visited, {} still dirty",
                stats.rebuilt,
                stats.visited,
                registry.dirty_count()
            );
        }
        stats
    }
}
