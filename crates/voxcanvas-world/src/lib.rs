//! The world aggregate: one `World` owns the grid store, the chunk
//! registry with its dirty flags, the rebuild scheduler, and the queue of
//! remote mutations awaiting the next frame tick. Everything that mutates
//! shared state funnels through this type from a single logical thread,
//! so mutations and rebuilds never interleave mid-operation.

pub mod grid;
pub mod placement;
pub mod registry;
pub mod scheduler;
pub mod snapshot;

use std::collections::VecDeque;

use glam::IVec3;
use voxcanvas_core::config::WorldConfig;
use voxcanvas_core::coords::{cell_to_chunk, cell_to_local};
use voxcanvas_core::error::CanvasError;
use voxcanvas_core::types::{Cell, CellCoord, ChunkCoord};
use voxcanvas_mesh::{ChunkBounds, ChunkMesh};

use grid::GridStore;
use registry::ChunkRegistry;
use scheduler::{RebuildScheduler, TickStats};

/// One cell mutation, local or remote; both paths apply identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    pub cell: CellCoord,
    pub value: Cell,
}

/// Report from one frame tick: queued mutations applied, then rebuild
/// work done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    pub applied: usize,
    pub rebuild: TickStats,
}

pub struct World {
    cfg: WorldConfig,
    grid: GridStore,
    registry: ChunkRegistry,
    scheduler: RebuildScheduler,
    /// Remote mutations in arrival order, drained at the top of each tick.
    pending: VecDeque<Mutation>,
}

impl World {
    /// Build a world from a complete server snapshot and mesh every chunk
    /// once, so the canvas is fully renderable before the first frame.
    pub fn from_snapshot(cfg: WorldConfig, bytes: &[u8]) -> Result<Self, CanvasError> {
        let grid = snapshot::decode_snapshot(&cfg, bytes)?;
        let mut world = Self {
            cfg,
            grid,
            registry: ChunkRegistry::new(&cfg),
            scheduler: RebuildScheduler::new(),
            pending: VecDeque::new(),
        };
        world.rebuild_all();
        log::info!(
            "world ready: {} chunks, {} with content",
            cfg.chunk_count(),
            world.registry.mesh_count()
        );
        Ok(world)
    }

    /// An all-empty world. Used by tests and the bench.
    pub fn empty(cfg: WorldConfig) -> Self {
        Self {
            grid: GridStore::empty(&cfg),
            registry: ChunkRegistry::new(&cfg),
            scheduler: RebuildScheduler::new(),
            pending: VecDeque::new(),
            cfg,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.cfg
    }

    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    pub fn mesh(&self, chunk: ChunkCoord) -> Option<&ChunkMesh> {
        self.registry.mesh(&self.cfg, chunk)
    }

    pub fn bounds(&self, chunk: ChunkCoord) -> ChunkBounds {
        ChunkBounds::of_chunk(&self.cfg, chunk)
    }

    pub fn is_dirty(&self, chunk: ChunkCoord) -> bool {
        self.registry.is_dirty(&self.cfg, chunk)
    }

    pub fn dirty_count(&self) -> usize {
        self.registry.dirty_count()
    }

    /// Chunks whose mesh was replaced since the last call; the render
    /// handoff drains this after each tick.
    pub fn take_changed(&mut self) -> Vec<ChunkCoord> {
        self.registry.take_changed()
    }

    /// Apply one mutation: write the grid, then mark every chunk whose
    /// rendered faces could have changed. That is the owning chunk plus,
    /// for each axis where the cell sits on a chunk boundary, the in-world
    /// neighbor chunk across that boundary.
    pub fn apply(&mut self, mutation: Mutation) {
        let Mutation { cell, value } = mutation;
        self.grid.set(cell, value);

        let chunk = cell_to_chunk(&self.cfg, cell);
        let local = cell_to_local(&self.cfg, cell);
        self.registry.mark_dirty(&self.cfg, chunk);

        // Both sides checked independently: with chunk_size 1 a cell sits
        // on both boundaries of every axis at once.
        for axis in 0..3 {
            if local[axis] == 0 {
                let mut neighbor = chunk;
                neighbor[axis] -= 1;
                if self.cfg.chunk_in_bounds(neighbor) {
                    self.registry.mark_dirty(&self.cfg, neighbor);
                }
            }
            if local[axis] == self.cfg.chunk_size - 1 {
                let mut neighbor = chunk;
                neighbor[axis] += 1;
                if self.cfg.chunk_in_bounds(neighbor) {
                    self.registry.mark_dirty(&self.cfg, neighbor);
                }
            }
        }
    }

    /// Queue a remote mutation for the next tick. Arrival order is
    /// preserved; two writes to the same cell resolve last-write-wins.
    pub fn enqueue_remote(&mut self, mutation: Mutation) {
        self.pending.push_back(mutation);
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// One frame tick: drain all queued remote mutations in order, then
    /// run one budgeted rebuild pass. Called once per rendered frame.
    pub fn tick(&mut self) -> FrameReport {
        let mut applied = 0;
        while let Some(mutation) = self.pending.pop_front() {
            self.apply(mutation);
            applied += 1;
        }
        let rebuild = self
            .scheduler
            .tick(&self.cfg, &self.grid, &mut self.registry);
        FrameReport { applied, rebuild }
    }

    /// Rebuild every chunk immediately, ignoring the tick budget. Used at
    /// load time and by tests that need a fully consistent mesh set.
    pub fn rebuild_all(&mut self) {
        for cx in 0..self.cfg.chunks_per_axis() {
            for cy in 0..self.cfg.chunks_per_axis() {
                for cz in 0..self.cfg.chunks_per_axis() {
                    self.registry
                        .rebuild(&self.cfg, &self.grid, IVec3::new(cx, cy, cz));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxcanvas_core::types::PaletteIndex;

    fn filled(color: u8) -> Cell {
        Cell::Filled(PaletteIndex(color))
    }

    fn world() -> World {
        World::empty(WorldConfig::new(128, 16, 64))
    }

    #[test]
    fn test_interior_mutation_dirties_only_owner() {
        let mut w = world();
        w.apply(Mutation {
            cell: IVec3::new(5, 5, 5),
            value: filled(0),
        });
        assert!(w.is_dirty(IVec3::ZERO));
        assert_eq!(w.dirty_count(), 1);
    }

    #[test]
    fn test_boundary_mutation_dirties_neighbor() {
        let mut w = world();
        // x = 16 is the first cell of chunk (1,0,0); its -x face borders
        // chunk (0,0,0).
        w.apply(Mutation {
            cell: IVec3::new(16, 5, 5),
            value: filled(0),
        });
        assert!(w.is_dirty(IVec3::new(1, 0, 0)));
        assert!(w.is_dirty(IVec3::new(0, 0, 0)));
        assert_eq!(w.dirty_count(), 2);
    }

    #[test]
    fn test_corner_mutation_dirties_three_neighbors() {
        let mut w = world();
        // Chunk-corner cell: on the far boundary of all three axes.
        w.apply(Mutation {
            cell: IVec3::new(15, 15, 15),
            value: filled(0),
        });
        assert!(w.is_dirty(IVec3::new(0, 0, 0)));
        assert!(w.is_dirty(IVec3::new(1, 0, 0)));
        assert!(w.is_dirty(IVec3::new(0, 1, 0)));
        assert!(w.is_dirty(IVec3::new(0, 0, 1)));
        // Face neighbors only; diagonal chunks share no rendered face.
        assert_eq!(w.dirty_count(), 4);
    }

    #[test]
    fn test_unit_chunk_mutation_dirties_all_face_neighbors() {
        // With single-cell chunks every cell sits on both boundaries of
        // every axis, so a mutation must dirty the owner and all six
        // in-world face neighbors.
        let mut w = World::empty(WorldConfig::new(4, 1, 4));
        w.apply(Mutation {
            cell: IVec3::new(1, 1, 1),
            value: filled(0),
        });
        assert!(w.is_dirty(IVec3::new(1, 1, 1)));
        for offset in [
            IVec3::new(-1, 0, 0),
            IVec3::new(1, 0, 0),
            IVec3::new(0, -1, 0),
            IVec3::new(0, 1, 0),
            IVec3::new(0, 0, -1),
            IVec3::new(0, 0, 1),
        ] {
            let neighbor = IVec3::new(1, 1, 1) + offset;
            assert!(w.is_dirty(neighbor), "neighbor chunk {neighbor} must be dirty");
        }
        assert_eq!(w.dirty_count(), 7);
    }

    #[test]
    fn test_world_boundary_mutation_stays_in_bounds() {
        let mut w = world();
        w.apply(Mutation {
            cell: IVec3::new(0, 0, 0),
            value: filled(0),
        });
        // No chunk (-1,0,0) etc. to dirty.
        assert_eq!(w.dirty_count(), 1);
    }

    #[test]
    fn test_concrete_two_cell_scenario() {
        // N=128, C=16: fill (0,0,0) and (1,0,0) with color 5, tick once.
        // Only chunk (0,0,0) dirties; its mesh holds the 5 exposed faces
        // of each cell, the shared pair culled: 10 quads.
        let mut w = world();
        w.apply(Mutation {
            cell: IVec3::new(0, 0, 0),
            value: filled(5),
        });
        w.apply(Mutation {
            cell: IVec3::new(1, 0, 0),
            value: filled(5),
        });
        assert_eq!(w.dirty_count(), 1);
        assert!(w.is_dirty(IVec3::ZERO));

        let report = w.tick();
        assert_eq!(report.rebuild.rebuilt, 1);
        assert_eq!(w.dirty_count(), 0);
        assert_eq!(w.mesh(IVec3::ZERO).unwrap().quad_count(), 10);
    }

    #[test]
    fn test_remote_queue_preserves_order_last_write_wins() {
        let mut w = world();
        let cell = IVec3::new(40, 40, 40);
        w.enqueue_remote(Mutation {
            cell,
            value: filled(1),
        });
        w.enqueue_remote(Mutation {
            cell,
            value: filled(9),
        });
        w.enqueue_remote(Mutation {
            cell,
            value: Cell::Empty,
        });
        assert_eq!(w.pending_count(), 3);

        let report = w.tick();
        assert_eq!(report.applied, 3);
        assert_eq!(w.pending_count(), 0);
        assert_eq!(w.grid().get(cell), Cell::Empty);
    }

    #[test]
    fn test_tick_converges_meshes_to_grid() {
        // Scatter mutations across many chunks, tick until clean, then
        // verify every mesh matches a from-scratch rebuild.
        let mut w = World::empty(WorldConfig::new(64, 16, 3));
        for i in 0..12 {
            w.enqueue_remote(Mutation {
                cell: IVec3::new(i * 5 % 64, i * 11 % 64, i * 17 % 64),
                value: filled((i % 32) as u8),
            });
        }
        let mut ticks = 0;
        loop {
            w.tick();
            ticks += 1;
            if w.dirty_count() == 0 {
                break;
            }
            assert!(ticks < 32, "scheduler failed to converge");
        }

        let chunks: Vec<ChunkCoord> = (0..w.cfg.chunk_count())
            .map(|i| voxcanvas_core::coords::index_to_chunk(&w.cfg, i))
            .collect();
        let incremental: Vec<Option<ChunkMesh>> =
            chunks.iter().map(|&c| w.mesh(c).cloned()).collect();
        w.rebuild_all();
        for (chunk, mesh) in chunks.iter().zip(incremental) {
            assert_eq!(
                mesh.as_ref(),
                w.mesh(*chunk),
                "chunk {chunk} mesh diverged from grid"
            );
        }
    }

    #[test]
    fn test_from_snapshot_builds_initial_meshes() {
        let cfg = WorldConfig::new(4, 2, 4);
        let mut bytes = vec![0u8; cfg.cell_count()];
        bytes[0] = 3; // cell (0,0,0)
        let w = World::from_snapshot(cfg, &bytes).unwrap();
        assert_eq!(w.dirty_count(), 0);
        assert_eq!(w.mesh(IVec3::ZERO).unwrap().quad_count(), 6);
        assert!(w.mesh(IVec3::new(1, 1, 1)).is_none());
    }

    #[test]
    fn test_from_snapshot_rejects_bad_length() {
        let cfg = WorldConfig::new(4, 2, 4);
        assert!(World::from_snapshot(cfg, &[0u8; 10]).is_err());
    }
}
