use voxcanvas_core::config::WorldConfig;
use voxcanvas_core::coords::chunk_index;
use voxcanvas_core::types::ChunkCoord;
use voxcanvas_mesh::{build_chunk_mesh, ChunkMesh, GridView};

/// Per-chunk registry entry: the current mesh (absent when the chunk
/// exposes no faces) and whether it is stale relative to the grid.
#[derive(Debug, Default)]
struct ChunkEntry {
    mesh: Option<ChunkMesh>,
    dirty: bool,
}

/// Owns one mesh slot and one dirty flag per chunk coordinate. Meshes are
/// replaced whole on rebuild, never patched.
pub struct ChunkRegistry {
    entries: Vec<ChunkEntry>,
    /// Chunks rebuilt since the renderer last drained them.
    changed: Vec<ChunkCoord>,
}

impl ChunkRegistry {
    /// Create a registry with no meshes and every chunk clean.
    pub fn new(cfg: &WorldConfig) -> Self {
        let mut entries = Vec::with_capacity(cfg.chunk_count());
        entries.resize_with(cfg.chunk_count(), ChunkEntry::default);
        Self {
            entries,
            changed: Vec::new(),
        }
    }

    pub fn mark_dirty(&mut self, cfg: &WorldConfig, chunk: ChunkCoord) {
        self.entries[chunk_index(cfg, chunk)].dirty = true;
    }

    pub fn is_dirty(&self, cfg: &WorldConfig, chunk: ChunkCoord) -> bool {
        self.entries[chunk_index(cfg, chunk)].dirty
    }

    pub fn mesh(&self, cfg: &WorldConfig, chunk: ChunkCoord) -> Option<&ChunkMesh> {
        self.entries[chunk_index(cfg, chunk)].mesh.as_ref()
    }

    /// Regenerate a chunk's mesh from the grid, replacing the stored mesh
    /// and clearing the dirty flag. Idempotent: the mesher is a pure
    /// function of grid contents, so rebuilding a clean chunk changes
    /// nothing.
    pub fn rebuild(&mut self, cfg: &WorldConfig, grid: &impl GridView, chunk: ChunkCoord) {
        let entry = &mut self.entries[chunk_index(cfg, chunk)];
        entry.mesh = build_chunk_mesh(cfg, grid, chunk);
        entry.dirty = false;
        self.changed.push(chunk);
    }

    /// Drain the list of chunks rebuilt since the last call. The renderer
    /// uses this to know which geometries to re-upload (or remove, when a
    /// chunk's mesh became absent).
    pub fn take_changed(&mut self) -> Vec<ChunkCoord> {
        std::mem::take(&mut self.changed)
    }

    pub fn dirty_count(&self) -> usize {
        self.entries.iter().filter(|e| e.dirty).count()
    }

    /// Number of chunks currently holding a mesh.
    pub fn mesh_count(&self) -> usize {
        self.entries.iter().filter(|e| e.mesh.is_some()).count()
    }
}
