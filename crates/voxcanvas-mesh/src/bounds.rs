use glam::Vec3;
use voxcanvas_core::config::WorldConfig;
use voxcanvas_core::types::ChunkCoord;

/// Axis-aligned bounding box of one chunk in the renderer's centered
/// coordinate space. The external renderer tests this against its frustum;
/// the engine itself never decides visibility.
///
/// Cell centers sit at integer grid positions, so a chunk's solid volume
/// spans half a cell beyond its min/max cell centers on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl ChunkBounds {
    pub fn of_chunk(cfg: &WorldConfig, chunk: ChunkCoord) -> Self {
        let origin = (chunk * cfg.chunk_size).as_vec3() - Vec3::splat(cfg.half_extent() as f32);
        Self {
            min: origin - Vec3::splat(0.5),
            max: origin + Vec3::splat(cfg.chunk_size as f32 - 0.5),
        }
    }

    /// Translation the renderer applies to the chunk's mesh, which carries
    /// chunk-local vertex positions.
    pub fn mesh_offset(&self) -> Vec3 {
        self.min + Vec3::splat(0.5)
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_size(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }
}
