//! Per-voxel face-culling mesher. For every filled cell in a chunk, emit a
//! quad for each of its 6 faces whose neighbor is empty or outside the
//! world. Interior faces between two filled cells are never emitted, so
//! the output is exactly the surface visible from outside solid volume.

use glam::IVec3;
use voxcanvas_core::config::WorldConfig;
use voxcanvas_core::face::{Face, ALL_FACES};
use voxcanvas_core::palette::color_f32;
use voxcanvas_core::types::{Cell, CellCoord, ChunkCoord};

use crate::mesh::ChunkMesh;

/// Read access to cell contents, implemented by the world's grid store.
/// Callers must only query in-bounds coordinates.
pub trait GridView {
    fn cell(&self, cell: CellCoord) -> Cell;
}

/// Quad corners per face, counter-clockwise when viewed along the face's
/// outward normal, relative to the cell's local position. Corner order is
/// load-bearing: index pattern (0,1,2),(0,2,3) triangulates each table row.
const FACE_CORNERS: [[[f32; 3]; 4]; 6] = [
    // -x
    [
        [-0.5, -0.5, 0.5],
        [-0.5, 0.5, 0.5],
        [-0.5, 0.5, -0.5],
        [-0.5, -0.5, -0.5],
    ],
    // +x
    [
        [0.5, -0.5, -0.5],
        [0.5, 0.5, -0.5],
        [0.5, 0.5, 0.5],
        [0.5, -0.5, 0.5],
    ],
    // -y
    [
        [-0.5, -0.5, -0.5],
        [0.5, -0.5, -0.5],
        [0.5, -0.5, 0.5],
        [-0.5, -0.5, 0.5],
    ],
    // +y
    [
        [-0.5, 0.5, 0.5],
        [0.5, 0.5, 0.5],
        [0.5, 0.5, -0.5],
        [-0.5, 0.5, -0.5],
    ],
    // -z
    [
        [0.5, -0.5, -0.5],
        [-0.5, -0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [0.5, 0.5, -0.5],
    ],
    // +z
    [
        [0.5, -0.5, 0.5],
        [0.5, 0.5, 0.5],
        [-0.5, 0.5, 0.5],
        [-0.5, -0.5, 0.5],
    ],
];

/// Whether the neighbor of `cell` across `face` exposes that face.
/// World boundary counts as empty: boundary cells always show their
/// outward face.
fn face_exposed(cfg: &WorldConfig, grid: &impl GridView, cell: CellCoord, face: Face) -> bool {
    let neighbor = cell + face.offset();
    !cfg.cell_in_bounds(neighbor) || !grid.cell(neighbor).is_filled()
}

/// Build the surface mesh for one chunk. Cells are scanned x → y → z and
/// faces emitted in `ALL_FACES` order, so output is deterministic for
/// fixed grid contents. Returns `None` when the chunk contributes no
/// visible faces.
pub fn build_chunk_mesh(
    cfg: &WorldConfig,
    grid: &impl GridView,
    chunk: ChunkCoord,
) -> Option<ChunkMesh> {
    assert!(cfg.chunk_in_bounds(chunk), "chunk {chunk} out of bounds");

    let origin = chunk * cfg.chunk_size;
    let mut mesh = ChunkMesh::default();

    for dx in 0..cfg.chunk_size {
        for dy in 0..cfg.chunk_size {
            for dz in 0..cfg.chunk_size {
                let local = IVec3::new(dx, dy, dz);
                let cell = origin + local;
                let Cell::Filled(index) = grid.cell(cell) else {
                    continue;
                };
                let color = color_f32(index);

                for face in ALL_FACES {
                    if !face_exposed(cfg, grid, cell, face) {
                        continue;
                    }
                    let template = &FACE_CORNERS[face as usize];
                    let mut corners = [[0.0f32; 3]; 4];
                    for (dst, src) in corners.iter_mut().zip(template) {
                        dst[0] = src[0] + dx as f32;
                        dst[1] = src[1] + dy as f32;
                        dst[2] = src[2] + dz as f32;
                    }
                    mesh.push_quad(&corners, color);
                }
            }
        }
    }

    if mesh.is_empty() {
        None
    } else {
        log::debug!(
            "meshed chunk {chunk}: {} quads, {} vertices",
            mesh.quad_count(),
            mesh.vertex_count()
        );
        Some(mesh)
    }
}
