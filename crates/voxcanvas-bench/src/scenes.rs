//! Deterministic fill patterns for benchmarking the mesher and scheduler.

use glam::IVec3;
use voxcanvas_core::config::WorldConfig;
use voxcanvas_core::palette::PALETTE_LEN;
use voxcanvas_core::types::{Cell, PaletteIndex};
use voxcanvas_world::{Mutation, World};

/// How a scene fills the grid.
#[derive(Debug, Clone, Copy)]
pub enum FillPattern {
    /// Every cell filled: worst case for scan cost, best case for culling.
    Solid,
    /// Alternating filled/empty: worst case for face emission.
    Checkerboard,
    /// Only the outer one-cell shell of the world filled.
    Shell,
    /// Hash-scattered fill at roughly the given density per thousand.
    Sparse { permille: u32 },
}

/// Configuration for a single benchmark scene.
pub struct SceneConfig {
    pub name: &'static str,
    pub pattern: FillPattern,
}

/// The standard suite, ordered from cheap to expensive meshes.
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig {
            name: "solid",
            pattern: FillPattern::Solid,
        },
        SceneConfig {
            name: "shell",
            pattern: FillPattern::Shell,
        },
        SceneConfig {
            name: "sparse-5%",
            pattern: FillPattern::Sparse { permille: 50 },
        },
        SceneConfig {
            name: "sparse-25%",
            pattern: FillPattern::Sparse { permille: 250 },
        },
        SceneConfig {
            name: "checkerboard",
            pattern: FillPattern::Checkerboard,
        },
    ]
}

/// Position-keyed hash for stable pseudo-random fills, PCG-style mixing.
fn cell_hash(x: i32, y: i32, z: i32) -> u32 {
    let mut state = (x as u32)
        .wrapping_mul(0x9E3779B9)
        .wrapping_add((y as u32).wrapping_mul(0x517CC1B7))
        .wrapping_add((z as u32).wrapping_mul(0x6C62272E));
    state ^= state >> 16;
    state = state.wrapping_mul(0x45D9F3B);
    state ^= state >> 16;
    state = state.wrapping_mul(0x45D9F3B);
    state ^ (state >> 16)
}

fn pattern_cell(pattern: FillPattern, cfg: &WorldConfig, pos: IVec3) -> Cell {
    let filled = match pattern {
        FillPattern::Solid => true,
        FillPattern::Checkerboard => (pos.x + pos.y + pos.z) % 2 == 0,
        FillPattern::Shell => {
            let edge = cfg.world_size - 1;
            pos.min_element() == 0 || pos.max_element() == edge
        }
        FillPattern::Sparse { permille } => cell_hash(pos.x, pos.y, pos.z) % 1000 < permille,
    };
    if filled {
        let color = cell_hash(pos.z, pos.x, pos.y) % PALETTE_LEN as u32;
        Cell::Filled(PaletteIndex(color as u8))
    } else {
        Cell::Empty
    }
}

/// Fill a world according to a pattern. Goes through the mutation applier
/// so the dirty set ends up exactly as live edits would leave it.
pub fn populate(world: &mut World, pattern: FillPattern) {
    let cfg = *world.config();
    for x in 0..cfg.world_size {
        for y in 0..cfg.world_size {
            for z in 0..cfg.world_size {
                let pos = IVec3::new(x, y, z);
                let value = pattern_cell(pattern, &cfg, pos);
                if value.is_filled() {
                    world.apply(Mutation { cell: pos, value });
                }
            }
        }
    }
}
