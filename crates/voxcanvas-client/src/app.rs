use std::cell::RefCell;
use std::rc::Rc;

use glam::{IVec3, Vec3};
use wasm_bindgen::prelude::*;
use voxcanvas_core::coords::{chunk_index, index_to_chunk};
use voxcanvas_core::palette::{PaletteSelection, PALETTE_LEN, PALETTE_RGB};
use voxcanvas_core::types::PaletteIndex;
use voxcanvas_mesh::ChunkBounds;
use voxcanvas_world::placement::{resolve_placement, PickHit};
use voxcanvas_world::World;

use crate::transport;

/// The engine handle held by the page. The JS renderer drives it from its
/// animation loop: one `tick()` per frame, then `take_changed()` to learn
/// which chunk geometries to re-upload. All world access funnels through
/// the shared `RefCell`, so remote messages and frame ticks never observe
/// partial state.
#[wasm_bindgen]
pub struct CanvasApp {
    canvas: String,
    world: Rc<RefCell<World>>,
    selection: PaletteSelection,
    /// Selected cell in centered coordinates, shown by the page's marker.
    /// Updated immediately on click; the grid itself only changes once the
    /// server confirms an edit.
    selected: Option<IVec3>,
}

impl CanvasApp {
    pub(crate) fn new(canvas: String, world: World) -> Self {
        Self {
            canvas,
            world: Rc::new(RefCell::new(world)),
            selection: PaletteSelection::Color(PaletteIndex(0)),
            selected: None,
        }
    }

    pub(crate) fn shared_world(&self) -> Rc<RefCell<World>> {
        self.world.clone()
    }
}

#[wasm_bindgen]
impl CanvasApp {
    /// One frame tick: apply queued remote updates in arrival order, then
    /// rebuild up to the budgeted number of dirty chunks. Returns the
    /// number of chunks rebuilt.
    pub fn tick(&mut self) -> u32 {
        let report = self.world.borrow_mut().tick();
        report.rebuild.rebuilt as u32
    }

    /// Linear indices of chunks whose mesh changed since the last call.
    pub fn take_changed(&mut self) -> Vec<u32> {
        let mut world = self.world.borrow_mut();
        let cfg = *world.config();
        world
            .take_changed()
            .into_iter()
            .map(|c| chunk_index(&cfg, c) as u32)
            .collect()
    }

    pub fn world_size(&self) -> i32 {
        self.world.borrow().config().world_size
    }

    pub fn chunk_size(&self) -> i32 {
        self.world.borrow().config().chunk_size
    }

    pub fn chunk_count(&self) -> u32 {
        self.world.borrow().config().chunk_count() as u32
    }

    pub fn pending_updates(&self) -> u32 {
        self.world.borrow().pending_count() as u32
    }

    pub fn dirty_chunks(&self) -> u32 {
        self.world.borrow().dirty_count() as u32
    }

    /// Whether the chunk currently has any visible faces.
    pub fn chunk_has_mesh(&self, index: u32) -> bool {
        let world = self.world.borrow();
        let chunk = index_to_chunk(world.config(), index as usize);
        world.mesh(chunk).is_some()
    }

    /// Vertex positions of one chunk mesh (3 floats per vertex, local to
    /// the chunk origin). Empty when the chunk has no mesh.
    pub fn chunk_positions(&self, index: u32) -> Vec<f32> {
        let world = self.world.borrow();
        let chunk = index_to_chunk(world.config(), index as usize);
        world
            .mesh(chunk)
            .map(|m| m.positions.clone())
            .unwrap_or_default()
    }

    /// Vertex colors of one chunk mesh (3 floats per vertex).
    pub fn chunk_colors(&self, index: u32) -> Vec<f32> {
        let world = self.world.borrow();
        let chunk = index_to_chunk(world.config(), index as usize);
        world
            .mesh(chunk)
            .map(|m| m.colors.clone())
            .unwrap_or_default()
    }

    /// Triangle indices of one chunk mesh.
    pub fn chunk_indices(&self, index: u32) -> Vec<u32> {
        let world = self.world.borrow();
        let chunk = index_to_chunk(world.config(), index as usize);
        world
            .mesh(chunk)
            .map(|m| m.indices.clone())
            .unwrap_or_default()
    }

    /// Translation the renderer applies to the chunk's mesh, in centered
    /// coordinates: `[x, y, z]`.
    pub fn chunk_offset(&self, index: u32) -> Vec<f32> {
        let world = self.world.borrow();
        let chunk = index_to_chunk(world.config(), index as usize);
        let offset = ChunkBounds::of_chunk(world.config(), chunk).mesh_offset();
        vec![offset.x, offset.y, offset.z]
    }

    /// Chunk bounding box for the renderer's frustum test:
    /// `[min_x, min_y, min_z, max_x, max_y, max_z]` in centered space.
    /// The engine never decides visibility itself.
    pub fn chunk_bounds(&self, index: u32) -> Vec<f32> {
        let world = self.world.borrow();
        let chunk = index_to_chunk(world.config(), index as usize);
        let b = ChunkBounds::of_chunk(world.config(), chunk);
        vec![b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z]
    }

    /// Palette colors as rows of `[r, g, b]` bytes, for building the
    /// page's color picker.
    pub fn palette_rgb(&self) -> Vec<u8> {
        PALETTE_RGB.iter().flatten().copied().collect()
    }

    /// Select a palette color. Returns false (and keeps the previous
    /// selection) for an out-of-range index.
    pub fn select_color(&mut self, index: u8) -> bool {
        if (index as usize) < PALETTE_LEN {
            self.selection = PaletteSelection::Color(PaletteIndex(index));
            true
        } else {
            log::warn!("ignoring selection of invalid palette index {index}");
            false
        }
    }

    pub fn select_erase(&mut self) {
        self.selection = PaletteSelection::Erase;
    }

    /// Wire value of the current selection (0 = erase).
    pub fn selected_wire(&self) -> u8 {
        self.selection.to_wire()
    }

    /// Resolve a surface pick (point + outward normal, centered
    /// coordinates) into the two candidate cells:
    /// `[replace_x, replace_y, replace_z, adjacent_x, adjacent_y, adjacent_z]`.
    pub fn resolve_pick(&self, px: f32, py: f32, pz: f32, nx: f32, ny: f32, nz: f32) -> Vec<i32> {
        let world = self.world.borrow();
        let hit = PickHit {
            point: Vec3::new(px, py, pz),
            normal: Vec3::new(nx, ny, nz),
        };
        let p = resolve_placement(world.config(), hit);
        vec![
            p.replace.x,
            p.replace.y,
            p.replace.z,
            p.adjacent.x,
            p.adjacent.y,
            p.adjacent.z,
        ]
    }

    /// Record the clicked cell (centered coordinates). The marker moves
    /// immediately; the grid waits for server confirmation.
    pub fn set_selected(&mut self, x: i32, y: i32, z: i32) {
        self.selected = Some(IVec3::new(x, y, z));
    }

    pub fn clear_selected(&mut self) {
        self.selected = None;
    }

    /// Currently selected cell as `[x, y, z]`, empty when nothing is
    /// selected.
    pub fn selected_cell(&self) -> Vec<i32> {
        match self.selected {
            Some(c) => vec![c.x, c.y, c.z],
            None => Vec::new(),
        }
    }

    /// Submit the current selection as an edit of the selected cell. The
    /// request goes to the server; the local grid is only mutated if the
    /// server accepts. A rejected edit is logged and changes nothing.
    pub fn submit_edit(&self) {
        let Some(selected) = self.selected else {
            log::warn!("submit_edit with no cell selected");
            return;
        };
        let world = self.world.clone();
        let cfg = *self.world.borrow().config();
        let cell = voxcanvas_world::placement::candidate_to_cell(&cfg, selected);
        transport::submit_draw(self.canvas.clone(), world, cell, self.selection);
    }
}
