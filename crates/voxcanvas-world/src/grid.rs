use voxcanvas_core::config::WorldConfig;
use voxcanvas_core::types::{Cell, CellCoord};
use voxcanvas_mesh::GridView;

/// Dense N³ cell array. Storage order matches the server snapshot:
/// index = x·N² + y·N + z.
///
/// Access is O(1) and bounds-checked; an out-of-range coordinate is a
/// programming error (callers resolve coordinates before touching the
/// grid), so it panics rather than returning a Result.
#[derive(Debug)]
pub struct GridStore {
    cells: Vec<Cell>,
    world_size: i32,
}

impl GridStore {
    /// Create an all-empty grid.
    pub fn empty(cfg: &WorldConfig) -> Self {
        Self {
            cells: vec![Cell::Empty; cfg.cell_count()],
            world_size: cfg.world_size,
        }
    }

    pub(crate) fn from_cells(cfg: &WorldConfig, cells: Vec<Cell>) -> Self {
        assert_eq!(cells.len(), cfg.cell_count());
        Self {
            cells,
            world_size: cfg.world_size,
        }
    }

    fn index(&self, cell: CellCoord) -> usize {
        let n = self.world_size;
        assert!(
            cell.cmpge(CellCoord::ZERO).all() && cell.cmplt(CellCoord::splat(n)).all(),
            "cell {cell} outside world of size {n}"
        );
        let n = n as usize;
        (cell.x as usize) * n * n + (cell.y as usize) * n + cell.z as usize
    }

    pub fn get(&self, cell: CellCoord) -> Cell {
        self.cells[self.index(cell)]
    }

    pub fn set(&mut self, cell: CellCoord, value: Cell) {
        let idx = self.index(cell);
        self.cells[idx] = value;
    }

    /// Number of filled cells; used by stats reporting and the bench.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }
}

impl GridView for GridStore {
    fn cell(&self, cell: CellCoord) -> Cell {
        self.get(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;
    use voxcanvas_core::types::PaletteIndex;

    #[test]
    fn test_get_set_roundtrip() {
        let cfg = WorldConfig::new(32, 8, 4);
        let mut grid = GridStore::empty(&cfg);
        let cell = IVec3::new(3, 14, 31);
        assert_eq!(grid.get(cell), Cell::Empty);
        grid.set(cell, Cell::Filled(PaletteIndex(7)));
        assert_eq!(grid.get(cell), Cell::Filled(PaletteIndex(7)));
        assert_eq!(grid.filled_count(), 1);
    }

    #[test]
    fn test_storage_order_matches_snapshot_layout() {
        let cfg = WorldConfig::new(4, 2, 4);
        let mut grid = GridStore::empty(&cfg);
        // index = x·16 + y·4 + z for N = 4
        grid.set(IVec3::new(1, 2, 3), Cell::Filled(PaletteIndex(0)));
        assert!(grid.cells[16 + 8 + 3].is_filled());
    }

    #[test]
    #[should_panic(expected = "outside world")]
    fn test_out_of_range_get_panics() {
        let cfg = WorldConfig::new(32, 8, 4);
        let grid = GridStore::empty(&cfg);
        grid.get(IVec3::new(32, 0, 0));
    }

    #[test]
    #[should_panic(expected = "outside world")]
    fn test_negative_coordinate_panics() {
        let cfg = WorldConfig::new(32, 8, 4);
        let grid = GridStore::empty(&cfg);
        grid.get(IVec3::new(0, -1, 0));
    }
}
