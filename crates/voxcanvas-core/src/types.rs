use glam::IVec3;

use crate::palette::PALETTE_LEN;

/// Newtype for palette indices. Valid range is 0..32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteIndex(pub u8);

impl PaletteIndex {
    /// Whether this index refers to a real palette entry.
    pub fn is_valid(self) -> bool {
        (self.0 as usize) < PALETTE_LEN
    }
}

/// One grid cell: empty, or filled with a palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(PaletteIndex),
}

impl Cell {
    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

/// Absolute cell coordinate in grid-space, each axis in [0, N).
pub type CellCoord = IVec3;

/// Chunk coordinate in chunk-space, each axis in [0, N/C).
pub type ChunkCoord = IVec3;
