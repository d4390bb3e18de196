//! The fixed 32-color palette plus the reserved erase marker, and the
//! wire encoding shared with the server: byte 0 = empty/erase, bytes
//! 1..=32 = palette entry + 1.

use crate::error::CanvasError;
use crate::types::{Cell, PaletteIndex};

/// Number of real colors in the palette.
pub const PALETTE_LEN: usize = 32;

/// Palette colors as 8-bit RGB, in wire order.
pub const PALETTE_RGB: [[u8; 3]; PALETTE_LEN] = [
    [0x6d, 0x00, 0x1a],
    [0xbe, 0x00, 0x39],
    [0xff, 0x45, 0x00],
    [0xff, 0xa8, 0x00],
    [0xff, 0xd6, 0x35],
    [0xff, 0xf8, 0xb8],
    [0x00, 0xa3, 0x68],
    [0x00, 0xcc, 0x78],
    [0x7e, 0xed, 0x56],
    [0x00, 0x75, 0x6f],
    [0x00, 0x9e, 0xaa],
    [0x00, 0xcc, 0xc0],
    [0x24, 0x50, 0xa4],
    [0x36, 0x90, 0xea],
    [0x51, 0xe9, 0xf4],
    [0x49, 0x3a, 0xc1],
    [0x6a, 0x5c, 0xff],
    [0x94, 0xb3, 0xff],
    [0x81, 0x1e, 0x9f],
    [0xb4, 0x4a, 0xc0],
    [0xe4, 0xab, 0xff],
    [0xde, 0x10, 0x7f],
    [0xff, 0x38, 0x81],
    [0xff, 0x99, 0xaa],
    [0x6d, 0x48, 0x2f],
    [0x9c, 0x69, 0x26],
    [0xff, 0xb4, 0x70],
    [0x00, 0x00, 0x00],
    [0x51, 0x52, 0x52],
    [0x89, 0x8d, 0x90],
    [0xd4, 0xd7, 0xd9],
    [0xff, 0xff, 0xff],
];

/// Palette color as normalized floats for vertex-color attributes.
pub fn color_f32(index: PaletteIndex) -> [f32; 3] {
    assert!(index.is_valid(), "palette index {} out of range", index.0);
    let [r, g, b] = PALETTE_RGB[index.0 as usize];
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

/// What the user currently has selected in the palette UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSelection {
    Color(PaletteIndex),
    Erase,
}

impl PaletteSelection {
    /// Wire value submitted in a draw request. Erase maps to 0.
    pub fn to_wire(self) -> u8 {
        match self {
            PaletteSelection::Color(idx) => idx.0 + 1,
            PaletteSelection::Erase => 0,
        }
    }
}

/// Decode a wire cell value. 0 is always empty; 1..=32 map to palette
/// entries 0..=31; anything else is rejected.
pub fn decode_wire(value: u8) -> Result<Cell, CanvasError> {
    match value {
        0 => Ok(Cell::Empty),
        v if (v as usize) <= PALETTE_LEN => Ok(Cell::Filled(PaletteIndex(v - 1))),
        v => Err(CanvasError::InvalidWireColor(v)),
    }
}

/// Encode a cell back to its wire value.
pub fn encode_wire(cell: Cell) -> u8 {
    match cell {
        Cell::Empty => 0,
        Cell::Filled(idx) => idx.0 + 1,
    }
}
