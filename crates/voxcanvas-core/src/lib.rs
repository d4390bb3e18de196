//! Shared vocabulary for the voxcanvas engine: configuration, cell and
//! coordinate types, face directions, the color palette, and error types.

pub mod config;
pub mod coords;
pub mod error;
pub mod face;
pub mod palette;
pub mod types;
