//! Chunk surface meshes: the mesh buffer type, the per-voxel face-culling
//! builder, and per-chunk bounding boxes for the external frustum test.

pub mod bounds;
pub mod builder;
pub mod mesh;

pub use bounds::ChunkBounds;
pub use builder::{build_chunk_mesh, GridView};
pub use mesh::ChunkMesh;
