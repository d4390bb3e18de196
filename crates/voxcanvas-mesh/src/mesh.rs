/// Triangle mesh for one chunk: flat position and color attributes plus a
/// shared index buffer, matching what the external renderer uploads as
/// vertex attributes. Meshes are built whole and never edited in place; a
/// rebuild produces a new value that replaces the old one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChunkMesh {
    /// Vertex positions, 3 floats per vertex, local to the chunk origin.
    pub positions: Vec<f32>,
    /// Vertex colors, 3 floats per vertex, flat per face.
    pub colors: Vec<f32>,
    /// Triangle indices, 6 per quad.
    pub indices: Vec<u32>,
}

impl ChunkMesh {
    pub fn with_quad_capacity(quads: usize) -> Self {
        Self {
            positions: Vec::with_capacity(quads * 12),
            colors: Vec::with_capacity(quads * 12),
            indices: Vec::with_capacity(quads * 6),
        }
    }

    /// Append one quad: 4 vertices sharing a color, two CCW triangles
    /// (0,1,2) and (0,2,3).
    pub fn push_quad(&mut self, corners: &[[f32; 3]; 4], color: [f32; 3]) {
        let base = self.vertex_count() as u32;
        for corner in corners {
            self.positions.extend_from_slice(corner);
            self.colors.extend_from_slice(&color);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Position attribute as raw bytes for renderer upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Color attribute as raw bytes for renderer upload.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Index buffer as raw bytes for renderer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_quad_layout() {
        let mut mesh = ChunkMesh::default();
        let corners = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ];
        mesh.push_quad(&corners, [0.5, 0.25, 1.0]);
        mesh.push_quad(&corners, [0.0, 0.0, 0.0]);

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.quad_count(), 2);
        assert_eq!(mesh.triangle_count(), 4);
        // Second quad's indices start past the first quad's 4 vertices.
        assert_eq!(&mesh.indices[6..], &[4, 5, 6, 4, 6, 7]);
        // Flat color across the first quad's vertices.
        assert_eq!(&mesh.colors[0..3], &[0.5, 0.25, 1.0]);
        assert_eq!(&mesh.colors[9..12], &[0.5, 0.25, 1.0]);
    }

    #[test]
    fn test_byte_views() {
        let mut mesh = ChunkMesh::default();
        mesh.push_quad(
            &[[0.0; 3], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
            [1.0, 1.0, 1.0],
        );
        assert_eq!(mesh.position_bytes().len(), 4 * 3 * 4);
        assert_eq!(mesh.index_bytes().len(), 6 * 4);
    }
}
