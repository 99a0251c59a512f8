use crate::coords::Vec2;

use super::vertex::{TileVertex, VERTICES_PER_QUAD};

/// Per-frame vertex stream, four vertices per tile.
///
/// Keeps its allocation across frames; `clear()` only resets the length.
#[derive(Debug, Default, Clone)]
pub struct TileMesh {
    vertices: Vec<TileVertex>,
}

impl TileMesh {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(quads: usize) -> Self {
        Self { vertices: Vec::with_capacity(quads * VERTICES_PER_QUAD) }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Appends one quad given its corners in vertex order.
    #[inline]
    pub fn push_quad(&mut self, corners: [Vec2; 4]) {
        self.vertices.extend(corners.map(TileVertex::from));
    }

    #[inline]
    pub fn vertices(&self) -> &[TileVertex] {
        &self.vertices
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_QUAD
    }

    /// Raw bytes for a vertex-buffer upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
