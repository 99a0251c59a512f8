//! Quad vertex and index conventions shared with the external renderer.

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

/// One 2D vertex position as uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct TileVertex {
    pub pos: [f32; 2],
}

impl TileVertex {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { pos: [x, y] }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.pos[0], self.pos[1])
    }
}

impl From<Vec2> for TileVertex {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Vertices per quad: top-left, bottom-left, top-right, bottom-right.
pub const VERTICES_PER_QUAD: usize = 4;

/// Indices per quad (two triangles).
pub const INDICES_PER_QUAD: usize = 6;

/// Triangle pattern of one quad, relative to its first vertex.
pub const QUAD_INDICES: [u32; INDICES_PER_QUAD] = [0, 1, 2, 2, 1, 3];

/// Static texture coordinates of one quad, in vertex order.
pub const QUAD_TEXCOORDS: [TileVertex; VERTICES_PER_QUAD] = [
    TileVertex::new(0.0, 0.0),
    TileVertex::new(0.0, 1.0),
    TileVertex::new(1.0, 0.0),
    TileVertex::new(1.0, 1.0),
];

/// Index buffer for `quads` consecutive quads.
pub fn quad_indices(quads: usize) -> Vec<u32> {
    let mut out = Vec::with_capacity(quads * INDICES_PER_QUAD);
    for q in 0..quads {
        let base = (q * VERTICES_PER_QUAD) as u32;
        out.extend(QUAD_INDICES.iter().map(|i| base + i));
    }
    out
}

/// Static texcoord buffer for `quads` consecutive quads.
///
/// Every quad samples the full `[0, 1]` range. Insetting the sampling rect to
/// avoid texel bleeding is a texture filtering concern and is not done here.
pub fn quad_texcoords(quads: usize) -> Vec<TileVertex> {
    QUAD_TEXCOORDS.iter().copied().cycle().take(quads * VERTICES_PER_QUAD).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_two_triangle_pattern() {
        assert_eq!(quad_indices(2), vec![0, 1, 2, 2, 1, 3, 4, 5, 6, 6, 5, 7]);
    }

    #[test]
    fn indices_scale_with_quad_count() {
        let idx = quad_indices(80);
        assert_eq!(idx.len(), 480);
        assert_eq!(*idx.iter().max().unwrap(), 319);
    }

    #[test]
    fn texcoords_repeat_per_quad() {
        let uv = quad_texcoords(3);
        assert_eq!(uv.len(), 12);
        assert_eq!(&uv[4..8], &QUAD_TEXCOORDS);
    }

    #[test]
    fn vertex_is_two_packed_floats() {
        assert_eq!(std::mem::size_of::<TileVertex>(), 8);
        let v = [TileVertex::new(1.0, 2.0), TileVertex::new(3.0, 4.0)];
        let floats: &[f32] = bytemuck::cast_slice(&v);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }
}
