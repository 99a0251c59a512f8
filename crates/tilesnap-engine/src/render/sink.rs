use crate::coords::Viewport;
use crate::transform::Matrix;

use super::vertex::TileVertex;

/// Everything the external renderer needs to draw one frame of tiles.
///
/// Vertices are world-space positions, four per tile in grid order.
/// `view_projection` takes world space to clip space and is laid out for a
/// column-major `mat4` uniform.
#[derive(Debug, Clone, Copy)]
pub struct FrameOutput<'a> {
    pub vertices: &'a [TileVertex],
    pub indices: &'a [u32],
    pub view_projection: Matrix,
    /// Render-target size in device pixels.
    pub physical: Viewport,
}

impl FrameOutput<'_> {
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.indices.len() / super::vertex::INDICES_PER_QUAD
    }
}

/// Consumer of per-frame vertex data (GPU upload, capture, ...).
pub trait VertexSink {
    fn submit(&mut self, frame: &FrameOutput<'_>);
}

/// Sink that keeps a copy of the last submitted frame.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub vertices: Vec<TileVertex>,
    pub indices: Vec<u32>,
    pub view_projection: Matrix,
    pub physical: Viewport,
    pub frames: u64,
}

impl VertexSink for RecordingSink {
    fn submit(&mut self, frame: &FrameOutput<'_>) {
        self.vertices.clear();
        self.vertices.extend_from_slice(frame.vertices);
        self.indices.clear();
        self.indices.extend_from_slice(frame.indices);
        self.view_projection = frame.view_projection;
        self.physical = frame.physical;
        self.frames += 1;
    }
}
