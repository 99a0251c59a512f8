//! Render-facing output.
//!
//! The engine never talks to a GPU. It fills a [`TileMesh`] per frame and
//! hands it to a [`VertexSink`] together with the quad index buffer and the
//! view-projection matrix.
//!
//! Convention:
//! - 4 vertices per tile: top-left, bottom-left, top-right, bottom-right.
//! - 2 triangles per tile: `(0, 1, 2)` and `(2, 1, 3)`.

mod mesh;
mod sink;
mod vertex;

pub use mesh::TileMesh;
pub use sink::{FrameOutput, RecordingSink, VertexSink};
pub use vertex::{
    quad_indices, quad_texcoords, TileVertex, INDICES_PER_QUAD, QUAD_INDICES, QUAD_TEXCOORDS,
    VERTICES_PER_QUAD,
};
