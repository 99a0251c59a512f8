//! tilesnap engine crate.
//!
//! Seam-free tile geometry for pixel-art rendering: affine transforms with a
//! save/restore stack, tile-grid generation with shared edges, and
//! device-pixel snapping. The crate computes matrices and vertex positions
//! only; uploading and drawing them is left to a [`render::VertexSink`].

pub mod coords;
pub mod frame;
pub mod grid;
pub mod logging;
pub mod render;
pub mod snap;
pub mod time;
pub mod transform;

mod error;

pub use error::{Axis, Error, Result};
