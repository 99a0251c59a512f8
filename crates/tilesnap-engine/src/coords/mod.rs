//! Coordinate types shared by the transform, grid and snapping code.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Device pixels are reached by multiplying with the device-pixel ratio.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
