//! Tile grid generation.
//!
//! Two edge strategies are supported side by side so they can be compared:
//! - [`EdgeMode::Independent`] derives every tile from its own center and
//!   reproduces the hairline cracks between tiles.
//! - [`EdgeMode::Shared`] reads edges from boundary tables computed once, so
//!   neighbouring tiles hold the exact same float for their common edge.
//!
//! [`TileGrid::seams`] reports the mismatched edges of a generated grid.

mod generator;
mod seams;
mod tile;

pub use generator::{EdgeMode, TileGrid, TileGridGenerator};
pub use seams::{EdgeAxis, Seam, SeamReport};
pub use tile::Tile;
