//! Device-pixel snapping.
//!
//! Camera pans at fractional offsets put tile edges between physical pixels,
//! where they shimmer or open one-pixel gaps. Snapping moves each edge onto
//! the device-pixel lattice in screen space and maps it back to world space.

mod pixel;

pub use pixel::{nudge_toward, PixelSnapper, SnapDirection};
