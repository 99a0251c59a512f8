use crate::coords::{Vec2, Viewport};
use crate::error::Result;
use crate::grid::Tile;
use crate::transform::Matrix;

/// Rounding direction onto the device-pixel lattice.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SnapDirection {
    /// Leading (top/left) edges.
    Floor,
    /// Trailing (bottom/right) edges.
    Ceil,
}

/// Snaps world coordinates to the nearest physical screen pixel.
///
/// `transform` maps the snapping space (logical screen pixels) to world
/// space. A coordinate is taken back through the inverse, scaled to device
/// pixels, biased by half a pixel, rounded, and mapped forward again.
///
/// With [`SnapDirection::Floor`] this is a projection: snapping a snapped
/// coordinate returns it unchanged. [`SnapDirection::Ceil`] moves a point that
/// already sits on the lattice one device pixel further; that is what keeps a
/// floor/ceil pair from collapsing any tile with positive extent. Tiles of
/// zero extent may collapse and are not special-cased.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelSnapper {
    transform: Matrix,
    inverse: Matrix,
    logical: Vec2,
    physical: Vec2,
}

impl PixelSnapper {
    /// Validates the inputs and caches the inverse transform.
    ///
    /// Singular transforms and invalid resolutions are rejected here so the
    /// per-vertex [`snap`](Self::snap) cannot fail.
    pub fn new(transform: Matrix, resolution: Viewport, device_pixel_ratio: f32) -> Result<Self> {
        resolution.validate(device_pixel_ratio)?;
        let inverse = transform.affine_inverse()?;
        let physical = resolution.scaled(device_pixel_ratio);

        log::trace!(
            "pixel snapper: {}x{} logical -> {}x{} physical",
            resolution.width,
            resolution.height,
            physical.width,
            physical.height
        );

        Ok(Self {
            transform,
            inverse,
            logical: resolution.size(),
            physical: physical.size(),
        })
    }

    #[inline]
    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    pub fn snap(&self, direction: SnapDirection, coord: Vec2) -> Vec2 {
        let local = self.inverse.multiply_vector(coord);

        let screen = local.div_components(self.logical).mul_components(self.physical);
        let biased = screen + Vec2::new(0.5, 0.5);
        let pixel = match direction {
            SnapDirection::Floor => biased.floor(),
            SnapDirection::Ceil => biased.ceil(),
        };

        let back = pixel.div_components(self.physical).mul_components(self.logical);
        self.transform.multiply_vector(back)
    }

    /// Floors the top-left corner and ceils the bottom-right corner.
    pub fn snap_tile(&self, tile: &Tile) -> Tile {
        Tile::from_corners(
            self.snap(SnapDirection::Floor, tile.top_left()),
            self.snap(SnapDirection::Ceil, tile.bottom_right()),
        )
    }
}

/// One-shot form of [`PixelSnapper::snap`].
pub fn nudge_toward(
    direction: SnapDirection,
    transform: &Matrix,
    coord: Vec2,
    resolution: Viewport,
    device_pixel_ratio: f32,
) -> Result<Vec2> {
    Ok(PixelSnapper::new(*transform, resolution, device_pixel_ratio)?.snap(direction, coord))
}
