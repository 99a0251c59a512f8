use crate::coords::Vec2;

/// Axis-aligned tile rectangle in grid-local units (before any transform).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Tile {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Tile {
    #[inline]
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right, self.bottom)
    }

    /// Corners in vertex-buffer order: top-left, bottom-left, top-right,
    /// bottom-right.
    #[inline]
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left, self.top),
            Vec2::new(self.left, self.bottom),
            Vec2::new(self.right, self.top),
            Vec2::new(self.right, self.bottom),
        ]
    }

    /// Rebuilds a tile from its top-left and bottom-right corners.
    #[inline]
    pub fn from_corners(top_left: Vec2, bottom_right: Vec2) -> Self {
        Self::new(top_left.x, bottom_right.x, top_left.y, bottom_right.y)
    }
}
