use crate::error::{Error, Result};

use super::Vec2;

/// Resolution in logical pixels.
///
/// The physical (device-pixel) resolution is derived by [`Viewport::scaled`]
/// with the display's device-pixel ratio.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Physical resolution at `ratio` device pixels per logical pixel.
    #[inline]
    pub fn scaled(self, ratio: f32) -> Self {
        Self::new(self.width * ratio, self.height * ratio)
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.size() / 2.0
    }

    /// Rejects non-finite or non-positive sizes and ratios.
    pub fn validate(self, ratio: f32) -> Result<()> {
        if self.is_valid() && ratio.is_finite() && ratio > 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidResolution {
                width: self.width,
                height: self.height,
                ratio,
            })
        }
    }
}
