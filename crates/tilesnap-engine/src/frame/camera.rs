use std::time::Duration;

use crate::coords::{Vec2, Viewport};
use crate::transform::Matrix;

/// World position at the center of the screen.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Camera {
    pub position: Vec2,
}

impl Camera {
    #[inline]
    pub const fn at(position: Vec2) -> Self {
        Self { position }
    }

    /// Camera after moving at `velocity` (units/second) for `elapsed`.
    ///
    /// Any elapsed time is taken as is; clamping long stalls is the frame
    /// clock's job.
    #[inline]
    pub fn advanced(self, velocity: Vec2, elapsed: Duration) -> Self {
        Self::at(self.position + velocity * elapsed.as_secs_f32())
    }

    #[inline]
    pub fn update(&mut self, velocity: Vec2, elapsed: Duration) {
        *self = self.advanced(velocity, elapsed);
    }

    /// World position of the screen's top-left corner.
    #[inline]
    pub fn screen_origin(&self, viewport: Viewport) -> Vec2 {
        self.position - viewport.center()
    }

    /// Maps logical screen pixels to world units.
    pub fn screen_to_world(&self, viewport: Viewport) -> Matrix {
        let origin = self.screen_origin(viewport);
        Matrix::from_translation(origin.x, origin.y)
    }
}
