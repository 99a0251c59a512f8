use crate::coords::{Vec2, Viewport};
use crate::error::{Error, Result};
use crate::grid::{EdgeMode, TileGridGenerator};
use crate::transform::Matrix;

/// Post-processing applied to every final vertex position.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum VertexPolicy {
    /// Positions are passed through unchanged.
    #[default]
    Exact,
    /// Positions are truncated toward zero after all transforms.
    ///
    /// Lossy: drops the fractional camera offset and any sub-unit tile
    /// geometry. Applied uniformly to every vertex.
    Truncate,
}

/// Scene configuration supplied once at initialization.
///
/// Defaults reproduce the reference scene: an 800x600 logical viewport with a
/// 4x20 grid of 64x48 tiles, shared edges, and a camera panning right at
/// 10 px/s.
///
/// Keep this structure explicit; frame building reads nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Logical viewport resolution.
    pub viewport: Viewport,

    /// Device pixels per logical pixel reported by the display.
    pub device_pixel_ratio: f32,

    /// Render at physical resolution. When off, the ratio is treated as 1.
    pub hidpi: bool,

    pub rows: usize,
    pub columns: usize,
    pub tile_width: f32,
    pub tile_height: f32,

    /// World-space position of the grid's top-left corner.
    pub grid_origin: Vec2,

    pub edge_mode: EdgeMode,

    /// Snap tile edges to the device-pixel lattice each frame.
    pub pixel_snap: bool,

    pub vertex_policy: VertexPolicy,

    /// Camera velocity in world units per second.
    pub camera_velocity: Vec2,

    /// Orthographic depth range `(near, far)` of the projection uniform.
    pub depth_range: (f32, f32),
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(800.0, 600.0),
            device_pixel_ratio: 1.0,
            hidpi: true,
            rows: 4,
            columns: 20,
            tile_width: 64.0,
            tile_height: 48.0,
            grid_origin: Vec2::zero(),
            edge_mode: EdgeMode::Shared,
            pixel_snap: false,
            vertex_policy: VertexPolicy::Exact,
            camera_velocity: Vec2::new(10.0, 0.0),
            depth_range: (400.0, -400.0),
        }
    }
}

impl SceneConfig {
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Viewport::new(width, height);
        self
    }

    pub fn with_device_pixel_ratio(mut self, ratio: f32) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    pub fn with_hidpi(mut self, hidpi: bool) -> Self {
        self.hidpi = hidpi;
        self
    }

    pub fn with_grid(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn with_tile_size(mut self, width: f32, height: f32) -> Self {
        self.tile_width = width;
        self.tile_height = height;
        self
    }

    pub fn with_grid_origin(mut self, x: f32, y: f32) -> Self {
        self.grid_origin = Vec2::new(x, y);
        self
    }

    pub fn with_edge_mode(mut self, mode: EdgeMode) -> Self {
        self.edge_mode = mode;
        self
    }

    pub fn with_pixel_snap(mut self, snap: bool) -> Self {
        self.pixel_snap = snap;
        self
    }

    pub fn with_vertex_policy(mut self, policy: VertexPolicy) -> Self {
        self.vertex_policy = policy;
        self
    }

    pub fn with_camera_velocity(mut self, x: f32, y: f32) -> Self {
        self.camera_velocity = Vec2::new(x, y);
        self
    }

    /// Device-pixel ratio actually used for snapping and the render target.
    #[inline]
    pub fn effective_pixel_ratio(&self) -> f32 {
        if self.hidpi { self.device_pixel_ratio } else { 1.0 }
    }

    /// Render-target size in device pixels.
    #[inline]
    pub fn physical_viewport(&self) -> Viewport {
        self.viewport.scaled(self.effective_pixel_ratio())
    }

    /// Grid generator for this layout.
    pub fn grid_generator(&self) -> Result<TileGridGenerator> {
        TileGridGenerator::new(self.rows, self.columns, self.tile_width, self.tile_height)
    }

    /// Screen-space orthographic projection over the logical viewport.
    pub fn projection(&self) -> Result<Matrix> {
        let (near, far) = self.depth_range;
        Matrix::ortho(0.0, self.viewport.width, self.viewport.height, 0.0, near, far)
    }

    /// Rejects every configuration error that would otherwise surface at
    /// draw time.
    pub fn validate(&self) -> Result<()> {
        self.viewport.validate(self.device_pixel_ratio)?;
        self.grid_generator()?;
        self.projection()?;

        let vectors = [
            ("grid origin", self.grid_origin),
            ("camera velocity", self.camera_velocity),
        ];
        for (field, v) in vectors {
            if !v.is_finite() {
                return Err(Error::NonFiniteVector { field, x: v.x, y: v.y });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SceneConfig::default().validate().is_ok());
    }

    #[test]
    fn hidpi_flag_gates_pixel_ratio() {
        let cfg = SceneConfig::default().with_device_pixel_ratio(2.0);
        assert_eq!(cfg.physical_viewport(), Viewport::new(1600.0, 1200.0));

        let cfg = cfg.with_hidpi(false);
        assert_eq!(cfg.effective_pixel_ratio(), 1.0);
        assert_eq!(cfg.physical_viewport(), Viewport::new(800.0, 600.0));
    }

    #[test]
    fn validate_rejects_bad_layouts() {
        assert!(matches!(
            SceneConfig::default().with_grid(0, 20).validate(),
            Err(Error::InvalidGrid { .. })
        ));
        assert!(matches!(
            SceneConfig::default().with_tile_size(64.0, 0.0).validate(),
            Err(Error::InvalidGrid { .. })
        ));
        assert!(matches!(
            SceneConfig::default().with_viewport(0.0, 600.0).validate(),
            Err(Error::InvalidResolution { .. })
        ));
        assert!(matches!(
            SceneConfig::default().with_device_pixel_ratio(-1.0).validate(),
            Err(Error::InvalidResolution { .. })
        ));
    }

    #[test]
    fn non_finite_vectors_name_the_offending_field() {
        let err = SceneConfig::default()
            .with_grid_origin(f32::NAN, 0.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::NonFiniteVector { field: "grid origin", y, .. } if y == 0.0));

        let err = SceneConfig::default()
            .with_camera_velocity(f32::INFINITY, 0.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            Error::NonFiniteVector { field: "camera velocity", x: f32::INFINITY, y: 0.0 }
        );
    }

    #[test]
    fn degenerate_depth_range_is_rejected() {
        let cfg = SceneConfig { depth_range: (1.0, 1.0), ..SceneConfig::default() };
        assert!(matches!(cfg.validate(), Err(Error::DegenerateProjection { .. })));
    }
}
