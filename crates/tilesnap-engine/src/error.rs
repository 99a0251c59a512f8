use thiserror::Error;

/// Axis of a projection box.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
            Axis::Z => f.write_str("z"),
        }
    }
}

/// Errors surfaced by the transform and tile subsystems.
///
/// Everything here is either a setup-time configuration error or a frame
/// integrity error. None of them is recoverable mid-frame.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// `restore()` was called without a matching `save()`.
    #[error("transform stack underflow: restore without matching save")]
    StackUnderflow,

    /// Saves were left open at a frame boundary.
    #[error("transform stack unbalanced at frame boundary ({depth} open save(s))")]
    UnbalancedStack { depth: usize },

    /// Orthographic bounds collapse an axis to zero extent.
    #[error("degenerate projection: zero extent on {axis} axis")]
    DegenerateProjection { axis: Axis },

    /// The 2D linear part of a matrix cannot be inverted.
    #[error("singular transform (determinant {determinant})")]
    SingularTransform { determinant: f32 },

    #[error("invalid grid: {rows}x{columns} tiles of {tile_width}x{tile_height}")]
    InvalidGrid {
        rows: usize,
        columns: usize,
        tile_width: f32,
        tile_height: f32,
    },

    #[error("invalid resolution {width}x{height} at device pixel ratio {ratio}")]
    InvalidResolution { width: f32, height: f32, ratio: f32 },

    /// A scene vector (grid origin, camera velocity) is NaN or infinite.
    #[error("non-finite {field}: ({x}, {y})")]
    NonFiniteVector { field: &'static str, x: f32, y: f32 },
}

pub type Result<T> = std::result::Result<T, Error>;
