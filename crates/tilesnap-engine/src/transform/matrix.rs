use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::error::{Axis, Error, Result};

/// 4x4 matrix in column-major order.
///
/// ```text
/// | data[0] | data[4] | data[8]  | data[12] |
/// | data[1] | data[5] | data[9]  | data[13] |
/// | data[2] | data[6] | data[10] | data[14] |
/// | data[3] | data[7] | data[11] | data[15] |
/// ```
///
/// Used as a 2D affine transform: rotation/scale live in the upper-left 2x2,
/// translation in `data[12]`/`data[13]`. The 2D operations never write the z
/// row or column, so the layout stays directly uploadable as a projection
/// uniform.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Matrix {
    pub data: [f32; 16],
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    #[rustfmt::skip]
    pub const IDENTITY: Matrix = Matrix {
        data: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Orthographic (flat, non-perspective) projection.
    ///
    /// Maps `left → -1`, `right → +1`, `bottom → -1`, `top → +1` and
    /// `near → -1`, `far → +1`. Passing `bottom > top` gives the usual
    /// y-down screen layout.
    ///
    /// Bounds that collapse an axis are rejected here so the error shows up
    /// at setup rather than as non-finite vertices at draw time.
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Result<Self> {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;

        if width == 0.0 || !width.is_finite() {
            return Err(Error::DegenerateProjection { axis: Axis::X });
        }
        if height == 0.0 || !height.is_finite() {
            return Err(Error::DegenerateProjection { axis: Axis::Y });
        }
        if depth == 0.0 || !depth.is_finite() {
            return Err(Error::DegenerateProjection { axis: Axis::Z });
        }

        let mut mat = Self::identity();
        mat.data[0] = 2.0 / width;
        mat.data[5] = 2.0 / height;
        mat.data[10] = -2.0 / depth;

        mat.data[12] = -(right + left) / width;
        mat.data[13] = -(top + bottom) / height;
        mat.data[14] = -(far + near) / depth;

        // Tiny extents overflow the scale terms even when non-zero.
        let d = &mat.data;
        let terms = [
            (Axis::X, d[0], d[12]),
            (Axis::Y, d[5], d[13]),
            (Axis::Z, d[10], d[14]),
        ];
        for (axis, scale, offset) in terms {
            if !scale.is_finite() || !offset.is_finite() {
                return Err(Error::DegenerateProjection { axis });
            }
        }
        Ok(mat)
    }

    /// Pure translation matrix.
    #[inline]
    pub fn from_translation(x: f32, y: f32) -> Self {
        let mut mat = Self::identity();
        mat.translate(x, y);
        mat
    }

    /// Applies scaling on top of the current transform (`M = M · S`).
    pub fn scale(&mut self, x: f32, y: f32) -> &mut Self {
        for i in 0..4 {
            self.data[i] *= x;
            self.data[4 + i] *= y;
        }
        self
    }

    /// Applies a translation on top of the current transform (`M = M · T`).
    pub fn translate(&mut self, x: f32, y: f32) -> &mut Self {
        for i in 0..4 {
            self.data[12 + i] += self.data[i] * x + self.data[4 + i] * y;
        }
        self
    }

    /// Applies a counter-clockwise rotation on top of the current transform
    /// (`M = M · R`). The translation column is left as is.
    pub fn rotate(&mut self, radians: f32) -> &mut Self {
        let (sin, cos) = radians.sin_cos();
        for i in 0..4 {
            let c0 = self.data[i];
            let c1 = self.data[4 + i];
            self.data[i] = c0 * cos + c1 * sin;
            self.data[4 + i] = c1 * cos - c0 * sin;
        }
        self
    }

    /// Transforms the point `(x, y, 0, 1)` and returns its `(x, y)`.
    #[inline]
    pub fn multiply_vector(&self, v: Vec2) -> Vec2 {
        let d = &self.data;
        Vec2::new(
            d[0] * v.x + d[4] * v.y + d[12],
            d[1] * v.x + d[5] * v.y + d[13],
        )
    }

    /// Determinant of the upper-left 2x2 (the 2D linear part).
    #[inline]
    pub fn determinant_2d(&self) -> f32 {
        self.data[0] * self.data[5] - self.data[4] * self.data[1]
    }

    /// Inverse of the 2D affine part. The z row and column of the result are
    /// identity.
    ///
    /// Fails with [`Error::SingularTransform`] if the linear part has a zero
    /// (or non-finite) determinant, e.g. after `scale(0.0, _)`, or if the
    /// inverse itself is not finite.
    pub fn affine_inverse(&self) -> Result<Self> {
        let det = self.determinant_2d();
        if det == 0.0 || !det.is_finite() {
            return Err(Error::SingularTransform { determinant: det });
        }

        let d = &self.data;
        let (a, b, c, e) = (d[0], d[4], d[1], d[5]);
        let (tx, ty) = (d[12], d[13]);

        let ia = e / det;
        let ib = -b / det;
        let ic = -c / det;
        let ie = a / det;

        let mut inv = Self::identity();
        inv.data[0] = ia;
        inv.data[1] = ic;
        inv.data[4] = ib;
        inv.data[5] = ie;
        inv.data[12] = -(ia * tx + ib * ty);
        inv.data[13] = -(ic * tx + ie * ty);

        // A subnormal determinant passes the zero check but overflows here.
        if !inv.is_finite() {
            return Err(Error::SingularTransform { determinant: det });
        }
        Ok(inv)
    }

    /// Raw bytes for a uniform upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    /// Full 4x4 product `self · rhs`.
    fn mul(self, rhs: Matrix) -> Matrix {
        let mut out = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.data[k * 4 + row] * rhs.data[col * 4 + k];
                }
                out[col * 4 + row] = sum;
            }
        }
        Matrix { data: out }
    }
}
