//! Affine transforms.
//!
//! `Matrix` is a column-major 4x4 used as a 2D affine transform so it can be
//! uploaded unchanged as a projection uniform. `TransformStack` layers
//! save/restore scopes over it the way graphics-API matrix stacks do.

mod matrix;
mod stack;

pub use matrix::Matrix;
pub use stack::TransformStack;
