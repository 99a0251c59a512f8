use crate::coords::Vec2;
use crate::error::{Error, Result};

use super::Matrix;

/// Save/restore stack of transforms.
///
/// `current` is the live top; [`save`](Self::save) pushes a snapshot of it
/// and [`restore`](Self::restore) pops the snapshot back. The stack only
/// holds transform state, never tile or camera data.
///
/// Calls must be balanced within a frame:
///
/// ```
/// # use tilesnap_engine::transform::TransformStack;
/// let mut stack = TransformStack::new();
/// stack.save();
/// stack.translate(-100.0, 0.0);
/// // ... transform geometry with stack.current() ...
/// stack.restore()?;
/// stack.ensure_balanced()?;
/// # Ok::<(), tilesnap_engine::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    current: Matrix,
    stack: Vec<Matrix>,
}

impl TransformStack {
    /// Creates a stack whose base transform is identity.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stack whose base transform is `base`.
    #[inline]
    pub fn with_base(base: Matrix) -> Self {
        Self { current: base, stack: Vec::new() }
    }

    #[inline]
    pub fn current(&self) -> &Matrix {
        &self.current
    }

    /// Number of open `save()` calls.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty()
    }

    /// Frame-boundary check: errors if any `save()` is still open.
    pub fn ensure_balanced(&self) -> Result<()> {
        if self.is_balanced() {
            Ok(())
        } else {
            Err(Error::UnbalancedStack { depth: self.depth() })
        }
    }

    /// Pushes a copy of the current transform.
    #[inline]
    pub fn save(&mut self) {
        self.stack.push(self.current);
    }

    /// Pops the most recent snapshot into `current`.
    ///
    /// Fails with [`Error::StackUnderflow`] when there is no matching `save()`;
    /// `current` is left untouched in that case.
    pub fn restore(&mut self) -> Result<()> {
        match self.stack.pop() {
            Some(mat) => {
                self.current = mat;
                Ok(())
            }
            None => {
                log::error!("TransformStack::restore called without matching save");
                Err(Error::StackUnderflow)
            }
        }
    }

    /// Runs `f` inside a save/restore bracket.
    ///
    /// The bracket is closed even when `f` fails; the closure's error wins.
    pub fn scoped<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut TransformStack) -> Result<T>,
    {
        self.save();
        let depth = self.depth();
        let out = f(self);
        if self.depth() < depth {
            // The closure popped our snapshot (or an outer one).
            return out.and(Err(Error::StackUnderflow));
        }
        if self.depth() > depth {
            let open = self.depth() - depth;
            self.stack.truncate(depth);
            self.restore()?;
            return out.and(Err(Error::UnbalancedStack { depth: open }));
        }
        self.restore()?;
        out
    }

    #[inline]
    pub fn translate(&mut self, x: f32, y: f32) -> &mut Self {
        self.current.translate(x, y);
        self
    }

    #[inline]
    pub fn scale(&mut self, x: f32, y: f32) -> &mut Self {
        self.current.scale(x, y);
        self
    }

    #[inline]
    pub fn rotate(&mut self, radians: f32) -> &mut Self {
        self.current.rotate(radians);
        self
    }

    /// Transforms `v` by the current top.
    #[inline]
    pub fn transform_point(&self, v: Vec2) -> Vec2 {
        self.current.multiply_vector(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_restore_leaves_current_identical() {
        let mut s = TransformStack::new();
        s.translate(12.5, -3.0).rotate(0.4).scale(1.5, 2.0);
        let before = *s.current();

        s.save();
        s.restore().unwrap();

        assert_eq!(*s.current(), before);
    }

    #[test]
    fn restore_undoes_mutations_made_after_save() {
        let mut s = TransformStack::new();
        s.translate(1.0, 2.0);
        let before = *s.current();

        s.save();
        s.scale(3.0, 3.0).translate(10.0, 0.0).rotate(1.0);
        assert_ne!(*s.current(), before);
        s.restore().unwrap();

        assert_eq!(*s.current(), before);
    }

    #[test]
    fn nested_scopes_restore_in_lifo_order() {
        let mut s = TransformStack::new();
        s.save();
        s.translate(10.0, 0.0);
        let outer = *s.current();
        s.save();
        s.translate(0.0, 5.0);
        assert_eq!(s.transform_point(Vec2::zero()), Vec2::new(10.0, 5.0));
        assert_eq!(s.depth(), 2);

        s.restore().unwrap();
        assert_eq!(*s.current(), outer);
        s.restore().unwrap();
        assert_eq!(*s.current(), Matrix::identity());
        assert!(s.is_balanced());
    }

    #[test]
    fn restore_without_save_underflows() {
        let mut s = TransformStack::new();
        s.translate(4.0, 4.0);
        let before = *s.current();
        assert_eq!(s.restore(), Err(Error::StackUnderflow));
        assert_eq!(*s.current(), before);
    }

    #[test]
    fn ensure_balanced_reports_open_saves() {
        let mut s = TransformStack::new();
        s.save();
        s.save();
        assert_eq!(s.ensure_balanced(), Err(Error::UnbalancedStack { depth: 2 }));
    }

    #[test]
    fn with_base_keeps_base_after_frames() {
        let base = Matrix::from_translation(7.0, 7.0);
        let mut s = TransformStack::with_base(base);
        s.save();
        s.scale(2.0, 2.0);
        s.restore().unwrap();
        assert_eq!(*s.current(), base);
    }

    // ── scoped ────────────────────────────────────────────────────────────

    #[test]
    fn scoped_restores_after_success() {
        let mut s = TransformStack::new();
        let p = s
            .scoped(|s| {
                s.translate(3.0, 4.0);
                Ok(s.transform_point(Vec2::zero()))
            })
            .unwrap();
        assert_eq!(p, Vec2::new(3.0, 4.0));
        assert_eq!(*s.current(), Matrix::identity());
        assert!(s.is_balanced());
    }

    #[test]
    fn scoped_restores_after_error() {
        let mut s = TransformStack::new();
        let r: Result<()> = s.scoped(|s| {
            s.scale(0.0, 0.0);
            s.current().affine_inverse().map(|_| ())
        });
        assert!(matches!(r, Err(Error::SingularTransform { .. })));
        assert_eq!(*s.current(), Matrix::identity());
        assert!(s.is_balanced());
    }

    #[test]
    fn scoped_flags_saves_leaked_by_the_closure() {
        let mut s = TransformStack::new();
        let r = s.scoped(|s| {
            s.save();
            s.translate(1.0, 0.0);
            Ok(())
        });
        assert_eq!(r, Err(Error::UnbalancedStack { depth: 1 }));
        assert_eq!(*s.current(), Matrix::identity());
        assert!(s.is_balanced());
    }

    #[test]
    fn scoped_flags_closure_that_pops_its_own_snapshot() {
        let mut s = TransformStack::new();
        let r = s.scoped(|s| {
            s.translate(5.0, 0.0);
            s.restore()
        });
        assert_eq!(r, Err(Error::StackUnderflow));
        assert_eq!(*s.current(), Matrix::identity());
        assert!(s.is_balanced());
    }

    #[test]
    fn scoped_keeps_the_closure_error_when_it_also_pops() {
        let mut s = TransformStack::new();
        s.save();
        let r: Result<()> = s.scoped(|s| {
            s.restore()?;
            s.restore()?;
            Err(Error::SingularTransform { determinant: 0.0 })
        });
        assert_eq!(r, Err(Error::SingularTransform { determinant: 0.0 }));
        assert!(s.is_balanced());
    }
}
