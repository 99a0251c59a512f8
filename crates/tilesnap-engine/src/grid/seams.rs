use super::TileGrid;

/// Orientation of a shared edge.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EdgeAxis {
    /// Between `(column, row)` and `(column + 1, row)`: right vs. left.
    Horizontal,
    /// Between `(column, row)` and `(column, row + 1)`: bottom vs. top.
    Vertical,
}

/// One shared edge whose two stored values are not bit-identical.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Seam {
    pub axis: EdgeAxis,
    /// Grid position of the first (left or upper) tile.
    pub column: usize,
    pub row: usize,
    /// Edge value as stored by the first tile.
    pub first: f32,
    /// Edge value as stored by the neighbour.
    pub second: f32,
}

impl Seam {
    #[inline]
    pub fn gap(&self) -> f32 {
        (self.second - self.first).abs()
    }
}

/// Result of scanning a grid for mismatched shared edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeamReport {
    seams: Vec<Seam>,
}

impl SeamReport {
    pub(super) fn scan(grid: &TileGrid) -> Self {
        let mut seams = Vec::new();
        for column in 0..grid.columns() {
            for row in 0..grid.rows() {
                let Some(tile) = grid.tile(column, row) else { continue };

                if let Some(next) = grid.tile(column + 1, row) {
                    if tile.right.to_bits() != next.left.to_bits() {
                        seams.push(Seam {
                            axis: EdgeAxis::Horizontal,
                            column,
                            row,
                            first: tile.right,
                            second: next.left,
                        });
                    }
                }
                if let Some(below) = grid.tile(column, row + 1) {
                    if tile.bottom.to_bits() != below.top.to_bits() {
                        seams.push(Seam {
                            axis: EdgeAxis::Vertical,
                            column,
                            row,
                            first: tile.bottom,
                            second: below.top,
                        });
                    }
                }
            }
        }
        Self { seams }
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        self.seams.is_empty()
    }

    #[inline]
    pub fn seams(&self) -> &[Seam] {
        &self.seams
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.seams.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seams.is_empty()
    }

    pub fn horizontal(&self) -> impl Iterator<Item = &Seam> {
        self.seams.iter().filter(|s| s.axis == EdgeAxis::Horizontal)
    }

    pub fn vertical(&self) -> impl Iterator<Item = &Seam> {
        self.seams.iter().filter(|s| s.axis == EdgeAxis::Vertical)
    }

    /// Largest absolute gap over all seams; `0.0` for a clean grid.
    pub fn max_gap(&self) -> f32 {
        self.seams.iter().map(Seam::gap).fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{EdgeMode, TileGridGenerator};

    use super::*;

    #[test]
    fn seam_positions_point_at_the_left_tile() {
        let g = TileGridGenerator::new(1, 20, 33.3, 33.3)
            .unwrap()
            .generate(EdgeMode::Independent);
        let report = g.seams();
        for seam in report.seams() {
            assert_eq!(seam.axis, EdgeAxis::Horizontal);
            assert_eq!(seam.row, 0);
            let a = g.tile(seam.column, 0).unwrap();
            let b = g.tile(seam.column + 1, 0).unwrap();
            assert_eq!(a.right, seam.first);
            assert_eq!(b.left, seam.second);
            assert_ne!(a.right, b.left);
        }
        assert_eq!(report.vertical().count(), 0);
    }
}
