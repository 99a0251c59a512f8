use crate::error::{Error, Result};

use super::seams::SeamReport;
use super::Tile;

/// How tile edges are computed.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum EdgeMode {
    /// Each tile derives its edges from its own center (`center ± half`).
    ///
    /// Neighbouring tiles reach their common edge through different float
    /// operations, so the two values are not guaranteed to be bit-identical.
    /// Kept to reproduce the seam defect.
    Independent,

    /// Edges are read from boundary tables computed once per grid; adjacent
    /// tiles share the exact stored value.
    #[default]
    Shared,
}

/// Produces the tile rectangles of a `rows × columns` grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TileGridGenerator {
    rows: usize,
    columns: usize,
    tile_width: f32,
    tile_height: f32,
}

impl TileGridGenerator {
    /// Validates the layout. Rows and columns must be at least 1; tile sizes
    /// must be finite and positive.
    pub fn new(rows: usize, columns: usize, tile_width: f32, tile_height: f32) -> Result<Self> {
        let size_ok = |v: f32| v.is_finite() && v > 0.0;
        if rows == 0 || columns == 0 || !size_ok(tile_width) || !size_ok(tile_height) {
            return Err(Error::InvalidGrid { rows, columns, tile_width, tile_height });
        }
        Ok(Self { rows, columns, tile_width, tile_height })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn generate(&self, mode: EdgeMode) -> TileGrid {
        let tiles = match mode {
            EdgeMode::Independent => self.independent_edges(),
            EdgeMode::Shared => self.shared_edges(),
        };
        log::debug!(
            "generated {} tiles ({}x{}, {}x{} px, {:?} edges)",
            tiles.len(),
            self.rows,
            self.columns,
            self.tile_width,
            self.tile_height,
            mode
        );
        TileGrid { rows: self.rows, columns: self.columns, mode, tiles }
    }

    fn independent_edges(&self) -> Vec<Tile> {
        let half_w = self.tile_width / 2.0;
        let half_h = self.tile_height / 2.0;

        let mut tiles = Vec::with_capacity(self.rows * self.columns);
        for x in 0..self.columns {
            for y in 0..self.rows {
                let center_x = x as f32 * self.tile_width + half_w;
                let center_y = y as f32 * self.tile_height + half_h;
                tiles.push(Tile::new(
                    center_x - half_w,
                    center_x + half_w,
                    center_y - half_h,
                    center_y + half_h,
                ));
            }
        }
        tiles
    }

    fn shared_edges(&self) -> Vec<Tile> {
        let xs: Vec<f32> = (0..=self.columns).map(|i| i as f32 * self.tile_width).collect();
        let ys: Vec<f32> = (0..=self.rows).map(|j| j as f32 * self.tile_height).collect();

        let mut tiles = Vec::with_capacity(self.rows * self.columns);
        for x in 0..self.columns {
            for y in 0..self.rows {
                tiles.push(Tile::new(xs[x], xs[x + 1], ys[y], ys[y + 1]));
            }
        }
        tiles
    }
}

/// Generated tiles in column-major order.
///
/// All rows of column 0 come first, then column 1, and so on; tile
/// `(column, row)` sits at index `column * rows + row`. Vertex-buffer slots
/// are assigned in this order.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    rows: usize,
    columns: usize,
    mode: EdgeMode,
    tiles: Vec<Tile>,
}

impl TileGrid {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn mode(&self) -> EdgeMode {
        self.mode
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at grid position `(column, row)`.
    #[inline]
    pub fn tile(&self, column: usize, row: usize) -> Option<&Tile> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.tiles.get(column * self.rows + row)
    }

    /// Lists every shared edge whose two stored values differ.
    pub fn seams(&self) -> SeamReport {
        SeamReport::scan(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: usize, columns: usize, w: f32, h: f32, mode: EdgeMode) -> TileGrid {
        TileGridGenerator::new(rows, columns, w, h).unwrap().generate(mode)
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn rejects_empty_or_non_positive_layouts() {
        assert!(TileGridGenerator::new(0, 4, 64.0, 48.0).is_err());
        assert!(TileGridGenerator::new(4, 0, 64.0, 48.0).is_err());
        assert!(TileGridGenerator::new(4, 4, 0.0, 48.0).is_err());
        assert!(TileGridGenerator::new(4, 4, 64.0, -1.0).is_err());
        assert!(TileGridGenerator::new(4, 4, f32::INFINITY, 48.0).is_err());
    }

    // ── shared edges ──────────────────────────────────────────────────────

    #[test]
    fn default_layout_has_eighty_tiles_and_known_cell() {
        let g = grid(4, 20, 64.0, 48.0, EdgeMode::Shared);
        assert_eq!(g.len(), 80);

        let t = g.tile(3, 1).unwrap();
        assert_eq!(*t, Tile::new(192.0, 256.0, 48.0, 96.0));
        assert_eq!(g.tiles()[3 * 4 + 1], *t);
    }

    #[test]
    fn enumeration_is_column_major_and_stable() {
        let a = grid(3, 5, 10.0, 10.0, EdgeMode::Shared);
        let b = grid(3, 5, 10.0, 10.0, EdgeMode::Shared);
        assert_eq!(a, b);

        // Rows advance first within a column.
        assert_eq!(a.tiles()[0].top, 0.0);
        assert_eq!(a.tiles()[1].top, 10.0);
        assert_eq!(a.tiles()[1].left, 0.0);
        assert_eq!(a.tiles()[3].left, 10.0);
        assert_eq!(a.tiles()[3].top, 0.0);
    }

    #[test]
    fn shared_edges_are_bit_identical() {
        let layouts = [
            (4, 20, 64.0, 48.0),
            (3, 20, 33.3, 17.3),
            (7, 13, 0.1, 0.7),
            (1, 50, 10.1, 1.1),
            (9, 1, 0.3, 33.3),
        ];
        for (rows, columns, w, h) in layouts {
            let g = grid(rows, columns, w, h, EdgeMode::Shared);
            for c in 0..columns {
                for r in 0..rows {
                    let t = g.tile(c, r).unwrap();
                    if let Some(right) = g.tile(c + 1, r) {
                        assert_eq!(t.right.to_bits(), right.left.to_bits());
                    }
                    if let Some(below) = g.tile(c, r + 1) {
                        assert_eq!(t.bottom.to_bits(), below.top.to_bits());
                    }
                }
            }
            assert!(g.seams().is_clean(), "seams in {rows}x{columns} {w}x{h}");
        }
    }

    // ── independent edges ─────────────────────────────────────────────────

    #[test]
    fn independent_edges_match_on_exact_sizes() {
        // Power-of-two friendly sizes round-trip exactly through center ± half.
        let g = grid(4, 20, 64.0, 48.0, EdgeMode::Independent);
        assert!(g.seams().is_clean());
        assert_eq!(g, TileGrid { mode: EdgeMode::Independent, ..grid(4, 20, 64.0, 48.0, EdgeMode::Shared) });
    }

    #[test]
    fn independent_edges_crack_on_inexact_sizes() {
        let g = grid(1, 20, 33.3, 33.3, EdgeMode::Independent);
        let report = g.seams();
        assert!(!report.is_clean());
        assert!(report.horizontal().count() > 0);
        assert!(report.max_gap() > 0.0);

        // The same layout with shared edges is clean.
        assert!(grid(1, 20, 33.3, 33.3, EdgeMode::Shared).seams().is_clean());
    }

    #[test]
    fn tile_out_of_range_is_none() {
        let g = grid(2, 2, 1.0, 1.0, EdgeMode::Shared);
        assert!(g.tile(2, 0).is_none());
        assert!(g.tile(0, 2).is_none());
    }
}
