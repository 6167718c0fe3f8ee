pub use kurbo::{Point, Rect};

/// Axis-aligned rectangle in grid-cell space.
///
/// `row`/`col` address the top-left cell; `w`/`h` are spans in cells. The rectangle covers
/// rows `[row, row + h)` and columns `[col, col + w)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CellRect {
    /// Top row (0-based).
    pub row: usize,
    /// Left column (0-based).
    pub col: usize,
    /// Width in cells.
    pub w: usize,
    /// Height in cells.
    pub h: usize,
}

impl CellRect {
    /// Build a rectangle anchored at `(row, col)` spanning `w x h` cells.
    pub fn new(row: usize, col: usize, w: usize, h: usize) -> Self {
        Self { row, col, w, h }
    }

    /// One past the rightmost column.
    pub fn right(self) -> usize {
        self.col.saturating_add(self.w)
    }

    /// One past the bottom row.
    pub fn bottom(self) -> usize {
        self.row.saturating_add(self.h)
    }

    /// Number of cells covered.
    pub fn area(self) -> usize {
        self.w.saturating_mul(self.h)
    }

    /// True when both rectangles share at least one cell.
    pub fn intersects(self, other: CellRect) -> bool {
        if self.area() == 0 || other.area() == 0 {
            return false;
        }
        self.col < other.right()
            && other.col < self.right()
            && self.row < other.bottom()
            && other.row < self.bottom()
    }

    /// Iterate covered cells as `(row, col)` in row-major order.
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        (self.row..self.bottom()).flat_map(move |r| (self.col..self.right()).map(move |c| (r, c)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
