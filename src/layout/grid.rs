use crate::{foundation::core::CellRect, layout::shape::Shape};

/// Row-major boolean occupancy matrix owned by a single layout pass.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    cells: Vec<bool>,
    rows: usize,
    columns: usize,
    // Every row above this one is completely occupied.
    first_open_row: usize,
    occupied: usize,
}

impl OccupancyGrid {
    /// All-free grid of `rows x columns` cells.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![false; rows.saturating_mul(columns)],
            rows,
            columns,
            first_open_row: 0,
            occupied: 0,
        }
    }

    /// Current row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of occupied cells.
    pub fn occupied_cells(&self) -> usize {
        self.occupied
    }

    /// Lowest row that still has a free cell (equals `rows()` when full).
    pub fn first_open_row(&self) -> usize {
        self.first_open_row
    }

    /// Occupancy of one cell; out-of-bounds cells report `false`.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some_and(|i| self.cells[i])
    }

    /// True when `rect` lies inside the grid and every cell in it is free.
    pub fn fits(&self, rect: CellRect) -> bool {
        rect.right() <= self.columns
            && rect.bottom() <= self.rows
            && self.blocking_col(rect).is_none()
    }

    /// First-fit search: earliest row, then leftmost column, starting at `start_row`.
    ///
    /// Rows above [`Self::first_open_row`] are full and are skipped without changing the
    /// result. Returns `None` when the shape is wider than the grid or nothing fits.
    pub fn find_first_fit(&self, shape: Shape, start_row: usize) -> Option<CellRect> {
        if shape.w == 0 || shape.h == 0 || shape.w > self.columns || shape.h > self.rows {
            return None;
        }
        let last_row = self.rows - shape.h;
        let last_col = self.columns - shape.w;

        for row in start_row.max(self.first_open_row)..=last_row {
            let mut col = 0;
            while col <= last_col {
                let rect = CellRect::new(row, col, shape.w, shape.h);
                match self.blocking_col(rect) {
                    None => return Some(rect),
                    // Any anchor up to the blocking column overlaps it too.
                    Some(blocked) => col = blocked + 1,
                }
            }
        }
        None
    }

    /// Mark every in-bounds cell of `rect` occupied. Out-of-bounds parts are ignored.
    pub fn occupy(&mut self, rect: CellRect) {
        let bottom = rect.bottom().min(self.rows);
        let right = rect.right().min(self.columns);
        for row in rect.row..bottom {
            for col in rect.col..right {
                let i = row * self.columns + col;
                if !self.cells[i] {
                    self.cells[i] = true;
                    self.occupied += 1;
                }
            }
        }
        while self.first_open_row < self.rows && self.row_is_full(self.first_open_row) {
            self.first_open_row += 1;
        }
    }

    /// Extend the grid to `rows` rows (no-op when not larger).
    pub fn grow_to(&mut self, rows: usize) {
        if rows <= self.rows {
            return;
        }
        self.cells.resize(rows.saturating_mul(self.columns), false);
        self.rows = rows;
    }

    fn row_is_full(&self, row: usize) -> bool {
        let start = row * self.columns;
        self.cells[start..start + self.columns].iter().all(|&c| c)
    }

    // Rightmost occupied column in the first row of `rect` that has one. `rect` must be
    // in bounds.
    fn blocking_col(&self, rect: CellRect) -> Option<usize> {
        (rect.row..rect.bottom()).find_map(|row| {
            let start = row * self.columns;
            self.cells[start + rect.col..start + rect.right()]
                .iter()
                .rposition(|&c| c)
                .map(|dx| rect.col + dx)
        })
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.columns).then(|| row * self.columns + col)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
