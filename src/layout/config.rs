use crate::{
    foundation::core::{CellRect, Rect},
    foundation::error::{GridfeedError, GridfeedResult},
    layout::shape::ShapeTable,
};

/// Grid width in cells.
pub const GRID_COLUMNS: usize = 14;
/// Rows allocated per layout pass.
pub const GRID_ROWS: usize = 300;
/// Cell width in pixels.
pub const GRID_CELL_WIDTH: f64 = 96.0;
/// Cell height in pixels.
pub const GRID_CELL_HEIGHT: f64 = 140.0;
/// Gap between adjacent cells in pixels.
pub const GAP: f64 = 8.0;
/// Outer horizontal margin in pixels.
pub const MARGIN: f64 = 16.0;
/// Vertical offset of row 0 (clears the top bar).
pub const TOP_OFFSET: f64 = 24.0;

/// What to do when no free rectangle exists for a post.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExhaustionPolicy {
    /// Anchor the post at the bottom of the grid, left margin, without an overlap check.
    #[default]
    Degrade,
    /// Double the grid's row count (up to `max_rows`) and keep scanning before degrading.
    Grow {
        /// Upper bound on grid rows.
        max_rows: usize,
    },
}

/// Grid geometry, shape table and exhaustion policy for one layout pass.
///
/// Every field defaults to the built-in constants, so a JSON config only needs the fields it
/// overrides. A `shapes` object replaces the whole table.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Grid width in cells.
    pub columns: usize,
    /// Rows allocated up front.
    pub rows: usize,
    /// Cell width in pixels.
    pub cell_width: f64,
    /// Cell height in pixels.
    pub cell_height: f64,
    /// Inter-cell gap in pixels.
    pub gap: f64,
    /// Outer horizontal margin in pixels.
    pub margin: f64,
    /// Pixel offset of row 0.
    pub top_offset: f64,
    /// `(type, size) -> shape` table.
    pub shapes: ShapeTable,
    /// Behavior when the grid has no room for a post.
    pub exhaustion: ExhaustionPolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
            cell_width: GRID_CELL_WIDTH,
            cell_height: GRID_CELL_HEIGHT,
            gap: GAP,
            margin: MARGIN,
            top_offset: TOP_OFFSET,
            shapes: ShapeTable::standard(),
            exhaustion: ExhaustionPolicy::Degrade,
        }
    }
}

impl GridConfig {
    /// Same config with a different column count.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json_str(json: &str) -> GridfeedResult<Self> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check geometry and shape table.
    pub fn validate(&self) -> GridfeedResult<()> {
        if self.columns == 0 {
            return Err(GridfeedError::validation("grid columns must be > 0"));
        }
        if self.rows == 0 {
            return Err(GridfeedError::validation("grid rows must be > 0"));
        }
        for (name, value) in [
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GridfeedError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("gap", self.gap),
            ("margin", self.margin),
            ("top_offset", self.top_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GridfeedError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if let ExhaustionPolicy::Grow { max_rows } = self.exhaustion
            && max_rows < self.rows
        {
            return Err(GridfeedError::validation(
                "exhaustion max_rows must be >= rows",
            ));
        }
        self.shapes.validate()
    }

    /// Horizontal distance between the left edges of adjacent columns.
    pub fn column_pitch(&self) -> f64 {
        self.cell_width + self.gap
    }

    /// Vertical distance between the top edges of adjacent rows.
    pub fn row_pitch(&self) -> f64 {
        self.cell_height + self.gap
    }

    /// Pixel width of a span of `cells` columns: `w * cell_width + (w - 1) * gap`.
    pub fn span_width(&self, cells: usize) -> f64 {
        span_px(cells, self.cell_width, self.gap)
    }

    /// Pixel height of a span of `cells` rows: `h * cell_height + (h - 1) * gap`.
    pub fn span_height(&self, cells: usize) -> f64 {
        span_px(cells, self.cell_height, self.gap)
    }

    /// Pixel rectangle for a cell rectangle: spans include inner gaps, not outer ones.
    ///
    /// `width()`/`height()` of the result are recomputed from the edges; use
    /// [`Self::span_width`]/[`Self::span_height`] where the exact span is needed.
    pub fn cell_to_px(&self, cell: CellRect) -> Rect {
        let top = cell.row as f64 * self.row_pitch() + self.top_offset;
        let left = self.margin + cell.col as f64 * self.column_pitch();
        Rect::new(
            left,
            top,
            left + self.span_width(cell.w),
            top + self.span_height(cell.h),
        )
    }

    /// Width of the container that hosts the grid, margins included.
    pub fn container_width(&self) -> f64 {
        self.columns as f64 * self.column_pitch() + self.margin * 2.0
    }
}

fn span_px(cells: usize, cell: f64, gap: f64) -> f64 {
    cells as f64 * cell + cells.saturating_sub(1) as f64 * gap
}

#[cfg(test)]
#[path = "../../tests/unit/layout/config.rs"]
mod tests;
