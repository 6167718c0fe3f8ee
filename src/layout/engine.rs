use crate::{
    foundation::core::{CellRect, Point, Rect},
    foundation::error::GridfeedResult,
    layout::config::{ExhaustionPolicy, GridConfig},
    layout::grid::OccupancyGrid,
    layout::shape::{AutoSizePolicy, FixedMedium, Shape, resolve_shape},
    post::model::{Post, PostType, SizeClass},
};

/// How a post ended up where it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Found by the first-fit scan over the initial grid.
    FirstFit,
    /// Found after growing the grid ([`ExhaustionPolicy::Grow`]).
    Grown,
    /// No free rectangle: anchored at the grid bottom, left margin, unchecked for overlap.
    Degraded,
}

/// A post's final rectangle, in cells and in pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedPost {
    /// Id of the source post.
    pub id: String,
    /// Type of the source post.
    #[serde(rename = "type")]
    pub post_type: PostType,
    /// Resolved size class.
    pub size: SizeClass,
    /// Resolved footprint.
    pub shape: Shape,
    /// Occupied cell rectangle.
    pub cell: CellRect,
    /// Pixel top edge.
    pub top: f64,
    /// Pixel left edge.
    pub left: f64,
    /// Pixel width.
    pub width: f64,
    /// Pixel height.
    pub height: f64,
    /// Placement path taken.
    pub placement: Placement,
}

impl PositionedPost {
    /// Pixel bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Pixel top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Pixel rectangle.
    pub fn px_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.left + self.width, self.bottom())
    }

    /// True when this post took the degrade path.
    pub fn is_degraded(&self) -> bool {
        self.placement == Placement::Degraded
    }
}

/// Output of one layout pass.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    /// One entry per input post, in input order.
    pub placements: Vec<PositionedPost>,
    /// Largest pixel bottom edge over all placements; `0` when empty.
    pub max_bottom: f64,
    /// Grid rows at the end of the pass.
    pub grid_rows: usize,
}

impl LayoutResult {
    /// Number of placed posts.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// True when nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placement for a post id.
    pub fn get(&self, id: &str) -> Option<&PositionedPost> {
        self.placements.iter().find(|p| p.id == id)
    }

    /// Posts that took the degrade path.
    pub fn degraded_count(&self) -> usize {
        self.placements.iter().filter(|p| p.is_degraded()).count()
    }

    /// True when every post got a verified non-overlapping rectangle.
    pub fn is_clean(&self) -> bool {
        self.degraded_count() == 0
    }
}

/// Reusable layout entry point bundling a validated [`GridConfig`] and an auto-size policy.
///
/// The engine keeps no state between calls; every [`LayoutEngine::layout`] runs on a fresh
/// grid, so one engine can be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct LayoutEngine<P = FixedMedium> {
    config: GridConfig,
    policy: P,
}

impl LayoutEngine<FixedMedium> {
    /// Engine for `config` with the fixed-medium auto-size policy.
    pub fn new(config: GridConfig) -> GridfeedResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            policy: FixedMedium,
        })
    }
}

impl<P: AutoSizePolicy> LayoutEngine<P> {
    /// Swap the auto-size policy.
    pub fn with_policy<Q: AutoSizePolicy>(self, policy: Q) -> LayoutEngine<Q> {
        LayoutEngine {
            config: self.config,
            policy,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Lay out `posts` (already sorted newest first) from scratch.
    pub fn layout(&self, posts: &[Post]) -> LayoutResult {
        run_layout(posts, &self.config, &self.policy)
    }
}

/// Lay out `posts` on a `columns`-wide grid using the built-in geometry and shape table.
///
/// Never fails: empty input yields an empty result, missing shapes fall back to
/// photo/medium, and posts that cannot fit take the degrade path.
pub fn compute_layout(posts: &[Post], columns: usize) -> LayoutResult {
    run_layout(posts, &GridConfig::default().with_columns(columns), &FixedMedium)
}

/// Lay out `posts` with an explicit configuration. The config is not validated here.
pub fn compute_layout_with(posts: &[Post], config: &GridConfig) -> LayoutResult {
    run_layout(posts, config, &FixedMedium)
}

#[tracing::instrument(skip_all, fields(posts = posts.len(), columns = config.columns))]
fn run_layout(
    posts: &[Post],
    config: &GridConfig,
    policy: &(impl AutoSizePolicy + ?Sized),
) -> LayoutResult {
    let mut grid = OccupancyGrid::new(config.rows, config.columns);
    let mut placements = Vec::with_capacity(posts.len());
    let mut max_bottom = 0.0f64;

    for post in posts {
        let resolved = resolve_shape(post, &config.shapes, policy);
        let shape = Shape::new(resolved.shape.w.max(1), resolved.shape.h.max(1));

        let (cell, placement) = place(&mut grid, shape, config.exhaustion);
        if placement == Placement::Degraded {
            tracing::warn!(
                post_id = %post.id,
                w = shape.w,
                h = shape.h,
                row = cell.row,
                columns = grid.columns(),
                "no free rectangle; degraded placement"
            );
        }
        grid.occupy(cell);

        let px = config.cell_to_px(cell);
        let width = config.span_width(cell.w);
        let height = config.span_height(cell.h);
        max_bottom = max_bottom.max(px.y0 + height);
        placements.push(PositionedPost {
            id: post.id.clone(),
            post_type: post.post_type,
            size: resolved.size,
            shape,
            cell,
            top: px.y0,
            left: px.x0,
            width,
            height,
            placement,
        });
    }

    let result = LayoutResult {
        placements,
        max_bottom,
        grid_rows: grid.rows(),
    };
    tracing::debug!(
        placed = result.len(),
        degraded = result.degraded_count(),
        grid_rows = result.grid_rows,
        occupied_cells = grid.occupied_cells(),
        max_bottom = result.max_bottom,
        "layout pass complete"
    );
    result
}

fn place(
    grid: &mut OccupancyGrid,
    shape: Shape,
    policy: ExhaustionPolicy,
) -> (CellRect, Placement) {
    if let Some(rect) = grid.find_first_fit(shape, 0) {
        return (rect, Placement::FirstFit);
    }

    if let ExhaustionPolicy::Grow { max_rows } = policy
        && shape.w <= grid.columns()
    {
        while grid.rows() < max_rows {
            // Anchors that end inside the old rows were already rejected.
            let scan_from = (grid.rows() + 1).saturating_sub(shape.h);
            let next = grid
                .rows()
                .saturating_mul(2)
                .clamp(grid.rows() + 1, max_rows);
            grid.grow_to(next);
            tracing::debug!(rows = next, "grew occupancy grid");
            if let Some(rect) = grid.find_first_fit(shape, scan_from) {
                return (rect, Placement::Grown);
            }
        }
    }

    let row = grid.rows().saturating_sub(shape.h);
    (CellRect::new(row, 0, shape.w, shape.h), Placement::Degraded)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
