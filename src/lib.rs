//! gridfeed packs a heterogeneous feed of posts onto a fixed-width, unbounded-height cell grid.
//!
//! Each post (photo, map, route, video, write, gear, review) has a type- and size-dependent
//! footprint in cells. [`compute_layout`] places posts greedily in input order at the
//! earliest row and leftmost column where the footprint fits, and returns absolute pixel
//! rectangles plus the feed's total height (`max_bottom`).
//!
//! # Pipeline overview
//!
//! 1. **Window**: [`FeedWindow`] merges fetched pages, deduplicates, sorts newest first and
//!    caps the resident list.
//! 2. **Layout**: [`compute_layout`] / [`LayoutEngine::layout`] run a full first-fit pass.
//! 3. **Anchor**: [`FeedAnchors`] derives the container size, the load-more trigger and the
//!    skeleton placeholders from the result.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same posts and configuration always yield the same placements.
//! - **Stateless**: every pass allocates its own grid; calls may run concurrently.
//! - **Infallible core**: missing shapes and exhausted grids degrade instead of erroring.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod layout;
mod post;

pub use foundation::core::{CellRect, Point, Rect};
pub use foundation::error::{GridfeedError, GridfeedResult};
pub use layout::anchors::{
    FeedAnchors, LOAD_MORE_OFFSET, SKELETON_COUNT, SKELETON_STRIDE, TRAILING_SPACE,
};
pub use layout::config::{
    ExhaustionPolicy, GAP, GRID_CELL_HEIGHT, GRID_CELL_WIDTH, GRID_COLUMNS, GRID_ROWS,
    GridConfig, MARGIN, TOP_OFFSET,
};
pub use layout::engine::{
    LayoutEngine, LayoutResult, Placement, PositionedPost, compute_layout, compute_layout_with,
};
pub use layout::grid::OccupancyGrid;
pub use layout::shape::{
    AutoSizePolicy, DEFAULT_SHAPE, FixedMedium, ResolvedShape, Shape, ShapeTable, resolve_shape,
};
pub use post::model::{DisplaySize, Post, PostType, SizeClass};
pub use post::window::{FeedWindow, MAX_RESIDENT_POSTS, WindowUpdate, sort_newest_first};
