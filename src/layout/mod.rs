//! First-fit grid packing of feed posts.
//!
//! A pass resolves each post's footprint from the shape table, scans a fresh occupancy grid
//! for the earliest-row, leftmost-column free rectangle, and converts the winning cell
//! rectangle to pixels. Nothing survives between passes.

pub(crate) mod anchors;
pub(crate) mod config;
pub(crate) mod engine;
pub(crate) mod grid;
pub(crate) mod shape;
