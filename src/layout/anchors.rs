use crate::{
    foundation::core::Rect,
    layout::{config::GridConfig, engine::LayoutResult},
};

/// Loading skeletons shown while the next page is fetched.
pub const SKELETON_COUNT: usize = 3;
/// Vertical distance between consecutive skeleton tops.
pub const SKELETON_STRIDE: f64 = 220.0;
/// Distance from `maxBottom` to the load-more trigger.
pub const LOAD_MORE_OFFSET: f64 = 100.0;
/// Free space kept below the last post.
pub const TRAILING_SPACE: f64 = 300.0;

/// Where the host places its container, pagination trigger and skeleton placeholders.
///
/// Everything here is derived from a [`LayoutResult`]'s `max_bottom` and the grid geometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedAnchors {
    /// Container width, both margins included.
    pub container_width: f64,
    /// Minimum container height.
    pub container_min_height: f64,
    /// Top of the 1px "load more" sentinel.
    pub load_more_top: f64,
    /// Skeleton placeholder rectangles, each a 2x2-cell footprint.
    pub skeletons: Vec<Rect>,
}

impl FeedAnchors {
    /// Anchors for `layout` rendered with `config`.
    pub fn from_layout(layout: &LayoutResult, config: &GridConfig) -> Self {
        let bottom = layout.max_bottom;
        let w = config.span_width(2);
        let h = config.span_height(2);
        let skeletons = (0..SKELETON_COUNT)
            .map(|i| {
                let top = bottom + i as f64 * SKELETON_STRIDE;
                Rect::new(config.margin, top, config.margin + w, top + h)
            })
            .collect();

        Self {
            container_width: config.container_width(),
            container_min_height: bottom + TRAILING_SPACE,
            load_more_top: bottom + LOAD_MORE_OFFSET,
            skeletons,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/anchors.rs"]
mod tests;
