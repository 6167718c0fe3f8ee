use super::*;
use crate::{DisplaySize, Post, PostType, compute_layout};

#[test]
fn anchors_for_empty_feed_start_at_zero() {
    let config = GridConfig::default();
    let a = FeedAnchors::from_layout(&LayoutResult::default(), &config);
    assert_eq!(a.load_more_top, LOAD_MORE_OFFSET);
    assert_eq!(a.container_min_height, TRAILING_SPACE);
    assert_eq!(a.skeletons.len(), SKELETON_COUNT);
    assert_eq!(a.skeletons[0].y0, 0.0);
}

#[test]
fn anchors_follow_max_bottom() {
    let config = GridConfig::default();
    let layout = compute_layout(
        &[Post::new("a", PostType::Photo).with_size(DisplaySize::Medium)],
        14,
    );
    let a = FeedAnchors::from_layout(&layout, &config);

    assert_eq!(a.load_more_top, 460.0 + 100.0);
    assert_eq!(a.container_min_height, 760.0);
    assert_eq!(a.container_width, 14.0 * 104.0 + 32.0);

    let s1 = a.skeletons[1];
    assert_eq!(s1.y0, 460.0 + 220.0);
    assert_eq!(s1.x0, 16.0);
    assert_eq!(s1.width(), 200.0);
    assert_eq!(s1.height(), 288.0);
}
