use super::*;
use crate::post::model::{DisplaySize, PostType};

fn post(id: &str, t: i64) -> Post {
    Post::new(id, PostType::Photo).with_created_at(t)
}

fn ids(window: &FeedWindow) -> Vec<&str> {
    window.posts().iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn zero_cap_is_rejected() {
    assert!(FeedWindow::new(0).is_err());
}

#[test]
fn pages_merge_newest_first() {
    let mut w = FeedWindow::with_posts(10, [post("a", 30), post("b", 10)]).unwrap();
    let update = w.extend([post("c", 20), post("d", 40)]).unwrap();
    assert_eq!(update.added, 2);
    assert_eq!(ids(&w), vec!["d", "a", "c", "b"]);
    assert_eq!(w.oldest().map(|p| p.id.as_str()), Some("b"));
}

#[test]
fn duplicate_ids_keep_the_fresh_copy() {
    let mut w = FeedWindow::with_posts(10, [post("a", 30), post("b", 10)]).unwrap();
    let fresh = post("b", 10).with_size(DisplaySize::Large);
    let update = w.insert(fresh).unwrap();
    assert_eq!(update.added, 0);
    assert_eq!(update.replaced, 1);
    assert_eq!(w.len(), 2);
    assert_eq!(w.posts()[1].display_size, Some(DisplaySize::Large));
}

#[test]
fn duplicates_within_one_page_collapse() {
    let w = FeedWindow::with_posts(10, [post("a", 1), post("a", 2)]).unwrap();
    assert_eq!(w.len(), 1);
    assert_eq!(w.posts()[0].created_at, 2);
}

#[test]
fn cap_evicts_oldest() {
    let mut w = FeedWindow::with_posts(3, [post("a", 3), post("b", 2), post("c", 1)]).unwrap();
    let update = w.insert(post("d", 4)).unwrap();
    assert_eq!(update.evicted, vec!["c".to_string()]);
    assert_eq!(ids(&w), vec!["d", "a", "b"]);
}

#[test]
fn equal_timestamps_order_by_id() {
    let w = FeedWindow::with_posts(10, [post("z", 5), post("m", 5), post("a", 5)]).unwrap();
    assert_eq!(ids(&w), vec!["a", "m", "z"]);
}

#[test]
fn invalid_post_leaves_window_untouched() {
    let mut w = FeedWindow::with_posts(10, [post("a", 1)]).unwrap();
    let err = w.extend([post("b", 2), post("", 3)]);
    assert!(err.is_err());
    assert_eq!(ids(&w), vec!["a"]);
}

#[test]
fn remove_and_contains() {
    let mut w = FeedWindow::with_posts(10, [post("a", 1), post("b", 2)]).unwrap();
    assert!(w.contains("a"));
    assert_eq!(w.remove("a").map(|p| p.id), Some("a".to_string()));
    assert!(!w.contains("a"));
    assert!(w.remove("a").is_none());
    assert!(w.insert(post("b", 2)).unwrap().replaced == 1);
}

#[test]
fn noop_update_is_reported() {
    assert!(WindowUpdate::default().is_noop());
    let mut w = FeedWindow::default();
    assert_eq!(w.max_posts(), MAX_RESIDENT_POSTS);
    assert!(w.extend(Vec::new()).unwrap().is_noop());
    assert!(w.is_empty());
}
