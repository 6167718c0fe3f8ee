use super::*;
use serde_json::json;

#[test]
fn parses_store_shaped_post() {
    let post: Post = serde_json::from_value(json!({
        "id": "p1",
        "type": "route",
        "createdAt": { "seconds": 1700000000, "nanoseconds": 5 },
        "content": { "title": "Ridge loop", "displaySize": "large" }
    }))
    .unwrap();

    assert_eq!(post.id, "p1");
    assert_eq!(post.post_type, PostType::Route);
    assert_eq!(post.created_at, 1_700_000_000);
    assert_eq!(post.display_size, None);
    assert_eq!(post.size_hint(), DisplaySize::Large);
}

#[test]
fn created_at_accepts_plain_numbers_and_null() {
    let a: Post = serde_json::from_value(json!({"id": "a", "type": "photo", "createdAt": 42}))
        .unwrap();
    let b: Post =
        serde_json::from_value(json!({"id": "b", "type": "photo", "createdAt": 42.9})).unwrap();
    let c: Post =
        serde_json::from_value(json!({"id": "c", "type": "photo", "createdAt": null})).unwrap();
    let d: Post = serde_json::from_value(json!({"id": "d", "type": "photo"})).unwrap();
    assert_eq!(a.created_at, 42);
    assert_eq!(b.created_at, 42);
    assert_eq!(c.created_at, 0);
    assert_eq!(d.created_at, 0);
}

#[test]
fn top_level_size_wins_over_content() {
    let post = Post::new("x", PostType::Photo)
        .with_size(DisplaySize::Small)
        .with_content(json!({ "displaySize": "large" }));
    assert_eq!(post.size_hint(), DisplaySize::Small);
}

#[test]
fn unrecognized_nested_size_is_unknown() {
    let huge = Post::new("x", PostType::Photo).with_content(json!({ "displaySize": "huge" }));
    let number = Post::new("n", PostType::Photo).with_content(json!({ "displaySize": 3 }));
    let null = Post::new("z", PostType::Photo).with_content(json!({ "displaySize": null }));
    assert_eq!(huge.size_hint(), DisplaySize::Unknown);
    assert_eq!(number.size_hint(), DisplaySize::Unknown);
    assert_eq!(null.size_hint(), DisplaySize::Auto);
    assert_eq!(Post::new("y", PostType::Gear).size_hint(), DisplaySize::Auto);
}

#[test]
fn unrecognized_top_level_size_still_parses() {
    let huge: Post =
        serde_json::from_value(json!({"id": "a", "type": "video", "displaySize": "huge"}))
            .unwrap();
    let number: Post =
        serde_json::from_value(json!({"id": "b", "type": "video", "displaySize": 7})).unwrap();
    let null: Post =
        serde_json::from_value(json!({"id": "c", "type": "video", "displaySize": null})).unwrap();
    assert_eq!(huge.display_size, Some(DisplaySize::Unknown));
    assert_eq!(number.display_size, Some(DisplaySize::Unknown));
    assert_eq!(null.display_size, None);
    assert_eq!(huge.size_hint(), DisplaySize::Unknown);
}

#[test]
fn unknown_post_type_is_rejected() {
    let err = serde_json::from_value::<Post>(json!({"id": "a", "type": "poll"}));
    assert!(err.is_err());
}

#[test]
fn blank_id_fails_validation() {
    assert!(Post::new("  ", PostType::Photo).validate().is_err());
    assert!(Post::new("ok", PostType::Photo).validate().is_ok());
}

#[test]
fn explicit_size_mapping() {
    assert_eq!(DisplaySize::Auto.explicit(), None);
    assert_eq!(DisplaySize::Unknown.explicit(), None);
    for class in SizeClass::ALL {
        assert_eq!(DisplaySize::from(class).explicit(), Some(class));
    }
}

#[test]
fn serializes_with_wire_names() {
    let post = Post::new("p", PostType::Write)
        .with_size(DisplaySize::Medium)
        .with_created_at(7);
    let v = serde_json::to_value(&post).unwrap();
    assert_eq!(v["type"], "write");
    assert_eq!(v["displaySize"], "medium");
    assert_eq!(v["createdAt"], 7);
    assert!(v.get("content").is_none());
}
