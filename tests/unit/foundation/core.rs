use super::*;

#[test]
fn edges_are_exclusive() {
    let r = CellRect::new(2, 3, 4, 5);
    assert_eq!(r.right(), 7);
    assert_eq!(r.bottom(), 7);
    assert_eq!(r.area(), 20);
}

#[test]
fn touching_rects_do_not_intersect() {
    let a = CellRect::new(0, 0, 2, 2);
    let right = CellRect::new(0, 2, 2, 2);
    let below = CellRect::new(2, 0, 2, 2);
    assert!(!a.intersects(right));
    assert!(!a.intersects(below));
    assert!(!right.intersects(a));
}

#[test]
fn overlapping_rects_intersect_both_ways() {
    let a = CellRect::new(0, 0, 4, 5);
    let b = CellRect::new(4, 3, 2, 2);
    assert!(a.intersects(b));
    assert!(b.intersects(a));
}

#[test]
fn empty_rect_never_intersects() {
    let a = CellRect::new(0, 0, 0, 3);
    let b = CellRect::new(0, 0, 3, 3);
    assert!(!a.intersects(b));
}

#[test]
fn cells_are_row_major() {
    let cells: Vec<_> = CellRect::new(1, 2, 2, 2).cells().collect();
    assert_eq!(cells, vec![(1, 2), (1, 3), (2, 2), (2, 3)]);
}
