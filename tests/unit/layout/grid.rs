use super::*;

#[test]
fn empty_grid_fits_at_origin() {
    let g = OccupancyGrid::new(10, 14);
    assert_eq!(
        g.find_first_fit(Shape::new(3, 3), 0),
        Some(CellRect::new(0, 0, 3, 3))
    );
}

#[test]
fn first_fit_prefers_row_then_column() {
    let mut g = OccupancyGrid::new(10, 6);
    g.occupy(CellRect::new(0, 0, 2, 2));
    assert_eq!(
        g.find_first_fit(Shape::new(2, 2), 0),
        Some(CellRect::new(0, 2, 2, 2))
    );
    g.occupy(CellRect::new(0, 2, 4, 1));
    // Row 0 is now full; row 1 has columns 2..6 free.
    assert_eq!(
        g.find_first_fit(Shape::new(2, 1), 0),
        Some(CellRect::new(1, 2, 2, 1))
    );
    assert_eq!(g.first_open_row(), 1);
}

#[test]
fn skips_over_blocking_columns_without_missing_gaps() {
    let mut g = OccupancyGrid::new(4, 10);
    g.occupy(CellRect::new(0, 1, 1, 1));
    g.occupy(CellRect::new(0, 4, 1, 1));
    // Gap at columns 2..4 is exactly two wide.
    assert_eq!(
        g.find_first_fit(Shape::new(2, 1), 0),
        Some(CellRect::new(0, 2, 2, 1))
    );
    assert_eq!(
        g.find_first_fit(Shape::new(3, 1), 0),
        Some(CellRect::new(0, 5, 3, 1))
    );
}

#[test]
fn wider_than_grid_never_fits() {
    let g = OccupancyGrid::new(10, 2);
    assert_eq!(g.find_first_fit(Shape::new(3, 3), 0), None);
}

#[test]
fn taller_than_grid_never_fits() {
    let g = OccupancyGrid::new(2, 14);
    assert_eq!(g.find_first_fit(Shape::new(2, 3), 0), None);
}

#[test]
fn full_grid_has_no_fit_and_grows() {
    let mut g = OccupancyGrid::new(2, 4);
    g.occupy(CellRect::new(0, 0, 4, 2));
    assert_eq!(g.occupied_cells(), 8);
    assert_eq!(g.first_open_row(), 2);
    assert_eq!(g.find_first_fit(Shape::new(1, 1), 0), None);

    g.grow_to(4);
    assert_eq!(g.rows(), 4);
    assert_eq!(
        g.find_first_fit(Shape::new(4, 2), 0),
        Some(CellRect::new(2, 0, 4, 2))
    );
    g.grow_to(3);
    assert_eq!(g.rows(), 4);
}

#[test]
fn start_row_offsets_the_scan() {
    let g = OccupancyGrid::new(10, 4);
    assert_eq!(
        g.find_first_fit(Shape::new(2, 2), 5),
        Some(CellRect::new(5, 0, 2, 2))
    );
}

#[test]
fn occupy_clips_out_of_bounds() {
    let mut g = OccupancyGrid::new(3, 2);
    g.occupy(CellRect::new(1, 0, 5, 5));
    assert_eq!(g.occupied_cells(), 4);
    assert!(g.is_occupied(2, 1));
    assert!(!g.is_occupied(0, 0));
    assert!(!g.is_occupied(9, 9));
}

#[test]
fn fits_checks_bounds_and_cells() {
    let mut g = OccupancyGrid::new(4, 4);
    g.occupy(CellRect::new(1, 1, 1, 1));
    assert!(g.fits(CellRect::new(2, 2, 2, 2)));
    assert!(!g.fits(CellRect::new(0, 0, 2, 2)));
    assert!(!g.fits(CellRect::new(0, 3, 2, 1)));
    assert!(!g.fits(CellRect::new(3, 0, 1, 2)));
    assert_eq!(g.columns(), 4);
}
