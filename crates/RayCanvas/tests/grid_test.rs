use glam::{UVec2, Vec2};
use ray_canvas::GridSpec;
use ray_canvas::grid::axis_points;

#[test]
fn test_axis_points_count_and_bounds() {
    for (extent, divisions) in [(700u32, 14u32), (629, 14), (100, 3), (31, 7)] {
        let points = axis_points(extent, divisions);
        assert_eq!(points.len(), divisions as usize - 1);
        assert!(points.windows(2).all(|w| w[0] < w[1]), "not increasing: {points:?}");
        assert!(points.iter().all(|&p| p > 0.0 && p < extent as f32));
    }
}

#[test]
fn test_axis_points_are_floored_and_offset() {
    // 629 * 1 / 14 = 44.93 -> 44.5
    let points = axis_points(629, 14);
    assert_eq!(points[0], 44.5);
    // 629 * 13 / 14 = 584.07 -> 584.5
    assert_eq!(points[12], 584.5);
    assert!(points.iter().all(|p| p.fract() == 0.5));
}

#[test]
fn test_single_division_has_no_interior_points() {
    let grid = GridSpec::for_size(UVec2::new(500, 500), 1);
    assert!(grid.x_points.is_empty());
    assert!(grid.is_empty());
}

#[test]
fn test_grid_spec_axes_follow_surface_size() {
    let grid = GridSpec::for_size(UVec2::new(200, 100), 4);
    assert_eq!(grid.x_points, vec![50.5, 100.5, 150.5]);
    assert_eq!(grid.y_points, vec![25.5, 50.5, 75.5]);
    assert_eq!(grid.intersection(2, 0), Some(Vec2::new(150.5, 25.5)));
    assert_eq!(grid.intersection(3, 0), None);
}
