//! Tests for the surface plot variant.

use plot_common::{AxisLabels, SurfaceGrid, SurfaceOptions};
use renderer::contour::plane_band;
use renderer::surface::{prepare_grid, render_surface};

fn surface_options(y_contour: Option<f64>) -> SurfaceOptions {
    SurfaceOptions {
        num_points: 40,
        y_contour,
        labels: AxisLabels::new("X", "Y", "Utility"),
    }
}

#[test]
fn test_no_contour_leaves_grid_unmodified() {
    let prepared = prepare_grid(0.3, 0.5, &surface_options(None));
    let fresh = SurfaceGrid::evaluate(0.3, 0.5, 40);

    let n = fresh.num_points;
    for j in 0..n {
        assert_eq!(prepared.z_at(n - 1, j), fresh.z_at(n - 1, j));
    }
}

#[test]
fn test_contour_caps_last_row_to_unmodified_max() {
    let prepared = prepare_grid(0.3, 0.5, &surface_options(Some(5.0)));
    let fresh = SurfaceGrid::evaluate(0.3, 0.5, 40);
    let expected = fresh.z_max();

    let n = prepared.num_points;
    for j in 0..n {
        assert_eq!(prepared.z_at(n - 1, j), expected);
    }
    // rows before the last are untouched
    for j in 0..n {
        assert_eq!(prepared.z_at(n - 2, j), fresh.z_at(n - 2, j));
    }
}

#[test]
fn test_plane_band_closes_against_capped_row() {
    let grid = prepare_grid(0.3, 0.5, &surface_options(Some(5.0)));
    let band = plane_band(&grid, 5.0);

    // lower slice then upper slice reversed
    assert_eq!(band.len(), 2 * grid.num_points);

    // the upper edge is flat at the grid maximum thanks to the cap
    let max = grid.z_max();
    for &(_, z) in &band[grid.num_points..] {
        assert_eq!(z, max);
    }
}

#[test]
fn test_render_surface_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.png");

    render_surface(0.3, 0.5, &path, &surface_options(Some(5.0))).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
}

#[test]
fn test_render_surface_without_contour_plane() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface_plain.png");
    render_surface(0.3, 0.5, &path, &surface_options(None)).unwrap();
    assert!(path.exists());
}

#[test]
fn test_render_surface_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.jpeg");

    let err = render_surface(0.3, 0.5, &path, &surface_options(None)).unwrap_err();
    assert!(err.to_string().contains("not supported"));
    assert!(!path.exists());
}

#[test]
fn test_render_surface_bad_directory_errors() {
    let path = std::path::Path::new("/nonexistent-cdplot-dir/surface.png");
    assert!(render_surface(0.3, 0.5, path, &surface_options(None)).is_err());
}
