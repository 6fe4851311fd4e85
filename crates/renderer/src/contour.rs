//! Contour extraction and the 3D contour plot variant.
//!
//! Level lines of the surface value are extracted with marching squares.
//! When projecting along `x` or `y`, the contoured field degenerates to the
//! respective coordinate itself, so those iso-lines are plain surface
//! slices extracted by row/column interpolation.

use std::path::Path;

use plot_common::grid::{DOMAIN_MAX, DOMAIN_MIN};
use plot_common::{linspace, Colormap, ContourOptions, PlotResult, ProjectionAxis, SurfaceGrid};
use tracing::debug;

use crate::axes;
use crate::camera::{project_point, AxisBounds, Camera, Viewport};
use crate::figure::{Figure, FIGURE_HEIGHT, FIGURE_MARGIN, FIGURE_WIDTH};

const LINE_WIDTH: f32 = 1.5;

/// A point in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A line segment between two data-space points.
#[derive(Debug, Clone)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// A connected iso-line at one contour level.
#[derive(Debug, Clone)]
pub struct Isoline {
    pub level: f64,
    pub points: Vec<Point>,
}

/// Evenly spaced contour levels for the requested projection axis.
///
/// `z` projection spans the surface value range; any other axis spans the
/// Y coordinate range. Levels for `x` projection coming from Y's range is
/// inherited behavior and is kept as-is.
pub fn contour_levels(grid: &SurfaceGrid, zdir: ProjectionAxis, num_levels: usize) -> Vec<f64> {
    match zdir {
        ProjectionAxis::Z => linspace(grid.z_min(), grid.z_max(), num_levels),
        ProjectionAxis::X | ProjectionAxis::Y => {
            let lo = grid.ys.first().copied().unwrap_or(DOMAIN_MIN);
            let hi = grid.ys.last().copied().unwrap_or(DOMAIN_MAX);
            linspace(lo, hi, num_levels)
        }
    }
}

/// Marching squares over the surface values, emitting segments in data
/// coordinates. Cells touching a NaN value are skipped.
pub fn march_squares(grid: &SurfaceGrid, level: f64) -> Vec<Segment> {
    let n = grid.num_points;
    if n < 2 {
        return vec![];
    }

    let mut segments = Vec::new();
    for i in 0..n - 1 {
        for j in 0..n - 1 {
            let tl = grid.z_at(i, j);
            let tr = grid.z_at(i, j + 1);
            let bl = grid.z_at(i + 1, j);
            let br = grid.z_at(i + 1, j + 1);

            if tl.is_nan() || tr.is_nan() || bl.is_nan() || br.is_nan() {
                continue;
            }

            let mut cell_index = 0u8;
            if tl >= level {
                cell_index |= 1;
            }
            if tr >= level {
                cell_index |= 2;
            }
            if br >= level {
                cell_index |= 4;
            }
            if bl >= level {
                cell_index |= 8;
            }

            let (x0, x1) = (grid.xs[j], grid.xs[j + 1]);
            let (y0, y1) = (grid.ys[i], grid.ys[i + 1]);

            let top = interpolate_edge(Point::new(x0, y0), Point::new(x1, y0), tl, tr, level);
            let right = interpolate_edge(Point::new(x1, y0), Point::new(x1, y1), tr, br, level);
            let bottom = interpolate_edge(Point::new(x0, y1), Point::new(x1, y1), bl, br, level);
            let left = interpolate_edge(Point::new(x0, y0), Point::new(x0, y1), tl, bl, level);

            let cell_segments: Vec<Segment> = match cell_index {
                0 | 15 => vec![],
                1 | 14 => vec![Segment { start: left, end: top }],
                2 | 13 => vec![Segment { start: top, end: right }],
                3 | 12 => vec![Segment { start: left, end: right }],
                4 | 11 => vec![Segment { start: right, end: bottom }],
                5 => vec![
                    // saddle
                    Segment { start: left, end: top },
                    Segment { start: right, end: bottom },
                ],
                6 | 9 => vec![Segment { start: top, end: bottom }],
                7 | 8 => vec![Segment { start: left, end: bottom }],
                10 => vec![
                    // saddle
                    Segment { start: top, end: right },
                    Segment { start: left, end: bottom },
                ],
                _ => vec![],
            };
            segments.extend(cell_segments);
        }
    }

    segments
}

/// Where the contour crosses the edge between two sample points.
fn interpolate_edge(p1: Point, p2: Point, v1: f64, v2: f64, level: f64) -> Point {
    if (v2 - v1).abs() < 1e-12 {
        return Point::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0);
    }
    let t = ((level - v1) / (v2 - v1)).clamp(0.0, 1.0);
    Point::new(p1.x + t * (p2.x - p1.x), p1.y + t * (p2.y - p1.y))
}

/// Join unordered segments into continuous polylines.
pub fn connect_segments(segments: Vec<Segment>) -> Vec<Vec<Point>> {
    if segments.is_empty() {
        return vec![];
    }

    // tolerance well below the grid spacing
    let epsilon = 1e-9;
    let close = |a: Point, b: Point| (a.x - b.x).abs() < epsilon && (a.y - b.y).abs() < epsilon;

    let mut polylines = Vec::new();
    let mut used = vec![false; segments.len()];

    for start_idx in 0..segments.len() {
        if used[start_idx] {
            continue;
        }
        used[start_idx] = true;
        let mut points = vec![segments[start_idx].start, segments[start_idx].end];

        let mut extended = true;
        while extended {
            extended = false;
            let tail = *points.last().unwrap();
            for (i, seg) in segments.iter().enumerate() {
                if used[i] {
                    continue;
                }
                if close(seg.start, tail) {
                    points.push(seg.end);
                } else if close(seg.end, tail) {
                    points.push(seg.start);
                } else {
                    continue;
                }
                used[i] = true;
                extended = true;
                break;
            }
        }

        if points.len() >= 2 {
            polylines.push(points);
        }
    }

    polylines
}

/// All iso-lines of the surface value at the given levels.
pub fn isolines(grid: &SurfaceGrid, levels: &[f64]) -> Vec<Isoline> {
    let mut lines = Vec::new();
    for &level in levels {
        for points in connect_segments(march_squares(grid, level)) {
            lines.push(Isoline { level, points });
        }
    }
    lines
}

/// Surface profile at a fixed Y: `(x, z)` pairs ordered by X, interpolated
/// between the two grid rows bracketing `level` (clamped to the sampled
/// range).
pub fn slice_at_y(grid: &SurfaceGrid, level: f64) -> Vec<(f64, f64)> {
    let n = grid.num_points;
    if n == 0 {
        return vec![];
    }

    let (row, t) = bracket(&grid.ys, level);
    (0..n)
        .map(|j| {
            let z = grid.z_at(row, j) * (1.0 - t) + grid.z_at((row + 1).min(n - 1), j) * t;
            (grid.xs[j], z)
        })
        .collect()
}

/// Surface profile at a fixed X: `(y, z)` pairs ordered by Y.
pub fn slice_at_x(grid: &SurfaceGrid, level: f64) -> Vec<(f64, f64)> {
    let n = grid.num_points;
    if n == 0 {
        return vec![];
    }

    let (col, t) = bracket(&grid.xs, level);
    (0..n)
        .map(|i| {
            let z = grid.z_at(i, col) * (1.0 - t) + grid.z_at(i, (col + 1).min(n - 1)) * t;
            (grid.ys[i], z)
        })
        .collect()
}

/// Index of the sample at or below `level` in an ascending coordinate
/// vector, plus the interpolation fraction toward the next sample.
fn bracket(coords: &[f64], level: f64) -> (usize, f64) {
    let n = coords.len();
    if n < 2 || level <= coords[0] {
        return (0, 0.0);
    }
    if level >= coords[n - 1] {
        return (n - 1, 0.0);
    }
    for i in 0..n - 1 {
        if level <= coords[i + 1] {
            let span = coords[i + 1] - coords[i];
            let t = if span.abs() < f64::EPSILON {
                0.0
            } else {
                (level - coords[i]) / span
            };
            return (i, t);
        }
    }
    (n - 1, 0.0)
}

/// Footprint of the filled contour plane for the surface variant: the band
/// between the slice at `offset` and the (capped) far row, as an `(x, z)`
/// polygon on the plane `y = offset`.
pub fn plane_band(grid: &SurfaceGrid, offset: f64) -> Vec<(f64, f64)> {
    let lower = slice_at_y(grid, offset);
    let upper = slice_at_y(grid, DOMAIN_MAX);
    if lower.is_empty() || upper.is_empty() {
        return vec![];
    }

    let mut polygon = lower;
    polygon.extend(upper.into_iter().rev());
    polygon
}

/// Render the 3D contour plot and write it to `output`.
pub fn render_contour(
    alpha: f64,
    beta: f64,
    output: impl AsRef<Path>,
    options: &ContourOptions,
) -> PlotResult<()> {
    let grid = SurfaceGrid::evaluate(alpha, beta, options.num_points);
    let levels = contour_levels(&grid, options.zdir, options.num_levels);
    debug!(
        num_points = options.num_points,
        num_levels = levels.len(),
        zdir = ?options.zdir,
        z_min = grid.z_min(),
        z_max = grid.z_max(),
        "contour grid evaluated"
    );

    let camera = options
        .degrees
        .map(|d| Camera::new(d.elev, d.azim))
        .unwrap_or_else(Camera::default_view);
    let bounds = AxisBounds::inverted_domain(grid.z_min(), grid.z_max());
    let viewport = Viewport::new(FIGURE_WIDTH, FIGURE_HEIGHT, FIGURE_MARGIN);
    let cmap = Colormap::viridis();

    let mut figure = Figure::new()?;
    axes::draw_axes(&mut figure, &camera, &bounds, &viewport, &options.labels);

    let lo = levels.first().copied().unwrap_or(0.0);
    let hi = levels.last().copied().unwrap_or(1.0);
    let span = if (hi - lo).abs() < f64::EPSILON {
        1.0
    } else {
        hi - lo
    };

    for &level in &levels {
        let color = cmap.sample((level - lo) / span);
        match options.zdir {
            ProjectionAxis::Z => {
                for line in connect_segments(march_squares(&grid, level)) {
                    let pts: Vec<(f32, f32)> = line
                        .iter()
                        .map(|p| project_point(&camera, &bounds, &viewport, p.x, p.y, level).0)
                        .collect();
                    figure.stroke_polyline(&pts, color, LINE_WIDTH);
                }
            }
            ProjectionAxis::Y => {
                let pts: Vec<(f32, f32)> = slice_at_y(&grid, level)
                    .into_iter()
                    .map(|(x, z)| project_point(&camera, &bounds, &viewport, x, level, z).0)
                    .collect();
                figure.stroke_polyline(&pts, color, LINE_WIDTH);
            }
            ProjectionAxis::X => {
                let pts: Vec<(f32, f32)> = slice_at_x(&grid, level)
                    .into_iter()
                    .map(|(y, z)| project_point(&camera, &bounds, &viewport, level, y, z).0)
                    .collect();
                figure.stroke_polyline(&pts, color, LINE_WIDTH);
            }
        }
    }

    figure.save(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak_grid() -> SurfaceGrid {
        // 3x3 grid with a peak in the center, built by hand
        SurfaceGrid {
            num_points: 3,
            xs: vec![0.0, 5.0, 10.0],
            ys: vec![0.0, 5.0, 10.0],
            z: vec![0.0, 0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0, 0.0],
        }
    }

    #[test]
    fn test_march_squares_flat_field() {
        let mut grid = peak_grid();
        grid.z = vec![5.0; 9];
        assert!(march_squares(&grid, 5.0).is_empty());
    }

    #[test]
    fn test_march_squares_peak() {
        let segments = march_squares(&peak_grid(), 5.0);
        assert!(!segments.is_empty());
        // every crossing lies strictly inside the domain
        for seg in &segments {
            for p in [seg.start, seg.end] {
                assert!(p.x > 0.0 && p.x < 10.0);
                assert!(p.y > 0.0 && p.y < 10.0);
            }
        }
    }

    #[test]
    fn test_connect_segments_joins_chain() {
        let segments = vec![
            Segment {
                start: Point::new(0.0, 0.0),
                end: Point::new(1.0, 0.0),
            },
            Segment {
                start: Point::new(1.0, 0.0),
                end: Point::new(2.0, 0.5),
            },
        ];
        let lines = connect_segments(segments);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 3);
    }

    #[test]
    fn test_slice_at_y_on_grid_row() {
        let grid = SurfaceGrid::evaluate(0.3, 0.4, 11);
        // y = 5.0 is exactly row 5
        let slice = slice_at_y(&grid, 5.0);
        assert_eq!(slice.len(), 11);
        for (j, &(x, z)) in slice.iter().enumerate() {
            assert_eq!(x, grid.xs[j]);
            assert!((z - grid.z_at(5, j)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_slice_clamps_outside_domain() {
        let grid = SurfaceGrid::evaluate(0.3, 0.4, 5);
        let below = slice_at_y(&grid, -3.0);
        let first_row: Vec<(f64, f64)> = (0..5).map(|j| (grid.xs[j], grid.z_at(0, j))).collect();
        assert_eq!(below, first_row);
    }
}
