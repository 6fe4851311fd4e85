//! The 3D surface plot variant, with an optional filled contour plane.

use std::cmp::Ordering;
use std::path::Path;

use plot_common::{Color, Colormap, PlotResult, SurfaceGrid, SurfaceOptions};
use tracing::debug;

use crate::axes;
use crate::camera::{project_point, AxisBounds, Camera, Viewport};
use crate::contour;
use crate::figure::{Figure, FIGURE_HEIGHT, FIGURE_MARGIN, FIGURE_WIDTH};

/// Fixed camera for the surface variant; not configurable.
const SURFACE_ELEV: f64 = 12.0;
const SURFACE_AZIM: f64 = 70.0;

/// Contour plane fill: #e73e3e at 75% opacity.
const PLANE_COLOR: Color = Color::new(0xe7, 0x3e, 0x3e, 191);

/// One grid cell, projected and ready to paint.
struct Quad {
    corners: [(f32, f32); 4],
    depth: f64,
    color: Color,
}

/// Evaluate the grid for a surface render. When a contour plane is
/// requested the last row is capped to the grid maximum before anything is
/// drawn; without one the grid is left untouched.
pub fn prepare_grid(alpha: f64, beta: f64, options: &SurfaceOptions) -> SurfaceGrid {
    let mut grid = SurfaceGrid::evaluate(alpha, beta, options.num_points);
    if options.y_contour.is_some() {
        grid.cap_last_row_to_max();
    }
    grid
}

/// Render the surface plot and write it to `output`.
pub fn render_surface(
    alpha: f64,
    beta: f64,
    output: impl AsRef<Path>,
    options: &SurfaceOptions,
) -> PlotResult<()> {
    let grid = prepare_grid(alpha, beta, options);
    let (z_min, z_max) = (grid.z_min(), grid.z_max());
    debug!(
        num_points = options.num_points,
        y_contour = options.y_contour,
        z_min,
        z_max,
        "surface grid evaluated"
    );

    let camera = Camera::new(SURFACE_ELEV, SURFACE_AZIM);
    let bounds = AxisBounds::inverted_domain(z_min, z_max);
    let viewport = Viewport::new(FIGURE_WIDTH, FIGURE_HEIGHT, FIGURE_MARGIN);
    let cmap = Colormap::viridis();

    let mut figure = Figure::new()?;
    axes::draw_axes(&mut figure, &camera, &bounds, &viewport, &options.labels);

    // painter's algorithm: farthest cells first
    let mut quads = collect_quads(&grid, &camera, &bounds, &viewport, &cmap);
    quads.sort_by(|a, b| a.depth.partial_cmp(&b.depth).unwrap_or(Ordering::Equal));
    for quad in &quads {
        figure.fill_polygon(&quad.corners, quad.color);
    }

    if let Some(offset) = options.y_contour {
        let band: Vec<(f32, f32)> = contour::plane_band(&grid, offset)
            .into_iter()
            .map(|(x, z)| project_point(&camera, &bounds, &viewport, x, offset, z).0)
            .collect();
        figure.fill_polygon(&band, PLANE_COLOR);
    }

    figure.save(output)
}

fn collect_quads(
    grid: &SurfaceGrid,
    camera: &Camera,
    bounds: &AxisBounds,
    viewport: &Viewport,
    cmap: &Colormap,
) -> Vec<Quad> {
    let n = grid.num_points;
    let cells = n.saturating_sub(1);
    let (z_min, z_max) = (grid.z_min(), grid.z_max());
    let span = z_max - z_min;
    let span = if span.abs() < f64::EPSILON { 1.0 } else { span };

    let mut quads = Vec::with_capacity(cells * cells);
    for i in 0..cells {
        for j in 0..cells {
            let zs = [
                grid.z_at(i, j),
                grid.z_at(i, j + 1),
                grid.z_at(i + 1, j + 1),
                grid.z_at(i + 1, j),
            ];
            let z_mean = zs.iter().sum::<f64>() / 4.0;
            if !z_mean.is_finite() {
                // boundary cells hit by 0^negative show up as gaps
                continue;
            }

            let world = [
                (grid.xs[j], grid.ys[i], zs[0]),
                (grid.xs[j + 1], grid.ys[i], zs[1]),
                (grid.xs[j + 1], grid.ys[i + 1], zs[2]),
                (grid.xs[j], grid.ys[i + 1], zs[3]),
            ];

            let mut corners = [(0.0f32, 0.0f32); 4];
            let mut depth = 0.0;
            for (k, &(x, y, z)) in world.iter().enumerate() {
                let (pixel, d) = project_point(camera, bounds, viewport, x, y, z);
                corners[k] = pixel;
                depth += d / 4.0;
            }

            quads.push(Quad {
                corners,
                depth,
                color: cmap.sample((z_mean - z_min) / span),
            });
        }
    }

    quads
}
