//! Axis frame and captions for 3D figures.
//!
//! Tick marks are never drawn; the figures carry only the axis captions
//! from the render options.

use plot_common::{AxisLabels, Color};
use plot_common::grid::{DOMAIN_MAX, DOMAIN_MIN};

use crate::camera::{project_point, AxisBounds, Camera, Viewport};
use crate::figure::Figure;
use crate::text;

const FRAME_COLOR: Color = Color::opaque(0xb0, 0xb0, 0xb0);
const LABEL_COLOR: Color = Color::opaque(0x33, 0x33, 0x33);
const FRAME_WIDTH: f32 = 1.0;
const LABEL_SIZE: f32 = 20.0;

/// Draw the axis frame (floor rectangle plus one vertical edge) and the
/// three axis captions.
pub fn draw_axes(
    figure: &mut Figure,
    camera: &Camera,
    bounds: &AxisBounds,
    viewport: &Viewport,
    labels: &AxisLabels,
) {
    let (z_lo, z_hi) = bounds.z;
    let px = |x: f64, y: f64, z: f64| project_point(camera, bounds, viewport, x, y, z).0;

    // floor of the plot box
    let floor = [
        px(DOMAIN_MIN, DOMAIN_MIN, z_lo),
        px(DOMAIN_MAX, DOMAIN_MIN, z_lo),
        px(DOMAIN_MAX, DOMAIN_MAX, z_lo),
        px(DOMAIN_MIN, DOMAIN_MAX, z_lo),
        px(DOMAIN_MIN, DOMAIN_MIN, z_lo),
    ];
    figure.stroke_polyline(&floor, FRAME_COLOR, FRAME_WIDTH);

    // vertical edge carrying the Z caption
    let vertical = [
        px(DOMAIN_MIN, DOMAIN_MAX, z_lo),
        px(DOMAIN_MIN, DOMAIN_MAX, z_hi),
    ];
    figure.stroke_polyline(&vertical, FRAME_COLOR, FRAME_WIDTH);

    let mid = (DOMAIN_MIN + DOMAIN_MAX) / 2.0;
    let out = 1.6; // caption offset outside the domain

    let (x_pos, _) = project_point(camera, bounds, viewport, mid, DOMAIN_MIN - out, z_lo);
    draw_label(figure, x_pos, &labels.x);

    let (y_pos, _) = project_point(camera, bounds, viewport, DOMAIN_MIN - out, mid, z_lo);
    draw_label(figure, y_pos, &labels.y);

    let (z_pos, _) = project_point(
        camera,
        bounds,
        viewport,
        DOMAIN_MIN - out / 2.0,
        DOMAIN_MAX + out,
        (z_lo + z_hi) / 2.0,
    );
    draw_label(figure, z_pos, &labels.z);
}

fn draw_label(figure: &mut Figure, pos: (f32, f32), caption: &str) {
    text::draw_text(figure, pos.0, pos.1, caption, LABEL_SIZE, LABEL_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_axes_marks_canvas() {
        let mut figure = Figure::new().unwrap();
        let camera = Camera::new(12.0, 70.0);
        let bounds = AxisBounds::inverted_domain(0.0, 5.0);
        let viewport = Viewport::new(figure.width(), figure.height(), 0.1);
        let labels = AxisLabels::new("X", "Y", "Utility");

        draw_axes(&mut figure, &camera, &bounds, &viewport, &labels);

        let touched = figure
            .pixels()
            .chunks_exact(4)
            .any(|p| p[0] < 250);
        assert!(touched);
    }
}
