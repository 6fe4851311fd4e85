//! Figure canvas and file output.

use std::path::Path;

use plot_common::{Color, PlotError, PlotResult};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::png;

/// Canvas width in pixels (10 units at 100 px/unit).
pub const FIGURE_WIDTH: u32 = 1000;
/// Canvas height in pixels (8 units at 100 px/unit).
pub const FIGURE_HEIGHT: u32 = 800;
/// Fractional margin on every canvas edge.
pub const FIGURE_MARGIN: f64 = 0.1;

/// A raster canvas plot elements draw into. Created fresh per render call;
/// its only side effect is the file written by [`save`](Figure::save).
pub struct Figure {
    pixmap: Pixmap,
}

impl Figure {
    /// White canvas at the fixed figure size.
    pub fn new() -> PlotResult<Self> {
        let mut pixmap = Pixmap::new(FIGURE_WIDTH, FIGURE_HEIGHT)
            .ok_or_else(|| PlotError::Encode("failed to allocate canvas".to_string()))?;
        pixmap.fill(tiny_skia::Color::WHITE);
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Raw RGBA pixel data.
    pub fn pixels(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Fill a closed polygon. Polygons with any non-finite vertex are
    /// skipped entirely, leaving a gap rather than failing.
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: Color) {
        if points.len() < 3 || points.iter().any(|&(x, y)| !x.is_finite() || !y.is_finite()) {
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(points[0].0, points[0].1);
        for &(x, y) in &points[1..] {
            pb.line_to(x, y);
        }
        pb.close();

        if let Some(path) = pb.finish() {
            let mut paint = Paint::default();
            paint.set_color_rgba8(color.r, color.g, color.b, color.a);
            paint.anti_alias = true;
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    /// Stroke an open polyline. Non-finite vertices are dropped, so values
    /// like `inf` from boundary cells show up as gaps in the line.
    pub fn stroke_polyline(&mut self, points: &[(f32, f32)], color: Color, width: f32) {
        let pts: Vec<(f32, f32)> = points
            .iter()
            .copied()
            .filter(|&(x, y)| x.is_finite() && y.is_finite())
            .collect();
        if pts.len() < 2 {
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(pts[0].0, pts[0].1);
        for &(x, y) in &pts[1..] {
            pb.line_to(x, y);
        }

        if let Some(path) = pb.finish() {
            let mut paint = Paint::default();
            paint.set_color_rgba8(color.r, color.g, color.b, color.a);
            paint.anti_alias = true;

            let mut stroke = Stroke::default();
            stroke.width = width;
            stroke.line_cap = LineCap::Round;
            stroke.line_join = LineJoin::Round;

            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    /// Encode the canvas and write it to `path`.
    ///
    /// The output format is chosen from the file extension; only `png` is
    /// recognized. The extension is checked before any byte is produced, so
    /// a rejected path never leaves a partial file behind.
    pub fn save(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !ext.eq_ignore_ascii_case("png") {
            return Err(PlotError::UnsupportedFormat(ext.to_string()));
        }

        let encoded = png::create_png_auto(
            self.pixmap.data(),
            self.width() as usize,
            self.height() as usize,
        )?;
        std::fs::write(path, encoded)?;
        Ok(())
    }
}
