//! Orthographic camera for 3D figure projection.

use plot_common::grid::{DOMAIN_MAX, DOMAIN_MIN};

/// Camera orientation in degrees, with `view_init`-style semantics:
/// elevation above the XY plane, azimuth about the vertical axis.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub elev_deg: f64,
    pub azim_deg: f64,
}

impl Camera {
    pub fn new(elev_deg: f64, azim_deg: f64) -> Self {
        Self { elev_deg, azim_deg }
    }

    /// Orientation used when no viewing angle is configured.
    pub fn default_view() -> Self {
        Self::new(30.0, -60.0)
    }

    /// Project a point from normalized cube coordinates (each axis in
    /// `[0, 1]`) into camera space. Depth grows toward the viewer.
    pub fn project(&self, x: f64, y: f64, z: f64) -> Projected {
        let (se, ce) = self.elev_deg.to_radians().sin_cos();
        let (sa, ca) = self.azim_deg.to_radians().sin_cos();

        let px = x - 0.5;
        let py = y - 0.5;
        let pz = z - 0.5;

        // screen right = (-sin a, cos a, 0)
        // screen up    = (-sin e * cos a, -sin e * sin a, cos e)
        // forward      = (cos e * cos a, cos e * sin a, sin e)
        Projected {
            x: -sa * px + ca * py,
            y: -se * ca * px - se * sa * py + ce * pz,
            depth: ce * ca * px + ce * sa * py + se * pz,
        }
    }
}

/// A point in camera space.
#[derive(Debug, Clone, Copy)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

/// Axis limits used to normalize world coordinates before projection.
///
/// X and Y run from 10 down to 0 (inverted) so the surface peak faces the
/// viewer; Z spans the data range.
#[derive(Debug, Clone, Copy)]
pub struct AxisBounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub z: (f64, f64),
}

impl AxisBounds {
    /// Bounds for the standard figure: inverted domain axes, data Z range.
    pub fn inverted_domain(z_min: f64, z_max: f64) -> Self {
        Self {
            x: (DOMAIN_MAX, DOMAIN_MIN),
            y: (DOMAIN_MAX, DOMAIN_MIN),
            z: (z_min, z_max),
        }
    }

    /// Map world coordinates into the unit cube.
    pub fn normalize(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        (norm(x, self.x), norm(y, self.y), norm(z, self.z))
    }
}

fn norm(v: f64, (lo, hi): (f64, f64)) -> f64 {
    let span = hi - lo;
    if span.abs() < f64::EPSILON {
        0.5
    } else {
        (v - lo) / span
    }
}

/// Maps camera space onto canvas pixels, honoring the figure margins.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    scale: f64,
    cx: f64,
    cy: f64,
}

// Projected extent of the unit cube: its half-diagonal is sqrt(3)/2, so the
// full camera-space span never exceeds sqrt(3).
const CUBE_SPAN: f64 = 1.733;

impl Viewport {
    /// `margin` is the fraction of each canvas edge left blank.
    pub fn new(width: u32, height: u32, margin: f64) -> Self {
        let draw_w = width as f64 * (1.0 - 2.0 * margin);
        let draw_h = height as f64 * (1.0 - 2.0 * margin);
        Self {
            width,
            height,
            scale: draw_w.min(draw_h) / CUBE_SPAN,
            cx: width as f64 / 2.0,
            cy: height as f64 / 2.0,
        }
    }

    /// Camera space to pixel coordinates (pixel Y grows downward).
    pub fn to_pixel(&self, p: Projected) -> (f32, f32) {
        (
            (self.cx + p.x * self.scale) as f32,
            (self.cy - p.y * self.scale) as f32,
        )
    }
}

/// Full world-to-pixel transform. Returns the pixel position and the camera
/// depth (for painter's-algorithm sorting).
pub fn project_point(
    camera: &Camera,
    bounds: &AxisBounds,
    viewport: &Viewport,
    x: f64,
    y: f64,
    z: f64,
) -> ((f32, f32), f64) {
    let (nx, ny, nz) = bounds.normalize(x, y, z);
    let p = camera.project(nx, ny, nz);
    (viewport.to_pixel(p), p.depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_is_deterministic() {
        let camera = Camera::new(12.0, 70.0);
        let a = camera.project(0.3, 0.6, 0.9);
        let b = camera.project(0.3, 0.6, 0.9);
        assert_eq!(a.x, b.x);
        assert_eq!(a.y, b.y);
        assert_eq!(a.depth, b.depth);
    }

    #[test]
    fn test_top_down_view_flattens_z() {
        // Looking straight down, Z contributes nothing to screen position.
        let camera = Camera::new(90.0, 0.0);
        let low = camera.project(0.3, 0.7, 0.0);
        let high = camera.project(0.3, 0.7, 1.0);
        assert!((low.x - high.x).abs() < 1e-12);
        assert!((low.y - high.y).abs() < 1e-12);
        assert!(high.depth > low.depth);
    }

    #[test]
    fn test_inverted_bounds() {
        let bounds = AxisBounds::inverted_domain(0.0, 5.0);
        // world x = 10 maps to the near side of the cube
        let (nx, ny, nz) = bounds.normalize(10.0, 0.0, 5.0);
        assert!((nx - 0.0).abs() < 1e-12);
        assert!((ny - 1.0).abs() < 1e-12);
        assert!((nz - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_flat_z_range_centers() {
        let bounds = AxisBounds::inverted_domain(2.0, 2.0);
        let (_, _, nz) = bounds.normalize(1.0, 1.0, 2.0);
        assert_eq!(nz, 0.5);
    }

    #[test]
    fn test_viewport_centering() {
        let viewport = Viewport::new(1000, 800, 0.1);
        let (px, py) = viewport.to_pixel(Projected {
            x: 0.0,
            y: 0.0,
            depth: 0.0,
        });
        assert_eq!(px, 500.0);
        assert_eq!(py, 400.0);
    }

    #[test]
    fn test_cube_fits_in_viewport() {
        let camera = Camera::new(12.0, 70.0);
        let viewport = Viewport::new(1000, 800, 0.1);
        for &x in &[0.0, 1.0] {
            for &y in &[0.0, 1.0] {
                for &z in &[0.0, 1.0] {
                    let (px, py) = viewport.to_pixel(camera.project(x, y, z));
                    assert!(px >= 0.0 && px <= 1000.0);
                    assert!(py >= 0.0 && py <= 800.0);
                }
            }
        }
    }
}
