//! Software 3D figure rendering for Cobb-Douglas surfaces.
//!
//! The pipeline for every figure is a single linear pass: evaluate the
//! grid, project its geometry through an orthographic camera, rasterize
//! with tiny-skia, encode to PNG. No GPU, no windowing, no retries.

pub mod axes;
pub mod camera;
pub mod contour;
pub mod figure;
pub mod png;
pub mod surface;
pub mod text;

pub use contour::render_contour;
pub use surface::render_surface;
