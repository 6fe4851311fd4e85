//! Common types and utilities shared across the cdplot crates.

pub mod color;
pub mod config;
pub mod error;
pub mod grid;

pub use color::{Color, Colormap};
pub use config::{AxisLabels, ContourOptions, ProjectionAxis, SurfaceOptions, ViewAngles};
pub use error::{PlotError, PlotResult};
pub use grid::{linspace, SurfaceGrid};
