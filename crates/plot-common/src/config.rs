//! Typed rendering options for the two plot variants.
//!
//! These replace a free-form option mapping: optional settings are modeled
//! as `Option` fields, required settings are plain fields that fail at
//! deserialization (with an error naming the missing key) before anything
//! is drawn or written.

use serde::{Deserialize, Serialize};

/// Axis captions. Required by both plot variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl AxisLabels {
    pub fn new(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }
}

/// Camera orientation in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewAngles {
    /// Elevation above the XY plane.
    pub elev: f64,
    /// Azimuth about the vertical axis.
    pub azim: f64,
}

/// Axis along which contour lines are projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionAxis {
    X,
    Y,
    Z,
}

/// Options for the surface-with-contour-plane variant.
///
/// The camera is fixed for this variant (elevation 12, azimuth 70) and is
/// deliberately not part of the options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceOptions {
    /// Samples per axis.
    pub num_points: usize,
    /// Y offset of the filled contour plane; omit to skip the plane (and
    /// the last-row override that goes with it).
    #[serde(default)]
    pub y_contour: Option<f64>,
    pub labels: AxisLabels,
}

/// Options for the pure contour variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContourOptions {
    /// Samples per axis.
    pub num_points: usize,
    /// Number of evenly spaced contour levels.
    pub num_levels: usize,
    /// Projection axis for the contour lines.
    pub zdir: ProjectionAxis,
    /// Camera orientation; the renderer default is used when omitted.
    #[serde(default)]
    pub degrees: Option<ViewAngles>,
    pub labels: AxisLabels,
}
