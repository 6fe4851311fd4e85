//! Render scenarios: which figures to produce and with which options.
//!
//! Scenarios come either from the built-in pair (the original hardcoded
//! surface and contour figures) or from a JSON file. Deserialization
//! failures, including missing required keys like `labels`, abort before
//! any rendering or file output happens.

use std::path::Path;

use plot_common::{
    AxisLabels, ContourOptions, PlotError, PlotResult, ProjectionAxis, SurfaceOptions, ViewAngles,
};
use serde::Deserialize;

/// A single figure to produce.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Scenario {
    Surface {
        alpha: f64,
        beta: f64,
        output: String,
        #[serde(flatten)]
        options: SurfaceOptions,
    },
    Contour {
        alpha: f64,
        beta: f64,
        output: String,
        #[serde(flatten)]
        options: ContourOptions,
    },
}

impl Scenario {
    /// File name the figure is written under (relative to the output
    /// directory).
    pub fn file_name(&self) -> &str {
        match self {
            Scenario::Surface { output, .. } | Scenario::Contour { output, .. } => output,
        }
    }

    /// Render this scenario to `path`.
    pub fn render(&self, path: &Path) -> PlotResult<()> {
        match self {
            Scenario::Surface {
                alpha,
                beta,
                options,
                ..
            } => renderer::render_surface(*alpha, *beta, path, options),
            Scenario::Contour {
                alpha,
                beta,
                options,
                ..
            } => renderer::render_contour(*alpha, *beta, path, options),
        }
    }
}

/// Load scenarios from a JSON file holding a list of tagged entries.
pub fn load_scenarios(path: &Path) -> PlotResult<Vec<Scenario>> {
    let content = std::fs::read_to_string(path)?;
    let scenarios: Vec<Scenario> = serde_json::from_str(&content)
        .map_err(|e| PlotError::invalid_config("scenarios", e.to_string()))?;
    if scenarios.is_empty() {
        return Err(PlotError::invalid_config(
            "scenarios",
            "file contains no scenarios",
        ));
    }
    Ok(scenarios)
}

/// The two figures the tool was written for.
pub fn builtin_scenarios() -> Vec<Scenario> {
    let labels = AxisLabels::new("X", "Y", "Utility");
    vec![
        Scenario::Surface {
            alpha: 0.3,
            beta: 0.5,
            output: "cobb_douglas.png".to_string(),
            options: SurfaceOptions {
                num_points: 100,
                y_contour: Some(5.0),
                labels: labels.clone(),
            },
        },
        Scenario::Contour {
            alpha: 0.3,
            beta: 0.4,
            output: "cobb_douglas_contour.png".to_string(),
            options: ContourOptions {
                num_points: 100,
                num_levels: 25,
                zdir: ProjectionAxis::X,
                degrees: Some(ViewAngles {
                    elev: 30.0,
                    azim: 60.0,
                }),
                labels,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_scenarios() {
        let scenarios = builtin_scenarios();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].file_name(), "cobb_douglas.png");
        assert_eq!(scenarios[1].file_name(), "cobb_douglas_contour.png");
    }

    #[test]
    fn test_parse_scenario_file() {
        let json = r#"[
            {
                "kind": "surface",
                "alpha": 0.3, "beta": 0.5,
                "output": "s.png",
                "num_points": 50,
                "y_contour": 4.0,
                "labels": {"x": "Capital", "y": "Labor", "z": "Output"}
            },
            {
                "kind": "contour",
                "alpha": 0.3, "beta": 0.4,
                "output": "c.png",
                "num_points": 50,
                "num_levels": 10,
                "zdir": "z",
                "labels": {"x": "Capital", "y": "Labor", "z": "Output"}
            }
        ]"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        let scenarios = load_scenarios(file.path()).unwrap();
        assert_eq!(scenarios.len(), 2);
    }

    #[test]
    fn test_missing_labels_fails_before_render() {
        let json = r#"[
            {"kind": "surface", "alpha": 0.3, "beta": 0.5, "output": "s.png", "num_points": 50}
        ]"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let err = load_scenarios(file.path()).unwrap_err();
        assert!(err.to_string().contains("labels"));
        assert!(!std::path::Path::new("s.png").exists());
    }

    #[test]
    fn test_empty_scenario_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();
        assert!(load_scenarios(file.path()).is_err());
    }

    #[test]
    fn test_render_builtin_surface_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let scenario = &builtin_scenarios()[0];
        let path = dir.path().join(scenario.file_name());
        scenario.render(&path).unwrap();
        assert!(path.exists());
    }
}
