//! cdplot command line entry point.
//!
//! Renders the built-in Cobb-Douglas figures, or the scenarios from a JSON
//! file, into static PNG images.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod scenario;

#[derive(Parser, Debug)]
#[command(name = "cdplot")]
#[command(about = "Cobb-Douglas surface and contour plot generator")]
struct Args {
    /// Directory the image files are written into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// JSON file with render scenarios (defaults to the built-in pair)
    #[arg(short, long)]
    scenarios: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let scenarios = match &args.scenarios {
        Some(path) => scenario::load_scenarios(path)?,
        None => scenario::builtin_scenarios(),
    };
    info!(count = scenarios.len(), "rendering scenarios");

    for scenario in &scenarios {
        let path = args.out_dir.join(scenario.file_name());
        scenario.render(&path)?;
        info!(path = %path.display(), "wrote figure");
    }

    Ok(())
}
