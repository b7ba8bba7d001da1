//! Command-line entry point for the 1D Euler solver.
//!
//! Loads a TOML configuration, runs the simulation to its final time, and
//! writes CSV and VTK output named after the configured case.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use euler1d::{write_csv, write_vtk, Config, EulerSolver, Real};

/// Finite-volume solver for the 1D compressible Euler equations.
#[derive(Parser)]
#[command(name = "euler1d")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "1D compressible Euler finite-volume solver", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    config: PathBuf,

    /// Output directory for CSV/VTK files
    #[arg(default_value = ".")]
    output_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Run in single precision
    #[arg(long)]
    f32: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("cannot create output directory {:?}", cli.output_dir))?;

    info!("loading configuration: {}", cli.config.display());
    let config = Config::from_file(&cli.config)
        .with_context(|| format!("cannot load configuration {:?}", cli.config))?;

    if cli.f32 {
        run_simulation::<f32>(&config, &cli.output_dir)
    } else {
        run_simulation::<f64>(&config, &cli.output_dir)
    }
}

fn run_simulation<R: Real>(config: &Config, output_dir: &std::path::Path) -> Result<()> {
    let mut solver = EulerSolver::<R>::new(config);
    solver.run();

    let u = solver.solution();
    let w = solver.primitives();
    let mesh = solver.mesh();
    let base_name = solver.test_name();

    let csv_path = output_dir.join(format!("{base_name}.csv"));
    write_csv(&csv_path, mesh, u, &w, solver.time())
        .with_context(|| format!("cannot write {csv_path:?}"))?;
    info!("wrote CSV: {}", csv_path.display());

    let vtk_path = output_dir.join(format!("{base_name}.vtk"));
    write_vtk(&vtk_path, mesh, u, &w).with_context(|| format!("cannot write {vtk_path:?}"))?;
    info!("wrote VTK: {}", vtk_path.display());

    Ok(())
}
