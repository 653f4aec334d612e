use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use waypoint_router::config::{self, SolveReport};
use waypoint_router::solver::{select_solver, Backend};

/// Solve the route through all required stops with a weighted cost function.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// JSON file with distances between locations
    #[arg(short, long)]
    distances_file: PathBuf,

    /// JSON config file with start and end locations, required stops and weights
    #[arg(short, long)]
    config_file: PathBuf,

    /// JSON file to write the shortest route to
    #[arg(short, long)]
    output_file: PathBuf,

    /// Solver backend (auto, reference, accelerated)
    #[arg(short, long, default_value_t = Backend::Auto)]
    backend: Backend,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt().with_env_filter(env_filter).with_target(true).init();

    // Backend is fixed before any location data is read.
    let solver = select_solver(args.backend);
    tracing::info!(backend = solver.name(), "solver ready");

    let graph = config::load_distances(&args.distances_file)?;
    let route = config::load_config(&args.config_file)?;

    let start_time = Instant::now();
    let solution = solver.solve(
        &graph,
        &route.start_location,
        &route.end_location,
        &route.stops(),
        route.weights,
    )?;
    let elapsed = start_time.elapsed().as_secs_f64();
    tracing::info!(elapsed, "route solved");

    let report = SolveReport {
        solution,
        solving_time_seconds: elapsed,
    };
    config::write_report(&args.output_file, &report)?;

    let solution = &report.solution;
    println!("Shortest path: {:?}", solution.path());
    println!("Total cost: {}", solution.total_cost());
    println!("Total distance: {} km", solution.total_distance());
    println!("Total duration: {} min", solution.total_duration());
    println!("Solving time: {} seconds", elapsed);

    Ok(())
}
