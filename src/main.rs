//! tourga - Command Line Interface
//!
//! Evolves a short closed tour over the locations of a distance matrix.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tourga::evolution::{solve, EvolutionOptions, EvolutionResult, LogLevel};
use tourga::plot::{load_coordinates, route_points, SvgRenderer};
use tourga::{DistanceMatrix, RandomNumberGenerator, Result};

#[derive(Parser, Debug)]
#[command(name = "tourga")]
#[command(version)]
#[command(about = "Genetic search for a short depot-based tour over a distance matrix")]
struct Cli {
    /// Headerless CSV holding a square distance matrix
    matrix: PathBuf,

    #[arg(long, default_value_t = 100)]
    population_size: usize,

    /// Number of generations to evolve
    #[arg(long, default_value_t = 500)]
    generations: usize,

    /// Per-offspring probability of a swap mutation
    #[arg(long, default_value_t = 0.1)]
    mutation_rate: f64,

    /// Fittest tours copied unchanged into each new generation
    #[arg(long, default_value_t = 2)]
    elitism_count: usize,

    #[arg(long, default_value_t = 5)]
    tournament_size: usize,

    /// Index of the start and end location
    #[arg(long, default_value_t = 0)]
    depot: usize,

    /// Random seed; a fresh one is drawn when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Population size from which fitness is scored in parallel
    #[arg(long, default_value_t = 1000)]
    parallel_threshold: usize,

    /// Per-generation progress reporting
    #[arg(long, value_enum, default_value = "minimal")]
    log_level: Verbosity,

    /// Headerless `x,y` CSV, one row per location, used for --svg
    #[arg(long, requires = "svg")]
    coords: Option<PathBuf>,

    /// Write the best tour as an SVG image
    #[arg(long, requires = "coords")]
    svg: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Verbosity {
    None,
    Minimal,
    Verbose,
}

impl From<Verbosity> for LogLevel {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::None => LogLevel::None,
            Verbosity::Minimal => LogLevel::Minimal,
            Verbosity::Verbose => LogLevel::Verbose,
        }
    }
}

fn init_tracing(verbosity: Verbosity) {
    let default_directive = match verbosity {
        Verbosity::None => "info",
        Verbosity::Minimal => "info,tourga=debug",
        Verbosity::Verbose => "info,tourga=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn evolution_options(cli: &Cli) -> EvolutionOptions {
    EvolutionOptions::builder()
        .population_size(cli.population_size)
        .num_generations(cli.generations)
        .mutation_rate(cli.mutation_rate)
        .elitism_count(cli.elitism_count)
        .tournament_size(cli.tournament_size)
        .depot(cli.depot)
        .parallel_threshold(cli.parallel_threshold)
        .log_level(cli.log_level.into())
        .build()
}

fn run(cli: &Cli) -> Result<EvolutionResult> {
    let matrix = DistanceMatrix::from_csv_path(&cli.matrix)?;
    let options = evolution_options(cli);

    let mut rng = match cli.seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };

    let result = solve(matrix, &options, &mut rng)?;

    if let (Some(coords_path), Some(svg_path)) = (&cli.coords, &cli.svg) {
        let coords = load_coordinates(coords_path)?;
        let points = route_points(&result.tour, &coords)?;
        let renderer = SvgRenderer::new();
        let svg = renderer.render(&points, &format!("Distance: {:.2}", result.distance));
        renderer.save(&svg, svg_path)?;
        info!(path = %svg_path.display(), "Saved tour image");
    }

    Ok(result)
}

/// The lines printed for a finished run; the depot is not counted as visited.
fn summary(result: &EvolutionResult) -> String {
    format!(
        "Best route: {}\nTotal distance: {:.2}\nLocations visited: {}",
        result.tour,
        result.distance,
        result.tour.interior().len()
    )
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    match run(&cli) {
        Ok(result) => {
            println!("{}", summary(&result));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
