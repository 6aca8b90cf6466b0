use clap::Parser;
use particle_swarm::{ObjectiveKind, Optimizer, SwarmConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pso")]
#[command(about = "Minimize a test function with particle swarm optimization")]
#[command(version)]
struct Cli {
    /// Objective to minimize (sphere, rosenbrock, rastrigin)
    #[arg(short, long, default_value = "rastrigin")]
    objective: ObjectiveKind,

    /// JSON parameter table; the built-in table is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    swarm_size: Option<usize>,

    #[arg(short, long)]
    iterations: Option<u32>,

    #[arg(short, long)]
    dimension: Option<usize>,

    #[arg(long)]
    jump_size: Option<f64>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Move particles on all cores
    #[arg(long)]
    parallel: bool,

    /// Print the result as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = build_optimizer(&cli)?.optimize()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("Objective: {}", outcome.objective);
        println!("Best:      {:?}", outcome.result.best);
        println!("Fitness:   {}", outcome.result.fitness);
        println!("Evals:     {}", outcome.result.cost_evals);
    }

    Ok(())
}

/// Parameter table (file or built-in) with command line overrides applied
fn build_optimizer(cli: &Cli) -> Result<Optimizer, Box<dyn std::error::Error>> {
    let mut optimizer = match &cli.config {
        Some(path) => Optimizer::from_json_file(path, cli.objective)?,
        None => Optimizer::new(SwarmConfig::default(), cli.objective),
    };

    let config = &mut optimizer.config;
    if let Some(swarm_size) = cli.swarm_size {
        config.swarm_size = swarm_size;
    }
    if let Some(iterations) = cli.iterations {
        config.iterations = iterations;
    }
    if let Some(dimension) = cli.dimension {
        config.dimension = dimension;
    }
    if let Some(jump_size) = cli.jump_size {
        config.jump_size = jump_size;
    }
    config.validate()?;

    // Per-round history is only printed with --json
    Ok(optimizer
        .with_seed(cli.seed)
        .with_parallel(cli.parallel)
        .with_history(cli.json))
}
