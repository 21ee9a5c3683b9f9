use clap::{Parser, Subcommand};
use springsim_core::scenario::{self, ClothParams, PendulumParams};
use springsim_core::{
    ForceSystem, IntegratorKind, ScenarioKind, Simulation, SimulationConfig, State,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "springsim")]
#[command(about = "Mass-spring particle simulation with fixed sub-stepping", long_about = None)]
struct Cli {
    /// Log simulation events (equivalent to RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a built-in scenario headlessly and print particle positions
    Run(RunArgs),
}

#[derive(clap::Args)]
struct RunArgs {
    /// Scene to simulate: circular, pendulum or cloth
    #[arg(short, long, default_value = "pendulum")]
    scenario: ScenarioKind,

    /// YAML file with `integrator` and `integration_step`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Integrator: euler, trapezoidal or rk4 (overrides the config file)
    #[arg(short, long)]
    integrator: Option<IntegratorKind>,

    /// Largest integration sub-step in seconds (overrides the config file)
    #[arg(long)]
    step: Option<f32>,

    /// Number of host frames to simulate
    #[arg(short, long, default_value_t = 60)]
    frames: usize,

    /// Wall-clock seconds per host frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_dt: f32,

    /// Raise the reset signal on this frame
    #[arg(long)]
    reset_at: Option<usize>,

    /// Print positions every N frames (the last frame is always printed)
    #[arg(long, default_value_t = 10)]
    every: usize,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run(args) => {
            if let Err(e) = run(&args) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(args: &RunArgs) -> springsim_core::Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(kind) = args.integrator {
        config.integrator = kind;
    }
    if let Some(step) = args.step {
        config.integration_step = step;
    }
    config.validate()?;
    Ok(config)
}

fn run(args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(args)?;
    tracing::info!(scenario = %args.scenario, integrator = %config.integrator, "starting");

    match args.scenario {
        ScenarioKind::Circular => {
            let (system, initial) = scenario::circular();
            drive(config, system, initial, args)
        }
        ScenarioKind::Pendulum => {
            let (system, initial) = scenario::pendulum_chain(PendulumParams::default())?;
            drive(config, system, initial, args)
        }
        ScenarioKind::Cloth => {
            let (system, initial) = scenario::cloth(ClothParams::default())?;
            drive(config, system, initial, args)
        }
    }
}

fn drive<S: ForceSystem>(
    config: SimulationConfig,
    system: S,
    initial: State,
    args: &RunArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut sim = Simulation::new(config, system, initial)?;
    let every = args.every.max(1);

    for frame in 1..=args.frames {
        let reset = args.reset_at == Some(frame);
        sim.tick(args.frame_dt, reset)?;

        if reset || frame % every == 0 || frame == args.frames {
            print_frame(frame, &sim);
        }
    }

    Ok(())
}

fn print_frame<S: ForceSystem>(frame: usize, sim: &Simulation<S>) {
    println!("frame {} t={:.4}", frame, sim.elapsed_time());
    for (i, p) in sim.positions().iter().enumerate() {
        println!("  [{}] {:.6} {:.6} {:.6}", i, p.x, p.y, p.z);
    }
}
