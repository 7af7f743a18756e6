use clap::{Parser, Subcommand, ValueEnum};
use ep_core::timing::{self, frame_timing};
use ep_core::{hz, period};
use ep_sim::{AnimationClock, EpicycleConfig, EpicycleSimulator, Preset, RenderGeometry};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config_io;
mod error;
mod export;

use error::{CliError, CliResult};
use export::{RunExport, TraceRow};

#[derive(Parser)]
#[command(name = "ep-cli")]
#[command(about = "Epicycle CLI - headless Fourier epicycle runs", long_about = None)]
struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a preset configuration
    Preset {
        /// Preset name (canvas or accelerated)
        preset: Preset,
        /// Print JSON instead of YAML
        #[arg(long)]
        json: bool,
        /// Write to a file instead of stdout (format follows the extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        /// Path to the configuration YAML/JSON file
        config_path: PathBuf,
    },
    /// Run the simulator for a number of animation cycles
    Run(RunArgs),
}

#[derive(clap::Args)]
struct RunArgs {
    /// Configuration file (takes precedence over --preset)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Preset used when no configuration file is given
    #[arg(short, long, default_value = "canvas")]
    preset: Preset,
    /// RNG seed; a random one is drawn and logged when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Frames per second of the fixed-step clock
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
    /// Number of complete cycles to run
    #[arg(long, default_value_t = 1)]
    cycles: u64,
    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,
    /// Output file (optional, defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print frame timing to stderr when done
    #[arg(long)]
    timing: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Preset {
            preset,
            json,
            output,
        } => cmd_preset(preset, json, output.as_deref()),
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Run(args) => cmd_run(&args),
    }
}

fn cmd_preset(preset: Preset, json: bool, output: Option<&Path>) -> CliResult<()> {
    let config = EpicycleConfig::preset(preset);
    if let Some(path) = output {
        config_io::save_config(path, &config)?;
        println!("✓ Wrote {} preset to {}", preset, path.display());
    } else {
        print!("{}", config_io::render_config(&config, json)?);
    }
    Ok(())
}

fn cmd_validate(config_path: &Path) -> CliResult<()> {
    println!("Validating configuration: {}", config_path.display());
    let config = config_io::load_config(config_path)?;
    let ranges = &config.ranges;
    println!("✓ Configuration is valid");
    println!(
        "  Components:      {}..={}",
        ranges.count().min,
        ranges.count().max
    );
    println!(
        "  Magnitude:       {}..={}",
        ranges.magnitude().min,
        ranges.magnitude().max
    );
    println!(
        "  Rotation factor: {}..={}",
        ranges.rotation_factor().min,
        ranges.rotation_factor().max
    );
    println!(
        "  Cycle:           end {} over {} s",
        config.cycle.end, config.cycle.length_s
    );
    Ok(())
}

/// Drawn seeds go to stderr so stdout exports stay clean and the run can
/// still be repeated.
fn seed_notice(requested: Option<u64>, seed: u64) -> Option<String> {
    match requested {
        Some(_) => None,
        None => Some(format!("Using random seed {seed} (pass --seed {seed} to repeat)")),
    }
}

fn cmd_run(args: &RunArgs) -> CliResult<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        return Err(CliError::InvalidArg {
            what: format!("fps must be positive and finite, got {}", args.fps),
        });
    }
    if args.cycles == 0 {
        return Err(CliError::InvalidArg {
            what: "cycles must be at least 1".to_string(),
        });
    }

    let config = match &args.config {
        Some(path) => config_io::load_config(path)?,
        None => EpicycleConfig::preset(args.preset),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    if let Some(notice) = seed_notice(args.seed, seed) {
        eprintln!("{notice}");
    }

    if args.timing {
        timing::enable_timing();
    }
    frame_timing::reset_all();

    let mut sim = EpicycleSimulator::with_seed(config, seed)?;
    let mut clock = AnimationClock::new(config.cycle);
    let dt = period(hz(args.fps));
    tracing::info!(
        seed,
        components = sim.components().len(),
        fps = args.fps,
        cycles = args.cycles,
        "starting run"
    );

    sim.start();
    let mut rows = Vec::new();
    let mut frames: u64 = 0;
    let mut last_frame = RenderGeometry::default();

    while clock.cycles() < args.cycles {
        let tick = clock.tick(dt);
        sim.advance(tick.progress);
        frames += 1;

        if tick.finished {
            let cycle = clock.cycles() - 1;
            let trace = sim.geometry().trace_path();
            rows.extend(trace.iter().enumerate().map(|(frame, &tip)| TraceRow {
                cycle,
                frame,
                tip,
            }));
            tracing::debug!(cycle, vertices = trace.len(), "cycle complete");
            if clock.cycles() == args.cycles {
                last_frame = sim.geometry().clone();
            }
            sim.finish_cycle();
        }
    }

    let (body, what) = match args.format {
        ExportFormat::Csv => (export::trace_csv(&rows), format!("{} trace points", rows.len())),
        ExportFormat::Json => {
            let export = RunExport {
                seed,
                config: sim.config(),
                components: sim.components(),
                frames,
                cycles: clock.cycles(),
                last_frame: &last_frame,
            };
            (export::run_json(&export)?, "final frame".to_string())
        }
    };

    if let Some(path) = args.output.as_deref() {
        std::fs::write(path, body)?;
        println!(
            "✓ Exported {} ({} frames, {} cycles, seed {}) to {}",
            what,
            frames,
            clock.cycles(),
            seed,
            path.display()
        );
    } else {
        print!("{}", body);
    }

    frame_timing::print_summary();
    Ok(())
}
