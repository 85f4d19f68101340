//! Set-associative cache simulator CLI.
//!
//! Replays a binary address trace against one cache and reports how every access
//! resolved. It performs:
//! 1. **Configuration:** Geometry and policy from positional arguments, validated before
//!    the trace is read.
//! 2. **Simulation:** Loads the big-endian 32-bit trace and runs it in order.
//! 3. **Reporting:** Verbose text, one CSV line, or JSON, plus an optional bar chart.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cachesim_core::common::SimError;
use cachesim_core::config::{CacheConfig, OutputMode, ReplacementPolicy};
use cachesim_core::sim::{CacheSimulator, loader};

/// Bar width of the distribution chart at 100%.
const CHART_WIDTH: usize = 40;

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Set-associative cache simulator with miss classification",
    long_about = "Replay a trace of 32-bit big-endian addresses against a set-associative cache and classify every access as a hit or a compulsory, capacity or conflict miss.\n\nExamples:\n  cachesim 256 4 1 R 1 traces/bin_100.bin 0\n  cachesim 16 16 4 L 0 traces/vortex.in.sem.bin 1 --seed 7\n  RUST_LOG=cachesim_core=trace cachesim 1 4 2 F 0 trace.bin 0"
)]
struct Cli {
    /// Number of sets (power of two).
    num_sets: u64,

    /// Block size in bytes (power of two).
    block_size: u64,

    /// Associativity (ways per set).
    assoc: usize,

    /// Replacement policy: R (random), L (LRU) or F (FIFO).
    policy: ReplacementPolicy,

    /// Report format: 0 = readable report, 1 = single CSV line.
    #[arg(value_parser = clap::value_parser!(u8).range(0..=1))]
    output_mode: u8,

    /// Binary trace of 32-bit big-endian addresses.
    input_file: PathBuf,

    /// Print the hit/miss distribution chart: 0 = no, 1 = yes.
    #[arg(value_parser = clap::value_parser!(u8).range(0..=1))]
    show_graph: u8,

    /// Seed for the random replacement policy.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON instead of the selected output mode.
    #[arg(long)]
    json: bool,

    /// Log simulator activity to stderr (-v debug, -vv every access).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `-v` flags take precedence over `RUST_LOG`; without either, only warnings are shown.
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("cachesim_core=debug"),
        _ => EnvFilter::new("cachesim_core=trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Validates the configuration, loads the trace, simulates it and prints the report.
fn run(cli: &Cli) -> Result<(), SimError> {
    let mut config = CacheConfig::new(cli.num_sets, cli.block_size, cli.assoc, cli.policy);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let mode = OutputMode::try_from(cli.output_mode)?;

    // Reject bad geometry before touching the trace.
    let mut sim = CacheSimulator::new(&config)?;
    let trace = loader::load_trace(&cli.input_file)?;
    debug!(path = %cli.input_file.display(), addresses = trace.len(), "starting simulation");

    if mode == OutputMode::Verbose && !cli.json {
        println!(
            "Configuration: {} sets x {} ways x {} B blocks ({} B), {} replacement",
            config.num_sets,
            config.associativity,
            config.block_size,
            config.capacity_bytes(),
            config.policy
        );
        println!("  Trace: {}", cli.input_file.display());
        println!();
    }

    let stats = sim.run(trace);

    if cli.json {
        println!("{}", stats.to_json()?);
    } else {
        stats.print(mode);
    }
    if cli.show_graph == 1 {
        print!("{}", stats.render_chart(CHART_WIDTH));
    }
    Ok(())
}
