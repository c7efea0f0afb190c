//! MIPS pipeline simulator CLI.
//!
//! This binary provides a single entry point for all simulation modes. It performs:
//! 1. **Run:** Load an ELF or raw binary and execute it on the selected processor variant,
//!    optionally printing a register snapshot every cycle.
//! 2. **List:** Print the processor variants and whether each one is implemented.
//!
//! The final `CPI = <value>` line and the statistics go to stdout; logs and errors go to
//! stderr.

use std::path::PathBuf;
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mipsim_core::common::SimError;
use mipsim_core::config::{Config, Processor};
use mipsim_core::sim::{Simulator, loader};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Cycle-level MIPS pipeline simulator",
    long_about = "Run a MIPS program on a single-cycle, pipelined, speculative or dual-issue core.\n\nExamples:\n  sim run -f tests/add.elf\n  sim run --bmk bubble.bin --processor superscalar --trace\n  sim list"
)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program to completion.
    Run {
        /// ELF or raw big-endian binary to execute.
        #[arg(short, long, alias = "bmk")]
        file: PathBuf,

        /// Processor variant (see `sim list`).
        #[arg(short, long)]
        processor: Option<Processor>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the PC and registers after every cycle.
        #[arg(short, long)]
        trace: bool,

        /// Stop with an error after this many cycles.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Execute unsupported instructions as no-ops instead of faulting.
        #[arg(long)]
        permissive: bool,

        /// Write the statistics as JSON to this file.
        #[arg(long)]
        stats_json: Option<PathBuf>,

        /// Statistics sections to print (summary, instruction_mix, branch_predictor,
        /// pipeline). Prints all when omitted.
        #[arg(long, value_delimiter = ',')]
        stats: Vec<String>,

        /// Print the final register file.
        #[arg(long)]
        dump_regs: bool,
    },

    /// List the processor variants.
    List,
}

/// Options of the `run` subcommand.
#[derive(Debug)]
struct RunArgs {
    file: PathBuf,
    processor: Option<Processor>,
    config: Option<PathBuf>,
    trace: bool,
    max_cycles: Option<u64>,
    permissive: bool,
    stats_json: Option<PathBuf>,
    stats: Vec<String>,
    dump_regs: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            file,
            processor,
            config,
            trace,
            max_cycles,
            permissive,
            stats_json,
            stats,
            dump_regs,
        } => cmd_run(RunArgs {
            file,
            processor,
            config,
            trace,
            max_cycles,
            permissive,
            stats_json,
            stats,
            dump_regs,
        }),
        Commands::List => {
            cmd_list();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Installs the stderr log subscriber.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Builds the configuration from the optional file and the command-line overrides.
fn build_config(args: &RunArgs) -> Result<Config, SimError> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| SimError::Io {
                path: path.clone(),
                source,
            })?;
            Config::from_json(&text)?
        }
        None => Config::default(),
    };
    if let Some(p) = args.processor {
        config.general.processor = p;
    }
    if args.trace {
        config.general.trace_cycles = true;
    }
    if args.max_cycles.is_some() {
        config.general.max_cycles = args.max_cycles;
    }
    if args.permissive {
        config.general.strict_decode = false;
    }
    config.validate()?;
    Ok(config)
}

/// Loads and runs a program, then prints CPI and statistics.
fn cmd_run(args: RunArgs) -> Result<(), SimError> {
    let config = build_config(&args)?;
    let program = loader::load_file(&args.file)?;
    tracing::info!(file = %args.file.display(), processor = %config.general.processor, "loading");

    let mut sim = Simulator::new(&config, &program)?;
    let trace = config.general.trace_cycles;
    let summary = sim.run(|snapshot| {
        if trace {
            print!("{snapshot}");
        }
    })?;

    println!("CPI = {}", summary.cpi);
    if args.dump_regs {
        sim.cpu.regs.dump();
    }
    sim.cpu.stats.print_sections(&args.stats);

    if let Some(path) = &args.stats_json {
        let json = sim.cpu.stats.to_json()?;
        fs::write(path, json).map_err(|source| SimError::Io {
            path: path.clone(),
            source,
        })?;
    }
    Ok(())
}

/// Prints every processor variant with its implementation status.
fn cmd_list() {
    for p in Processor::ALL {
        let status = if p.is_implemented() {
            "implemented"
        } else {
            "not implemented"
        };
        println!("{:<18} {status}", p.name());
    }
}
