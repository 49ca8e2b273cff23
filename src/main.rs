//! Command-line interface for the opt6502 superoptimizer.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use opt6502::formatter::{format_solution, format_statistics, OutputFormat};
use opt6502::optimizer::{Optimizer, SearchOptions, TracingProgressListener};
use opt6502::parser::parse_spec;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Assembly listing
    Asm,
    /// Hex dump
    Bin,
    /// C array literal
    C,
    /// BASIC DATA statements
    Basic,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Asm => OutputFormat::Assembly,
            FormatArg::Bin => OutputFormat::Binary,
            FormatArg::C => OutputFormat::CArray,
            FormatArg::Basic => OutputFormat::BasicData,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "opt6502", version, about = "Superoptimizer for 6502 machine code")]
struct Cli {
    /// Input specification file
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Output file (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Output format for the solution
    #[arg(long = "output-format", value_enum, default_value_t = FormatArg::Asm)]
    output_format: FormatArg,

    /// Search timeout in seconds
    #[arg(short = 't', long = "timeout", default_value_t = 300)]
    timeout: u64,

    /// Report progress and new best solutions while searching
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Allow the stable undocumented opcodes in the search
    #[arg(long = "illegal")]
    illegal: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let default_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let spec = parse_spec(&source).context("failed to parse specification")?;
    let run_address = spec.run_address;

    let options = SearchOptions {
        include_illegal: cli.illegal,
        ..SearchOptions::default()
    };
    let mut optimizer = Optimizer::new(spec, options)?;
    if cli.verbose || cli.debug {
        optimizer.set_progress_listener(Box::new(TracingProgressListener));
    }

    let outcome = optimizer.run(Duration::from_secs(cli.timeout));

    let Some(best) = outcome.best else {
        if outcome.timed_out {
            bail!(
                "no solution found within {} seconds ({} candidates tested)",
                cli.timeout,
                outcome.sequences_tested
            );
        }
        bail!(
            "search space exhausted with no solution ({} candidates tested)",
            outcome.sequences_tested
        );
    };

    eprint!("{}", format_statistics(&best.bytes, Some(best.cycles)));

    let formatted = format_solution(&best.bytes, run_address, cli.output_format.into());
    match &cli.output {
        Some(path) => fs::write(path, formatted)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{formatted}"),
    }

    Ok(())
}
