use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use vc_core::{Flow, Peep, Pressure, Volume};

mod config;
mod error;
mod simulate;

use error::CliResult;
use simulate::{OutputFormat, SimulateOptions};

#[derive(Parser)]
#[command(name = "vc-cli")]
#[command(about = "ventctl CLI - discrete PID loops for airway quantities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulated step response and print target/measurement rows
    Simulate {
        /// Path to a YAML tuning file (defaults to the built-in demo tuning)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Controlled quantity
        #[arg(long, value_enum, default_value_t = QuantityArg::Pressure)]
        quantity: QuantityArg,
        /// Numeric precision
        #[arg(long, value_enum, default_value_t = PrecisionArg::F32)]
        precision: PrecisionArg,
        /// Number of controlled ticks
        #[arg(long, default_value_t = 100)]
        ticks: usize,
        /// Zero rows printed before the loop starts
        #[arg(long, default_value_t = 10)]
        settle: usize,
        /// Output format
        #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
        format: FormatArg,
    },
    /// Validate a tuning file
    Validate {
        /// Path to the YAML tuning file
        config: PathBuf,
    },
    /// Print the built-in demo tuning as YAML
    Defaults,
}

#[derive(Clone, Copy, ValueEnum)]
enum QuantityArg {
    Pressure,
    Peep,
    Flow,
    Volume,
}

#[derive(Clone, Copy, ValueEnum)]
enum PrecisionArg {
    F32,
    F64,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Log filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "info";

fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> CliResult<()> {
    // Logs go to stderr so stdout stays machine readable.
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            config,
            quantity,
            precision,
            ticks,
            settle,
            format,
        } => cmd_simulate(
            config.as_deref(),
            quantity,
            precision,
            SimulateOptions {
                ticks,
                settle,
                format: format.into(),
            },
        ),
        Commands::Validate { config } => cmd_validate(&config, &mut io::stdout().lock()),
        Commands::Defaults => cmd_defaults(&mut io::stdout().lock()),
    }
}

fn cmd_simulate(
    config: Option<&Path>,
    quantity: QuantityArg,
    precision: PrecisionArg,
    options: SimulateOptions,
) -> CliResult<()> {
    let tuning = config::load_or_default(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match (quantity, precision) {
        (QuantityArg::Pressure, PrecisionArg::F32) => {
            simulate::run::<Pressure<f32>, _>(&tuning, options, &mut out)?;
        }
        (QuantityArg::Pressure, PrecisionArg::F64) => {
            simulate::run::<Pressure<f64>, _>(&tuning, options, &mut out)?;
        }
        (QuantityArg::Peep, PrecisionArg::F32) => {
            simulate::run::<Peep<f32>, _>(&tuning, options, &mut out)?;
        }
        (QuantityArg::Peep, PrecisionArg::F64) => {
            simulate::run::<Peep<f64>, _>(&tuning, options, &mut out)?;
        }
        (QuantityArg::Flow, PrecisionArg::F32) => {
            simulate::run::<Flow<f32>, _>(&tuning, options, &mut out)?;
        }
        (QuantityArg::Flow, PrecisionArg::F64) => {
            simulate::run::<Flow<f64>, _>(&tuning, options, &mut out)?;
        }
        (QuantityArg::Volume, PrecisionArg::F32) => {
            simulate::run::<Volume<f32>, _>(&tuning, options, &mut out)?;
        }
        (QuantityArg::Volume, PrecisionArg::F64) => {
            simulate::run::<Volume<f64>, _>(&tuning, options, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn cmd_validate<W: Write>(path: &Path, out: &mut W) -> CliResult<()> {
    writeln!(out, "Validating tuning: {}", path.display())?;
    let tuning = config::load_yaml(path)?;
    writeln!(
        out,
        "✓ Tuning is valid ({} terms, target {}, period {} s)",
        tuning.terms.len(),
        tuning.target,
        tuning.sample_period_s
    )?;
    Ok(())
}

fn cmd_defaults<W: Write>(out: &mut W) -> CliResult<()> {
    write!(out, "{}", config::to_yaml(&vc_control::LoopTuning::default())?)?;
    Ok(())
}
