//! `jsmicro`: list and run the registered micro-benchmarks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use jsmicro_harness::{listing, run_selected, Report, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "jsmicro")]
#[command(about = "Run jsmicro string micro-benchmarks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every registered benchmark and its description.
    List,
    /// Run benchmarks (all of them when no names are given).
    Run {
        /// Benchmark names, e.g. `string-indexOf-2`.
        names: Vec<String>,

        /// Timed invocations per benchmark.
        #[arg(long, short = 's', default_value_t = 10, env = "JSMICRO_SAMPLES")]
        samples: u32,

        /// Untimed invocations before sampling.
        #[arg(long, short = 'w', default_value_t = 1, env = "JSMICRO_WARMUP")]
        warmup: u32,

        /// Output format.
        #[arg(long, short = 'f', value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn render(report: &Report, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => report.summary(),
        Format::Json => {
            let mut json = report.to_json().context("serializing report")?;
            json.push('\n');
            json
        }
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jsmicro=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    jsmicro_cases::register_global().context("registering benchmark cases")?;
    let registry = jsmicro_core::with_global(|reg| reg.clone());

    match cli.command {
        Command::List => print!("{}", listing(&registry)),
        Command::Run {
            names,
            samples,
            warmup,
            format,
        } => {
            let config = RunConfig { warmup, samples };
            tracing::info!(count = names.len(), samples, warmup, "starting run");
            let report = run_selected(&registry, names.as_slice(), &config)?;
            print!("{}", render(&report, format)?);
        }
    }

    Ok(())
}
