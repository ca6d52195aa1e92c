//! topscores_gen - generate synthetic score-record data files.
//!
//! Writes records in the exact format `topscores` consumes, one per
//! line: a unique score, a colon, and a JSON payload with a unique id.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use topscores::generator::{GeneratorConfig, write_records};
use topscores::{FileOutput, OutputTarget, StdoutOutput};

/// Generate a synthetic scored-record data file.
#[derive(Parser)]
#[command(name = "topscores_gen", version, about)]
struct Args {
    /// Number of records to generate.
    #[arg(long, default_value_t = 1_000_000)]
    records: u64,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Output path ("-" writes stdout).
    #[arg(short, long, default_value = "-")]
    output: String,
}

fn run(args: &Args) -> std::io::Result<()> {
    let config = GeneratorConfig {
        records: args.records,
        seed: args.seed,
    };

    let mut writer = if args.output == "-" {
        StdoutOutput::new().create()?
    } else {
        FileOutput::new(args.output.clone().into()).create()?
    };

    write_records(&config, &mut writer)?;

    tracing::info!(records = args.records, output = %args.output, "generated score records");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("topscores_gen: {e}");
        std::process::exit(1);
    }
}
