//! topscores - output the N highest-scoring records from a data file.
//!
//! Usage:
//!   topscores <data-file>          # single highest record
//!   topscores <data-file> 25       # top 25 records
//!   topscores - 5                  # read records from stdin
//!
//! Exit codes: 0 success, 1 unreadable input, 2 record format violation.

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use topscores::cli::parse_count;
use topscores::{TopScoresBuilder, TraceObserver};

/// Select the N highest-scoring records from a scored-record data file.
#[derive(Parser)]
#[command(name = "topscores", version, about, allow_negative_numbers = true)]
struct Args {
    /// Path to the input data file ("-" reads stdin).
    #[arg(value_name = "DATA_FILE")]
    data_file: String,

    /// Number of top records to output. Defaults to 1 when absent or not
    /// a valid number.
    #[arg(value_name = "COUNT")]
    count: Option<String>,

    /// Write the result to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("topscores={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut engine = TopScoresBuilder::new()
        .input(args.data_file.as_str())
        .output(args.output.as_deref().unwrap_or("-"))
        .count(parse_count(args.count.as_deref()))
        .observer(Box::new(TraceObserver::new()))
        .build();

    if let Err(e) = engine.run() {
        eprintln!("topscores: {e}");
        std::process::exit(e.exit_code());
    }
}
