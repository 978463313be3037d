mod cli_utils;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use commands::bench::BenchOverrides;
use commands::{cmd_bench, cmd_find};

#[derive(Parser)]
#[command(name = "strsearch")]
#[command(
    about = "Exact string matching with brute force, KMP and Boyer-Moore",
    long_about = "strsearch - Exact single-pattern string matching\n\n\
    Finds the first occurrence of a pattern in files or stdin and compares\n\
    the running time of three classic algorithms on random text.\n\n\
    Algorithms:\n\
      • brute-force  Try every alignment, no preprocessing\n\
      • kmp          Knuth-Morris-Pratt with an LPS failure table\n\
      • boyer-moore  Bad-character and good-suffix shifts\n\n\
    Examples:\n\
      strsearch find abcaby notes.txt\n\
      strsearch find --algorithm all needle haystack.bin\n\
      echo 'hello world' | strsearch find world -\n\
      strsearch bench --max-size 20000 --step 1000 --format csv -o timings.csv"
)]
#[command(version)]
struct Cli {
    /// Log debug details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the first occurrence of a pattern in files or stdin
    Find {
        /// Pattern to search for (matched byte for byte)
        #[arg(value_name = "PATTERN")]
        pattern: String,

        /// Files to search, or "-" for stdin (default: stdin)
        #[arg(value_name = "INPUT")]
        inputs: Vec<PathBuf>,

        /// Algorithm: brute-force, kmp, boyer-moore, or all (cross-checks results)
        #[arg(short, long, default_value = "boyer-moore")]
        algorithm: String,

        /// Output NDJSON records instead of text
        #[arg(short, long)]
        json: bool,

        /// Quiet mode - no output, only exit code (0 = all inputs matched, 1 = otherwise)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Benchmark all algorithms on random text of increasing size
    Bench {
        /// JSON configuration file (flags below override its values)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Smallest text size (default: 100)
        #[arg(long)]
        min_size: Option<usize>,

        /// Text size upper bound, exclusive (default: 100000)
        #[arg(long)]
        max_size: Option<usize>,

        /// Size increment between runs (default: 500)
        #[arg(long)]
        step: Option<usize>,

        /// Pattern length in symbols (default: 10)
        #[arg(long)]
        pattern_size: Option<usize>,

        /// Symbols used for random text and pattern (default: a-z)
        #[arg(long)]
        alphabet: Option<String>,

        /// Timed calls per algorithm and size, averaged (default: 1)
        #[arg(short, long)]
        repetitions: Option<usize>,

        /// Random seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Algorithms to compare (comma-separated, default: all)
        #[arg(short, long, value_delimiter = ',')]
        algorithms: Option<Vec<String>>,

        /// Output format: table (default), csv, or json
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Write results to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Time text sizes concurrently (faster, noisier timings)
        #[arg(long)]
        parallel: bool,
    },
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Find {
            pattern,
            inputs,
            algorithm,
            json,
            quiet,
        } => cmd_find(pattern, inputs, algorithm, json, quiet),
        Commands::Bench {
            config,
            min_size,
            max_size,
            step,
            pattern_size,
            alphabet,
            repetitions,
            seed,
            algorithms,
            format,
            output,
            parallel,
        } => cmd_bench(
            config,
            BenchOverrides {
                min_size,
                max_size,
                step,
                pattern_size,
                alphabet,
                repetitions,
                seed,
                algorithms,
                parallel,
            },
            format,
            output,
        ),
    }
}
