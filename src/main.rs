use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use range_search::algorithms::Value;
use range_search::timing::{self, Algorithm, TimingConfig};
use tracing_subscriber::filter::EnvFilter;

/// Times the search algorithms over growing range sizes and writes one
/// `size<TAB>average_ms` file per algorithm.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Timed searches averaged per sample.
    #[arg(long, default_value_t = timing::DEFAULT_REPETITIONS)]
    repetitions: u32,

    /// First range size.
    #[arg(long, default_value_t = timing::DEFAULT_SIZE_MIN)]
    size_min: usize,

    /// Exclusive upper bound on range sizes.
    #[arg(long, default_value_t = timing::DEFAULT_SIZE_MAX)]
    size_max: usize,

    /// Increment between range sizes.
    #[arg(long, default_value_t = timing::DEFAULT_STEP)]
    step: usize,

    /// Value every element of the range is set to.
    #[arg(long, allow_negative_numbers = true, default_value_t = timing::DEFAULT_FILL)]
    fill: Value,

    /// Key searched for.
    #[arg(long, allow_negative_numbers = true, default_value_t = timing::DEFAULT_TARGET)]
    target: Value,

    /// Directory the sample files are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Algorithm to time. Repeat to time several.
    #[arg(
        long = "algorithm",
        value_enum,
        default_values_t = [
            Algorithm::Linear,
            Algorithm::BinaryIterative,
            Algorithm::BinaryRecursive,
        ]
    )]
    algorithms: Vec<Algorithm>,
}

impl Cli {
    fn config(&self) -> TimingConfig {
        TimingConfig {
            repetitions: self.repetitions,
            size_min: self.size_min,
            size_max: self.size_max,
            step: self.step,
            fill: self.fill,
            target: self.target,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.config();

    let paths = timing::run_to_dir(&config, &cli.algorithms, &cli.out_dir)
        .with_context(|| format!("timing run into `{}` failed", cli.out_dir.display()))?;

    for path in paths {
        println!("{}", path.display());
    }

    Ok(())
}
