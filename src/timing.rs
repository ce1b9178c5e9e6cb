//! Timing harness for the search algorithms.
//!
//! For every range size in `[size_min, size_max)` (advancing by `step`), a
//! buffer of that size is filled with a single value and searched for a
//! target `repetitions` times. The mean wall-clock time of one search, in
//! milliseconds, becomes one [`Sample`].

use core::fmt;
use std::fs::{self, File};
use std::hint::black_box;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::ValueEnum;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::prelude::*;

/// Number of timed searches averaged per sample.
pub const DEFAULT_REPETITIONS: u32 = 30;
/// Smallest range size timed.
pub const DEFAULT_SIZE_MIN: usize = 10_000;
/// Range sizes stay strictly below this bound.
pub const DEFAULT_SIZE_MAX: usize = 10_000_000;
/// Increment between consecutive range sizes.
pub const DEFAULT_STEP: usize = 20_000;
/// Value every element of the timed range is set to.
pub const DEFAULT_FILL: Value = 2;
/// Key searched for. Absent from a default-filled range.
pub const DEFAULT_TARGET: Value = 0;

/// Errors produced by the timing harness.
#[derive(Error, Debug)]
pub enum TimingError {
    /// The configuration describes no meaningful run.
    #[error("invalid timing configuration: {0}")]
    InvalidConfig(String),

    /// Writing an output file failed.
    #[error("failed to write samples to `{}`", .path.display())]
    Io {
        /// File or directory being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// The search entry point being timed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, ValueEnum)]
pub enum Algorithm {
    /// [`lsearch`]
    Linear,
    /// [`bsearch`]
    BinaryIterative,
    /// [`bsearch_rec_aux`]
    BinaryRecursive,
    /// [`lbound`]
    LowerBound,
    /// [`ubound`]
    UpperBound,
}

impl Algorithm {
    /// Every algorithm, in output order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Linear,
        Algorithm::BinaryIterative,
        Algorithm::BinaryRecursive,
        Algorithm::LowerBound,
        Algorithm::UpperBound,
    ];

    /// Name of the file this algorithm's samples are written to.
    pub fn file_name(self) -> &'static str {
        match self {
            Algorithm::Linear => "linear.txt",
            Algorithm::BinaryIterative => "bs_iterative.txt",
            Algorithm::BinaryRecursive => "bs_recursive.txt",
            Algorithm::LowerBound => "lower_bound.txt",
            Algorithm::UpperBound => "upper_bound.txt",
        }
    }

    /// Runs the matching search function.
    pub fn search(self, range: &[Value], value: Value) -> usize {
        match self {
            Algorithm::Linear => lsearch(range, value),
            Algorithm::BinaryIterative => bsearch(range, value),
            Algorithm::BinaryRecursive => bsearch_rec_aux(range, value),
            Algorithm::LowerBound => lbound(range, value),
            Algorithm::UpperBound => ubound(range, value),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Linear => "linear",
            Algorithm::BinaryIterative => "binary-iterative",
            Algorithm::BinaryRecursive => "binary-recursive",
            Algorithm::LowerBound => "lower-bound",
            Algorithm::UpperBound => "upper-bound",
        };
        f.write_str(name)
    }
}

/// Parameters of a timing run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingConfig {
    /// Timed searches averaged per sample.
    pub repetitions: u32,
    /// First range size.
    pub size_min: usize,
    /// Exclusive upper bound on range sizes.
    pub size_max: usize,
    /// Increment between range sizes.
    pub step: usize,
    /// Value the range is filled with.
    pub fill: Value,
    /// Key searched for.
    pub target: Value,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
            size_min: DEFAULT_SIZE_MIN,
            size_max: DEFAULT_SIZE_MAX,
            step: DEFAULT_STEP,
            fill: DEFAULT_FILL,
            target: DEFAULT_TARGET,
        }
    }
}

impl TimingConfig {
    /// Checks that the configuration yields at least one sample.
    pub fn validate(&self) -> Result<(), TimingError> {
        if self.repetitions == 0 {
            return Err(TimingError::InvalidConfig(
                "repetitions must be greater than zero".into(),
            ));
        }
        if self.step == 0 {
            return Err(TimingError::InvalidConfig(
                "step must be greater than zero".into(),
            ));
        }
        if self.size_min == 0 {
            return Err(TimingError::InvalidConfig(
                "size_min must be greater than zero".into(),
            ));
        }
        if self.size_min >= self.size_max {
            return Err(TimingError::InvalidConfig(format!(
                "size_min ({}) must be less than size_max ({})",
                self.size_min, self.size_max
            )));
        }
        Ok(())
    }

    /// Range sizes timed by this configuration. Call [`validate`] first: a
    /// zero `step` panics.
    ///
    /// [`validate`]: TimingConfig::validate
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.size_min..self.size_max).step_by(self.step)
    }
}

/// Mean search time for one range size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    /// Number of elements in the searched range.
    pub size: usize,
    /// Mean duration of one search, in milliseconds.
    pub average_ms: f64,
}

/// Returns the mean duration, in milliseconds, of `repetitions` calls of
/// `algorithm` on `range`. Zero repetitions measure nothing and yield `0.0`.
pub fn measure(algorithm: Algorithm, range: &[Value], target: Value, repetitions: u32) -> f64 {
    if repetitions == 0 {
        return 0.0;
    }

    let mut sum = 0.0;

    for _ in 0..repetitions {
        let start = Instant::now();
        black_box(algorithm.search(black_box(range), black_box(target)));
        sum += start.elapsed().as_secs_f64() * 1_000.0;
    }

    sum / f64::from(repetitions)
}

/// Times `algorithm` over every size of `config`.
pub fn run(config: &TimingConfig, algorithm: Algorithm) -> Result<Vec<Sample>, TimingError> {
    config.validate()?;

    info!(
        %algorithm,
        size_min = config.size_min,
        size_max = config.size_max,
        step = config.step,
        repetitions = config.repetitions,
        "timing started"
    );

    // One buffer, resized per sample.
    let mut range: Vec<Value> = Vec::new();
    let mut samples = Vec::new();

    for size in config.sizes() {
        range.clear();
        range.resize(size, config.fill);

        let average_ms = measure(algorithm, &range, config.target, config.repetitions);
        debug!(%algorithm, size, average_ms, "sample");

        samples.push(Sample { size, average_ms });
    }

    info!(%algorithm, samples = samples.len(), "timing finished");

    Ok(samples)
}

/// Writes one `size<TAB>average_ms` line per sample.
pub fn write_samples<W: Write>(mut writer: W, samples: &[Sample]) -> io::Result<()> {
    for sample in samples {
        writeln!(writer, "{}\t{}", sample.size, sample.average_ms)?;
    }

    writer.flush()
}

/// Times each of `algorithms` and writes its samples to
/// `dir/<Algorithm::file_name>`, creating `dir` if needed. Returns the paths
/// written, in the order of `algorithms`.
pub fn run_to_dir(
    config: &TimingConfig,
    algorithms: &[Algorithm],
    dir: &Path,
) -> Result<Vec<PathBuf>, TimingError> {
    config.validate()?;

    if algorithms.is_empty() {
        warn!("no algorithms selected, nothing to time");
        return Ok(Vec::new());
    }

    fs::create_dir_all(dir).map_err(|source| TimingError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::with_capacity(algorithms.len());

    for &algorithm in algorithms {
        let samples = run(config, algorithm)?;
        let path = dir.join(algorithm.file_name());

        File::create(&path)
            .and_then(|file| write_samples(BufWriter::new(file), &samples))
            .map_err(|source| TimingError::Io {
                path: path.clone(),
                source,
            })?;

        info!(%algorithm, path = %path.display(), "samples written");
        paths.push(path);
    }

    Ok(paths)
}
