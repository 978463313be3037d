mod generate;
mod report;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use strsearch::{to_offset, Algorithm, SearchError};
use tracing::{debug, info};

pub use generate::{generate_text, text_seed};
pub use report::{BenchReport, BenchRow, OutputFormat};

/// Benchmark configuration, loadable from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub min_size: usize,
    /// Exclusive upper bound
    pub max_size: usize,
    pub step: usize,
    pub pattern_size: usize,
    pub alphabet: String,
    pub repetitions: usize,
    pub seed: Option<u64>,
    pub algorithms: Vec<Algorithm>,
    pub parallel: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            min_size: 100,
            max_size: 100_000,
            step: 500,
            pattern_size: 10,
            alphabet: "abcdefghijklmnopqrstuvwxyz".to_string(),
            repetitions: 1,
            seed: None,
            algorithms: Algorithm::ALL.to_vec(),
            parallel: false,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct BenchOverrides {
    pub min_size: Option<usize>,
    pub max_size: Option<usize>,
    pub step: Option<usize>,
    pub pattern_size: Option<usize>,
    pub alphabet: Option<String>,
    pub repetitions: Option<usize>,
    pub seed: Option<u64>,
    pub algorithms: Option<Vec<String>>,
    pub parallel: bool,
}

impl BenchConfig {
    /// Load a JSON config file; missing fields keep their defaults.
    pub fn load(path: &Path) -> strsearch::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply command-line overrides on top of this config.
    pub fn apply(&mut self, overrides: BenchOverrides) -> strsearch::error::Result<()> {
        if let Some(v) = overrides.min_size {
            self.min_size = v;
        }
        if let Some(v) = overrides.max_size {
            self.max_size = v;
        }
        if let Some(v) = overrides.step {
            self.step = v;
        }
        if let Some(v) = overrides.pattern_size {
            self.pattern_size = v;
        }
        if let Some(v) = overrides.alphabet {
            self.alphabet = v;
        }
        if let Some(v) = overrides.repetitions {
            self.repetitions = v;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if let Some(names) = overrides.algorithms {
            self.algorithms = names
                .iter()
                .map(|name| name.parse())
                .collect::<strsearch::error::Result<Vec<_>>>()?;
        }
        self.parallel |= overrides.parallel;
        Ok(())
    }

    pub fn validate(&self) -> strsearch::error::Result<()> {
        let invalid = |msg: String| Err(SearchError::InvalidConfig(msg));
        if self.step == 0 {
            return invalid("step must be at least 1".to_string());
        }
        if self.min_size >= self.max_size {
            return invalid(format!(
                "min_size ({}) must be smaller than max_size ({})",
                self.min_size, self.max_size
            ));
        }
        if self.pattern_size == 0 {
            return invalid("pattern_size must be at least 1".to_string());
        }
        if self.alphabet.is_empty() {
            return invalid("alphabet must contain at least one symbol".to_string());
        }
        if self.repetitions == 0 {
            return invalid("repetitions must be at least 1".to_string());
        }
        if self.algorithms.is_empty() {
            return invalid("at least one algorithm is required".to_string());
        }
        Ok(())
    }

    /// Text sizes to benchmark, `min_size..max_size` by `step`.
    pub fn sizes(&self) -> Vec<usize> {
        (self.min_size..self.max_size).step_by(self.step).collect()
    }
}

/// Average wall time of `repetitions` calls, plus the (identical) result.
fn time_algorithm(
    algo: Algorithm,
    text: &[u8],
    pattern: &[u8],
    repetitions: usize,
) -> (f64, Option<usize>) {
    let mut result = None;
    let start = Instant::now();
    for _ in 0..repetitions {
        result = std::hint::black_box(algo.find_bytes(text, pattern));
    }
    let avg = start.elapsed().as_secs_f64() / repetitions as f64;
    (avg, result)
}

/// Time every configured algorithm on one text size.
fn bench_size(config: &BenchConfig, seed: u64, pattern: &[u8], size: usize) -> Result<Vec<BenchRow>> {
    let alphabet: Vec<char> = config.alphabet.chars().collect();
    let mut rng = StdRng::seed_from_u64(text_seed(seed, size));
    let text = generate_text(&mut rng, &alphabet, size);

    let mut rows = Vec::with_capacity(config.algorithms.len());
    for &algo in &config.algorithms {
        let (avg_seconds, result) = time_algorithm(algo, &text, pattern, config.repetitions);
        rows.push(BenchRow {
            size,
            algorithm: algo,
            avg_seconds,
            offset: to_offset(result),
        });
    }

    if let Some(first) = rows.first() {
        if let Some(other) = rows.iter().find(|r| r.offset != first.offset) {
            anyhow::bail!(
                "Algorithms disagree at size {}: {} reports {}, {} reports {}",
                size,
                first.algorithm,
                first.offset,
                other.algorithm,
                other.offset
            );
        }
    }

    debug!(size, offset = rows.first().map_or(-1, |r| r.offset), "size done");
    Ok(rows)
}

/// Run the benchmark described by `config`.
pub fn run_bench(config: &BenchConfig) -> Result<BenchReport> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, "benchmark seed (pass --seed to replay)");

    let alphabet: Vec<char> = config.alphabet.chars().collect();
    let pattern = generate_text(&mut StdRng::seed_from_u64(seed), &alphabet, config.pattern_size);
    let sizes = config.sizes();

    let per_size: Vec<Vec<BenchRow>> = if config.parallel {
        sizes
            .par_iter()
            .map(|&size| bench_size(config, seed, &pattern, size))
            .collect::<Result<_>>()?
    } else {
        sizes
            .iter()
            .map(|&size| bench_size(config, seed, &pattern, size))
            .collect::<Result<_>>()?
    };

    Ok(BenchReport {
        seed,
        pattern: String::from_utf8_lossy(&pattern).into_owned(),
        alphabet: config.alphabet.clone(),
        repetitions: config.repetitions,
        algorithms: config.algorithms.clone(),
        rows: per_size.into_iter().flatten().collect(),
    })
}

pub fn cmd_bench(
    config_path: Option<PathBuf>,
    overrides: BenchOverrides,
    format: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;

    let mut config = match &config_path {
        Some(path) => BenchConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => BenchConfig::default(),
    };
    config.apply(overrides)?;
    config.validate()?;

    if format == OutputFormat::Table {
        report::print_config(&config);
    }

    let report = run_bench(&config)?;

    let mut out: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output: {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    report.write(&mut out, format)?;
    out.flush()?;

    if let Some(path) = &output {
        info!(path = %path.display(), rows = report.rows.len(), "results written");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BenchConfig {
        BenchConfig {
            min_size: 10,
            max_size: 200,
            step: 50,
            pattern_size: 3,
            alphabet: "ab".to_string(),
            repetitions: 2,
            seed: Some(42),
            ..BenchConfig::default()
        }
    }

    #[test]
    fn test_default_sizes() {
        let sizes = BenchConfig::default().sizes();
        assert_eq!(sizes.first(), Some(&100));
        assert_eq!(sizes.last(), Some(&99_600));
        assert_eq!(sizes.len(), 200);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = small_config();
        config.step = 0;
        assert!(matches!(config.validate(), Err(SearchError::InvalidConfig(_))));

        let mut config = small_config();
        config.min_size = 500;
        assert!(config.validate().is_err());

        let mut config = small_config();
        config.alphabet.clear();
        assert!(config.validate().is_err());

        let mut config = small_config();
        config.repetitions = 0;
        assert!(config.validate().is_err());

        assert!(small_config().validate().is_ok());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = small_config();
        config
            .apply(BenchOverrides {
                step: Some(25),
                algorithms: Some(vec!["kmp".to_string(), "bm".to_string()]),
                ..BenchOverrides::default()
            })
            .unwrap();
        assert_eq!(config.step, 25);
        assert_eq!(config.min_size, 10);
        assert_eq!(config.algorithms, vec![Algorithm::Kmp, Algorithm::BoyerMoore]);

        let err = config
            .apply(BenchOverrides {
                algorithms: Some(vec!["grep".to_string()]),
                ..BenchOverrides::default()
            })
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidAlgorithm(_)));
    }

    #[test]
    fn test_config_from_json_uses_defaults() {
        let config: BenchConfig =
            serde_json::from_str(r#"{"max_size": 1000, "algorithms": ["kmp"]}"#).unwrap();
        assert_eq!(config.max_size, 1000);
        assert_eq!(config.min_size, 100);
        assert_eq!(config.algorithms, vec![Algorithm::Kmp]);
        assert!(serde_json::from_str::<BenchConfig>(r#"{"sizes": 3}"#).is_err());
    }

    #[test]
    fn test_run_bench_rows() {
        let config = small_config();
        let report = run_bench(&config).unwrap();
        assert_eq!(report.seed, 42);
        assert_eq!(report.pattern.len(), 3);
        assert_eq!(report.rows.len(), config.sizes().len() * 3);
        for chunk in report.rows.chunks(3) {
            assert!(chunk.iter().all(|r| r.offset == chunk[0].offset));
        }
    }

    #[test]
    fn test_run_bench_parallel_matches_sequential() {
        let sequential = run_bench(&small_config()).unwrap();
        let parallel = run_bench(&BenchConfig {
            parallel: true,
            ..small_config()
        })
        .unwrap();
        let offsets = |r: &BenchReport| r.rows.iter().map(|row| (row.size, row.offset)).collect::<Vec<_>>();
        assert_eq!(offsets(&sequential), offsets(&parallel));
        assert_eq!(sequential.pattern, parallel.pattern);
    }
}
