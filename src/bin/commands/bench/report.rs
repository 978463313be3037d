use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;
use strsearch::{Algorithm, SearchError};

use super::BenchConfig;
use crate::cli_utils::{format_bytes, format_number, format_seconds};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(SearchError::InvalidConfig(format!(
                "unknown output format '{}' (use table, csv, or json)",
                s
            ))),
        }
    }
}

/// One timed (size, algorithm) measurement; also the CSV record layout.
#[derive(Debug, Clone, Serialize)]
pub struct BenchRow {
    pub size: usize,
    pub algorithm: Algorithm,
    pub avg_seconds: f64,
    pub offset: isize,
}

#[derive(Debug, Clone)]
pub struct BenchReport {
    pub seed: u64,
    pub pattern: String,
    pub alphabet: String,
    pub repetitions: usize,
    pub algorithms: Vec<Algorithm>,
    pub rows: Vec<BenchRow>,
}

#[derive(Serialize)]
struct Point {
    size: usize,
    avg_seconds: f64,
}

/// Time-vs-size line for one algorithm, ready for plotting.
#[derive(Serialize)]
struct Series {
    algorithm: Algorithm,
    label: &'static str,
    points: Vec<Point>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    seed: u64,
    pattern: &'a str,
    alphabet: &'a str,
    repetitions: usize,
    series: Vec<Series>,
    rows: &'a [BenchRow],
}

impl BenchReport {
    fn series(&self) -> Vec<Series> {
        self.algorithms
            .iter()
            .map(|&algo| Series {
                algorithm: algo,
                label: algo.label(),
                points: self
                    .rows
                    .iter()
                    .filter(|r| r.algorithm == algo)
                    .map(|r| Point {
                        size: r.size,
                        avg_seconds: r.avg_seconds,
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn write<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Table => self.write_table(out),
            OutputFormat::Csv => self.write_csv(out),
            OutputFormat::Json => self.write_json(out),
        }
    }

    fn write_csv<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        let report = JsonReport {
            seed: self.seed,
            pattern: &self.pattern,
            alphabet: &self.alphabet,
            repetitions: self.repetitions,
            series: self.series(),
            rows: &self.rows,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        Ok(())
    }

    fn write_table<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Pattern: \"{}\" (seed {})\n", self.pattern, self.seed)?;

        write!(out, "{:>10}", "Size")?;
        for algo in &self.algorithms {
            write!(out, "  {:>12}", algo.label())?;
        }
        writeln!(out, "  {:>8}", "Offset")?;

        // Rows are grouped by size, one row per algorithm, in config order.
        for chunk in self.rows.chunks(self.algorithms.len().max(1)) {
            write!(out, "{:>10}", format_number(chunk[0].size))?;
            for row in chunk {
                write!(out, "  {:>12}", format_seconds(row.avg_seconds))?;
            }
            writeln!(out, "  {:>8}", chunk[0].offset)?;
        }

        writeln!(out)?;
        writeln!(out, "Total time per algorithm:")?;
        for series in self.series() {
            let total: f64 = series.points.iter().map(|p| p.avg_seconds).sum();
            writeln!(out, "  {:<12} {}", series.label, format_seconds(total))?;
        }
        Ok(())
    }
}

pub fn print_config(config: &BenchConfig) {
    let sizes = config.sizes();
    println!("=== String Search Benchmark ===\n");
    println!("Configuration:");
    println!(
        "  Text sizes:        {}..{} step {} ({} sizes, up to {})",
        format_number(config.min_size),
        format_number(config.max_size),
        format_number(config.step),
        sizes.len(),
        format_bytes(sizes.last().copied().unwrap_or(0))
    );
    println!("  Pattern size:      {}", config.pattern_size);
    println!("  Alphabet:          {}", config.alphabet);
    println!("  Repetitions:       {}", config.repetitions);
    println!(
        "  Algorithms:        {}",
        config
            .algorithms
            .iter()
            .map(|a| a.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    if config.parallel {
        println!("  Mode:              parallel (timings are noisier)");
    }
    println!();
}
