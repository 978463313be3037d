use anyhow::{bail, Result};
use serde_json::json;
use std::path::PathBuf;
use strsearch::{to_offset, Algorithm};
use tracing::debug;

use crate::cli_utils::{format_bytes, input_name, read_input};

/// Parse `--algorithm`: a single name or "all".
fn parse_selection(algorithm: &str) -> Result<Vec<Algorithm>> {
    if algorithm.eq_ignore_ascii_case("all") {
        return Ok(Algorithm::ALL.to_vec());
    }
    Ok(vec![algorithm.parse::<Algorithm>()?])
}

/// Run every selected algorithm and insist they agree.
fn find_checked(algorithms: &[Algorithm], text: &[u8], pattern: &[u8]) -> Result<Option<usize>> {
    let first = algorithms[0].find_bytes(text, pattern);
    for &algo in &algorithms[1..] {
        let other = algo.find_bytes(text, pattern);
        if other != first {
            bail!(
                "Algorithms disagree: {} reports {}, {} reports {}",
                algorithms[0],
                to_offset(first),
                algo,
                to_offset(other)
            );
        }
    }
    Ok(first)
}

pub fn cmd_find(
    pattern: String,
    inputs: Vec<PathBuf>,
    algorithm: String,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let algorithms = parse_selection(&algorithm)?;
    let inputs = if inputs.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        inputs
    };

    let mut all_found = true;
    for path in &inputs {
        let text = read_input(path)?;
        let name = input_name(path);
        debug!(input = %name, size = %format_bytes(text.len()), "searching");

        let result = find_checked(&algorithms, &text, pattern.as_bytes())?;
        all_found &= result.is_some();

        if quiet {
            continue;
        }

        let offset = to_offset(result);
        if json {
            let label = if algorithms.len() == 1 {
                algorithms[0].name()
            } else {
                "all"
            };
            println!(
                "{}",
                json!({ "input": name, "algorithm": label, "offset": offset })
            );
        } else {
            println!("{}: {}", name, offset);
        }
    }

    // Exit with appropriate code
    std::process::exit(if all_found { 0 } else { 1 });
}
