//! Generate command implementation.
//!
//! Builds a filterbank from the requested parameters and writes a terminal
//! summary plus any requested artifacts (JSON matrix dump, PNG render).

use anyhow::{Context, Result};
use colored::Colorize;
use mpgtf::{build, FilterbankConfig};
use std::path::Path;
use std::process::ExitCode;

use crate::render;

/// Run the generate command.
///
/// # Arguments
/// * `sample_rate` - Audio sample rate in Hz
/// * `duration` - Filter length in seconds
/// * `filters` - Total number of filters
/// * `output` - Optional JSON dump path
/// * `png` - Optional PNG render path
/// * `cell_size` - Pixels per matrix cell in the render
/// * `json_output` - Whether to print machine-readable JSON instead of text
pub fn run(
    sample_rate: f64,
    duration: f64,
    filters: usize,
    output: Option<&Path>,
    png: Option<&Path>,
    cell_size: u32,
    json_output: bool,
) -> Result<ExitCode> {
    let config = FilterbankConfig {
        sample_rate_hz: sample_rate,
        duration_seconds: duration,
        filter_count: filters,
    };
    let bank = build(&config)?;

    if let Some(path) = output {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer(std::io::BufWriter::new(file), &bank)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if let Some(path) = png {
        render::write_png(&bank, path, cell_size)
            .with_context(|| format!("rendering {}", path.display()))?;
    }

    if json_output {
        let summary = serde_json::json!({
            "config": bank.config(),
            "num_filters": bank.num_filters(),
            "num_samples": bank.num_samples(),
            "tap_hash": bank.tap_hash(),
            "output": output.map(|p| p.display().to_string()),
            "png": png.map(|p| p.display().to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} {} filters x {} taps ({} Hz, {} s)",
            "Generated:".cyan().bold(),
            bank.num_filters(),
            bank.num_samples(),
            sample_rate,
            duration
        );
        println!("{} {}", "Tap hash:".dimmed(), bank.tap_hash());
        if let Some(path) = output {
            println!("{} {}", "Wrote:".green(), path.display());
        }
        if let Some(path) = png {
            println!("{} {}", "Wrote:".green(), path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}
