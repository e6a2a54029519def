//! Info command implementation.
//!
//! Prints the center frequency ladder and the phase pair allocation a bank
//! of the given size would use, without synthesizing any taps.

use anyhow::{bail, Result};
use colored::Colorize;
use mpgtf::allocation::{center_frequencies, phase_pairs};
use mpgtf::erb::hz_to_erb;
use std::process::ExitCode;

/// Run the info command for a bank of `filters` filters.
pub fn run(filters: usize) -> Result<ExitCode> {
    if filters == 0 || filters % 2 != 0 {
        bail!("filter count must be a positive even number, got {}", filters);
    }

    let freqs = center_frequencies();
    let pairs = phase_pairs(filters);

    println!(
        "{} {} filters over {} center frequencies",
        "Allocation:".cyan().bold(),
        filters,
        freqs.len()
    );
    let header = format!(
        "{:>5} {:>12} {:>10} {:>7} {:>9}",
        "band", "center (Hz)", "ERB rate", "pairs", "rows"
    );
    println!("{}", header.dimmed());

    let mut row = 0;
    for (band, (&freq, &pair_count)) in freqs.iter().zip(pairs.iter()).enumerate() {
        let row_range = if pair_count > 0 {
            format!("{}..{}", row, row + 2 * pair_count)
        } else {
            "-".to_string()
        };
        println!(
            "{:>5} {:>12.1} {:>10.2} {:>7} {:>9}",
            band,
            freq,
            hz_to_erb(freq),
            pair_count,
            row_range
        );
        row += 2 * pair_count;
    }

    Ok(ExitCode::SUCCESS)
}
