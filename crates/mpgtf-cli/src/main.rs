//! mpgtf CLI - generate and inspect multi-phase gammatone filterbanks.
//!
//! This binary is a thin wrapper around the `mpgtf` library: it parses
//! parameters, calls the generator and writes the results (JSON matrix
//! dumps, PNG renders, terminal summaries). No filterbank math lives here.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod render;

/// Multi-phase gammatone filterbank generator
#[derive(Parser)]
#[command(name = "mpgtf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a filterbank and write it to disk
    Generate {
        /// Audio sample rate in Hz
        #[arg(long, default_value_t = 8000.0)]
        sample_rate: f64,

        /// Filter length in seconds
        #[arg(long, default_value_t = 0.002)]
        duration: f64,

        /// Total number of filters (must be even)
        #[arg(long, default_value_t = 128)]
        filters: usize,

        /// Write the filterbank (config + tap matrix) as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render the tap matrix as a PNG image
        #[arg(long)]
        png: Option<PathBuf>,

        /// Pixels per matrix cell in the PNG render
        #[arg(long, default_value_t = 4)]
        cell_size: u32,

        /// Output machine-readable JSON instead of colored text
        #[arg(long)]
        json: bool,
    },

    /// Print the center frequencies and phase pair allocation for a bank
    Info {
        /// Total number of filters (must be even)
        #[arg(long, default_value_t = 128)]
        filters: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            sample_rate,
            duration,
            filters,
            output,
            png,
            cell_size,
            json,
        } => commands::generate::run(
            sample_rate,
            duration,
            filters,
            output.as_deref(),
            png.as_deref(),
            cell_size,
            json,
        ),
        Commands::Info { filters } => commands::info::run(filters),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
