//! Multi-Phase Gammatone Filterbank (MP-GTF) construction.
//!
//! This crate builds a fixed bank of N time-domain gammatone impulse
//! responses for use as the analysis/synthesis front-end of speech
//! separation networks. Center frequencies are spaced one ERB apart on the
//! psychoacoustic ERB scale; each frequency carries several phase-shifted
//! copies of the same filter so the bank covers phase as well as frequency.
//!
//! # Overview
//!
//! Construction composes four pieces, bottom-up:
//!
//! - **ERB scale conversion** - bidirectional mapping between Hz and the ERB
//!   psychoacoustic scale
//! - **Gammatone synthesis** - one impulse response per (center frequency,
//!   phase shift)
//! - **Allocation** - distributing N filters as sign-mirrored phase pairs
//!   over 24 ERB-spaced center frequencies
//! - **Assembly** - writing frequency blocks in order, mirroring the second
//!   phase half by negation, and equalizing RMS across all filters
//!
//! # Determinism
//!
//! Generation is a pure function of the configuration: no randomness, no
//! I/O, no global state. The same config produces a byte-identical tap
//! matrix across runs, which [`Filterbank::tap_hash`] makes cheap to verify.
//!
//! # Example
//!
//! ```
//! use mpgtf::{build, FilterbankConfig};
//!
//! let config = FilterbankConfig {
//!     sample_rate_hz: 8000.0,
//!     duration_seconds: 0.002,
//!     filter_count: 128,
//! };
//! let bank = build(&config).expect("valid config");
//!
//! assert_eq!(bank.num_filters(), 128);
//! assert_eq!(bank.num_samples(), 16);
//! ```
//!
//! # Crate Structure
//!
//! - [`build()`] - Main entry point for filterbank generation
//! - [`allocation`] - Center frequency ladder and phase pair allocation
//! - [`erb`] - ERB scale conversions
//! - [`gammatone`] - Gammatone impulse response synthesis
//! - [`normalize`] - Cross-filter RMS equalization

pub mod allocation;
pub mod erb;
pub mod error;
pub mod filterbank;
pub mod gammatone;
pub mod generate;
pub mod normalize;

// Re-export main types at crate root
pub use error::{FilterbankError, FilterbankResult};
pub use filterbank::{Filterbank, FilterbankConfig};
pub use generate::build;
