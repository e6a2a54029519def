//! Main entry point for filterbank generation.
//!
//! This module validates a [`FilterbankConfig`], assembles the bank block by
//! block and normalizes the result. The whole computation is a pure function
//! of the three config scalars; the same config always produces the same
//! matrix.

use std::f64::consts::PI;

use crate::allocation::{center_frequencies, phase_pairs, NUM_CENTER_FREQS};
use crate::error::{FilterbankError, FilterbankResult};
use crate::filterbank::{Filterbank, FilterbankConfig};
use crate::gammatone::{self, num_taps};
use crate::normalize::equalize_rms;

/// Builds the multi-phase gammatone filterbank described by `config`.
///
/// Rows are written per center frequency in increasing frequency order. For
/// a frequency assigned k pairs, the first k rows carry phase shifts
/// `j/k * pi` for j in 0..k; the next k rows are their element-wise
/// negations, which realizes the [pi, 2*pi) phases without resynthesis
/// because the carrier is a cosine. Finally the whole matrix is scaled so
/// every row matches the loudest row's RMS.
///
/// # Arguments
/// * `config` - Sample rate, filter duration and target filter count
///
/// # Returns
/// The normalized N x L filterbank, or an error for configs the allocator
/// cannot honor (non-positive rate/duration, zero-length taps, zero or odd
/// filter count).
pub fn build(config: &FilterbankConfig) -> FilterbankResult<Filterbank> {
    validate(config)?;

    let num_samples = num_taps(config.sample_rate_hz, config.duration_seconds);
    let pairs = phase_pairs(config.filter_count);
    let freqs = center_frequencies();

    let mut taps = vec![0.0; config.filter_count * num_samples];
    let mut cursor = 0usize;

    for (&center_freq_hz, &pair_count) in freqs.iter().zip(pairs.iter()) {
        if pair_count == 0 {
            continue;
        }

        // First half of the block: phase shifts in [0, pi)
        for phase_index in 0..pair_count {
            let phase_shift = phase_index as f64 / pair_count as f64 * PI;
            let ir = gammatone::impulse_response(
                config.sample_rate_hz,
                config.duration_seconds,
                center_freq_hz,
                phase_shift,
            );
            taps[cursor * num_samples..(cursor + 1) * num_samples].copy_from_slice(&ir);
            cursor += 1;
        }

        // Second half: element-wise negations of the rows just written
        let block = pair_count * num_samples;
        let first_half = (cursor - pair_count) * num_samples;
        taps.copy_within(first_half..first_half + block, first_half + block);
        for tap in &mut taps[first_half + block..first_half + 2 * block] {
            *tap = -*tap;
        }
        cursor += pair_count;
    }

    equalize_rms(&mut taps, num_samples);

    Ok(Filterbank::new(config.clone(), num_samples, taps))
}

fn validate(config: &FilterbankConfig) -> FilterbankResult<()> {
    if !config.sample_rate_hz.is_finite() || config.sample_rate_hz <= 0.0 {
        return Err(FilterbankError::InvalidSampleRate {
            rate: config.sample_rate_hz,
        });
    }
    if !config.duration_seconds.is_finite() || config.duration_seconds <= 0.0 {
        return Err(FilterbankError::InvalidDuration {
            duration: config.duration_seconds,
        });
    }
    if num_taps(config.sample_rate_hz, config.duration_seconds) == 0 {
        return Err(FilterbankError::EmptyImpulseResponse {
            duration: config.duration_seconds,
            rate: config.sample_rate_hz,
        });
    }
    if config.filter_count == 0 {
        return Err(FilterbankError::invalid_filter_count(
            config.filter_count,
            "must be positive",
        ));
    }
    if config.filter_count % 2 != 0 {
        return Err(FilterbankError::invalid_filter_count(
            config.filter_count,
            format!(
                "must be even to form sign-mirrored phase pairs across the {} center frequencies ({} phase slots)",
                NUM_CENTER_FREQS,
                2 * NUM_CENTER_FREQS
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(sample_rate_hz: f64, duration_seconds: f64, filter_count: usize) -> FilterbankConfig {
        FilterbankConfig {
            sample_rate_hz,
            duration_seconds,
            filter_count,
        }
    }

    #[test]
    fn test_rejects_bad_sample_rate() {
        for rate in [0.0, -8000.0, f64::NAN, f64::INFINITY] {
            let err = build(&config(rate, 0.002, 48)).unwrap_err();
            assert!(matches!(err, FilterbankError::InvalidSampleRate { .. }));
        }
    }

    #[test]
    fn test_rejects_bad_duration() {
        for duration in [0.0, -0.5, f64::NAN] {
            let err = build(&config(8000.0, duration, 48)).unwrap_err();
            assert!(matches!(err, FilterbankError::InvalidDuration { .. }));
        }
    }

    #[test]
    fn test_rejects_zero_tap_duration() {
        // 0.0001 s at 8 kHz floors to zero taps
        let err = build(&config(8000.0, 0.0001, 48)).unwrap_err();
        assert!(matches!(err, FilterbankError::EmptyImpulseResponse { .. }));
    }

    #[test]
    fn test_rejects_zero_and_odd_filter_counts() {
        for filter_count in [0, 1, 47, 127] {
            let err = build(&config(8000.0, 0.002, filter_count)).unwrap_err();
            assert!(matches!(err, FilterbankError::InvalidFilterCount { .. }));
        }
    }

    #[test]
    fn test_minimal_bank() {
        // Two filters: one pair at 100 Hz, phase 0 and its negation
        let bank = build(&config(8000.0, 0.002, 2)).unwrap();
        assert_eq!(bank.num_filters(), 2);

        let mirrored: Vec<f64> = bank.row(0).iter().map(|tap| -tap).collect();
        assert_eq!(bank.row(1), &mirrored[..]);
    }
}
