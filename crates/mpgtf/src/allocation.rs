//! Center frequency spacing and phase pair allocation.
//!
//! The bank spans 24 center frequencies spaced exactly 1.0 apart on the ERB
//! scale starting at 100 Hz. A target filter count N is split into N/2
//! sign-mirrored phase pairs across those frequencies; when N is not a
//! multiple of 48 the leftover pairs go to the lowest frequencies.

use crate::erb::{erb_to_hz, hz_to_erb};

/// Number of center frequencies in the bank.
pub const NUM_CENTER_FREQS: usize = 24;

/// Lowest center frequency in Hz.
pub const MIN_CENTER_FREQ_HZ: f64 = 100.0;

/// The 24 center frequencies in Hz, each 1.0 ERB above the previous.
pub fn center_frequencies() -> [f64; NUM_CENTER_FREQS] {
    let mut freqs = [0.0; NUM_CENTER_FREQS];
    let mut f_hz = MIN_CENTER_FREQ_HZ;
    for slot in freqs.iter_mut() {
        *slot = f_hz;
        f_hz = erb_to_hz(hz_to_erb(f_hz) + 1.0);
    }
    freqs
}

/// Number of phase pairs assigned to each center frequency for a bank of
/// `filter_count` filters.
///
/// Every frequency gets `filter_count / 48` pairs; the remaining pairs are
/// handed to the lowest frequencies, one each. For even `filter_count` (the
/// entry point rejects odd counts) the result satisfies
/// `2 * sum(pairs) == filter_count`.
pub fn phase_pairs(filter_count: usize) -> [usize; NUM_CENTER_FREQS] {
    let base = filter_count / (2 * NUM_CENTER_FREQS);
    let remainder = (filter_count - 2 * NUM_CENTER_FREQS * base) / 2;

    let mut pairs = [base; NUM_CENTER_FREQS];
    for count in pairs.iter_mut().take(remainder) {
        *count += 1;
    }
    pairs
}
