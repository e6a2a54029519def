//! Gammatone impulse response synthesis.
//!
//! A gammatone filter is a gamma-distribution envelope modulating a cosine
//! carrier, modeling the impulse response of the basilar membrane:
//!
//!   g(t) = a * t^(p-1) * exp(-2*pi*b*t) * cos(2*pi*fc*t + phi)
//!
//! Where p is the filter order, b the bandwidth parameter, fc the center
//! frequency and phi the phase shift. The taps are sampled on a grid whose
//! first point is one sample period after t = 0 and whose last point lands
//! exactly on the filter duration.

use std::f64::consts::PI;

use crate::erb::erb_bandwidth;

/// Gammatone filter order p.
pub const FILTER_ORDER: u32 = 2;

/// Number of taps produced for the given sample rate and duration.
#[inline]
pub fn num_taps(sample_rate_hz: f64, duration_seconds: f64) -> usize {
    (sample_rate_hz * duration_seconds).floor() as usize
}

fn factorial(n: u32) -> f64 {
    (1..=n).map(f64::from).product()
}

/// Divisor relating the equivalent rectangular bandwidth to the bandwidth
/// parameter b for a gammatone filter of order `p`.
///
/// Reduces to pi/2 for p = 2, but is evaluated from the order so the
/// relation stays correct if the order is ever changed.
fn bandwidth_divisor(p: u32) -> f64 {
    let q = 2 * p - 2;
    PI * factorial(q) * 2f64.powi(-(q as i32)) / factorial(p - 1).powi(2)
}

/// `len` points linearly spaced from `start` to `end` inclusive.
fn linspace(start: f64, end: f64, len: usize) -> impl Iterator<Item = f64> {
    let step = if len > 1 {
        (end - start) / (len - 1) as f64
    } else {
        0.0
    };
    (0..len).map(move |i| start + step * i as f64)
}

/// Synthesizes one gammatone impulse response.
///
/// # Arguments
/// * `sample_rate_hz` - Audio sample rate in Hz
/// * `duration_seconds` - Filter length in seconds
/// * `center_freq_hz` - Carrier center frequency in Hz
/// * `phase_shift` - Carrier phase offset in radians
///
/// # Returns
/// `floor(sample_rate_hz * duration_seconds)` unit-amplitude taps. Relative
/// filter energy is set later by normalization, not here.
pub fn impulse_response(
    sample_rate_hz: f64,
    duration_seconds: f64,
    center_freq_hz: f64,
    phase_shift: f64,
) -> Vec<f64> {
    let erb = erb_bandwidth(center_freq_hz);
    let b = erb / bandwidth_divisor(FILTER_ORDER);
    let amplitude = 1.0;
    let len = num_taps(sample_rate_hz, duration_seconds);

    linspace(1.0 / sample_rate_hz, duration_seconds, len)
        .map(|t| {
            amplitude
                * t.powi(FILTER_ORDER as i32 - 1)
                * (-2.0 * PI * b * t).exp()
                * (2.0 * PI * center_freq_hz * t + phase_shift).cos()
        })
        .collect()
}
