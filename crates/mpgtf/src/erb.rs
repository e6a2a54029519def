//! ERB (equivalent rectangular bandwidth) scale conversions.
//!
//! The ERB scale approximates the spacing of human auditory filters; the
//! bank places its center frequencies at equal ERB steps so low frequencies
//! are sampled densely and high frequencies sparsely, matching cochlear
//! resolution.

/// ERB in Hz of an auditory filter at 0 Hz.
const ERB_MIN_HZ: f64 = 24.7;

/// Scale factor between ERB rate and the log-frequency axis.
const ERB_SCALE: f64 = 9.265;

/// ERB growth per Hz of center frequency.
const ERB_GROWTH: f64 = 0.108;

/// Convert a frequency on the ERB scale to Hertz.
#[inline]
pub fn erb_to_hz(f_erb: f64) -> f64 {
    ((f_erb / ERB_SCALE).exp() - 1.0) * ERB_MIN_HZ * ERB_SCALE
}

/// Convert a frequency in Hertz to the ERB scale.
#[inline]
pub fn hz_to_erb(f_hz: f64) -> f64 {
    ERB_SCALE * (1.0 + f_hz / (ERB_MIN_HZ * ERB_SCALE)).ln()
}

/// Equivalent rectangular bandwidth in Hz of the auditory filter centered
/// at `f_hz`.
#[inline]
pub fn erb_bandwidth(f_hz: f64) -> f64 {
    ERB_MIN_HZ + ERB_GROWTH * f_hz
}
