//! Filterbank configuration and matrix types.

use serde::{Deserialize, Serialize};

/// Parameters for one filterbank generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterbankConfig {
    /// Audio sample rate in Hz.
    pub sample_rate_hz: f64,
    /// Filter length in seconds.
    pub duration_seconds: f64,
    /// Total number of filters N. Must be even; pairs beyond a multiple of
    /// 48 are assigned to the lowest center frequencies.
    pub filter_count: usize,
}

/// A generated multi-phase gammatone filterbank.
///
/// Stores the N x L tap matrix row-major in a flat buffer. Row order is the
/// bank's identity: rows are grouped per center frequency in increasing
/// frequency order, the first half of each group holds phase shifts in
/// [0, pi) in increasing order, the second half their element-wise
/// negations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filterbank {
    config: FilterbankConfig,
    num_samples: usize,
    taps: Vec<f64>,
}

impl Filterbank {
    pub(crate) fn new(config: FilterbankConfig, num_samples: usize, taps: Vec<f64>) -> Self {
        debug_assert_eq!(taps.len(), config.filter_count * num_samples);
        Self {
            config,
            num_samples,
            taps,
        }
    }

    /// The configuration this bank was generated from.
    pub fn config(&self) -> &FilterbankConfig {
        &self.config
    }

    /// Number of filters (matrix rows).
    pub fn num_filters(&self) -> usize {
        self.config.filter_count
    }

    /// Taps per filter (matrix columns).
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Tap row for the filter at `index`.
    ///
    /// # Panics
    /// Panics if `index >= num_filters()`.
    pub fn row(&self, index: usize) -> &[f64] {
        let start = index * self.num_samples;
        &self.taps[start..start + self.num_samples]
    }

    /// Iterator over all filter rows in bank order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.taps.chunks_exact(self.num_samples)
    }

    /// Flat row-major tap matrix.
    pub fn taps(&self) -> &[f64] {
        &self.taps
    }

    /// BLAKE3 hash of the tap matrix (little-endian f64 bytes), hex encoded.
    ///
    /// Two banks generated from the same configuration hash identically,
    /// which makes regeneration cheap to verify.
    pub fn tap_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for tap in &self.taps {
            hasher.update(&tap.to_le_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_bank() -> Filterbank {
        let config = FilterbankConfig {
            sample_rate_hz: 4.0,
            duration_seconds: 1.0,
            filter_count: 2,
        };
        Filterbank::new(config, 4, vec![1.0, 2.0, 3.0, 4.0, -1.0, -2.0, -3.0, -4.0])
    }

    #[test]
    fn test_row_access() {
        let bank = small_bank();
        assert_eq!(bank.num_filters(), 2);
        assert_eq!(bank.num_samples(), 4);
        assert_eq!(bank.row(0), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(bank.row(1), &[-1.0, -2.0, -3.0, -4.0]);
        assert_eq!(bank.rows().count(), 2);
    }

    #[test]
    fn test_tap_hash_stable() {
        let bank = small_bank();
        let other = small_bank();
        assert_eq!(bank.tap_hash(), other.tap_hash());
        assert_eq!(bank.tap_hash().len(), 64);
        assert!(bank.tap_hash().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = FilterbankConfig {
            sample_rate_hz: 8000.0,
            duration_seconds: 0.002,
            filter_count: 128,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: FilterbankConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
