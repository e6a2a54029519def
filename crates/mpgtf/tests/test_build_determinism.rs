//! Determinism integration tests: the bank is a pure function of its
//! configuration.

use pretty_assertions::assert_eq;

use mpgtf::{build, FilterbankConfig};

fn config(filter_count: usize) -> FilterbankConfig {
    FilterbankConfig {
        sample_rate_hz: 8000.0,
        duration_seconds: 0.002,
        filter_count,
    }
}

#[test]
fn test_same_config_same_taps() {
    let first = build(&config(128)).unwrap();
    let second = build(&config(128)).unwrap();

    assert_eq!(first.taps(), second.taps());
    assert_eq!(first.tap_hash(), second.tap_hash());
}

#[test]
fn test_different_configs_differ() {
    let a = build(&config(128)).unwrap();
    let b = build(&config(96)).unwrap();
    assert_ne!(a.tap_hash(), b.tap_hash());

    let c = build(&FilterbankConfig {
        sample_rate_hz: 16000.0,
        duration_seconds: 0.002,
        filter_count: 128,
    })
    .unwrap();
    assert_ne!(a.tap_hash(), c.tap_hash());
}

#[test]
fn test_bank_serde_roundtrip() {
    let bank = build(&config(48)).unwrap();
    let json = serde_json::to_string(&bank).unwrap();
    let back: mpgtf::Filterbank = serde_json::from_str(&json).unwrap();

    assert_eq!(bank, back);
    assert_eq!(bank.tap_hash(), back.tap_hash());
}
