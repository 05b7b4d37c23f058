//! PMAT+REF totals must equal REF computed directly for every pattern,
//! for randomly generated texts and patterns (spec.md §8, seed scenario
//! 5's regression-against-oracle property).

use proptest::prelude::*;
use sigscan_core::reference;
use sigscan_core::types::PatternSet;
use sigscan_device::cpu::CpuDevice;
use sigscan_engine::MatchEngine;
use sigscan_telemetry::MatchMetrics;

fn random_text(len: usize, seed: u64) -> Vec<u8> {
    // Deterministic i.i.d.-ish draw from {a..e}, per spec.md §8 scenario 5.
    let alphabet = b"abcde";
    let mut state = seed.wrapping_add(1);
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            alphabet[((state >> 33) % 5) as usize]
        })
        .collect()
}

proptest! {
    #[test]
    fn matches_oracle_on_random_patterns(
        seed in 0u64..1000,
        pattern_lens in prop::collection::vec(3usize..=8, 1..12),
    ) {
        let text = random_text(2000, seed);
        let patterns: Vec<Vec<u8>> = pattern_lens
            .iter()
            .enumerate()
            .map(|(i, &len)| random_text(len, seed.wrapping_add(i as u64 + 1)))
            .collect();
        let pattern_set = PatternSet::new(patterns.clone());

        let device = CpuDevice::new(3).unwrap();
        let engine = MatchEngine::new(device, MatchMetrics::new());
        let got = engine.count_all(&text, &pattern_set).unwrap();

        let expected: Vec<u64> = patterns
            .iter()
            .map(|p| reference::count(&text, p))
            .collect();

        prop_assert_eq!(got, expected);
    }
}
