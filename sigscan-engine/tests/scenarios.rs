//! End-to-end scenarios from spec.md §8, run against the CPU device.

use sigscan_core::types::PatternSet;
use sigscan_device::cpu::CpuDevice;
use sigscan_engine::{MatchEngine, State};
use sigscan_telemetry::MatchMetrics;

fn engine() -> MatchEngine<CpuDevice> {
    let device = CpuDevice::new(4).unwrap();
    MatchEngine::new(device, MatchMetrics::new())
}

fn patterns(strs: &[&str]) -> PatternSet {
    PatternSet::new(strs.iter().map(|s| s.as_bytes().to_vec()).collect())
}

#[test]
fn scenario_abracadabra_reference_only() {
    let engine = engine();
    let counts = engine
        .count_all(b"abracadabra", &patterns(&["abra", "cad", "bra", "x"]))
        .unwrap();
    assert_eq!(counts, vec![2, 1, 2, 0]);
}

#[test]
fn scenario_mississippi() {
    let engine = engine();
    let counts = engine
        .count_all(b"mississippi", &patterns(&["issi", "ssi", "ppi", "miss"]))
        .unwrap();
    assert_eq!(counts, vec![2, 2, 1, 1]);
}

#[test]
fn scenario_aaaaaa_overlap_law() {
    let engine = engine();
    let counts = engine
        .count_all(b"aaaaaa", &patterns(&["aa", "aaa", "aaaaaa", "aaaaaaa"]))
        .unwrap();
    assert_eq!(counts, vec![5, 4, 1, 0]);
}

#[test]
fn scenario_abcdefg_repeated_exercises_pmat() {
    let engine = engine();
    let counts = engine
        .count_all(
            b"abcdefgabcdefgabcdefg",
            &patterns(&["abcdef", "bcdefg", "cdefga", "gabcdef"]),
        )
        .unwrap();
    assert_eq!(counts, vec![3, 3, 2, 2]);
}

#[test]
fn scenario_zero_sentinel_collision_still_counted() {
    let engine = engine();
    let text = b"xxab\0\0\0\0xyxxab\0\0\0\0xyxx".to_vec();
    let counts = engine
        .count_all(&text, &patterns(&["ab\0\0\0\0xy"]))
        .unwrap();
    assert_eq!(counts, vec![2]);
}

#[test]
fn empty_and_oversized_patterns_count_zero() {
    let engine = engine();
    let counts = engine
        .count_all(b"hello world", &patterns(&["", "hello world this is too long"]))
        .unwrap();
    assert_eq!(counts, vec![0, 0]);
}

#[test]
fn duplicate_patterns_get_identical_counts() {
    let engine = engine();
    let counts = engine
        .count_all(b"abcdefabcdef", &patterns(&["abcdef", "abcdef"]))
        .unwrap();
    assert_eq!(counts[0], counts[1]);
}

#[test]
fn permuting_patterns_permutes_counts() {
    let engine = engine();
    let a = engine
        .count_all(b"abcdefgabcdefg", &patterns(&["abcdef", "bcdefg"]))
        .unwrap();
    let b = engine
        .count_all(b"abcdefgabcdefg", &patterns(&["bcdefg", "abcdef"]))
        .unwrap();
    assert_eq!(a[0], b[1]);
    assert_eq!(a[1], b[0]);
}

#[test]
fn state_starts_idle_and_ends_done_when_pmat_runs() {
    let engine = engine();
    assert_eq!(engine.state(), State::Idle);
    engine
        .count_all(
            b"abcdefgabcdefgabcdefg",
            &patterns(&["abcdef", "bcdefg"]),
        )
        .unwrap();
    assert_eq!(engine.state(), State::Done);
}

#[test]
fn state_ends_done_when_ref_only_skips_pmat() {
    let engine = engine();
    assert_eq!(engine.state(), State::Idle);
    engine
        .count_all(b"abracadabra", &patterns(&["abra", "cad"]))
        .unwrap();
    assert_eq!(engine.state(), State::Done);
}

#[test]
fn idempotent_across_runs() {
    let engine = engine();
    let p = patterns(&["abcdef", "bcdefg"]);
    let a = engine.count_all(b"abcdefgabcdefg", &p).unwrap();
    let b = engine.count_all(b"abcdefgabcdefg", &p).unwrap();
    assert_eq!(a, b);
}
