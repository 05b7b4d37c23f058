//! ## sigscan-core::reference
//! **Sequential oracle scanner**
//!
//! Doubles as the fast path for patterns shorter than [`crate::L_MIN`] and
//! as the correctness oracle the parallel matcher is checked against.

use crate::types::{Counts, PatternSet};
use crate::L_MIN;

/// Counts overlapping occurrences of `pattern` in `text`. Returns `0` for
/// an empty pattern or a pattern longer than the text; the scan advances
/// by one byte after each match so overlapping matches are all counted.
pub fn count(text: &[u8], pattern: &[u8]) -> u64 {
    if pattern.is_empty() || pattern.len() > text.len() {
        return 0;
    }

    let mut n = 0u64;
    let mut start = 0;
    while start + pattern.len() <= text.len() {
        if &text[start..start + pattern.len()] == pattern {
            n += 1;
        }
        start += 1;
    }
    n
}

/// Seeds the output counts vector: every pattern shorter than
/// [`crate::L_MIN`] gets its full count here; everything else is left at
/// zero for the parallel matcher to fill in.
pub fn short_counts(text: &[u8], patterns: &PatternSet) -> Counts {
    patterns
        .iter()
        .map(|(_, p)| {
            if p.len() < L_MIN {
                count(text, p)
            } else {
                0
            }
        })
        .collect()
}
