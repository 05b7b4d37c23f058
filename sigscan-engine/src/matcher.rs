//! ## sigscan-engine::matcher
//! **PMAT host-side orchestration**
//!
//! Sequences index build, device uploads, kernel dispatches, and
//! readback/verification exactly as spec.md §4.4 describes: a
//! single-threaded cooperative host driving a data-parallel device.

use std::cell::Cell;
use std::time::Instant;

use tracing::{debug, instrument, trace};

use sigscan_core::pattern_index::PatternIndex;
use sigscan_core::reference;
use sigscan_core::signature;
use sigscan_core::types::{Counts, PatternSet};
use sigscan_core::L_MIN;
use sigscan_device::{AnswerStream, ComputeDevice};
use sigscan_telemetry::MatchMetrics;

use crate::error::EngineError;

/// PMAT's lifecycle. Transitions are straight-line; the only loop is over
/// depth `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Indexed,
    Uploaded,
    Dispatched(usize),
    ReadBack(usize),
    Done,
}

/// Drives the parallel matcher over a single compute device.
pub struct MatchEngine<D: ComputeDevice> {
    device: D,
    metrics: MatchMetrics,
    state: Cell<State>,
}

impl<D: ComputeDevice> MatchEngine<D> {
    pub fn new(device: D, metrics: MatchMetrics) -> Self {
        Self {
            device,
            metrics,
            state: Cell::new(State::Idle),
        }
    }

    pub fn state(&self) -> State {
        self.state.get()
    }

    /// Runs REF for short patterns, then PMAT for everything else,
    /// returning the combined per-pattern counts. REF's partial counts
    /// are never touched again; PMAT only ever increments counts for
    /// patterns of length `>= L_MIN`, and the two pattern sets are
    /// disjoint by construction.
    #[instrument(skip_all, fields(patterns = patterns.len(), text_len = text.len()))]
    pub fn count_all(&self, text: &[u8], patterns: &PatternSet) -> Result<Counts, EngineError> {
        let mut counts = reference::short_counts(text, patterns);
        debug!("reference pass seeded {} pattern counts", counts.len());

        let index = PatternIndex::build(patterns);
        self.state.set(State::Indexed);

        if index.maxdepth == 0 {
            // Every pattern is shorter than L_MIN: PMAT is skipped
            // entirely, REF alone answers the query.
            self.state.set(State::Done);
            return Ok(counts);
        }

        let tables = signature::build(patterns, &index);

        let text_handle = self.device.upload_text(text)?;
        self.state.set(State::Uploaded);

        for d in 0..index.maxdepth {
            self.state.set(State::Dispatched(d));
            let start = Instant::now();
            let answers = self.device.dispatch_depth(&text_handle, &tables[d])?;
            self.metrics
                .depth_dispatch_seconds
                .observe(start.elapsed().as_secs_f64());

            self.state.set(State::ReadBack(d));
            self.verify_depth(text, &index, d, &answers, patterns, &mut counts)?;
            trace!(depth = d, "verified depth");
        }

        self.state.set(State::Done);
        Ok(counts)
    }

    /// Host verification for one depth's answer stream (spec.md §4.4,
    /// "Host verification").
    fn verify_depth(
        &self,
        text: &[u8],
        index: &PatternIndex,
        depth: usize,
        answers: &AnswerStream,
        patterns: &PatternSet,
        counts: &mut Counts,
    ) -> Result<(), EngineError> {
        for (n, &(b0, b1)) in answers.iter().enumerate() {
            if b0 == 0 && b1 == 0 {
                continue;
            }
            self.metrics.candidates_total.inc();

            let bucket = index.buckets.get(b0, b1);
            let id = *bucket.get(depth).ok_or_else(|| {
                EngineError::InvariantViolated(format!(
                    "kernel flagged position {n} at depth {depth} for bucket ({b0}, {b1}) \
                     but that bucket has no pattern at this depth"
                ))
            })?;

            let pattern = patterns.get(id as usize);
            let matched = if pattern.len() == L_MIN {
                true
            } else {
                let end = n + pattern.len();
                end <= text.len() && text[n + L_MIN..end] == pattern[L_MIN..]
            };

            if matched {
                counts[id as usize] += 1;
                self.metrics.verified_total.inc();
            }
        }
        Ok(())
    }
}
