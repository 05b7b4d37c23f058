//! # sigscan-engine
//!
//! Ties `sigscan-core`'s device-agnostic algorithms to a
//! `sigscan-device::ComputeDevice` backend behind a single
//! [`matcher::MatchEngine`] entry point, implementing PMAT's host
//! orchestration and state machine (spec.md §4.4).

pub mod error;
pub mod matcher;

pub use error::EngineError;
pub use matcher::{MatchEngine, State};
