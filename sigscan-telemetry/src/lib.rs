//! # sigscan-telemetry
//!
//! Logging and metrics for the matcher, in the teacher's style: a
//! `tracing`-based structured logger plus a `prometheus` recorder.

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
pub use metrics::MatchMetrics;
