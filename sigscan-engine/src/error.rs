//! Top-level error type, wrapping every collaborator's error surface the
//! way `vakthund-engine::SimulationError` wraps `ConfigError`.

use sigscan_config::ConfigError;
use sigscan_device::DeviceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// A verification mismatch the invariants declare impossible
    /// (spec.md §4.4: "Verification mismatches ... impossible under the
    /// invariants; an implementer may assert"). Surfacing it as a typed
    /// error rather than panicking keeps the matcher usable as a library
    /// even if this ever fires.
    #[error("internal invariant violated: {0}")]
    InvariantViolated(String),
}
