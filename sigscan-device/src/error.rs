//! Error surface for the injected compute-device collaborator.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeviceError {
    /// No compute device of the required class is available.
    #[error("no compute device available: {0}")]
    DeviceUnavailable(String),

    /// Compile/link failure building the parallel kernel. The CPU backend
    /// never returns this — it has no kernel to build — but the variant
    /// is part of the trait's error surface so a GPU backend can report
    /// it without a breaking change.
    #[error("kernel build failure: {0}")]
    KernelBuildFailure(String),

    /// Host or device allocation failure.
    #[error("allocation failure: {0}")]
    AllocationFailure(String),
}
