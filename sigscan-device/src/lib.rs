//! # sigscan-device
//!
//! The injected "device/queue handle" collaborator spec.md §9 asks for:
//! device selection happens outside the matcher's core, passed in as a
//! constructor argument, so the core stays deterministic and testable
//! without hardware. This crate defines the [`ComputeDevice`] trait that
//! expresses the parallel kernel contract (spec.md §4.4) and ships one
//! backend, [`cpu::CpuDevice`], that executes it across a fixed-size
//! thread pool.
//!
//! A real accelerator backend (OpenCL, wgpu, ...) implements the same
//! trait and plugs into `sigscan-engine` without any change there.

pub mod cpu;
pub mod error;

pub use error::DeviceError;
pub use sigscan_core::signature::SignatureTable;

use std::sync::Arc;

/// Opaque handle to a device-resident copy of the text `T`. Uploaded once
/// and read by every depth's kernel launch; never mutated.
#[derive(Clone)]
pub struct TextHandle {
    bytes: Arc<[u8]>,
}

impl TextHandle {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

/// The answer stream for one depth: `A_d[n]` is `(0, 0)` unless the kernel
/// found a full 6-byte prefix match at position `n`, in which case it is
/// the bucket key `(b0, b1)` under which the candidate must be verified.
pub type AnswerStream = Vec<(u8, u8)>;

/// The parallel-kernel contract (spec.md §4.4), abstracted over the
/// compute backend that executes it.
pub trait ComputeDevice: Send + Sync {
    /// Uploads `text` to the device, returning a read-only handle reused
    /// across every depth's dispatch.
    fn upload_text(&self, text: &[u8]) -> Result<TextHandle, DeviceError>;

    /// Runs one depth's kernel: for every position `n` with
    /// `n + sigscan_core::L_MIN <= text.len()`, looks up
    /// `(T[n], T[n+1])` in `table`, compares the signature against
    /// `T[n+2..n+6]`, and writes `(T[n], T[n+1])` on a non-sentinel match
    /// or `(0, 0)` otherwise. Positions beyond that boundary always get
    /// `(0, 0)` — there cannot be a valid 6-byte match starting there.
    fn dispatch_depth(
        &self,
        text: &TextHandle,
        table: &SignatureTable,
    ) -> Result<AnswerStream, DeviceError>;
}
