//! # sigscan-core
//!
//! Device-agnostic data structures and algorithms for the multi-pattern
//! matcher: the reference scanner (REF), the pattern index (PIDX), and the
//! signature tables (SIG). Nothing in this crate touches I/O, async
//! runtimes, or a device handle — those live in `sigscan-device` and
//! `sigscan-engine`.
//!
//! ### Key submodules:
//! - `reference`: sequential oracle scanner, also the fast path for
//!   patterns shorter than [`L_MIN`].
//! - `pattern_index`: buckets patterns by their first two bytes.
//! - `signature`: builds the per-depth 256x256 signature tables consumed
//!   by the parallel kernel.

pub mod pattern_index;
pub mod reference;
pub mod signature;
pub mod types;

pub use pattern_index::{BucketMap, PatternIndex};
pub use reference::{count, short_counts};
pub use signature::{Signature, SignatureTable, SignatureTables};
pub use types::{Counts, PatternSet};

/// Minimum pattern length handled by the parallel matcher. Patterns
/// shorter than this are scanned by [`reference`] instead: the signature
/// tables need bytes 2..5 after the 2-byte bucket key, so six bytes must
/// exist to pre-verify a candidate.
pub const L_MIN: usize = 6;
