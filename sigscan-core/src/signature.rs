//! ## sigscan-core::signature
//! **Per-depth 256x256 signature tables**
//!
//! A signature is an opaque 4-byte value (pattern bytes `2..6`); no
//! floating-point semantics are intended despite the original's choice of
//! a 4-float vector type, a historical accident of its compute API.

use crate::pattern_index::PatternIndex;
use crate::types::PatternSet;

/// The 4-byte value compared against `text[n+2..n+6]` in the parallel
/// kernel. `[0, 0, 0, 0]` is a valid signature for a real pattern (when
/// its bytes `2..6` are all NUL) as well as the "unused slot" sentinel;
/// the ambiguity is resolved by host verification, never by the kernel.
pub type Signature = [u8; 4];

pub const ZERO_SENTINEL: Signature = [0, 0, 0, 0];

/// One flat, row-major 256x256 table of signatures for a single depth.
#[derive(Debug, Clone)]
pub struct SignatureTable {
    entries: Vec<Signature>,
}

impl SignatureTable {
    fn zeroed() -> Self {
        Self {
            entries: vec![ZERO_SENTINEL; 256 * 256],
        }
    }

    #[inline]
    pub fn get(&self, b0: u8, b1: u8) -> Signature {
        self.entries[(b0 as usize) << 8 | b1 as usize]
    }

    fn set(&mut self, b0: u8, b1: u8, sig: Signature) {
        self.entries[(b0 as usize) << 8 | b1 as usize] = sig;
    }

    pub fn as_slice(&self) -> &[Signature] {
        &self.entries
    }
}

/// One table per depth, `0..maxdepth`.
pub type SignatureTables = Vec<SignatureTable>;

/// Builds the signature tables from the pattern set and its index.
/// `∑_d |S[d]| = maxdepth * 65,536` by construction — every table is
/// allocated at full size regardless of how sparsely it is populated.
pub fn build(patterns: &PatternSet, index: &PatternIndex) -> SignatureTables {
    let mut tables: SignatureTables = (0..index.maxdepth).map(|_| SignatureTable::zeroed()).collect();

    for b0 in 0..256usize {
        for b1 in 0..256usize {
            let (b0, b1) = (b0 as u8, b1 as u8);
            let bucket = index.buckets.get(b0, b1);
            for (depth, &id) in bucket.iter().enumerate() {
                let p = patterns.get(id as usize);
                // Guaranteed by PatternIndex::build: only patterns of
                // length >= L_MIN are bucketed.
                let sig = [p[2], p[3], p[4], p[5]];
                tables[depth].set(b0, b1, sig);
            }
        }
    }

    tables
}
