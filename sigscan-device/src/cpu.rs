//! ## sigscan-device::cpu
//! **Thread-pool backend for [`crate::ComputeDevice`]**
//!
//! Simulates the "massively parallel, independent, pure" kernel
//! characterization from spec.md §5 with a fixed-size pool of scoped
//! threads, each owning a contiguous slice of positions. Work items
//! within a depth share no writable state, matching the contract exactly.

use std::sync::Arc;

use sigscan_core::signature::{Signature, SignatureTable, ZERO_SENTINEL};
use sigscan_core::L_MIN;

use crate::{AnswerStream, ComputeDevice, DeviceError, TextHandle};

/// CPU-simulated compute device. `worker_threads` bounds how many scoped
/// threads each `dispatch_depth` call spawns; it does not change the
/// result, only how the ⌈N/2⌉-equivalent work is chunked.
pub struct CpuDevice {
    worker_threads: usize,
}

impl CpuDevice {
    pub fn new(worker_threads: usize) -> Result<Self, DeviceError> {
        if worker_threads == 0 {
            return Err(DeviceError::DeviceUnavailable(
                "worker_threads must be at least 1".into(),
            ));
        }
        Ok(Self { worker_threads })
    }
}

impl ComputeDevice for CpuDevice {
    fn upload_text(&self, text: &[u8]) -> Result<TextHandle, DeviceError> {
        Ok(TextHandle {
            bytes: Arc::from(text),
        })
    }

    fn dispatch_depth(
        &self,
        text: &TextHandle,
        table: &SignatureTable,
    ) -> Result<AnswerStream, DeviceError> {
        let bytes = text.as_slice();
        let n = bytes.len();

        // Boundary: no valid 6-byte match can start past this index.
        let last_valid = n.saturating_sub(L_MIN);
        let scan_len = if n >= L_MIN { last_valid + 1 } else { 0 };

        let chunk_count = self.worker_threads.min(scan_len.max(1));
        let chunk_size = scan_len.div_ceil(chunk_count.max(1)).max(1);

        let mut answers = vec![(0u8, 0u8); n];

        crossbeam::thread::scope(|scope| {
            let mut handles = Vec::new();
            for chunk_start in (0..scan_len).step_by(chunk_size) {
                let chunk_end = (chunk_start + chunk_size).min(scan_len);
                handles.push(scope.spawn(move |_| {
                    let mut partial = Vec::with_capacity(chunk_end - chunk_start);
                    for pos in chunk_start..chunk_end {
                        partial.push(eval_position(bytes, table, pos));
                    }
                    (chunk_start, partial)
                }));
            }

            for handle in handles {
                let (chunk_start, partial) = handle.join().expect("cpu kernel worker panicked");
                for (offset, value) in partial.into_iter().enumerate() {
                    answers[chunk_start + offset] = value;
                }
            }
        })
        .map_err(|_| DeviceError::AllocationFailure("worker thread panicked".into()))?;

        Ok(answers)
    }
}

#[inline]
fn eval_position(text: &[u8], table: &SignatureTable, n: usize) -> (u8, u8) {
    let b0 = text[n];
    let b1 = text[n + 1];
    let sig: Signature = table.get(b0, b1);
    let candidate = [text[n + 2], text[n + 3], text[n + 4], text[n + 5]];
    if sig != ZERO_SENTINEL && sig == candidate {
        (b0, b1)
    } else {
        (0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigscan_core::pattern_index::PatternIndex;
    use sigscan_core::types::PatternSet;

    #[test]
    fn boundary_positions_are_zero() {
        let device = CpuDevice::new(4).unwrap();
        let text = b"abcdef".to_vec(); // exactly L_MIN bytes, one valid position
        let handle = device.upload_text(&text).unwrap();
        let patterns = PatternSet::new(vec![b"abcdef".to_vec()]);
        let index = PatternIndex::build(&patterns);
        let tables = sigscan_core::signature::build(&patterns, &index);
        let answers = device.dispatch_depth(&handle, &tables[0]).unwrap();
        assert_eq!(answers.len(), 6);
        assert_eq!(answers[0], (b'a', b'b'));
        for a in &answers[1..] {
            assert_eq!(*a, (0, 0));
        }
    }

    #[test]
    fn chunking_does_not_change_results() {
        let patterns = PatternSet::new(vec![
            b"abcdef".to_vec(),
            b"bcdefg".to_vec(),
            b"cdefga".to_vec(),
        ]);
        let index = PatternIndex::build(&patterns);
        let tables = sigscan_core::signature::build(&patterns, &index);
        let text = b"abcdefgabcdefgabcdefg".to_vec();

        let single = CpuDevice::new(1).unwrap();
        let many = CpuDevice::new(8).unwrap();

        let h1 = single.upload_text(&text).unwrap();
        let h2 = many.upload_text(&text).unwrap();

        let a1 = single.dispatch_depth(&h1, &tables[0]).unwrap();
        let a2 = many.dispatch_depth(&h2, &tables[0]).unwrap();
        assert_eq!(a1, a2);
    }
}
