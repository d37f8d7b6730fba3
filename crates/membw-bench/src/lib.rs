//! Benchmark profiles and utilities for the membw benchmark.
//!
//! Provides deterministic buffer constructors for the Criterion
//! micro-benchmarks:
//!
//! - [`COPY_SIZES`]: the copy-size ladder (64 KiB to 64 MiB)
//! - [`seeded_pair`]: a source/destination pair with seed-derived
//!   source contents
//!
//! The runner itself never uses these; its block size is fixed and its
//! buffers are zeroed. Seeded contents exist so bench inputs are
//! reproducible without being trivially all-zero.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use membw_core::TransferBuffer;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Copy-size ladder for the micro-benchmarks: 64 KiB, 1 MiB, 16 MiB, 64 MiB.
///
/// Deliberately sub-GiB: the benches measure the primitive's throughput
/// curve, not the runner's single full-size measurement.
pub const COPY_SIZES: [usize; 4] = [0x1_0000, 0x10_0000, 0x100_0000, 0x400_0000];

/// Build a source/destination buffer pair of `len` bytes.
///
/// The source is filled from a ChaCha8 stream seeded with `seed`, so
/// identical seeds produce identical contents; the destination stays
/// zeroed.
pub fn seeded_pair(len: usize, seed: u64) -> (TransferBuffer, TransferBuffer) {
    let mut src = TransferBuffer::try_zeroed(len).expect("source allocation");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.fill_bytes(src.as_mut_slice());
    let dst = TransferBuffer::try_zeroed(len).expect("destination allocation");
    (src, dst)
}
