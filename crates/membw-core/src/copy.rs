//! The whole-block copy primitive and its timed wrapper.
//!
//! The measurement contract is bulk-copy throughput, so the copy must
//! be issued as a single block transfer ([`slice::copy_from_slice`],
//! which lowers to `memcpy`) and never as element-by-element iteration.

use std::time::Duration;

use crate::error::CopyError;
use crate::stopwatch::Stopwatch;

/// Copy the entire `src` slice into `dst` as one block.
///
/// Defined only for equal-length slices; a mismatch returns
/// [`CopyError::LengthMismatch`] without touching `dst`.
/// On success, `dst` is bit-for-bit identical to `src`.
pub fn bulk_copy(src: &[u8], dst: &mut [u8]) -> Result<(), CopyError> {
    if src.len() != dst.len() {
        return Err(CopyError::LengthMismatch {
            src_len: src.len(),
            dst_len: dst.len(),
        });
    }
    dst.copy_from_slice(src);
    Ok(())
}

/// Run [`bulk_copy`] between two monotonic stamps.
///
/// Returns the wall-clock duration of the copy alone; the stamps are
/// taken immediately before and after the block transfer.
pub fn timed_bulk_copy(src: &[u8], dst: &mut [u8]) -> Result<Duration, CopyError> {
    let watch = Stopwatch::start();
    bulk_copy(src, dst)?;
    Ok(watch.elapsed())
}
