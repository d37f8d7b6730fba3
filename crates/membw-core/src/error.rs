//! Error types for the membw core primitives.
//!
//! Organised by subsystem: buffer construction and the copy primitive.
//! Both are small closed enums; the runner treats either as fatal.

use std::error::Error;
use std::fmt;

/// Errors from [`TransferBuffer`](crate::TransferBuffer) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The host refused the backing-store reservation.
    ///
    /// There is no recovery path: the benchmark needs the full block or
    /// nothing, so callers terminate without partial output.
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "failed to allocate {requested} byte buffer")
            }
        }
    }
}

impl Error for BufferError {}

/// Errors from the [`bulk_copy`](crate::bulk_copy) primitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyError {
    /// Source and destination slices differ in length.
    ///
    /// A bulk copy is defined only for equal-sized regions; partial
    /// copies are not part of the measurement contract.
    LengthMismatch {
        /// Length of the source slice in bytes.
        src_len: usize,
        /// Length of the destination slice in bytes.
        dst_len: usize,
    },
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { src_len, dst_len } => {
                write!(
                    f,
                    "length mismatch: source {src_len} bytes, destination {dst_len} bytes"
                )
            }
        }
    }
}

impl Error for CopyError {}
