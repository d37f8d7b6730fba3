//! Core primitives for the membw memory-bandwidth benchmark.
//!
//! The runner binary copies one fixed-size block of memory between two
//! owned buffers and reports the elapsed wall-clock time. This crate
//! holds the pieces that sequence is built from:
//!
//! - [`TransferBuffer`]: owned, contiguous, zero-initialised byte storage
//! - [`bulk_copy`] / [`timed_bulk_copy`]: the whole-block copy primitive
//! - [`Stopwatch`]: elapsed-time measurement over the monotonic clock
//! - [`seconds_line`]: the one-line fractional-seconds output format
//!
//! Everything here is size-parameterised so tests and benchmarks can
//! drive the same code paths at small sizes; the fixed 1 GiB constant
//! belongs to the runner.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod copy;
pub mod error;
pub mod report;
pub mod stopwatch;

// Public re-exports for the primary API surface.
pub use buffer::TransferBuffer;
pub use copy::{bulk_copy, timed_bulk_copy};
pub use error::{BufferError, CopyError};
pub use report::seconds_line;
pub use stopwatch::Stopwatch;
