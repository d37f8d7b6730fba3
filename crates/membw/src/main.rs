//! membw — fixed-size memory-bandwidth benchmark.
//!
//! Allocates two 1 GiB byte buffers, performs one bulk copy from source
//! to destination, and prints the elapsed wall-clock time in seconds as
//! a single floating-point line on stdout.
//!
//! Takes no arguments (any given are ignored), reads no environment
//! variables, touches no files. Exits 0 on success; the only failure
//! path is an allocation the host cannot satisfy, which exits non-zero
//! with nothing written to stdout.
//!
//! Run with:
//!   cargo run --release -p membw

use membw_core::{seconds_line, timed_bulk_copy, TransferBuffer};

/// Size of the copied block: 1 GiB.
const COPY_BYTES: usize = 0x4000_0000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let src = TransferBuffer::try_zeroed(COPY_BYTES)?;
    let mut dst = TransferBuffer::try_zeroed(COPY_BYTES)?;

    let elapsed = timed_bulk_copy(src.as_slice(), dst.as_mut_slice())?;

    println!("{}", seconds_line(elapsed));
    Ok(())
}
