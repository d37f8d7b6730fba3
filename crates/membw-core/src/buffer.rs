//! Owned byte buffers for copy measurements.
//!
//! A [`TransferBuffer`] is a contiguous, heap-allocated `Vec<u8>`,
//! zero-initialised at construction and freed by `Drop`. Two of them
//! never alias: each exclusively owns its storage, so a copy between a
//! pair of buffers is a copy between disjoint regions by construction.

use crate::error::BufferError;

/// A contiguous, owned, zero-initialised byte buffer.
///
/// Construction is fallible: the backing store is reserved through the
/// fallible reservation API so that an allocation the host cannot
/// satisfy surfaces as [`BufferError::AllocationFailed`] rather than an
/// abort, letting the caller exit with a clean status and no partial
/// output.
pub struct TransferBuffer {
    data: Vec<u8>,
}

impl TransferBuffer {
    /// Allocate a zero-initialised buffer of exactly `len` bytes.
    pub fn try_zeroed(len: usize) -> Result<Self, BufferError> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| BufferError::AllocationFailed { requested: len })?;
        data.resize(len, 0);
        Ok(Self { data })
    }

    /// Number of bytes in the buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Shared view of the full buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view of the full buffer.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
