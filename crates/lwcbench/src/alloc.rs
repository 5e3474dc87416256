// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Buffer acquisition for per-run contexts.

use crate::error::AllocationError;

/// Source of the byte buffers a [`Context`](crate::Context) owns.
///
/// Buffers handed back through [`BufferAllocator::release`] have already been
/// zeroized by the caller.
pub trait BufferAllocator {
    /// Returns a zero-filled buffer of exactly `len` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::OutOfMemory`] if the request cannot be met.
    fn allocate(&self, len: usize) -> Result<Vec<u8>, AllocationError>;

    /// Takes back a buffer obtained from [`BufferAllocator::allocate`].
    fn release(&self, buf: Vec<u8>);
}

/// Heap-backed allocator. Exhaustion is reported instead of aborting.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAllocator;

impl BufferAllocator for SystemAllocator {
    fn allocate(&self, len: usize) -> Result<Vec<u8>, AllocationError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|_| AllocationError::OutOfMemory { len })?;
        buf.resize(len, 0);

        Ok(buf)
    }

    fn release(&self, buf: Vec<u8>) {
        drop(buf);
    }
}
