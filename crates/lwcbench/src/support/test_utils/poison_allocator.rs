// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::{Cell, RefCell};

use lwcbench_util::fill_bytes_with_pattern;

use crate::alloc::BufferAllocator;
use crate::error::AllocationError;

/// Byte written over every released buffer.
pub const POISON: u8 = 0xDB;

/// Allocator that poisons released buffers and hands them out again.
///
/// Released buffers are checked for zeroization first, then filled with
/// [`POISON`] and pooled. A later request of the same length reuses a pooled
/// buffer as-is, so any input not fully overwritten still shows the poison.
#[derive(Debug, Default)]
pub struct PoisonAllocator {
    pool: RefCell<Vec<Vec<u8>>>,
    allocations: Cell<usize>,
    recycled: Cell<usize>,
    releases: Cell<usize>,
    dirty_releases: Cell<usize>,
}

impl PoisonAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocation_count(&self) -> usize {
        self.allocations.get()
    }

    /// Allocations served from the poisoned pool.
    pub fn recycled_count(&self) -> usize {
        self.recycled.get()
    }

    pub fn release_count(&self) -> usize {
        self.releases.get()
    }

    /// Released buffers that still held non-zero bytes.
    pub fn dirty_release_count(&self) -> usize {
        self.dirty_releases.get()
    }

    pub fn outstanding(&self) -> usize {
        self.allocations.get() - self.releases.get()
    }
}

impl BufferAllocator for PoisonAllocator {
    fn allocate(&self, len: usize) -> Result<Vec<u8>, AllocationError> {
        self.allocations.set(self.allocations.get() + 1);

        let mut pool = self.pool.borrow_mut();
        if let Some(pos) = pool.iter().position(|buf| buf.len() == len) {
            self.recycled.set(self.recycled.get() + 1);
            return Ok(pool.swap_remove(pos));
        }

        let mut buf = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|_| AllocationError::OutOfMemory { len })?;
        buf.resize(len, 0);

        Ok(buf)
    }

    fn release(&self, mut buf: Vec<u8>) {
        self.releases.set(self.releases.get() + 1);
        if buf.iter().any(|&b| b != 0) {
            self.dirty_releases.set(self.dirty_releases.get() + 1);
        }

        fill_bytes_with_pattern(&mut buf, POISON);
        self.pool.borrow_mut().push(buf);
    }
}
