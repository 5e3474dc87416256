// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::alloc::{BufferAllocator, SystemAllocator};
use crate::error::AllocationError;

/// Configurable behavior for [`MockAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockAllocatorBehaviour {
    /// Normal operation (delegates to [`SystemAllocator`]).
    None,
    /// Fail allocate on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthAllocation(usize),
}

/// Allocator that counts calls, tracks outstanding buffers and can fail on demand.
#[derive(Debug)]
pub struct MockAllocator {
    behaviour: Cell<MockAllocatorBehaviour>,
    allocations: Cell<usize>,
    failures: Cell<usize>,
    releases: Cell<usize>,
    dirty_releases: Cell<usize>,
}

impl MockAllocator {
    pub fn new(behaviour: MockAllocatorBehaviour) -> Self {
        Self {
            behaviour: Cell::new(behaviour),
            allocations: Cell::new(0),
            failures: Cell::new(0),
            releases: Cell::new(0),
            dirty_releases: Cell::new(0),
        }
    }

    pub fn change_behaviour(&self, behaviour: MockAllocatorBehaviour) {
        self.behaviour.set(behaviour);
    }

    /// Calls to allocate, including failed ones.
    pub fn allocation_count(&self) -> usize {
        self.allocations.get()
    }

    pub fn release_count(&self) -> usize {
        self.releases.get()
    }

    /// Released buffers that still held non-zero bytes.
    pub fn dirty_release_count(&self) -> usize {
        self.dirty_releases.get()
    }

    /// Buffers handed out and not yet released.
    pub fn outstanding(&self) -> usize {
        self.allocations.get() - self.failures.get() - self.releases.get()
    }
}

impl BufferAllocator for MockAllocator {
    fn allocate(&self, len: usize) -> Result<Vec<u8>, AllocationError> {
        let count = self.allocations.get() + 1;
        self.allocations.set(count);

        match self.behaviour.get() {
            MockAllocatorBehaviour::FailAtNthAllocation(n) if n == count => {
                self.failures.set(self.failures.get() + 1);
                Err(AllocationError::OutOfMemory { len })
            }
            _ => SystemAllocator.allocate(len),
        }
    }

    fn release(&self, buf: Vec<u8>) {
        self.releases.set(self.releases.get() + 1);
        if buf.iter().any(|&b| b != 0) {
            self.dirty_releases.set(self.dirty_releases.get() + 1);
        }
        SystemAllocator.release(buf);
    }
}
