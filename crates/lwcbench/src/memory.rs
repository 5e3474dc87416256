// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Free-memory probes sampled around each run.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Default heap budget the [`HeapProbe`] reports free memory against.
pub const DEFAULT_HEAP_BUDGET: usize = 320 * 1024;

/// Reports currently free memory in bytes.
///
/// The runner records `free_before - free_after`, which may be negative.
pub trait MemoryProbe {
    fn free_bytes(&self) -> isize;
}

/// Probe for targets without memory accounting. Always reports 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProbe;

impl MemoryProbe for NullProbe {
    fn free_bytes(&self) -> isize {
        0
    }
}

/// `GlobalAlloc` wrapper around [`System`] that tracks live heap bytes.
///
/// Install it with `#[global_allocator]` and read it through a [`HeapProbe`].
#[derive(Debug)]
pub struct CountingAllocator {
    allocated: AtomicUsize,
}

impl CountingAllocator {
    pub const fn new() -> Self {
        Self {
            allocated: AtomicUsize::new(0),
        }
    }

    /// Bytes currently allocated through this allocator.
    pub fn allocated_bytes(&self) -> usize {
        self.allocated.load(Ordering::Relaxed)
    }
}

impl Default for CountingAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// SAFETY: every call is forwarded to `System` with the caller's layout and
// pointer unchanged; the counter never affects the returned memory.
unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: caller guarantees `layout` has non-zero size.
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            self.allocated.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        // SAFETY: caller guarantees `layout` has non-zero size.
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            self.allocated.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: caller guarantees `ptr` was allocated by this allocator with `layout`.
        unsafe { System.dealloc(ptr, layout) };
        self.allocated.fetch_sub(layout.size(), Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // SAFETY: caller upholds the `GlobalAlloc::realloc` contract for `ptr` and `layout`.
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            self.allocated.fetch_sub(layout.size(), Ordering::Relaxed);
            self.allocated.fetch_add(new_size, Ordering::Relaxed);
        }
        new_ptr
    }
}

/// Free heap as `budget - live bytes` of a [`CountingAllocator`].
#[derive(Debug, Clone, Copy)]
pub struct HeapProbe {
    allocator: &'static CountingAllocator,
    budget: usize,
}

impl HeapProbe {
    pub fn new(allocator: &'static CountingAllocator, budget: usize) -> Self {
        Self { allocator, budget }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }
}

impl MemoryProbe for HeapProbe {
    fn free_bytes(&self) -> isize {
        let budget = isize::try_from(self.budget).unwrap_or(isize::MAX);
        let used = isize::try_from(self.allocator.allocated_bytes()).unwrap_or(isize::MAX);
        budget.saturating_sub(used)
    }
}
