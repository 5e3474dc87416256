// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use lwcbench_util::is_slice_filled_with;

use crate::alloc::BufferAllocator;
use crate::support::test_utils::{POISON, PoisonAllocator};

#[test]
fn test_poison_allocator_fresh_buffers_are_zeroed() {
    let allocator = PoisonAllocator::new();

    let buf = allocator.allocate(16).expect("Failed to allocate(..)");

    assert!(buf.iter().all(|&b| b == 0));
    assert_eq!(allocator.recycled_count(), 0);
}

#[test]
fn test_poison_allocator_recycles_poisoned_buffer() {
    let allocator = PoisonAllocator::new();
    let buf = allocator.allocate(16).expect("Failed to allocate(..)");
    allocator.release(buf);

    let recycled = allocator.allocate(16).expect("Failed to allocate(..)");

    assert!(is_slice_filled_with(&recycled, POISON));
    assert_eq!(allocator.recycled_count(), 1);
    assert_eq!(allocator.outstanding(), 1);
}

#[test]
fn test_poison_allocator_only_recycles_matching_len() {
    let allocator = PoisonAllocator::new();
    let buf = allocator.allocate(16).expect("Failed to allocate(..)");
    allocator.release(buf);

    let other = allocator.allocate(12).expect("Failed to allocate(..)");

    assert!(other.iter().all(|&b| b == 0));
    assert_eq!(allocator.recycled_count(), 0);
}

#[test]
fn test_poison_allocator_counts_dirty_releases() {
    let allocator = PoisonAllocator::new();
    let mut buf = allocator.allocate(8).expect("Failed to allocate(..)");
    buf[0] = 0x42;

    allocator.release(buf);

    assert_eq!(allocator.dirty_release_count(), 1);
    assert_eq!(allocator.release_count(), 1);
}
