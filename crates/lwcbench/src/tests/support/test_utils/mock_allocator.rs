// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::alloc::BufferAllocator;
use crate::error::AllocationError;
use crate::support::test_utils::{MockAllocator, MockAllocatorBehaviour};

#[test]
fn test_mock_allocator_behaviour_none() {
    let allocator = MockAllocator::new(MockAllocatorBehaviour::None);

    let buf = allocator.allocate(16).expect("Failed to allocate(..)");

    assert_eq!(buf.len(), 16);
    assert_eq!(allocator.allocation_count(), 1);
    assert_eq!(allocator.outstanding(), 1);

    allocator.release(buf);

    assert_eq!(allocator.release_count(), 1);
    assert_eq!(allocator.outstanding(), 0);
}

#[test]
fn test_mock_allocator_fail_at_nth_allocation() {
    let allocator = MockAllocator::new(MockAllocatorBehaviour::FailAtNthAllocation(2));

    let first = allocator.allocate(8);
    let second = allocator.allocate(12);
    let third = allocator.allocate(8);

    assert!(first.is_ok());
    assert_eq!(second, Err(AllocationError::OutOfMemory { len: 12 }));
    assert!(third.is_ok());
    assert_eq!(allocator.allocation_count(), 3);
    assert_eq!(allocator.outstanding(), 2);
}

#[test]
fn test_mock_allocator_change_behaviour() {
    let allocator = MockAllocator::new(MockAllocatorBehaviour::None);
    let _held = allocator.allocate(4).expect("Failed to allocate(..)");

    allocator.change_behaviour(MockAllocatorBehaviour::FailAtNthAllocation(2));

    assert!(allocator.allocate(4).is_err());
    assert_eq!(allocator.outstanding(), 1);
}

#[test]
fn test_mock_allocator_counts_dirty_releases() {
    let allocator = MockAllocator::new(MockAllocatorBehaviour::None);
    let clean = allocator.allocate(4).expect("Failed to allocate(..)");
    let mut dirty = allocator.allocate(4).expect("Failed to allocate(..)");
    dirty[3] = 1;

    allocator.release(clean);
    allocator.release(dirty);

    assert_eq!(allocator.dirty_release_count(), 1);
}
