// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for Context.

use lwcbench_cipher::{Algorithm, ROSTER};
use lwcbench_rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use lwcbench_rand::{EntropyError, SeededEntropySource};

use crate::alloc::SystemAllocator;
use crate::context::Context;
use crate::error::{AllocationError, ContextError};
use crate::support::test_utils::{MockAllocator, MockAllocatorBehaviour};

fn buffer_count(algorithm: Algorithm) -> usize {
    let d = algorithm.descriptor();
    [d.key_len, d.nonce_len, d.aad_len, d.plaintext_len]
        .iter()
        .filter(|&&len| len > 0)
        .count()
}

// =============================================================================
// create()
// =============================================================================

#[test]
fn test_create_sizes_buffers_per_descriptor() {
    let mut entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);

    for algorithm in ROSTER {
        let context =
            Context::create(algorithm, &SystemAllocator, &mut entropy).expect("Failed to create(..)");
        let d = algorithm.descriptor();

        assert_eq!(context.algorithm(), algorithm);
        assert_eq!(context.key().len(), d.key_len, "{algorithm}");
        assert_eq!(context.nonce().len(), d.nonce_len, "{algorithm}");
        assert_eq!(context.aad().len(), d.aad_len, "{algorithm}");
        assert_eq!(context.plaintext().len(), d.plaintext_len, "{algorithm}");
    }
}

#[test]
fn test_create_zero_length_buffers_do_not_allocate() {
    let allocator = MockAllocator::new(MockAllocatorBehaviour::None);
    let mut entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);

    let context =
        Context::create(Algorithm::Speck, &allocator, &mut entropy).expect("Failed to create(..)");

    assert!(context.nonce().is_empty());
    assert!(context.aad().is_empty());
    assert_eq!(allocator.allocation_count(), 2);
    assert_eq!(entropy.call_count(), 2);
}

#[test]
fn test_create_fills_from_entropy() {
    let mut a = SeededEntropySource::new(1234);
    let mut b = SeededEntropySource::new(1234);
    let mut c = SeededEntropySource::new(4321);

    let ctx_a = Context::create(Algorithm::TinyJambu, &SystemAllocator, &mut a)
        .expect("Failed to create(..)");
    let ctx_b = Context::create(Algorithm::TinyJambu, &SystemAllocator, &mut b)
        .expect("Failed to create(..)");
    let ctx_c = Context::create(Algorithm::TinyJambu, &SystemAllocator, &mut c)
        .expect("Failed to create(..)");

    assert_eq!(ctx_a.key(), ctx_b.key());
    assert_eq!(ctx_a.plaintext(), ctx_b.plaintext());
    assert_ne!(ctx_a.key(), ctx_c.key());
    assert_ne!(ctx_a.key(), ctx_a.plaintext());
}

#[test]
fn test_create_allocation_failure_releases_partial_buffers() {
    for algorithm in ROSTER {
        for n in 1..=buffer_count(algorithm) {
            let allocator = MockAllocator::new(MockAllocatorBehaviour::FailAtNthAllocation(n));
            let mut entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);

            let result = Context::create(algorithm, &allocator, &mut entropy);

            assert!(
                matches!(
                    result,
                    Err(ContextError::Allocation(AllocationError::OutOfMemory { .. }))
                ),
                "{algorithm} n={n}"
            );
            assert_eq!(allocator.outstanding(), 0, "{algorithm} n={n}");
            assert_eq!(allocator.release_count(), n - 1, "{algorithm} n={n}");
            assert_eq!(allocator.dirty_release_count(), 0, "{algorithm} n={n}");
        }
    }
}

#[test]
fn test_create_entropy_failure_releases_partial_buffers() {
    for algorithm in ROSTER {
        for n in 1..=buffer_count(algorithm) {
            let allocator = MockAllocator::new(MockAllocatorBehaviour::None);
            let mut entropy =
                MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(n));

            let result = Context::create(algorithm, &allocator, &mut entropy);

            assert_eq!(
                result.err(),
                Some(ContextError::Entropy(EntropyError::EntropyNotAvailable)),
                "{algorithm} n={n}"
            );
            // The buffer whose fill failed is released too.
            assert_eq!(allocator.allocation_count(), n, "{algorithm} n={n}");
            assert_eq!(allocator.release_count(), n, "{algorithm} n={n}");
            assert_eq!(allocator.outstanding(), 0, "{algorithm} n={n}");
            assert_eq!(allocator.dirty_release_count(), 0, "{algorithm} n={n}");
        }
    }
}

#[test]
fn test_create_entropy_fail_always() {
    let allocator = MockAllocator::new(MockAllocatorBehaviour::None);
    let mut entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);

    let result = Context::create(Algorithm::ChaCha20, &allocator, &mut entropy);

    assert!(matches!(result, Err(ContextError::Entropy(_))));
    assert_eq!(allocator.outstanding(), 0);
}

// =============================================================================
// destroy() / Drop
// =============================================================================

#[test]
fn test_destroy_zeroizes_and_releases_each_buffer_once() {
    for algorithm in ROSTER {
        let allocator = MockAllocator::new(MockAllocatorBehaviour::None);
        let mut entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);

        let context =
            Context::create(algorithm, &allocator, &mut entropy).expect("Failed to create(..)");
        assert_eq!(allocator.outstanding(), buffer_count(algorithm));

        context.destroy();

        assert_eq!(allocator.release_count(), buffer_count(algorithm), "{algorithm}");
        assert_eq!(allocator.outstanding(), 0, "{algorithm}");
        assert_eq!(allocator.dirty_release_count(), 0, "{algorithm}");
    }
}

#[test]
fn test_drop_releases_like_destroy() {
    let allocator = MockAllocator::new(MockAllocatorBehaviour::None);
    let mut entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);

    {
        let _context = Context::create(Algorithm::Elephant, &allocator, &mut entropy)
            .expect("Failed to create(..)");
        assert_eq!(allocator.outstanding(), 4);
    }

    assert_eq!(allocator.release_count(), 4);
    assert_eq!(allocator.outstanding(), 0);
    assert_eq!(allocator.dirty_release_count(), 0);
}

#[test]
fn test_debug_hides_buffers() {
    let mut entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let context = Context::create(Algorithm::TinyJambu, &SystemAllocator, &mut entropy)
        .expect("Failed to create(..)");

    let debug_output = format!("{:?}", context);

    assert_eq!(debug_output, "Context { algorithm: TINYJAMBU, [protected] }");
}
