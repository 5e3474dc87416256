// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test doubles for the harness seams.

mod mock_allocator;
mod poison_allocator;
mod step_clock;

pub use mock_allocator::{MockAllocator, MockAllocatorBehaviour};
pub use poison_allocator::{POISON, PoisonAllocator};
pub use step_clock::StepClock;
