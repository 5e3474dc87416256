// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # lwcbench
//!
//! Benchmark harness for the lightweight ciphers of [`lwcbench_cipher`].
//!
//! Every `(iteration, algorithm)` slot goes through the same cycle:
//!
//! 1. **Setup**: a [`Context`] obtains key, nonce, associated data and
//!    plaintext from a [`BufferAllocator`] and fills them from an
//!    [`EntropySource`](lwcbench_rand::EntropySource).
//! 2. **Run and verify**: [`SelfTest`] encrypts, decrypts and compares in
//!    constant time, sampling the [`Clock`] after encryption.
//! 3. **Teardown**: the context zeroizes and releases its buffers.
//! 4. **Report**: a [`RunRecord`] is converted into a [`SinkRecord`] and
//!    handed to a [`ReportSink`].
//!
//! A slot whose context cannot be built is skipped; the run continues.
//!
//! ## Example
//!
//! ```rust
//! use lwcbench::{MemorySink, MonotonicClock, NullProbe, RunPlan, Runner, SystemAllocator};
//! use lwcbench_rand::SeededEntropySource;
//!
//! let allocator = SystemAllocator;
//! let clock = MonotonicClock::new();
//! let probe = NullProbe;
//! let mut entropy = SeededEntropySource::new(7);
//! let mut sink = MemorySink::new();
//!
//! let mut runner = Runner::new(&allocator, &clock, &probe);
//! let outcomes = runner
//!     .run(&RunPlan::full(2), &mut entropy, &mut sink)
//!     .expect("Failed to run(..)");
//!
//! assert_eq!(outcomes.len(), 10);
//! assert!(sink.records().iter().all(|record| record.success));
//! ```

#[cfg(test)]
mod tests;

mod alloc;
mod cli;
mod clock;
mod config;
mod context;
mod error;
mod oracle;
mod record;
mod runner;
mod sink;
mod support;

pub mod memory;

pub use alloc::{BufferAllocator, SystemAllocator};
pub use cli::Cli;
pub use clock::{Clock, MonotonicClock, counter_mask, wrapping_elapsed};
pub use config::{
    BenchConfig, DEFAULT_ITERATIONS, ENV_ALGORITHMS, ENV_ITERATIONS, ENV_SEED, parse_seed,
};
pub use context::Context;
pub use error::{AllocationError, BenchError, ConfigError, ContextError, SinkError};
pub use memory::{CountingAllocator, HeapProbe, MemoryProbe, NullProbe};
pub use oracle::{OracleOutcome, SelfTest};
pub use record::{HexString, RunRecord, SinkRecord};
pub use runner::{RunPlan, Runner, RunnerState, SlotOutcome};
pub use sink::{MemorySink, ReportSink, SkippedSlot, TableSink};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
