// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # lwcbench_rand
//!
//! Test-vector generation for the cipher harness.
//!
//! Keys, nonces, associated data and plaintexts are benchmark inputs, not
//! secrets. They come from a small, fast PRNG that is either seeded with a
//! fixed `u64` (reproducible runs) or from the operating system (distinct
//! inputs on every run).
//!
//! ## Example
//!
//! ```rust
//! use lwcbench_rand::{EntropySource, SeededEntropySource};
//!
//! let mut a = SeededEntropySource::new(42);
//! let mut b = SeededEntropySource::new(42);
//!
//! let mut key_a = [0u8; 16];
//! let mut key_b = [0u8; 16];
//! a.fill_bytes(&mut key_a).expect("seeded source never fails");
//! b.fill_bytes(&mut key_b).expect("seeded source never fails");
//!
//! assert_eq!(key_a, key_b);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod seeded;
mod support;
mod traits;

pub use error::EntropyError;
pub use seeded::SeededEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
