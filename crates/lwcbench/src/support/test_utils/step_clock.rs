// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::clock::{Clock, counter_mask};

/// Deterministic clock: every `micros()` read returns the current value and
/// then advances it by a fixed step, wrapping at the configured width.
#[derive(Debug)]
pub struct StepClock {
    now: Cell<u64>,
    step: u64,
    bits: u32,
    reads: Cell<usize>,
}

impl StepClock {
    pub fn new(step: u64) -> Self {
        Self {
            now: Cell::new(0),
            step,
            bits: u64::BITS,
            reads: Cell::new(0),
        }
    }

    /// First value returned by `micros()`.
    pub fn starting_at(self, start: u64) -> Self {
        self.now.set(start & counter_mask(self.bits));
        self
    }

    /// Counter width in bits, clamped to `1..=64`.
    pub fn with_counter_bits(mut self, bits: u32) -> Self {
        self.bits = bits.clamp(1, u64::BITS);
        self.now.set(self.now.get() & counter_mask(self.bits));
        self
    }

    /// Number of `micros()` reads so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl Clock for StepClock {
    fn micros(&self) -> u64 {
        let now = self.now.get();
        self.now
            .set(now.wrapping_add(self.step) & counter_mask(self.bits));
        self.reads.set(self.reads.get() + 1);
        now
    }

    fn millis(&self) -> u64 {
        self.now.get() / 1000
    }

    fn micros_bits(&self) -> u32 {
        self.bits
    }
}
