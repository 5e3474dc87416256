// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Monotonic counters used to time each run.

use std::time::Instant;

/// Free-running microsecond and millisecond counters.
///
/// Counters may be narrower than 64 bits and wrap. Durations must go through
/// [`Clock::elapsed_micros`].
pub trait Clock {
    fn micros(&self) -> u64;

    fn millis(&self) -> u64;

    /// Width of the microsecond counter in bits.
    fn micros_bits(&self) -> u32 {
        u64::BITS
    }

    /// Microseconds from `start` to `end`, tolerating one counter wrap.
    fn elapsed_micros(&self, start: u64, end: u64) -> u64 {
        wrapping_elapsed(start, end, self.micros_bits())
    }
}

/// Mask selecting the low `bits` bits of a counter.
#[inline]
pub fn counter_mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Wrapping difference `end - start` within a `bits`-wide counter.
#[inline]
pub fn wrapping_elapsed(start: u64, end: u64, bits: u32) -> u64 {
    end.wrapping_sub(start) & counter_mask(bits)
}

/// Clock backed by [`std::time::Instant`], counting from its creation.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
    bits: u32,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            bits: u64::BITS,
        }
    }

    /// Truncates the microsecond counter to `bits` bits (clamped to `1..=64`),
    /// e.g. 32 to reproduce a microcontroller `micros()` counter.
    pub fn with_counter_bits(mut self, bits: u32) -> Self {
        self.bits = bits.clamp(1, u64::BITS);
        self
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn micros(&self) -> u64 {
        let micros = u64::try_from(self.origin.elapsed().as_micros()).unwrap_or(u64::MAX);
        micros & counter_mask(self.bits)
    }

    fn millis(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn micros_bits(&self) -> u32 {
        self.bits
    }
}
