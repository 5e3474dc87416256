// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::clock::Clock;
use crate::support::test_utils::StepClock;

#[test]
fn test_step_clock_advances_per_read() {
    let clock = StepClock::new(5).starting_at(100);

    assert_eq!(clock.micros(), 100);
    assert_eq!(clock.micros(), 105);
    assert_eq!(clock.micros(), 110);
    assert_eq!(clock.reads(), 3);
}

#[test]
fn test_step_clock_millis_does_not_advance() {
    let clock = StepClock::new(1500);

    clock.micros();
    clock.micros();

    assert_eq!(clock.millis(), 3);
    assert_eq!(clock.millis(), 3);
    assert_eq!(clock.reads(), 2);
}

#[test]
fn test_step_clock_wraps_at_counter_width() {
    let clock = StepClock::new(0x10)
        .with_counter_bits(32)
        .starting_at(0xFFFF_FFF8);

    let before = clock.micros();
    let after = clock.micros();

    assert_eq!(after, 0x8);
    assert_eq!(clock.elapsed_micros(before, after), 0x10);
    assert_eq!(clock.micros_bits(), 32);
}
