// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

pub const KEY_SIZE: usize = 16;
pub const NONCE_SIZE: usize = 12;
pub const TAG_SIZE: usize = 8;

/// Permutation width in bytes (160 bits).
pub const STATE_SIZE: usize = 20;

pub(crate) const STATE_BITS: usize = STATE_SIZE * 8;
pub(crate) const ROUNDS: usize = 80;
pub(crate) const ROUND_COUNTER_IV: u8 = 0x75;

pub(crate) const S_BOX: [u8; 16] = [
    0xE, 0xD, 0xB, 0x0, 0x2, 0x1, 0x4, 0xF, 0x7, 0xA, 0x8, 0x5, 0x9, 0xC, 0x3, 0x6,
];
