// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

pub const KEY_SIZE: usize = 16;
pub const NONCE_SIZE: usize = 12;
pub const TAG_SIZE: usize = 8;

/// Steps of the short state update (20 quarter-rounds).
pub(crate) const NROUND1: u32 = 128 * 5;
/// Steps of the long state update (40 quarter-rounds).
pub(crate) const NROUND2: u32 = 128 * 10;

pub(crate) const FRAME_BITS_IV: u32 = 0x10;
pub(crate) const FRAME_BITS_AD: u32 = 0x30;
pub(crate) const FRAME_BITS_PC: u32 = 0x50;
pub(crate) const FRAME_BITS_FINALIZATION: u32 = 0x70;
