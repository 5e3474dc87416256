// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Spongent-π[160] permutation.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::consts::{ROUND_COUNTER_IV, ROUNDS, S_BOX, STATE_BITS, STATE_SIZE};

/// Next value of the 7-bit round-counter LFSR.
#[inline(always)]
pub(crate) fn next_round_counter(counter: u8) -> u8 {
    ((counter << 1) | (((counter & 0x40) >> 6) ^ ((counter & 0x20) >> 5))) & 0x7f
}

/// Destination of bit `i` in the bit-permutation layer.
#[inline(always)]
pub(crate) fn bit_destination(i: usize) -> usize {
    if i == STATE_BITS - 1 {
        i
    } else {
        (i * STATE_BITS / 4) % (STATE_BITS - 1)
    }
}

#[inline(always)]
fn sub_byte(byte: u8) -> u8 {
    (S_BOX[(byte >> 4) as usize] << 4) | S_BOX[(byte & 0x0f) as usize]
}

/// Spongent-π[160] with its own scratch buffer, zeroized on drop.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct Spongent {
    scratch: [u8; STATE_SIZE],
}

impl Spongent {
    /// Applies the 80-round permutation to `state` in place.
    pub fn permute(&mut self, state: &mut [u8; STATE_SIZE]) {
        let mut counter = ROUND_COUNTER_IV;

        for _ in 0..ROUNDS {
            state[0] ^= counter;
            state[STATE_SIZE - 1] ^= counter.reverse_bits();
            counter = next_round_counter(counter);

            for byte in state.iter_mut() {
                *byte = sub_byte(*byte);
            }

            self.scratch.zeroize();
            for (i, byte) in state.iter().enumerate() {
                for j in 0..8 {
                    let dst = bit_destination(8 * i + j);
                    self.scratch[dst / 8] ^= ((byte >> j) & 1) << (dst % 8);
                }
            }
            state.copy_from_slice(&self.scratch);
        }

        self.scratch.zeroize();
    }
}

#[cfg(test)]
impl Spongent {
    pub(crate) fn is_zeroized(&self) -> bool {
        self.scratch == [0; STATE_SIZE]
    }
}

impl core::fmt::Debug for Spongent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Spongent {{ [protected] }}")
    }
}
