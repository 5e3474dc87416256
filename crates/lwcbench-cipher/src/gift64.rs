// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! GIFT-64-128 block cipher.
//!
//! Blocks are little-endian `u64`. The key is eight little-endian `u16`
//! words `k0..k7`; round keys are taken from `k6` and `k7`.

use zeroize::{Zeroize, ZeroizeOnDrop};

use lwcbench_util::{u16_from_le, u64_from_le, u64_to_le};

use crate::descriptor::{AlgorithmDescriptor, CipherKind};
use crate::error::CipherError;
use crate::traits::CipherTransform;

pub const KEY_SIZE: usize = 16;
pub const BLOCK_SIZE: usize = 8;
pub(crate) const ROUNDS: usize = 28;

pub static DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    name: "GIFT64",
    kind: CipherKind::SpnBlockCipher,
    plaintext_len: BLOCK_SIZE,
    key_len: KEY_SIZE,
    nonce_len: 0,
    aad_len: 0,
    tag_len: 0,
};

const S_BOX: [u8; 16] = [
    0x01, 0x0a, 0x04, 0x0c, 0x06, 0x0f, 0x03, 0x09, 0x02, 0x0d, 0x0b, 0x07, 0x05, 0x00, 0x08, 0x0e,
];

const INV_S_BOX: [u8; 16] = [
    0x0d, 0x00, 0x08, 0x06, 0x02, 0x0c, 0x04, 0x0b, 0x0e, 0x07, 0x01, 0x0a, 0x03, 0x09, 0x0f, 0x05,
];

const PERM_TABLE: [u8; 64] = [
    0, 17, 34, 51, 48, 1, 18, 35, 32, 49, 2, 19, 16, 33, 50, 3, //
    4, 21, 38, 55, 52, 5, 22, 39, 36, 53, 6, 23, 20, 37, 54, 7, //
    8, 25, 42, 59, 56, 9, 26, 43, 40, 57, 10, 27, 24, 41, 58, 11, //
    12, 29, 46, 63, 60, 13, 30, 47, 44, 61, 14, 31, 28, 45, 62, 15,
];

const INV_PERM_TABLE: [u8; 64] = [
    0, 5, 10, 15, 16, 21, 26, 31, 32, 37, 42, 47, 48, 53, 58, 63, //
    12, 1, 6, 11, 28, 17, 22, 27, 44, 33, 38, 43, 60, 49, 54, 59, //
    8, 13, 2, 7, 24, 29, 18, 23, 40, 45, 34, 39, 56, 61, 50, 55, //
    4, 9, 14, 3, 20, 25, 30, 19, 36, 41, 46, 35, 52, 57, 62, 51,
];

/// 6-bit round constants; round `r` (1-based) uses entry `r`.
const ROUND_CONSTANTS: [u8; 49] = [
    0x00, 0x01, 0x03, 0x07, 0x0f, 0x1f, 0x3e, 0x3d, 0x3b, 0x37, 0x2f, 0x1e, 0x3c, 0x39, 0x33, 0x27,
    0x0e, 0x1d, 0x3a, 0x35, 0x2b, 0x16, 0x2c, 0x18, 0x30, 0x21, 0x02, 0x05, 0x0b, 0x17, 0x2e, 0x1c,
    0x38, 0x31, 0x23, 0x06, 0x0d, 0x1b, 0x36, 0x2d, 0x1a, 0x34, 0x29, 0x12, 0x24, 0x08, 0x11, 0x22,
    0x04,
];

/// Bit positions receiving the six constant bits, lowest bit first.
const CONSTANT_POSITIONS: [u32; 6] = [3, 7, 11, 15, 19, 23];

#[inline(always)]
fn sub_cells(x: u64, table: &[u8; 16]) -> u64 {
    (0..16).fold(0u64, |y, i| {
        y | ((table[((x >> (4 * i)) & 0x0f) as usize] as u64) << (4 * i))
    })
}

#[inline(always)]
fn perm_bits(x: u64, table: &[u8; 64]) -> u64 {
    table
        .iter()
        .enumerate()
        .fold(0u64, |y, (i, &dst)| y | (((x >> i) & 1) << dst))
}

#[inline(always)]
fn add_round_key(x: u64, round_key: &[u16; 8], round: usize) -> u64 {
    let u = round_key[6] as u64;
    let v = round_key[7] as u64;

    let mut y = x;
    for i in 0..16 {
        y ^= ((u >> i) & 1) << (4 * i + 1);
        y ^= ((v >> i) & 1) << (4 * i);
    }

    let constant = ROUND_CONSTANTS[round] as u64;
    for (bit, pos) in CONSTANT_POSITIONS.iter().enumerate() {
        y ^= ((constant >> bit) & 1) << pos;
    }

    y ^ (1u64 << 63)
}

/// GIFT-64-128 state with guaranteed zeroization.
///
/// The key schedule lives in a fixed array, one row per round.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct Gift64 {
    round_keys: [[u16; 8]; ROUNDS],
    block: u64,
    le_bytes_tmp: [u8; 8],
    le_word_tmp: [u8; 2],
}

impl Gift64 {
    fn expand_key(&mut self, key: &[u8; KEY_SIZE]) {
        for i in 0..8 {
            self.le_word_tmp.copy_from_slice(&key[i * 2..i * 2 + 2]);
            u16_from_le(&mut self.round_keys[0][i], &mut self.le_word_tmp);
        }

        self.expand_schedule();
    }

    /// Derives rows `1..ROUNDS` of the key schedule from row 0.
    fn expand_schedule(&mut self) {
        for r in 1..ROUNDS {
            let (done, rest) = self.round_keys.split_at_mut(r);
            let prev = &done[r - 1];
            let next = &mut rest[0];

            next[2..8].copy_from_slice(&prev[0..6]);
            next[1] = prev[7].rotate_right(12);
            next[0] = prev[6].rotate_right(2);
        }
    }

    fn load_block(&mut self, chunk: &[u8]) {
        self.le_bytes_tmp.copy_from_slice(chunk);
        u64_from_le(&mut self.block, &mut self.le_bytes_tmp);
    }

    fn store_block(&mut self, chunk: &mut [u8]) {
        u64_to_le(
            &mut self.block,
            chunk
                .try_into()
                .expect("infallible: chunk is exactly 8 bytes"),
        );
    }

    /// Encrypts one block held as a `u64`, with the key as eight `u16` words.
    pub fn encrypt_block(&mut self, block: u64, key_words: &[u16; 8]) -> u64 {
        self.round_keys[0] = *key_words;
        self.expand_schedule();
        let out = self.encrypt_loaded(block);
        self.zeroize();
        out
    }

    /// Decrypts one block held as a `u64`, with the key as eight `u16` words.
    pub fn decrypt_block(&mut self, block: u64, key_words: &[u16; 8]) -> u64 {
        self.round_keys[0] = *key_words;
        self.expand_schedule();
        let out = self.decrypt_loaded(block);
        self.zeroize();
        out
    }

    fn encrypt_loaded(&self, block: u64) -> u64 {
        (1..=ROUNDS).fold(block, |text, r| {
            add_round_key(
                perm_bits(sub_cells(text, &S_BOX), &PERM_TABLE),
                &self.round_keys[r - 1],
                r,
            )
        })
    }

    fn decrypt_loaded(&self, block: u64) -> u64 {
        (1..=ROUNDS).rev().fold(block, |text, r| {
            sub_cells(
                perm_bits(
                    add_round_key(text, &self.round_keys[r - 1], r),
                    &INV_PERM_TABLE,
                ),
                &INV_S_BOX,
            )
        })
    }

    /// Encrypts every 8-byte block of `data` in place.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidBlockSize`] if `data` is not a whole
    /// number of blocks.
    pub fn encrypt(&mut self, key: &[u8; KEY_SIZE], data: &mut [u8]) -> Result<(), CipherError> {
        if data.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::InvalidBlockSize);
        }

        self.expand_key(key);

        for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
            self.load_block(chunk);
            self.block = self.encrypt_loaded(self.block);
            self.store_block(chunk);
        }

        self.zeroize();
        Ok(())
    }

    /// Decrypts every 8-byte block of `data` in place.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidBlockSize`] if `data` is not a whole
    /// number of blocks.
    pub fn decrypt(&mut self, key: &[u8; KEY_SIZE], data: &mut [u8]) -> Result<(), CipherError> {
        if data.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::InvalidBlockSize);
        }

        self.expand_key(key);

        for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
            self.load_block(chunk);
            self.block = self.decrypt_loaded(self.block);
            self.store_block(chunk);
        }

        self.zeroize();
        Ok(())
    }
}

impl CipherTransform for Gift64 {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn forward(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        _aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8],
    ) -> Result<(), CipherError> {
        let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| CipherError::InvalidKeySize)?;
        if !nonce.is_empty() {
            return Err(CipherError::InvalidNonceSize);
        }
        if !tag.is_empty() {
            return Err(CipherError::InvalidTagSize);
        }

        self.encrypt(key, data)
    }

    fn inverse(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        _aad: &[u8],
        data: &mut [u8],
        tag: &[u8],
    ) -> Result<(), CipherError> {
        let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| CipherError::InvalidKeySize)?;
        if !nonce.is_empty() {
            return Err(CipherError::InvalidNonceSize);
        }
        if !tag.is_empty() {
            return Err(CipherError::InvalidTagSize);
        }

        self.decrypt(key, data)
    }
}

#[cfg(test)]
impl Gift64 {
    pub(crate) fn is_zeroized(&self) -> bool {
        self.round_keys.iter().flatten().all(|w| *w == 0)
            && self.block == 0
            && self.le_bytes_tmp == [0; 8]
            && self.le_word_tmp == [0; 2]
    }
}

impl core::fmt::Debug for Gift64 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Gift64 {{ [protected] }}")
    }
}
