// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Elephant-Dumbo AEAD.
//!
//! Masks follow `mask_0 = P(key || 0)` and `mask_{i+1} = phi(mask_i)`.
//! Keystream block `j` is `P(nonce || 0 ^ mask_j ^ mask_{j+1}) ^ mask_j ^ mask_{j+1}`.
//! The tag accumulates the padded `nonce || ad` blocks under `mask_k` and the
//! padded ciphertext blocks under `mask_j ^ mask_{j+2}`.

use zeroize::{Zeroize, ZeroizeOnDrop};

use lwcbench_util::constant_time_eq;

use super::consts::{KEY_SIZE, NONCE_SIZE, STATE_SIZE, TAG_SIZE};
use super::spongent::Spongent;
use crate::descriptor::AlgorithmDescriptor;
use crate::error::CipherError;
use crate::traits::CipherTransform;

/// Mask LFSR phi: shift left one byte, feed back `(x0 <<< 3) ^ (x3 << 7) ^ (x13 >> 7)`.
#[inline(always)]
pub(crate) fn lfsr_step(output: &mut [u8; STATE_SIZE], input: &[u8; STATE_SIZE]) {
    output[..STATE_SIZE - 1].copy_from_slice(&input[1..]);
    output[STATE_SIZE - 1] = input[0].rotate_left(3) ^ (input[3] << 7) ^ (input[13] >> 7);
}

#[inline(always)]
fn xor_into(dst: &mut [u8; STATE_SIZE], src: &[u8; STATE_SIZE]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}

/// Writes padded block `i` of `nonce || ad` into `block`.
pub(crate) fn load_ad_block(
    block: &mut [u8; STATE_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ad: &[u8],
    i: usize,
) {
    block.zeroize();

    let (filled, offset) = if i == 0 {
        block[..NONCE_SIZE].copy_from_slice(nonce);
        (NONCE_SIZE, 0)
    } else {
        (0, i * STATE_SIZE - NONCE_SIZE)
    };

    let room = STATE_SIZE - filled;
    let remaining = ad.len() - offset;

    if room <= remaining {
        block[filled..].copy_from_slice(&ad[offset..offset + room]);
    } else {
        block[filled..filled + remaining].copy_from_slice(&ad[offset..]);
        block[filled + remaining] = 0x01;
    }
}

/// Writes padded block `i` of the ciphertext into `block`.
pub(crate) fn load_c_block(block: &mut [u8; STATE_SIZE], ciphertext: &[u8], i: usize) {
    block.zeroize();

    let offset = i * STATE_SIZE;
    let remaining = ciphertext.len() - offset;

    if remaining >= STATE_SIZE {
        block.copy_from_slice(&ciphertext[offset..offset + STATE_SIZE]);
    } else {
        block[..remaining].copy_from_slice(&ciphertext[offset..]);
        block[remaining] = 0x01;
    }
}

/// Elephant-Dumbo state with guaranteed zeroization.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct Elephant {
    spongent: Spongent,
    expanded_key: [u8; STATE_SIZE],
    masks: [[u8; STATE_SIZE]; 3],
    block: [u8; STATE_SIZE],
    tag_acc: [u8; STATE_SIZE],
}

impl Elephant {
    fn expand_key(&mut self, key: &[u8; KEY_SIZE]) {
        self.expanded_key.zeroize();
        self.expanded_key[..KEY_SIZE].copy_from_slice(key);
        self.spongent.permute(&mut self.expanded_key);
    }

    /// Writes `masks[from + 1] = phi(masks[from])`.
    #[inline(always)]
    fn step_mask(&mut self, from: usize) {
        let (head, tail) = self.masks.split_at_mut(from + 1);
        lfsr_step(&mut tail[0], &head[from]);
    }

    /// XORs `data` with the masked keystream.
    fn apply_keystream(&mut self, nonce: &[u8; NONCE_SIZE], data: &mut [u8]) {
        // masks = [mask_j, mask_{j+1}, _]
        self.masks[0] = self.expanded_key;

        for chunk in data.chunks_mut(STATE_SIZE) {
            self.step_mask(0);

            self.block.zeroize();
            self.block[..NONCE_SIZE].copy_from_slice(nonce);
            xor_into(&mut self.block, &self.masks[0]);
            xor_into(&mut self.block, &self.masks[1]);
            self.spongent.permute(&mut self.block);
            xor_into(&mut self.block, &self.masks[0]);
            xor_into(&mut self.block, &self.masks[1]);

            for (byte, ks_byte) in chunk.iter_mut().zip(self.block.iter()) {
                *byte ^= ks_byte;
            }

            self.masks[0] = self.masks[1];
        }
    }

    /// Accumulates the MAC over `nonce || ad` and `ciphertext` into `tag_acc`.
    fn authenticate(&mut self, nonce: &[u8; NONCE_SIZE], ad: &[u8], ciphertext: &[u8]) {
        let ad_blocks = 1 + (NONCE_SIZE + ad.len()) / STATE_SIZE;
        let c_blocks = 1 + ciphertext.len() / STATE_SIZE;

        load_ad_block(&mut self.tag_acc, nonce, ad, 0);

        // masks = [mask_k, _, _]
        self.masks[0] = self.expanded_key;
        for k in 1..ad_blocks {
            self.step_mask(0);
            self.masks[0] = self.masks[1];

            load_ad_block(&mut self.block, nonce, ad, k);
            xor_into(&mut self.block, &self.masks[0]);
            self.spongent.permute(&mut self.block);
            xor_into(&mut self.block, &self.masks[0]);
            xor_into(&mut self.tag_acc, &self.block);
        }

        // masks = [mask_j, mask_{j+1}, mask_{j+2}]
        self.masks[0] = self.expanded_key;
        self.step_mask(0);
        for j in 0..c_blocks {
            self.step_mask(1);

            load_c_block(&mut self.block, ciphertext, j);
            xor_into(&mut self.block, &self.masks[0]);
            xor_into(&mut self.block, &self.masks[2]);
            self.spongent.permute(&mut self.block);
            xor_into(&mut self.block, &self.masks[0]);
            xor_into(&mut self.block, &self.masks[2]);
            xor_into(&mut self.tag_acc, &self.block);

            self.masks[0] = self.masks[1];
            self.masks[1] = self.masks[2];
        }

        xor_into(&mut self.tag_acc, &self.expanded_key);
        self.spongent.permute(&mut self.tag_acc);
        xor_into(&mut self.tag_acc, &self.expanded_key);
    }

    /// Encrypts `data` in place and writes the 8-byte tag.
    pub fn encrypt(
        &mut self,
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8; TAG_SIZE],
    ) {
        self.expand_key(key);
        self.apply_keystream(nonce, data);
        self.authenticate(nonce, aad, data);
        tag.copy_from_slice(&self.tag_acc[..TAG_SIZE]);
        self.zeroize();
    }

    /// Verifies `tag` over the ciphertext, then decrypts `data` in place.
    ///
    /// On tag mismatch `data` is zeroized.
    pub fn decrypt(
        &mut self,
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8; TAG_SIZE],
    ) -> Result<(), CipherError> {
        self.expand_key(key);
        self.authenticate(nonce, aad, data);

        if !constant_time_eq(&self.tag_acc[..TAG_SIZE], tag) {
            self.zeroize();
            data.zeroize();
            return Err(CipherError::AuthenticationFailed);
        }

        self.apply_keystream(nonce, data);
        self.zeroize();
        Ok(())
    }
}

impl CipherTransform for Elephant {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &super::DESCRIPTOR
    }

    fn forward(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8],
    ) -> Result<(), CipherError> {
        let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| CipherError::InvalidKeySize)?;
        let nonce: &[u8; NONCE_SIZE] =
            nonce.try_into().map_err(|_| CipherError::InvalidNonceSize)?;
        let tag: &mut [u8; TAG_SIZE] = tag.try_into().map_err(|_| CipherError::InvalidTagSize)?;

        self.encrypt(key, nonce, aad, data, tag);
        Ok(())
    }

    fn inverse(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8],
    ) -> Result<(), CipherError> {
        let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| CipherError::InvalidKeySize)?;
        let nonce: &[u8; NONCE_SIZE] =
            nonce.try_into().map_err(|_| CipherError::InvalidNonceSize)?;
        let tag: &[u8; TAG_SIZE] = tag.try_into().map_err(|_| CipherError::InvalidTagSize)?;

        self.decrypt(key, nonce, aad, data, tag)
    }
}

#[cfg(test)]
impl Elephant {
    pub(crate) fn is_zeroized(&self) -> bool {
        self.spongent.is_zeroized()
            && self.expanded_key == [0; STATE_SIZE]
            && self.masks.iter().flatten().all(|b| *b == 0)
            && self.block == [0; STATE_SIZE]
            && self.tag_acc == [0; STATE_SIZE]
    }
}

impl core::fmt::Debug for Elephant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Elephant {{ [protected] }}")
    }
}
