// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! TinyJAMBU-128: keyed-permutation AEAD with a 128-bit state.

mod aead;

pub(crate) mod consts;

pub use aead::TinyJambu;
pub use consts::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};

use crate::descriptor::{AlgorithmDescriptor, CipherKind};

pub static DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    name: "TINYJAMBU",
    kind: CipherKind::PermutationAead,
    plaintext_len: 16,
    key_len: KEY_SIZE,
    nonce_len: NONCE_SIZE,
    aad_len: 8,
    tag_len: TAG_SIZE,
};
