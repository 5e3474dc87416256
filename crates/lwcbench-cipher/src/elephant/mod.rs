// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Elephant-Dumbo: masked Spongent-π[160] stream encryption with an encrypt-then-MAC tag.

pub(crate) mod aead;
pub(crate) mod spongent;

pub(crate) mod consts;

pub use aead::Elephant;
pub use consts::{KEY_SIZE, NONCE_SIZE, STATE_SIZE, TAG_SIZE};
pub use spongent::Spongent;

use crate::descriptor::{AlgorithmDescriptor, CipherKind};

pub static DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    name: "ELEPHANT",
    kind: CipherKind::AuthenticatedStreamCipher,
    plaintext_len: 16,
    key_len: KEY_SIZE,
    nonce_len: NONCE_SIZE,
    aad_len: 8,
    tag_len: TAG_SIZE,
};
