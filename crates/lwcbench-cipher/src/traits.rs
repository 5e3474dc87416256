// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Transform trait shared by every primitive in the roster.

use crate::descriptor::AlgorithmDescriptor;
use crate::error::CipherError;

/// In-place forward/inverse transform of one primitive.
///
/// Inputs are borrowed only for the duration of the call. Unauthenticated
/// primitives take an empty `tag` and ignore `aad`; primitives without a
/// nonce take an empty `nonce`.
pub trait CipherTransform {
    /// Static identity and sizes of this primitive.
    fn descriptor(&self) -> &'static AlgorithmDescriptor;

    /// Encrypts `data` in place and writes the authentication tag, if any.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeySize`], [`CipherError::InvalidNonceSize`],
    /// [`CipherError::InvalidTagSize`] or [`CipherError::InvalidBlockSize`] if the
    /// slices do not match the primitive's requirements.
    fn forward(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8],
    ) -> Result<(), CipherError>;

    /// Decrypts `data` in place, verifying `tag` first for authenticated kinds.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::AuthenticationFailed`] if the tag does not verify.
    /// `data` is zeroized in that case. Size errors as in [`CipherTransform::forward`].
    fn inverse(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8],
    ) -> Result<(), CipherError>;
}
