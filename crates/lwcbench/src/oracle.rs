// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Round-trip verification of one transform over one context.

use zeroize::Zeroizing;

use lwcbench_cipher::{CipherError, CipherTransform};
use lwcbench_util::constant_time_eq;

use crate::clock::Clock;
use crate::context::Context;

/// Result of one forward/inverse round trip.
#[derive(Debug)]
pub struct OracleOutcome {
    /// Ciphertext followed by tag. Kept when the inverse fails, empty when the
    /// forward transform fails.
    pub artifact: Vec<u8>,
    /// Microsecond counter sampled right after the forward transform.
    pub encrypt_timestamp: u64,
    pub success: bool,
    /// Transform error behind a failed round trip, if any.
    pub failure: Option<CipherError>,
}

pub struct SelfTest;

impl SelfTest {
    /// Encrypts the context's plaintext, decrypts the result and compares.
    ///
    /// Transform errors never propagate: they are reported as
    /// `success == false` with the error in [`OracleOutcome::failure`].
    pub fn run(
        transform: &mut dyn CipherTransform,
        context: &Context<'_>,
        clock: &dyn Clock,
    ) -> OracleOutcome {
        let descriptor = transform.descriptor();

        let snapshot = Zeroizing::new(context.plaintext().to_vec());
        let mut working = Zeroizing::new(snapshot.to_vec());
        let mut tag = Zeroizing::new(vec![0u8; descriptor.tag_len]);

        let forward = transform.forward(
            context.key(),
            context.nonce(),
            context.aad(),
            &mut working,
            &mut tag,
        );
        let encrypt_timestamp = clock.micros();

        // No ciphertext exists when forward fails; the working copy still holds plaintext.
        if let Err(err) = forward {
            return OracleOutcome {
                artifact: Vec::new(),
                encrypt_timestamp,
                success: false,
                failure: Some(err),
            };
        }

        let mut artifact = Vec::with_capacity(descriptor.artifact_len());
        artifact.extend_from_slice(&working);
        artifact.extend_from_slice(&tag);

        let inverse = transform.inverse(
            context.key(),
            context.nonce(),
            context.aad(),
            &mut working,
            &tag,
        );
        let recovered = constant_time_eq(&working, &snapshot);

        OracleOutcome {
            artifact,
            encrypt_timestamp,
            success: inverse.is_ok() && recovered,
            failure: inverse.err(),
        }
    }
}
