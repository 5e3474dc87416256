// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Elephant-Dumbo tests.

use lwcbench_util::hex_to_bytes;

use crate::elephant::aead::{lfsr_step, load_ad_block, load_c_block};
use crate::elephant::spongent::{bit_destination, next_round_counter};
use crate::elephant::{Elephant, KEY_SIZE, NONCE_SIZE, STATE_SIZE, Spongent, TAG_SIZE};
use crate::error::CipherError;

fn seq<const N: usize>(start: u8) -> [u8; N] {
    core::array::from_fn(|i| start.wrapping_add(i as u8))
}

fn seal(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], aad: &[u8], plaintext: &[u8]) -> Vec<u8> {
    let mut elephant = Elephant::default();
    let mut data = plaintext.to_vec();
    let mut tag = [0u8; TAG_SIZE];

    elephant.encrypt(key, nonce, aad, &mut data, &mut tag);
    data.extend_from_slice(&tag);
    data
}

#[test]
fn test_elephant_default_is_zeroized() {
    assert!(Elephant::default().is_zeroized());
    assert!(Spongent::default().is_zeroized());
}

#[test]
fn test_round_counter_sequence() {
    // 7-bit LFSR with maximal period.
    let mut counter = 0x75;
    let mut seen = std::collections::HashSet::new();
    for _ in 0..127 {
        assert!(seen.insert(counter), "round counter repeated early");
        counter = next_round_counter(counter);
    }
    assert_eq!(counter, 0x75);
}

#[test]
fn test_bit_permutation_is_bijective() {
    let mut hit = [false; STATE_SIZE * 8];
    for i in 0..STATE_SIZE * 8 {
        hit[bit_destination(i)] = true;
    }

    assert!(hit.iter().all(|h| *h));
    assert_eq!(bit_destination(1), 40);
    assert_eq!(bit_destination(159), 159);
}

#[test]
fn test_lfsr_step_feedback() {
    let mut input = [0u8; STATE_SIZE];
    input[0] = 0x81;
    input[3] = 0x01;
    input[13] = 0x80;
    let mut output = [0u8; STATE_SIZE];

    lfsr_step(&mut output, &input);

    // (0x81 <<< 3) ^ (0x01 << 7) ^ (0x80 >> 7) = 0x0c ^ 0x80 ^ 0x01
    assert_eq!(output[STATE_SIZE - 1], 0x8d);
    assert_eq!(output[2], 0x01, "bytes shift down by one");
    assert_eq!(output[12], 0x80);
}

#[test]
fn test_first_ad_block_holds_nonce_and_padding() {
    let nonce = seq::<NONCE_SIZE>(0);
    let mut block = [0xFFu8; STATE_SIZE];

    load_ad_block(&mut block, &nonce, b"abc", 0);

    assert_eq!(block[..NONCE_SIZE], nonce);
    assert_eq!(&block[NONCE_SIZE..NONCE_SIZE + 3], b"abc");
    assert_eq!(block[NONCE_SIZE + 3], 0x01);
    assert!(block[NONCE_SIZE + 4..].iter().all(|b| *b == 0));
}

#[test]
fn test_ad_exactly_filling_first_block_gets_padding_block() {
    let nonce = seq::<NONCE_SIZE>(0);
    let ad = [0xAAu8; STATE_SIZE - NONCE_SIZE];
    let mut block = [0u8; STATE_SIZE];

    load_ad_block(&mut block, &nonce, &ad, 0);
    assert_eq!(block[NONCE_SIZE..], ad);

    load_ad_block(&mut block, &nonce, &ad, 1);
    assert_eq!(block[0], 0x01);
    assert!(block[1..].iter().all(|b| *b == 0));
}

#[test]
fn test_empty_ciphertext_block_is_padding_only() {
    let mut block = [0x55u8; STATE_SIZE];

    load_c_block(&mut block, &[], 0);

    assert_eq!(block[0], 0x01);
    assert!(block[1..].iter().all(|b| *b == 0));
}

#[test]
fn test_demo_scenario_known_answer() {
    let artifact = seal(
        &seq(0x00),
        &seq(0x10),
        b"Metadata",
        b"Hello, AEAD-Demo",
    );

    assert_eq!(
        artifact,
        hex_to_bytes("8F1D0213701DCAA6BE5C839E2FD08A638F3741A8EF9F7B89").unwrap()
    );
}

#[test]
fn test_empty_message_known_answer() {
    assert_eq!(
        seal(&seq(0x00), &seq(0x00), b"", b""),
        hex_to_bytes("6655B717736ADFF3").unwrap()
    );
}

#[test]
fn test_multi_block_known_answer() {
    let plaintext: [u8; 45] = seq(0);
    let aad: [u8; 30] = seq(100);

    assert_eq!(
        seal(&seq(0x00), &seq(0x00), &aad, &plaintext),
        hex_to_bytes(
            "0867290AD29D219C4BF3BF0BD652099B499B5B9CD7401B7ECFE8B7D30F5E05BDF4D27FAC07819CB2324573C0FCB2B1B7A94CE26F5A"
        )
        .unwrap()
    );
}

#[test]
fn test_full_block_message_known_answer() {
    let plaintext: [u8; STATE_SIZE] = seq(0);

    assert_eq!(
        seal(&seq(0x00), &seq(0x00), b"", &plaintext),
        hex_to_bytes("0867290AD29D219C4BF3BF0BD652099B499B5B9C62ABEE2F726B458B").unwrap()
    );
}

#[test]
fn test_decrypt_roundtrip_and_zeroization() {
    let key = seq::<KEY_SIZE>(0x20);
    let nonce = seq::<NONCE_SIZE>(0x40);
    let mut elephant = Elephant::default();
    let mut data = *b"Hello, AEAD-Demo";
    let mut tag = [0u8; TAG_SIZE];

    elephant.encrypt(&key, &nonce, b"Metadata", &mut data, &mut tag);
    assert!(elephant.is_zeroized());

    elephant
        .decrypt(&key, &nonce, b"Metadata", &mut data, &tag)
        .expect("Failed to decrypt(..)");
    assert!(elephant.is_zeroized());
    assert_eq!(&data, b"Hello, AEAD-Demo");
}

#[test]
fn test_tampered_ad_rejected_and_data_zeroized() {
    let key = seq::<KEY_SIZE>(0x20);
    let nonce = seq::<NONCE_SIZE>(0x40);
    let mut elephant = Elephant::default();
    let mut data = *b"Hello, AEAD-Demo";
    let mut tag = [0u8; TAG_SIZE];
    elephant.encrypt(&key, &nonce, b"Metadata", &mut data, &mut tag);

    let result = elephant.decrypt(&key, &nonce, b"Metadatb", &mut data, &tag);

    assert_eq!(result, Err(CipherError::AuthenticationFailed));
    assert_eq!(data, [0u8; 16]);
}
