// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod le_conversions_tests {
    use lwcbench_util::{u16_from_le, u16_to_le, u32_from_le, u32_to_le, u64_from_le, u64_to_le};

    #[test]
    fn test_u32_from_le_reads_little_endian_and_zeroizes_source() {
        let mut bytes = [0x78, 0x56, 0x34, 0x12];
        let mut word = 0u32;

        u32_from_le(&mut word, &mut bytes);

        assert_eq!(word, 0x1234_5678);
        assert_eq!(bytes, [0; 4], "source bytes must be zeroized");
    }

    #[test]
    fn test_u32_to_le_writes_little_endian_and_zeroizes_source() {
        let mut word = 0xdead_beefu32;
        let mut bytes = [0u8; 4];

        u32_to_le(&mut word, &mut bytes);

        assert_eq!(bytes, [0xef, 0xbe, 0xad, 0xde]);
        assert_eq!(word, 0, "source word must be zeroized");
    }

    #[test]
    fn test_u16_conversions() {
        let mut bytes = [0x91, 0xbd];
        let mut word = 0u16;
        u16_from_le(&mut word, &mut bytes);
        assert_eq!(word, 0xbd91);

        u16_to_le(&mut word, &mut bytes);
        assert_eq!(bytes, [0x91, 0xbd]);
        assert_eq!(word, 0);
    }

    #[test]
    fn test_u64_from_le_overwrites_destination() {
        let mut bytes = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let mut word = u64::MAX;

        u64_from_le(&mut word, &mut bytes);

        assert_eq!(word, 0x0706_0504_0302_0100);

        let mut out = [0u8; 8];
        u64_to_le(&mut word, &mut out);
        assert_eq!(out, [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
    }
}
