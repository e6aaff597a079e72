// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/oracle-secrets

//! Per-region codec for the two embedded player names.
//!
//! Names use a 256-entry character table distinct from the symbol alphabet:
//! both regions accept printable ASCII (0x20–0x7E, identity-mapped), and
//! the Japanese table additionally maps 0xA0–0xDF to kana. Name fields are
//! exactly 5 bytes on the wire, zero-padded; trailing padding and spaces
//! are trimmed on read.

use super::alphabet::SYMBOLS_JP;
use super::error::{Result, SecretError};
use super::Region;

/// Wire size of a name field in bytes.
pub const NAME_LEN: usize = 5;

/// First byte of the Japanese kana block.
const KANA_BASE: u8 = 0xA0;

/// Decode one name byte to its character. `None` for unmapped bytes.
pub fn char_of(byte: u8, region: Region) -> Option<char> {
    match byte {
        0x20..=0x7E => Some(byte as char),
        _ if region == Region::Japan && (KANA_BASE..KANA_BASE + 64).contains(&byte) => {
            Some(SYMBOLS_JP[usize::from(byte - KANA_BASE)])
        }
        _ => None,
    }
}

/// Encode one name character to its byte. `None` for unmappable characters.
pub fn byte_of(c: char, region: Region) -> Option<u8> {
    if (' '..='~').contains(&c) {
        return Some(c as u8);
    }
    if region == Region::Japan {
        if let Some(i) = SYMBOLS_JP.iter().position(|&k| k == c) {
            return Some(KANA_BASE + i as u8);
        }
    }
    None
}

/// Encode a name into its fixed 5-byte zero-padded wire form.
pub fn encode(name: &str, region: Region) -> Result<[u8; NAME_LEN]> {
    let mut out = [0u8; NAME_LEN];
    let mut len = 0;
    for c in name.chars() {
        if len == NAME_LEN {
            return Err(SecretError::NameTooLong(name.chars().count()));
        }
        out[len] = byte_of(c, region).ok_or(SecretError::InvalidNameChar(c))?;
        len += 1;
    }
    Ok(out)
}

/// Decode a 5-byte wire name, trimming the zero padding and trailing spaces.
pub fn decode(bytes: &[u8; NAME_LEN], region: Region) -> Result<String> {
    let mut name = String::new();
    for &b in bytes {
        if b == 0 {
            break;
        }
        name.push(char_of(b, region).ok_or(SecretError::InvalidNameByte(b))?);
    }
    while name.ends_with(' ') {
        name.pop();
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_names_are_identity_mapped() {
        assert_eq!(encode("Link", Region::UsPal).unwrap(), [76, 105, 110, 107, 0]);
        assert_eq!(encode("Pip", Region::UsPal).unwrap(), [80, 105, 112, 0, 0]);
    }

    #[test]
    fn decode_trims_padding_and_spaces() {
        assert_eq!(decode(&[76, 105, 110, 107, 0], Region::UsPal).unwrap(), "Link");
        assert_eq!(decode(&[0x41, 0x20, 0x20, 0, 0], Region::UsPal).unwrap(), "A");
        assert_eq!(decode(&[0, 0, 0, 0, 0], Region::UsPal).unwrap(), "");
    }

    #[test]
    fn roundtrip_both_regions() {
        for region in [Region::UsPal, Region::Japan] {
            for name in ["", "Z", "Link!", "a b"] {
                let wire = encode(name, region).unwrap();
                assert_eq!(decode(&wire, region).unwrap(), name, "{region:?} {name:?}");
            }
        }
        let wire = encode("りんく", Region::Japan).unwrap();
        assert_eq!(wire[0], KANA_BASE + 39);
        assert_eq!(decode(&wire, Region::Japan).unwrap(), "りんく");
    }

    #[test]
    fn kana_rejected_outside_japan() {
        assert_eq!(
            encode("り", Region::UsPal),
            Err(SecretError::InvalidNameChar('り'))
        );
        assert_eq!(
            decode(&[KANA_BASE, 0, 0, 0, 0], Region::UsPal),
            Err(SecretError::InvalidNameByte(KANA_BASE))
        );
    }

    #[test]
    fn six_characters_is_too_long() {
        assert_eq!(
            encode("Odessa", Region::UsPal),
            Err(SecretError::NameTooLong(6))
        );
    }
}
