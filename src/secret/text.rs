// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/oracle-secrets

//! Conversion between raw 6-bit symbol bytes and printable secret text.
//!
//! This is the only boundary where user-typed input is accepted: parsing is
//! whitespace-tolerant, matches spelled-out symbol names and `{braced}`
//! keywords case-insensitively (longest pattern first), and maps exact
//! symbols case-sensitively through the region alphabet. Formatting is
//! strict: one glyph per symbol, a single space after every 5th symbol.

use super::alphabet;
use super::error::{Result, SecretError};
use super::Region;

/// Parse secret text into 6-bit symbol bytes.
///
/// Whitespace is ignored. At each position the longest matching alias wins;
/// anything left over must be an exact alphabet symbol. The symbol count is
/// not checked here; each secret kind enforces its own fixed length.
pub fn parse(text: &str, region: Region) -> Result<Vec<u8>> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        if c == '{' {
            let close = chars[i..]
                .iter()
                .position(|&c| c == '}')
                .ok_or(SecretError::InvalidSymbol('{'))?;
            let word: String = chars[i + 1..i + close].iter().collect();
            let value = lookup_word(word.trim(), region).ok_or(SecretError::InvalidSymbol('{'))?;
            out.push(value);
            i += close + 1;
            continue;
        }
        if let Some((len, value)) = longest_word_at(&chars[i..], region) {
            out.push(value);
            i += len;
            continue;
        }
        match alphabet::value_of(c, region) {
            Some(value) => {
                out.push(value);
                i += 1;
            }
            None => return Err(SecretError::InvalidSymbol(c)),
        }
    }

    Ok(out)
}

/// Format 6-bit symbol bytes as printable secret text.
///
/// Inserts a single space after every 5th symbol; no trailing space.
pub fn format(bytes: &[u8], region: Region) -> Result<String> {
    let symbols = alphabet::symbols(region);
    let mut out = String::new();
    for (i, &b) in bytes.iter().enumerate() {
        if b > 63 {
            return Err(SecretError::InvalidByte(b));
        }
        if i > 0 && i % 5 == 0 {
            out.push(' ');
        }
        out.push(symbols[b as usize]);
    }
    Ok(out)
}

/// Case-insensitive exact lookup of a spelled-out word.
fn lookup_word(word: &str, region: Region) -> Option<u8> {
    alphabet::alias_words(region)
        .iter()
        .find(|(w, _)| w.eq_ignore_ascii_case(word))
        .map(|&(_, v)| v)
}

/// Longest alias word matching at the start of `chars`, case-insensitively.
fn longest_word_at(chars: &[char], region: Region) -> Option<(usize, u8)> {
    let mut best: Option<(usize, u8)> = None;
    for &(word, value) in alphabet::alias_words(region) {
        let len = word.chars().count();
        if best.is_some_and(|(l, _)| l >= len) || len > chars.len() {
            continue;
        }
        let matches = word
            .chars()
            .zip(chars)
            .all(|(w, &c)| w.eq_ignore_ascii_case(&c));
        if matches {
            best = Some((len, value));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_groups_of_five() {
        let bytes = [0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let text = format(&bytes, Region::UsPal).unwrap();
        assert_eq!(text, "BDFGH JLM♠♥ ♦");
    }

    #[test]
    fn format_rejects_out_of_range_byte() {
        assert_eq!(
            format(&[0, 64], Region::UsPal),
            Err(SecretError::InvalidByte(64))
        );
    }

    #[test]
    fn parse_exact_symbols() {
        assert_eq!(parse("BDFGH JLM♠♥ ♦", Region::UsPal).unwrap(), vec![
            0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10
        ]);
    }

    #[test]
    fn parse_is_case_sensitive_for_symbols() {
        // 'B' and 'b' are distinct symbols.
        assert_eq!(parse("Bb", Region::UsPal).unwrap(), vec![0, 26]);
    }

    #[test]
    fn parse_aliases_and_braces() {
        assert_eq!(parse("left", Region::UsPal).unwrap(), vec![61]);
        assert_eq!(parse("{left}", Region::UsPal).unwrap(), vec![61]);
        assert_eq!(parse("LeFt", Region::UsPal).unwrap(), vec![61]);
        assert_eq!(parse("{ HEART }", Region::UsPal).unwrap(), vec![9]);
        assert_eq!(parse("uphearts", Region::UsPal).unwrap(), vec![59, 9, 41]);
    }

    #[test]
    fn parse_collapses_whitespace() {
        assert_eq!(
            parse("  B \t D\nF  ", Region::UsPal).unwrap(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn parse_rejects_unknown_character() {
        assert_eq!(
            parse("B%D", Region::UsPal),
            Err(SecretError::InvalidSymbol('%'))
        );
    }

    #[test]
    fn parse_rejects_unknown_braced_word() {
        assert_eq!(
            parse("{rupee}", Region::UsPal),
            Err(SecretError::InvalidSymbol('{'))
        );
        assert_eq!(
            parse("{left", Region::UsPal),
            Err(SecretError::InvalidSymbol('{'))
        );
    }

    #[test]
    fn parse_japanese_kana_and_romaji() {
        assert_eq!(parse("あいう", Region::Japan).unwrap(), vec![0, 1, 2]);
        assert_eq!(parse("shi", Region::Japan).unwrap(), vec![11]);
        assert_eq!(parse("{tsu}", Region::Japan).unwrap(), vec![17]);
        // Longest match first: "na" is one syllable, not "n" + "a".
        assert_eq!(parse("nana", Region::Japan).unwrap(), vec![20, 20]);
        assert_eq!(parse("n", Region::Japan).unwrap(), vec![45]);
    }

    #[test]
    fn parse_format_roundtrip() {
        let bytes: Vec<u8> = (0..64).collect();
        for region in [Region::UsPal, Region::Japan] {
            let text = format(&bytes, region).unwrap();
            assert_eq!(parse(&text, region).unwrap(), bytes);
        }
    }
}
