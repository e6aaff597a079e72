// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/oracle-secrets

//! Per-region symbol alphabets and textual alias tables.
//!
//! Each region defines an ordered 64-entry alphabet; a symbol's index is its
//! 6-bit wire value. The alphabets are restricted to visually distinct
//! glyphs so secrets survive manual transcription. The alias tables map
//! spelled-out names (`left`, `heart`, rōmaji syllables for Japan) to symbol
//! values for flexible typed input; braced forms like `{left}` resolve
//! through the same word table. Pure data, no logic beyond lookup.

use super::Region;

/// US/PAL symbol alphabet. Index = 6-bit wire value.
pub const SYMBOLS_US: [char; 64] = [
    'B', 'D', 'F', 'G', 'H', 'J', 'L', 'M', //
    '♠', '♥', '♦', '♣', '#', 'N', 'Q', 'R', //
    'S', 'T', 'W', 'X', 'Y', '●', '▲', '■', //
    '+', '-', 'b', 'd', 'f', 'g', 'h', 'j', //
    'm', '$', '*', '/', ':', '~', 'n', 'q', //
    'r', 's', 't', 'w', 'y', '?', '!', '&', //
    '(', '=', ')', '2', '3', '4', '5', '6', //
    '7', '8', '9', '↑', '↓', '←', '→', '@',
];

/// Japanese symbol alphabet (kana). Index = 6-bit wire value.
pub const SYMBOLS_JP: [char; 64] = [
    'あ', 'い', 'う', 'え', 'お', //
    'か', 'き', 'く', 'け', 'こ', //
    'さ', 'し', 'す', 'せ', 'そ', //
    'た', 'ち', 'つ', 'て', 'と', //
    'な', 'に', 'ぬ', 'ね', 'の', //
    'は', 'ひ', 'ふ', 'へ', 'ほ', //
    'ま', 'み', 'む', 'め', 'も', //
    'や', 'ゆ', 'よ', //
    'ら', 'り', 'る', 'れ', 'ろ', //
    'わ', 'を', 'ん', //
    'が', 'ぎ', 'ぐ', 'げ', 'ご', //
    'ざ', 'じ', 'ず', 'ぜ', 'ぞ', //
    'ば', 'び', 'ぶ', 'べ', 'ぼ', //
    'ぱ', 'ぴ', 'ぷ',
];

/// US/PAL spelled-out aliases for the non-alphanumeric symbols.
const ALIASES_US: [(&str, u8); 11] = [
    ("spade", 8),
    ("heart", 9),
    ("diamond", 10),
    ("club", 11),
    ("circle", 21),
    ("triangle", 22),
    ("square", 23),
    ("up", 59),
    ("down", 60),
    ("left", 61),
    ("right", 62),
];

/// Japanese rōmaji aliases, index-aligned with [`SYMBOLS_JP`].
const ROMAJI_JP: [&str; 64] = [
    "a", "i", "u", "e", "o", //
    "ka", "ki", "ku", "ke", "ko", //
    "sa", "shi", "su", "se", "so", //
    "ta", "chi", "tsu", "te", "to", //
    "na", "ni", "nu", "ne", "no", //
    "ha", "hi", "fu", "he", "ho", //
    "ma", "mi", "mu", "me", "mo", //
    "ya", "yu", "yo", //
    "ra", "ri", "ru", "re", "ro", //
    "wa", "wo", "n", //
    "ga", "gi", "gu", "ge", "go", //
    "za", "ji", "zu", "ze", "zo", //
    "ba", "bi", "bu", "be", "bo", //
    "pa", "pi", "pu",
];

/// The region's 64-symbol alphabet.
pub fn symbols(region: Region) -> &'static [char; 64] {
    match region {
        Region::UsPal => &SYMBOLS_US,
        Region::Japan => &SYMBOLS_JP,
    }
}

/// Exact (case-sensitive) symbol lookup: glyph to 6-bit value.
pub fn value_of(c: char, region: Region) -> Option<u8> {
    symbols(region).iter().position(|&s| s == c).map(|i| i as u8)
}

/// Spelled-out alias words for the region, each mapping to one symbol value.
///
/// Matching is case-insensitive and longest-pattern-first; the parser also
/// accepts any word in `{braces}`.
pub fn alias_words(region: Region) -> &'static [(&'static str, u8)] {
    match region {
        Region::UsPal => &ALIASES_US,
        Region::Japan => {
            // Lazily materialize the (word, value) view over ROMAJI_JP once.
            use std::sync::OnceLock;
            static JP: OnceLock<Vec<(&'static str, u8)>> = OnceLock::new();
            JP.get_or_init(|| {
                ROMAJI_JP
                    .iter()
                    .enumerate()
                    .map(|(i, &w)| (w, i as u8))
                    .collect()
            })
        }
    }
}
