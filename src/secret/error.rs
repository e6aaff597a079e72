// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/oracle-secrets

//! Error types for secret decoding, encoding, and text parsing.

use std::fmt;

use super::Kind;

/// Errors that can occur while parsing, decoding, or encoding a secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    /// Input does not decode to the kind's fixed symbol count.
    MalformedLength { expected: usize, actual: usize },
    /// A character has no match in the region's symbol alphabet.
    InvalidSymbol(char),
    /// A wire byte falls outside the 6-bit symbol domain (0–63).
    InvalidByte(u8),
    /// The discriminator bits do not match the kind being decoded.
    WrongKind { expected: Kind, actual: u8 },
    /// Recomputed checksum disagrees with the stored value.
    ChecksumMismatch { expected: u8, actual: u8 },
    /// No candidate reconstruction matches a memory secret's wire form.
    UnresolvedAmbiguity,
    /// A player name contains a character the region's name table cannot encode.
    InvalidNameChar(char),
    /// A stored name byte has no entry in the region's name table.
    InvalidNameByte(u8),
    /// A player name exceeds the 5-character field.
    NameTooLong(usize),
    /// A decoded field holds a value outside its defined range.
    InvalidField(&'static str),
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLength { expected, actual } => {
                write!(f, "expected {expected} symbols, got {actual}")
            }
            Self::InvalidSymbol(c) => write!(f, "character {c:?} is not a secret symbol"),
            Self::InvalidByte(b) => write!(f, "byte {b} is outside the 6-bit symbol range"),
            Self::WrongKind { expected, actual } => {
                write!(f, "not a {expected} secret (discriminator {actual:#04b})")
            }
            Self::ChecksumMismatch { expected, actual } => {
                write!(f, "checksum mismatch: expected {expected:#x}, got {actual:#x}")
            }
            Self::UnresolvedAmbiguity => {
                write!(f, "no candidate reconstruction matches this memory secret")
            }
            Self::InvalidNameChar(c) => write!(f, "character {c:?} cannot appear in a name"),
            Self::InvalidNameByte(b) => write!(f, "name byte {b:#04x} has no character"),
            Self::NameTooLong(n) => write!(f, "name is {n} characters, maximum is 5"),
            Self::InvalidField(msg) => write!(f, "invalid field: {msg}"),
        }
    }
}

impl std::error::Error for SecretError {}

pub type Result<T> = std::result::Result<T, SecretError>;
