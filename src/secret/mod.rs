// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/oracle-secrets

//! The secret codec: bit-packing, cipher/checksum, text parsing, and the
//! three secret protocols.
//!
//! A secret is a fixed-length sequence of 6-bit symbols. Three kinds exist,
//! distinguished by a 2-bit discriminator and their length:
//!
//! - [`GameSecret`]: 20 symbols; carries the full save identity (game id,
//!   names, companion, flags) from one game into the other.
//! - [`RingSecret`]: 15 symbols; carries the 64-bit ring inventory mask.
//! - [`MemorySecret`]: 5 symbols; carries one narrative memory exchange.
//!
//! The decode pipeline is: text → symbol bytes ([`text::parse`]) →
//! decipher + checksum validation ([`cipher`]) → field extraction
//! ([`bitfield`]) per the kind's fixed layout. Encoding runs the same
//! pipeline in reverse. All operations are pure and allocate O(length).

pub mod alphabet;
pub mod bitfield;
pub mod cipher;
pub mod error;
pub mod name;
pub mod text;

mod game;
mod memory;
mod ring;

pub use error::{Result, SecretError};
pub use game::{Animal, GameSecret};
pub use memory::{Memory, MemorySecret};
pub use ring::{RingSecret, Rings};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Game region. Selects the symbol alphabet, keystream table, and name
/// table. A secret's region is fixed once decoded; values from different
/// regions never mix silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// US and PAL releases (shared wire format).
    UsPal,
    /// Japanese releases.
    Japan,
}

/// Which of the two games a secret targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Game {
    Ages,
    Seasons,
}

impl Game {
    pub(crate) fn from_bit(bit: u64) -> Game {
        if bit == 0 {
            Game::Ages
        } else {
            Game::Seasons
        }
    }

    pub(crate) fn to_bit(self) -> u64 {
        match self {
            Game::Ages => 0,
            Game::Seasons => 1,
        }
    }
}

/// Secret kind, as identified by the discriminator bits at (3, 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Game,
    Ring,
    Memory,
}

impl Kind {
    /// Discriminator value as extracted by the bit engine.
    pub fn discriminator(self) -> u8 {
        match self {
            Kind::Game => 0,
            Kind::Ring => 2,
            Kind::Memory => 3,
        }
    }

    /// Fixed symbol count for this kind.
    pub fn len(self) -> usize {
        match self {
            Kind::Game => 20,
            Kind::Ring => 15,
            Kind::Memory => 5,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Game => write!(f, "game"),
            Kind::Ring => write!(f, "ring"),
            Kind::Memory => write!(f, "memory"),
        }
    }
}

/// A decoded secret of any kind.
///
/// Use this when the caller does not know in advance which kind a typed-in
/// secret is: dispatch is by symbol count, then each kind's decoder
/// enforces its own discriminator and checksum.
#[derive(Debug, Clone, PartialEq)]
pub enum Secret {
    Game(GameSecret),
    Ring(RingSecret),
    Memory(MemorySecret),
}

impl Secret {
    /// Decode a secret of any kind from its textual form.
    pub fn decode_text(input: &str, region: Region) -> Result<Secret> {
        Self::decode_bytes(&text::parse(input, region)?, region)
    }

    /// Decode a secret of any kind from its 6-bit byte form.
    pub fn decode_bytes(bytes: &[u8], region: Region) -> Result<Secret> {
        match bytes.len() {
            20 => GameSecret::decode_bytes(bytes, region).map(Secret::Game),
            15 => RingSecret::decode_bytes(bytes, region).map(Secret::Ring),
            5 => MemorySecret::decode_bytes(bytes, region).map(Secret::Memory),
            n => Err(SecretError::MalformedLength {
                expected: 20,
                actual: n,
            }),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Secret::Game(_) => Kind::Game,
            Secret::Ring(_) => Kind::Ring,
            Secret::Memory(_) => Kind::Memory,
        }
    }

    pub fn region(&self) -> Region {
        match self {
            Secret::Game(s) => s.region,
            Secret::Ring(s) => s.region,
            Secret::Memory(s) => s.region,
        }
    }

    pub fn game_id(&self) -> u16 {
        match self {
            Secret::Game(s) => s.game_id,
            Secret::Ring(s) => s.game_id,
            Secret::Memory(s) => s.game_id,
        }
    }

    /// Re-encode to the 6-bit byte form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Secret::Game(s) => s.to_bytes(),
            Secret::Ring(s) => Ok(s.to_bytes()),
            Secret::Memory(s) => Ok(s.to_bytes()),
        }
    }

    /// Re-encode to the textual form.
    pub fn to_text(&self) -> Result<String> {
        text::format(&self.to_bytes()?, self.region())
    }
}

/// Shared decode preamble: length, symbol range, decipher, discriminator.
pub(crate) fn decipher_checked(bytes: &[u8], region: Region, kind: Kind) -> Result<Vec<u8>> {
    if bytes.len() != kind.len() {
        return Err(SecretError::MalformedLength {
            expected: kind.len(),
            actual: bytes.len(),
        });
    }
    if let Some(&b) = bytes.iter().find(|&&b| b > 63) {
        return Err(SecretError::InvalidByte(b));
    }

    let mut plain = bytes.to_vec();
    cipher::crypt(&mut plain, region);

    let disc = bitfield::extract(&plain, 3, 2) as u8;
    if disc != kind.discriminator() {
        return Err(SecretError::WrongKind {
            expected: kind,
            actual: disc,
        });
    }
    Ok(plain)
}

/// Shared checksum validation at the kind's comparison width.
pub(crate) fn validate_checksum(plain: &[u8], mask: u8) -> Result<()> {
    let expected = cipher::checksum(&plain[..plain.len() - 1]) & mask;
    let actual = plain[plain.len() - 1] & mask;
    if expected != actual {
        return Err(SecretError::ChecksumMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_constants() {
        assert_eq!(Kind::Game.discriminator(), 0);
        assert_eq!(Kind::Ring.discriminator(), 2);
        assert_eq!(Kind::Memory.discriminator(), 3);
        assert_eq!(Kind::Game.len(), 20);
        assert_eq!(Kind::Ring.len(), 15);
        assert_eq!(Kind::Memory.len(), 5);
    }

    #[test]
    fn secret_dispatch_by_length() {
        let game = GameSecret {
            region: Region::UsPal,
            game_id: 14129,
            target_game: Game::Ages,
            hero_name: "Link".into(),
            child_name: "Pip".into(),
            animal: Animal::Dimitri,
            behavior: 4,
            is_linked_game: true,
            is_hero_quest: false,
            was_given_free_ring: true,
        };
        let bytes = game.to_bytes().unwrap();
        match Secret::decode_bytes(&bytes, Region::UsPal).unwrap() {
            Secret::Game(decoded) => assert_eq!(decoded, game),
            other => panic!("expected game secret, got {:?}", other.kind()),
        }
    }

    #[test]
    fn secret_dispatch_rejects_odd_lengths() {
        assert!(matches!(
            Secret::decode_bytes(&[0u8; 7], Region::UsPal),
            Err(SecretError::MalformedLength { .. })
        ));
    }
}
