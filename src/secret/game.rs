// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/oracle-secrets

//! The game secret: 20 symbols carrying the full save identity.
//!
//! Layout over the 120-bit stream (offset, width):
//! cipher key (0,3) (plain, never a bit field); discriminator (3,2) = 0;
//! game id (5,15); hero-quest flag (20,1); target game (21,1);
//! hero name bytes (22,8)(38,8)(60,8)(77,8)(89,8);
//! child name bytes (30,8)(46,8)(68,8)(97,8)(106,8);
//! behavior (54,6); free-ring flag (76,1); animal (85,4);
//! linked-game flag (105,1); checksum byte 19.
//!
//! The name fields interleave with everything else; the layout tiles all
//! 120 bits exactly, so encode/decode round-trips every bit position.

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::{bitfield, cipher, name, text};
use super::{decipher_checked, validate_checksum, Game, Kind, Region};
use crate::info::{GameInfo, InfoError};

const HERO_OFFSETS: [usize; name::NAME_LEN] = [22, 38, 60, 77, 89];
const CHILD_OFFSETS: [usize; name::NAME_LEN] = [30, 46, 68, 97, 106];

/// Checksum comparison width: game secrets validate the full nibble.
const CHECKSUM_MASK: u8 = 0xF;

/// The companion animal carried by a game secret (4-bit wire field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Animal {
    /// No companion chosen yet.
    None,
    Ricky,
    Dimitri,
    Moosh,
    /// A wire value outside the known set, preserved for round-tripping.
    Other(u8),
}

impl Animal {
    pub fn from_wire(value: u8) -> Animal {
        match value & 0xF {
            0x00 => Animal::None,
            0x0B => Animal::Ricky,
            0x0C => Animal::Dimitri,
            0x0D => Animal::Moosh,
            v => Animal::Other(v),
        }
    }

    pub fn to_wire(self) -> u8 {
        match self {
            Animal::None => 0x00,
            Animal::Ricky => 0x0B,
            Animal::Dimitri => 0x0C,
            Animal::Moosh => 0x0D,
            Animal::Other(v) => v & 0xF,
        }
    }
}

impl Default for Animal {
    fn default() -> Self {
        Animal::None
    }
}

/// A decoded game secret.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSecret {
    pub region: Region,
    pub game_id: u16,
    pub target_game: Game,
    pub hero_name: String,
    pub child_name: String,
    pub animal: Animal,
    /// Child behavior score (0–63).
    pub behavior: u8,
    pub is_linked_game: bool,
    pub is_hero_quest: bool,
    pub was_given_free_ring: bool,
}

impl GameSecret {
    /// Decode from the textual form.
    pub fn decode_text(input: &str, region: Region) -> Result<GameSecret> {
        Self::decode_bytes(&text::parse(input, region)?, region)
    }

    /// Decode from the 6-bit byte form.
    ///
    /// Validates length, symbol range, discriminator, and the checksum
    /// (full nibble) before any field is extracted.
    pub fn decode_bytes(bytes: &[u8], region: Region) -> Result<GameSecret> {
        let plain = decipher_checked(bytes, region, Kind::Game)?;
        validate_checksum(&plain, CHECKSUM_MASK)?;

        let mut hero = [0u8; name::NAME_LEN];
        let mut child = [0u8; name::NAME_LEN];
        for (i, &off) in HERO_OFFSETS.iter().enumerate() {
            hero[i] = bitfield::extract(&plain, off, 8) as u8;
        }
        for (i, &off) in CHILD_OFFSETS.iter().enumerate() {
            child[i] = bitfield::extract(&plain, off, 8) as u8;
        }

        Ok(GameSecret {
            region,
            game_id: bitfield::extract(&plain, 5, 15) as u16,
            target_game: Game::from_bit(bitfield::extract(&plain, 21, 1)),
            hero_name: name::decode(&hero, region)?,
            child_name: name::decode(&child, region)?,
            animal: Animal::from_wire(bitfield::extract(&plain, 85, 4) as u8),
            behavior: bitfield::extract(&plain, 54, 6) as u8,
            is_linked_game: bitfield::extract(&plain, 105, 1) == 1,
            is_hero_quest: bitfield::extract(&plain, 20, 1) == 1,
            was_given_free_ring: bitfield::extract(&plain, 76, 1) == 1,
        })
    }

    /// Encode to the 6-bit byte form.
    ///
    /// Fails if either name cannot be encoded in the region's name table.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let hero = name::encode(&self.hero_name, self.region)?;
        let child = name::encode(&self.child_name, self.region)?;

        let mut data = vec![0u8; Kind::Game.len()];
        bitfield::insert(&mut data, u64::from(Kind::Game.discriminator()), 3, 2);
        bitfield::insert(&mut data, u64::from(self.game_id & 0x7FFF), 5, 15);
        bitfield::insert(&mut data, u64::from(self.is_hero_quest), 20, 1);
        bitfield::insert(&mut data, self.target_game.to_bit(), 21, 1);
        for (i, &off) in HERO_OFFSETS.iter().enumerate() {
            bitfield::insert(&mut data, u64::from(hero[i]), off, 8);
        }
        for (i, &off) in CHILD_OFFSETS.iter().enumerate() {
            bitfield::insert(&mut data, u64::from(child[i]), off, 8);
        }
        bitfield::insert(&mut data, u64::from(self.behavior & 0x3F), 54, 6);
        bitfield::insert(&mut data, u64::from(self.was_given_free_ring), 76, 1);
        bitfield::insert(&mut data, u64::from(self.animal.to_wire()), 85, 4);
        bitfield::insert(&mut data, u64::from(self.is_linked_game), 105, 1);

        let key = cipher::game_id_key(self.game_id);
        data[0] = (key << 3) | (data[0] & 7);
        data[19] = cipher::checksum(&data[..19]);
        cipher::crypt(&mut data, self.region);
        Ok(data)
    }

    /// Encode to the textual form.
    pub fn to_text(&self) -> Result<String> {
        text::format(&self.to_bytes()?, self.region)
    }

    /// Build a game secret from a data holder.
    pub fn from_info(info: &GameInfo) -> GameSecret {
        GameSecret {
            region: info.region,
            game_id: info.game_id,
            target_game: info.target_game,
            hero_name: info.hero_name.clone(),
            child_name: info.child_name.clone(),
            animal: info.animal,
            behavior: info.behavior,
            is_linked_game: info.is_linked_game,
            is_hero_quest: info.is_hero_quest,
            was_given_free_ring: info.was_given_free_ring,
        }
    }

    /// Project this secret into a data holder.
    ///
    /// The holder's region must match; a game secret establishes the game
    /// id and all identity fields, so those are overwritten. Nothing is
    /// mutated on error.
    pub fn apply_to(&self, info: &mut GameInfo) -> std::result::Result<(), InfoError> {
        if info.region != self.region {
            return Err(InfoError::RegionMismatch {
                expected: self.region,
                actual: info.region,
            });
        }
        info.game_id = self.game_id;
        info.target_game = self.target_game;
        info.hero_name = self.hero_name.clone();
        info.child_name = self.child_name.clone();
        info.animal = self.animal;
        info.behavior = self.behavior;
        info.is_linked_game = self.is_linked_game;
        info.is_hero_quest = self.is_hero_quest;
        info.was_given_free_ring = self.was_given_free_ring;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::SecretError;

    fn sample() -> GameSecret {
        GameSecret {
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
        }
    }

    #[test]
    fn roundtrip_bytes() {
        let secret = sample();
        let bytes = secret.to_bytes().unwrap();
        assert_eq!(GameSecret::decode_bytes(&bytes, Region::UsPal).unwrap(), secret);
    }

    #[test]
    fn roundtrip_text() {
        let secret = sample();
        let txt = secret.to_text().unwrap();
        assert_eq!(GameSecret::decode_text(&txt, Region::UsPal).unwrap(), secret);
    }

    #[test]
    fn wrong_length_rejected() {
        assert_eq!(
            GameSecret::decode_bytes(&[0u8; 15], Region::UsPal),
            Err(SecretError::MalformedLength {
                expected: 20,
                actual: 15
            })
        );
    }

    #[test]
    fn out_of_range_symbol_rejected() {
        let mut bytes = sample().to_bytes().unwrap();
        bytes[4] = 64;
        assert_eq!(
            GameSecret::decode_bytes(&bytes, Region::UsPal),
            Err(SecretError::InvalidByte(64))
        );
    }

    #[test]
    fn checksum_nibble_is_fully_validated() {
        // Flip checksum bit 3: ring secrets would accept this, game
        // secrets must not.
        let mut bytes = sample().to_bytes().unwrap();
        cipher::crypt(&mut bytes, Region::UsPal);
        bytes[19] ^= 0b1000;
        cipher::crypt(&mut bytes, Region::UsPal);
        assert!(matches!(
            GameSecret::decode_bytes(&bytes, Region::UsPal),
            Err(SecretError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn animal_wire_values_roundtrip() {
        for v in 0..16 {
            assert_eq!(Animal::from_wire(v).to_wire(), v);
        }
    }

    #[test]
    fn unusual_animal_survives_roundtrip() {
        let mut secret = sample();
        secret.animal = Animal::Other(5);
        let bytes = secret.to_bytes().unwrap();
        let decoded = GameSecret::decode_bytes(&bytes, Region::UsPal).unwrap();
        assert_eq!(decoded.animal, Animal::Other(5));
    }

    #[test]
    fn japanese_roundtrip_with_kana_names() {
        let secret = GameSecret {
            region: Region::Japan,
            game_id: 9999,
            target_game: Game::Seasons,
            hero_name: "りんく".into(),
            child_name: "こども".into(),
            animal: Animal::Moosh,
            behavior: 17,
            is_linked_game: false,
            is_hero_quest: true,
            was_given_free_ring: false,
        };
        let txt = secret.to_text().unwrap();
        assert_eq!(GameSecret::decode_text(&txt, Region::Japan).unwrap(), secret);
    }
}
