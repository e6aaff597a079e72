// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/oracle-secrets

//! The memory secret: 5 symbols exchanging one narrative memory.
//!
//! Discriminator (3,2) = 3, game id (5,15), memory index (20,4). The
//! target game and return flag have no bit fields of their own: a 2-bit
//! mask derived from them shapes the cipher key
//! (`key = mask << 1 | index & 1`) and is stored again in the high 2 bits
//! of the checksum byte. Neither placement is losslessly separable by
//! direct extraction, so decoding reconstructs all four
//! target-game/return-flag candidates, re-encodes each, and keeps the one
//! whose wire form matches the input. This trial step is the wire format's
//! defining property; no shortcut inverts it directly.

use super::error::{Result, SecretError};
use super::{bitfield, cipher, text};
use super::{decipher_checked, validate_checksum, Game, Kind, Region};
use crate::info::GameInfo;

/// Checksum comparison width: memory secrets validate 3 bits.
const CHECKSUM_MASK: u8 = 0x7;

/// The ten memory exchanges, named by their Ages/Seasons speaker pair.
/// Discriminant = wire index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Memory {
    ClockShopKingZora = 0,
    GraveyardFairy = 1,
    SubrosianTroy = 2,
    DiverPlen = 3,
    SmithLibrary = 4,
    PirateTokay = 5,
    TempleMamamu = 6,
    DekuTingle = 7,
    BiggoronElder = 8,
    RuulSymmetry = 9,
}

impl Memory {
    pub fn from_wire(value: u8) -> Option<Memory> {
        Some(match value {
            0 => Memory::ClockShopKingZora,
            1 => Memory::GraveyardFairy,
            2 => Memory::SubrosianTroy,
            3 => Memory::DiverPlen,
            4 => Memory::SmithLibrary,
            5 => Memory::PirateTokay,
            6 => Memory::TempleMamamu,
            7 => Memory::DekuTingle,
            8 => Memory::BiggoronElder,
            9 => Memory::RuulSymmetry,
            _ => return None,
        })
    }

    pub fn to_wire(self) -> u8 {
        self as u8
    }
}

/// A decoded memory secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySecret {
    pub region: Region,
    pub game_id: u16,
    pub memory: Memory,
    pub target_game: Game,
    pub is_return_secret: bool,
}

/// The 2-bit mask folded into the cipher key and checksum byte.
/// The mapping differs between regions.
fn fold_mask(region: Region, target: Game, is_return: bool) -> u8 {
    match (region, target, is_return) {
        (Region::UsPal, Game::Ages, false) => 0,
        (Region::UsPal, Game::Ages, true) => 3,
        (Region::UsPal, Game::Seasons, false) => 2,
        (Region::UsPal, Game::Seasons, true) => 1,
        (Region::Japan, Game::Ages, false) => 0,
        (Region::Japan, Game::Ages, true) => 1,
        (Region::Japan, Game::Seasons, false) => 3,
        (Region::Japan, Game::Seasons, true) => 2,
    }
}

impl MemorySecret {
    /// Decode from the textual form.
    pub fn decode_text(input: &str, region: Region) -> Result<MemorySecret> {
        Self::decode_bytes(&text::parse(input, region)?, region)
    }

    /// Decode from the 6-bit byte form.
    ///
    /// Extracts the game id and memory index directly, then reconstructs
    /// all four target-game/return-flag candidates and selects the one
    /// whose re-encoded wire form equals the input. Comparing wire bytes is
    /// the same relation as comparing formatted text, since formatting is
    /// injective over valid byte arrays.
    pub fn decode_bytes(bytes: &[u8], region: Region) -> Result<MemorySecret> {
        let plain = decipher_checked(bytes, region, Kind::Memory)?;
        validate_checksum(&plain, CHECKSUM_MASK)?;

        let game_id = bitfield::extract(&plain, 5, 15) as u16;
        let index = bitfield::extract(&plain, 20, 4) as u8;
        let memory =
            Memory::from_wire(index).ok_or(SecretError::InvalidField("memory index"))?;

        for target_game in [Game::Ages, Game::Seasons] {
            for is_return_secret in [false, true] {
                let candidate = MemorySecret {
                    region,
                    game_id,
                    memory,
                    target_game,
                    is_return_secret,
                };
                if candidate.to_bytes() == bytes {
                    return Ok(candidate);
                }
            }
        }
        Err(SecretError::UnresolvedAmbiguity)
    }

    /// Encode to the 6-bit byte form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mask = fold_mask(self.region, self.target_game, self.is_return_secret);
        let key = (mask << 1) | (self.memory.to_wire() & 1);

        let mut data = vec![0u8; Kind::Memory.len()];
        bitfield::insert(&mut data, u64::from(Kind::Memory.discriminator()), 3, 2);
        bitfield::insert(&mut data, u64::from(self.game_id & 0x7FFF), 5, 15);
        bitfield::insert(&mut data, u64::from(self.memory.to_wire()), 20, 4);
        data[0] = (key << 3) | (data[0] & 7);
        data[4] = (mask << 4) | cipher::checksum(&data[..4]);
        cipher::crypt(&mut data, self.region);
        data
    }

    /// Encode to the textual form.
    pub fn to_text(&self) -> Result<String> {
        text::format(&self.to_bytes(), self.region)
    }

    /// Build a memory secret from a data holder.
    ///
    /// The holder supplies identity (region, game id, target game); the
    /// memory and direction are per-exchange and supplied by the caller.
    /// Memory secrets carry no other holder state, so there is no
    /// projection in the opposite direction.
    pub fn from_info(info: &GameInfo, memory: Memory, is_return_secret: bool) -> MemorySecret {
        MemorySecret {
            region: info.region,
            game_id: info.game_id,
            memory,
            target_game: info.target_game,
            is_return_secret,
        }
    }
}
