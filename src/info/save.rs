// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/oracle-secrets

//! Battery save-image slot loader.
//!
//! An emulator battery file holds up to three save slots at fixed offsets.
//! Each slot record starts with a 1-byte version marker; anything else at
//! that position means "no recognizable save here" and yields `None`
//! rather than an error. A truncated image is an error: the caller handed
//! over something that is not a battery file at all.
//!
//! Slot record layout (offsets relative to the slot base):
//!
//! ```text
//! +0   version marker (MARKER)
//! +1   region (0 = US/PAL, 1 = Japan)
//! +2   game id, little-endian u16
//! +4   target game (0 = Ages, 1 = Seasons)
//! +5   companion animal (wire nibble)
//! +6   behavior score
//! +7   flag bits: 0 = linked, 1 = hero quest, 2 = free ring
//! +8   hero name, 5 bytes zero-padded
//! +13  child name, 5 bytes zero-padded
//! +18  ring mask, little-endian u64
//! ```

use super::error::{InfoError, Result};
use super::GameInfo;
use crate::secret::{name, Animal, Game, Region, Rings};

/// Version marker that opens every valid slot record.
pub const MARKER: u8 = 0x33;

/// Byte offsets of the three save slots within a battery image.
pub const SLOT_OFFSETS: [usize; 3] = [0x0010, 0x0570, 0x0AD0];

/// Size of one slot record in bytes.
pub const RECORD_LEN: usize = 26;

const FLAG_LINKED: u8 = 1 << 0;
const FLAG_HERO_QUEST: u8 = 1 << 1;
const FLAG_FREE_RING: u8 = 1 << 2;

/// Read the save slot at `offset`.
///
/// Returns `Ok(None)` when the version marker does not match (no save in
/// this slot), an error when the image is too short or a field is invalid.
pub fn read_slot(image: &[u8], offset: usize) -> Result<Option<GameInfo>> {
    if offset >= image.len() {
        return Err(InfoError::SaveTruncated {
            offset,
            needed: RECORD_LEN,
        });
    }
    if image[offset] != MARKER {
        return Ok(None);
    }
    if offset + RECORD_LEN > image.len() {
        return Err(InfoError::SaveTruncated {
            offset,
            needed: RECORD_LEN,
        });
    }
    let rec = &image[offset..offset + RECORD_LEN];

    let region = match rec[1] {
        0 => Region::UsPal,
        1 => Region::Japan,
        _ => return Err(InfoError::InvalidSaveField("region")),
    };
    let target_game = match rec[4] {
        0 => Game::Ages,
        1 => Game::Seasons,
        _ => return Err(InfoError::InvalidSaveField("target game")),
    };

    let mut hero = [0u8; name::NAME_LEN];
    hero.copy_from_slice(&rec[8..13]);
    let mut child = [0u8; name::NAME_LEN];
    child.copy_from_slice(&rec[13..18]);
    let hero_name =
        name::decode(&hero, region).map_err(|_| InfoError::InvalidSaveField("hero name"))?;
    let child_name =
        name::decode(&child, region).map_err(|_| InfoError::InvalidSaveField("child name"))?;

    let mut rings = [0u8; 8];
    rings.copy_from_slice(&rec[18..26]);

    Ok(Some(GameInfo {
        region,
        game_id: u16::from_le_bytes([rec[2], rec[3]]),
        target_game,
        hero_name,
        child_name,
        animal: Animal::from_wire(rec[5]),
        behavior: rec[6] & 0x3F,
        is_linked_game: rec[7] & FLAG_LINKED != 0,
        is_hero_quest: rec[7] & FLAG_HERO_QUEST != 0,
        was_given_free_ring: rec[7] & FLAG_FREE_RING != 0,
        rings: Rings(u64::from_le_bytes(rings)),
    }))
}

/// Read all three fixed slots. Slots without a recognizable save are
/// `None`; a truncated image fails as a whole.
pub fn read_slots(image: &[u8]) -> Result<[Option<GameInfo>; 3]> {
    Ok([
        read_slot(image, SLOT_OFFSETS[0])?,
        read_slot(image, SLOT_OFFSETS[1])?,
        read_slot(image, SLOT_OFFSETS[2])?,
    ])
}

/// Write a slot record for `info` at `offset`.
///
/// The inverse of [`read_slot`]; fails if a name cannot be encoded or the
/// image is too short.
pub fn write_slot(image: &mut [u8], offset: usize, info: &GameInfo) -> Result<()> {
    if offset + RECORD_LEN > image.len() {
        return Err(InfoError::SaveTruncated {
            offset,
            needed: RECORD_LEN,
        });
    }
    let hero = name::encode(&info.hero_name, info.region)
        .map_err(|_| InfoError::InvalidSaveField("hero name"))?;
    let child = name::encode(&info.child_name, info.region)
        .map_err(|_| InfoError::InvalidSaveField("child name"))?;

    let rec = &mut image[offset..offset + RECORD_LEN];
    rec[0] = MARKER;
    rec[1] = match info.region {
        Region::UsPal => 0,
        Region::Japan => 1,
    };
    rec[2..4].copy_from_slice(&info.game_id.to_le_bytes());
    rec[4] = match info.target_game {
        Game::Ages => 0,
        Game::Seasons => 1,
    };
    rec[5] = info.animal.to_wire();
    rec[6] = info.behavior & 0x3F;
    rec[7] = u8::from(info.is_linked_game) * FLAG_LINKED
        | u8::from(info.is_hero_quest) * FLAG_HERO_QUEST
        | u8::from(info.was_given_free_ring) * FLAG_FREE_RING;
    rec[8..13].copy_from_slice(&hero);
    rec[13..18].copy_from_slice(&child);
    rec[18..26].copy_from_slice(&info.rings.0.to_le_bytes());
    Ok(())
}
