// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/oracle-secrets

//! The ring secret: 15 symbols carrying the 64-bit ring inventory mask.
//!
//! Discriminator (3,2) = 2, game id (5,15). The eight mask bytes
//! (least-significant first) are scattered over the stream at a fixed,
//! non-sequential set of offsets; the table below is a wire constant and
//! not derivable from anything else. Checksum byte 14, compared on its low
//! 3 bits only.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::{bitfield, cipher, text};
use super::{decipher_checked, validate_checksum, Kind, Region};
use crate::info::{GameInfo, InfoError};

/// Bit offsets of the eight ring-mask bytes, least-significant byte first.
const MASK_OFFSETS: [usize; 8] = [20, 28, 36, 44, 60, 68, 76, 52];

/// Checksum comparison width: ring secrets validate 3 bits.
const CHECKSUM_MASK: u8 = 0x7;

/// Ring inventory as a 64-bit ownership mask, one bit per distinct ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rings(pub u64);

/// Ring display names, indexed by mask bit.
const RING_NAMES: [&str; 64] = [
    "Friendship Ring",
    "Power Ring L-2",
    "Power Ring L-3",
    "Armor Ring L-1",
    "Armor Ring L-2",
    "Armor Ring L-3",
    "Red Ring",
    "Blue Ring",
    "Green Ring",
    "Cursed Ring",
    "Expert's Ring",
    "Blast Ring",
    "Rang Ring L-1",
    "GBA Time Ring",
    "Maple's Ring",
    "Steadfast Ring",
    "Pegasus Ring",
    "Toss Ring",
    "Heart Ring L-1",
    "Heart Ring L-2",
    "Swimmer's Ring",
    "Charge Ring",
    "Light Ring L-1",
    "Power Ring L-1",
    "Light Ring L-2",
    "Bomber's Ring",
    "Green Luck Ring",
    "Blue Luck Ring",
    "Gold Luck Ring",
    "Red Luck Ring",
    "Green Holy Ring",
    "Blue Holy Ring",
    "Red Holy Ring",
    "Snowshoe Ring",
    "Roc's Ring",
    "Quicksand Ring",
    "Red Joy Ring",
    "Blue Joy Ring",
    "Gold Joy Ring",
    "Green Joy Ring",
    "Discovery Ring",
    "Rang Ring L-2",
    "Octo Ring",
    "Moblin Ring",
    "Like Like Ring",
    "Subrosian Ring",
    "First Gen Ring",
    "Spin Ring",
    "Bombproof Ring",
    "Energy Ring",
    "Dbl. Edge Ring",
    "GBA Nature Ring",
    "Slayer's Ring",
    "Rupee Ring",
    "Victory Ring",
    "Sign Ring",
    "100th Ring",
    "Protection Ring",
    "Whisp Ring",
    "Gasha Ring",
    "Peace Ring",
    "Zora Ring",
    "Fist Ring",
    "Whimsical Ring",
];

impl Rings {
    pub const NONE: Rings = Rings(0);
    pub const ALL: Rings = Rings(u64::MAX);

    pub const FRIENDSHIP: Rings = Rings(1 << 0);
    pub const POWER_L2: Rings = Rings(1 << 1);
    pub const POWER_L3: Rings = Rings(1 << 2);
    pub const ARMOR_L1: Rings = Rings(1 << 3);
    pub const ARMOR_L2: Rings = Rings(1 << 4);
    pub const ARMOR_L3: Rings = Rings(1 << 5);
    pub const RED: Rings = Rings(1 << 6);
    pub const BLUE: Rings = Rings(1 << 7);
    pub const GREEN: Rings = Rings(1 << 8);
    pub const CURSED: Rings = Rings(1 << 9);
    pub const EXPERTS: Rings = Rings(1 << 10);
    pub const BLAST: Rings = Rings(1 << 11);
    pub const RANG_L1: Rings = Rings(1 << 12);
    pub const GBA_TIME: Rings = Rings(1 << 13);
    pub const MAPLES: Rings = Rings(1 << 14);
    pub const STEADFAST: Rings = Rings(1 << 15);
    pub const PEGASUS: Rings = Rings(1 << 16);
    pub const TOSS: Rings = Rings(1 << 17);
    pub const HEART_L1: Rings = Rings(1 << 18);
    pub const HEART_L2: Rings = Rings(1 << 19);
    pub const SWIMMERS: Rings = Rings(1 << 20);
    pub const CHARGE: Rings = Rings(1 << 21);
    pub const LIGHT_L1: Rings = Rings(1 << 22);
    pub const POWER_L1: Rings = Rings(1 << 23);
    pub const LIGHT_L2: Rings = Rings(1 << 24);
    pub const BOMBERS: Rings = Rings(1 << 25);
    pub const GREEN_LUCK: Rings = Rings(1 << 26);
    pub const BLUE_LUCK: Rings = Rings(1 << 27);
    pub const GOLD_LUCK: Rings = Rings(1 << 28);
    pub const RED_LUCK: Rings = Rings(1 << 29);
    pub const GREEN_HOLY: Rings = Rings(1 << 30);
    pub const BLUE_HOLY: Rings = Rings(1 << 31);
    pub const RED_HOLY: Rings = Rings(1 << 32);
    pub const SNOWSHOE: Rings = Rings(1 << 33);
    pub const ROCS: Rings = Rings(1 << 34);
    pub const QUICKSAND: Rings = Rings(1 << 35);
    pub const RED_JOY: Rings = Rings(1 << 36);
    pub const BLUE_JOY: Rings = Rings(1 << 37);
    pub const GOLD_JOY: Rings = Rings(1 << 38);
    pub const GREEN_JOY: Rings = Rings(1 << 39);
    pub const DISCOVERY: Rings = Rings(1 << 40);
    pub const RANG_L2: Rings = Rings(1 << 41);
    pub const OCTO: Rings = Rings(1 << 42);
    pub const MOBLIN: Rings = Rings(1 << 43);
    pub const LIKE_LIKE: Rings = Rings(1 << 44);
    pub const SUBROSIAN: Rings = Rings(1 << 45);
    pub const FIRST_GEN: Rings = Rings(1 << 46);
    pub const SPIN: Rings = Rings(1 << 47);
    pub const BOMBPROOF: Rings = Rings(1 << 48);
    pub const ENERGY: Rings = Rings(1 << 49);
    pub const DOUBLE_EDGE: Rings = Rings(1 << 50);
    pub const GBA_NATURE: Rings = Rings(1 << 51);
    pub const SLAYERS: Rings = Rings(1 << 52);
    pub const RUPEE: Rings = Rings(1 << 53);
    pub const VICTORY: Rings = Rings(1 << 54);
    pub const SIGN: Rings = Rings(1 << 55);
    pub const HUNDREDTH: Rings = Rings(1 << 56);
    pub const PROTECTION: Rings = Rings(1 << 57);
    pub const WHISP: Rings = Rings(1 << 58);
    pub const GASHA: Rings = Rings(1 << 59);
    pub const PEACE: Rings = Rings(1 << 60);
    pub const ZORA: Rings = Rings(1 << 61);
    pub const FIST: Rings = Rings(1 << 62);
    pub const WHIMSICAL: Rings = Rings(1 << 63);

    pub fn contains(self, other: Rings) -> bool {
        self.0 & other.0 == other.0
    }

    /// Number of rings owned.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Display name of the ring at `bit` (0–63).
    pub fn name_of(bit: u8) -> &'static str {
        RING_NAMES[usize::from(bit & 63)]
    }

    /// Display names of every owned ring, in mask-bit order.
    pub fn names(self) -> Vec<&'static str> {
        (0..64)
            .filter(|&b| self.0 >> b & 1 == 1)
            .map(|b| RING_NAMES[b as usize])
            .collect()
    }
}

impl BitOr for Rings {
    type Output = Rings;
    fn bitor(self, rhs: Rings) -> Rings {
        Rings(self.0 | rhs.0)
    }
}

impl BitOrAssign for Rings {
    fn bitor_assign(&mut self, rhs: Rings) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Rings {
    type Output = Rings;
    fn bitand(self, rhs: Rings) -> Rings {
        Rings(self.0 & rhs.0)
    }
}

impl fmt::Display for Rings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join(", "))
    }
}

/// A decoded ring secret.
#[derive(Debug, Clone, PartialEq)]
pub struct RingSecret {
    pub region: Region,
    pub game_id: u16,
    pub rings: Rings,
}

impl RingSecret {
    /// Decode from the textual form.
    pub fn decode_text(input: &str, region: Region) -> Result<RingSecret> {
        Self::decode_bytes(&text::parse(input, region)?, region)
    }

    /// Decode from the 6-bit byte form.
    pub fn decode_bytes(bytes: &[u8], region: Region) -> Result<RingSecret> {
        let plain = decipher_checked(bytes, region, Kind::Ring)?;
        validate_checksum(&plain, CHECKSUM_MASK)?;

        let mut mask = 0u64;
        for (i, &off) in MASK_OFFSETS.iter().enumerate() {
            mask |= bitfield::extract(&plain, off, 8) << (8 * i);
        }

        Ok(RingSecret {
            region,
            game_id: bitfield::extract(&plain, 5, 15) as u16,
            rings: Rings(mask),
        })
    }

    /// Encode to the 6-bit byte form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = vec![0u8; Kind::Ring.len()];
        bitfield::insert(&mut data, u64::from(Kind::Ring.discriminator()), 3, 2);
        bitfield::insert(&mut data, u64::from(self.game_id & 0x7FFF), 5, 15);
        for (i, &off) in MASK_OFFSETS.iter().enumerate() {
            bitfield::insert(&mut data, self.rings.0 >> (8 * i) & 0xFF, off, 8);
        }

        let key = cipher::game_id_key(self.game_id);
        data[0] = (key << 3) | (data[0] & 7);
        data[14] = cipher::checksum(&data[..14]);
        cipher::crypt(&mut data, self.region);
        data
    }

    /// Encode to the textual form.
    pub fn to_text(&self) -> Result<String> {
        text::format(&self.to_bytes(), self.region)
    }

    /// Build a ring secret from a data holder.
    pub fn from_info(info: &GameInfo) -> RingSecret {
        RingSecret {
            region: info.region,
            game_id: info.game_id,
            rings: info.rings,
        }
    }

    /// Project this secret's rings into a data holder.
    ///
    /// The holder's region and game id must both match this secret's;
    /// nothing is mutated on mismatch. With `merge` the mask is OR-ed into
    /// the holder's existing rings, otherwise it replaces them.
    pub fn apply_to(&self, info: &mut GameInfo, merge: bool) -> std::result::Result<(), InfoError> {
        if info.region != self.region {
            return Err(InfoError::RegionMismatch {
                expected: self.region,
                actual: info.region,
            });
        }
        if info.game_id != self.game_id {
            return Err(InfoError::GameIdMismatch {
                expected: self.game_id,
                actual: info.game_id,
            });
        }
        if merge {
            info.rings |= self.rings;
        } else {
            info.rings = self.rings;
        }
        Ok(())
    }
}
