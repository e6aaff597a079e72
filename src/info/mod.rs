// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/oracle-secrets

//! The plain data holder shared between the codec and the application
//! layers (file loading, JSON persistence, UI).
//!
//! [`GameInfo`] is a mutable value type with public fields and no hidden
//! behavior; secrets project into it and are built from it, and the save
//! loader ([`save`]) populates it from battery images. Callers that need
//! change notification wrap mutation themselves; there is no event
//! machinery here.

pub mod error;
pub mod json;
pub mod save;

pub use error::{InfoError, Result};

use serde::{Deserialize, Serialize};

use crate::secret::{Animal, Game, Region, Rings};

/// Aggregated save state, the sole interchange type between the codec and
/// the application layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
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
    pub rings: Rings,
}

impl GameInfo {
    /// An empty holder for the given region.
    pub fn new(region: Region) -> GameInfo {
        GameInfo {
            region,
            game_id: 0,
            target_game: Game::Ages,
            hero_name: String::new(),
            child_name: String::new(),
            animal: Animal::None,
            behavior: 0,
            is_linked_game: false,
            is_hero_quest: false,
            was_given_free_ring: false,
            rings: Rings::NONE,
        }
    }

    /// The child's mood classification for the current behavior score.
    pub fn child_behavior(&self) -> ChildBehavior {
        ChildBehavior::from_score(self.behavior)
    }
}

/// Coarse classification of the child's mood, derived from the behavior
/// score. Thresholds follow the score bands the games feed back to the
/// player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChildBehavior {
    /// Score 0: the child has not been influenced yet.
    Infant,
    /// Scores 1–5.
    Shy,
    /// Scores 6–10.
    Curious,
    /// Scores 11 and up.
    Hyperactive,
}

impl ChildBehavior {
    pub fn from_score(score: u8) -> ChildBehavior {
        match score {
            0 => ChildBehavior::Infant,
            1..=5 => ChildBehavior::Shy,
            6..=10 => ChildBehavior::Curious,
            _ => ChildBehavior::Hyperactive,
        }
    }
}
