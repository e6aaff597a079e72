// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/oracle-secrets

//! # oracle-secrets
//!
//! Pure-Rust codec for the password-style "secrets" that carry save state
//! between the two Oracle games: the player writes down a short code and
//! types it into the other game, with no link cable or save-file exchange.
//!
//! Three secret kinds exist, all built on the same 6-bit symbol stream,
//! self-keyed XOR cipher, and additive checksum:
//!
//! - **Game secret** (20 symbols): game id, player names, companion
//!   animal, behavior score, and progression flags.
//! - **Ring secret** (15 symbols): the 64-ring inventory mask.
//! - **Memory secret** (5 symbols): one narrative memory exchange,
//!   decoded by trial reconstruction of its four candidate forms.
//!
//! The secret codec (`secret` module) is std-only. The `info` module holds
//! the plain [`GameInfo`] data holder plus its JSON and battery save-image
//! boundaries.
//!
//! # Quick start
//!
//! ```rust
//! use oracle_secrets::{GameSecret, Region};
//!
//! let secret = GameSecret::decode_text("H~2:@ ←2♦yq GB3●( 6♥?↑6", Region::UsPal).unwrap();
//! assert_eq!(secret.game_id, 14129);
//! assert_eq!(secret.hero_name, "Link");
//! assert_eq!(secret.to_text().unwrap(), "H~2:@ ←2♦yq GB3●( 6♥?↑6");
//! ```

pub mod info;
pub mod secret;

pub use info::{save, ChildBehavior, GameInfo, InfoError};
pub use secret::{
    text, Animal, Game, GameSecret, Kind, Memory, MemorySecret, Region, RingSecret, Rings, Secret,
    SecretError,
};
