// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/oracle-secrets

//! Data-holder boundary: secrets project into `GameInfo` and come back,
//! merge preconditions hold, and the JSON and save-image forms round-trip.

use oracle_secrets::info::json;
use oracle_secrets::{
    save, Animal, Game, GameInfo, GameSecret, InfoError, Region, RingSecret, Rings,
};

const GAME_TEXT: &str = "H~2:@ ←2♦yq GB3●( 6♥?↑6";
const RING_TEXT: &str = "L~2:N @bB↑& hmRh=";

fn decoded_holder() -> GameInfo {
    let mut info = GameInfo::new(Region::UsPal);
    GameSecret::decode_text(GAME_TEXT, Region::UsPal)
        .unwrap()
        .apply_to(&mut info)
        .unwrap();
    info
}

#[test]
fn game_secret_populates_holder() {
    let info = decoded_holder();
    assert_eq!(info.game_id, 14129);
    assert_eq!(info.hero_name, "Link");
    assert_eq!(info.child_name, "Pip");
    assert_eq!(info.animal, Animal::Dimitri);
    assert_eq!(info.target_game, Game::Ages);
    assert!(info.is_linked_game && info.was_given_free_ring);
    assert!(!info.is_hero_quest);
}

#[test]
fn holder_rebuilds_the_same_secret() {
    let info = decoded_holder();
    let rebuilt = GameSecret::from_info(&info);
    assert_eq!(rebuilt.to_text().unwrap(), GAME_TEXT);
}

#[test]
fn ring_secret_merges_after_game_secret() {
    let mut info = decoded_holder();
    let ring = RingSecret::decode_text(RING_TEXT, Region::UsPal).unwrap();
    ring.apply_to(&mut info, false).unwrap();
    assert_eq!(
        info.rings,
        Rings::POWER_L1 | Rings::DOUBLE_EDGE | Rings::PROTECTION
    );

    // Merging keeps rings obtained since the last transfer.
    info.rings |= Rings::FRIENDSHIP;
    ring.apply_to(&mut info, true).unwrap();
    assert!(info.rings.contains(Rings::FRIENDSHIP));
    assert_eq!(info.rings.count(), 4);
}

#[test]
fn ring_secret_refuses_foreign_holder() {
    let ring = RingSecret::decode_text(RING_TEXT, Region::UsPal).unwrap();

    let mut info = GameInfo::new(Region::Japan);
    info.game_id = 14129;
    assert!(matches!(
        ring.apply_to(&mut info, true),
        Err(InfoError::RegionMismatch { .. })
    ));

    let mut info = GameInfo::new(Region::UsPal);
    info.game_id = 4444;
    assert!(matches!(
        ring.apply_to(&mut info, true),
        Err(InfoError::GameIdMismatch { .. })
    ));
    assert_eq!(info.rings, Rings::NONE, "guard must fire before mutation");
}

#[test]
fn game_secret_refuses_foreign_region() {
    let secret = GameSecret::decode_text(GAME_TEXT, Region::UsPal).unwrap();
    let mut info = GameInfo::new(Region::Japan);
    assert!(matches!(
        secret.apply_to(&mut info),
        Err(InfoError::RegionMismatch { .. })
    ));
    assert_eq!(info.game_id, 0);
}

#[test]
fn holder_json_roundtrip() {
    let mut info = decoded_holder();
    info.rings = Rings::POWER_L1 | Rings::PROTECTION;
    let encoded = json::to_json(&info).unwrap();
    assert_eq!(json::from_json(&encoded).unwrap(), info);
}

#[test]
fn save_image_roundtrip_through_secrets() {
    // Full pipeline: decode secrets -> holder -> battery image -> holder
    // -> re-encode secrets.
    let mut info = decoded_holder();
    RingSecret::decode_text(RING_TEXT, Region::UsPal)
        .unwrap()
        .apply_to(&mut info, false)
        .unwrap();

    let mut image = vec![0u8; 0x2000];
    save::write_slot(&mut image, save::SLOT_OFFSETS[0], &info).unwrap();
    let loaded = save::read_slot(&image, save::SLOT_OFFSETS[0])
        .unwrap()
        .expect("slot should hold a save");
    assert_eq!(loaded, info);

    assert_eq!(GameSecret::from_info(&loaded).to_text().unwrap(), GAME_TEXT);
    assert_eq!(RingSecret::from_info(&loaded).to_text().unwrap(), RING_TEXT);
}

#[test]
fn memory_secret_absorbs_holder_identity() {
    use oracle_secrets::{Memory, MemorySecret};
    let info = decoded_holder();
    let secret = MemorySecret::from_info(&info, Memory::ClockShopKingZora, true);
    assert_eq!(secret.to_text().unwrap(), "6●sW↑");
}

#[test]
fn empty_slots_read_as_absent() {
    let image = vec![0u8; 0x2000];
    let slots = save::read_slots(&image).unwrap();
    assert_eq!(slots, [None, None, None]);
}
