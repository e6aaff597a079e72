// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/oracle-secrets

//! JSON persistence for [`GameInfo`].
//!
//! Field names are stable; the ring mask serializes as a JSON integer.

use super::GameInfo;

/// Serialize a holder to a JSON string.
pub fn to_json(info: &GameInfo) -> serde_json::Result<String> {
    serde_json::to_string(info)
}

/// Serialize a holder to pretty-printed JSON.
pub fn to_json_pretty(info: &GameInfo) -> serde_json::Result<String> {
    serde_json::to_string_pretty(info)
}

/// Deserialize a holder from a JSON string.
pub fn from_json(json: &str) -> serde_json::Result<GameInfo> {
    serde_json::from_str(json)
}
