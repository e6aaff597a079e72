// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/oracle-secrets

//! Error types for the data-holder boundary: merge preconditions and
//! save-image parsing.

use std::fmt;

use crate::secret::Region;

/// Errors raised at the data-holder boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoError {
    /// A secret and holder from different regions were combined.
    RegionMismatch { expected: Region, actual: Region },
    /// A secret and holder with different game ids were combined.
    GameIdMismatch { expected: u16, actual: u16 },
    /// A save image ends before the slot record does.
    SaveTruncated { offset: usize, needed: usize },
    /// A slot record field holds a value the holder cannot represent.
    InvalidSaveField(&'static str),
}

impl fmt::Display for InfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegionMismatch { expected, actual } => {
                write!(f, "region mismatch: secret is {expected:?}, holder is {actual:?}")
            }
            Self::GameIdMismatch { expected, actual } => {
                write!(f, "game id mismatch: secret is {expected}, holder is {actual}")
            }
            Self::SaveTruncated { offset, needed } => {
                write!(f, "save image truncated: slot at {offset:#06x} needs {needed} bytes")
            }
            Self::InvalidSaveField(field) => write!(f, "invalid save field: {field}"),
        }
    }
}

impl std::error::Error for InfoError {}

pub type Result<T> = std::result::Result<T, InfoError>;
