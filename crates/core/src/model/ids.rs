use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Item ids starting with this prefix count towards the framework counter.
pub const FRAMEWORK_ITEM_PREFIX: &str = "framework-";

/// Identifier of a checkable roadmap item (trimmed, non-empty).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Creates a validated `ItemId`.
    ///
    /// # Errors
    ///
    /// Returns `IdError::EmptyItem` if the value is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdError::EmptyItem);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the id carries the `framework-` prefix.
    #[must_use]
    pub fn is_framework(&self) -> bool {
        self.0.starts_with(FRAMEWORK_ITEM_PREFIX)
    }
}

/// Identifier of a roadmap phase. Phases are numbered from 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PhaseId(u8);

impl PhaseId {
    /// Creates a new `PhaseId`.
    ///
    /// # Errors
    ///
    /// Returns `IdError::ZeroPhase` for `0`.
    pub fn new(id: u8) -> Result<Self, IdError> {
        if id == 0 {
            return Err(IdError::ZeroPhase);
        }
        Ok(Self(id))
    }

    /// Returns the underlying value
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Maps a single ASCII digit `1..=9` to a phase id.
    #[must_use]
    pub fn from_digit(ch: char) -> Option<Self> {
        ch.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(|d| Self::new(d).ok())
    }
}

// ─── Conversions ───────────────────────────────────────────────────────────────

impl TryFrom<String> for ItemId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl TryFrom<u8> for PhaseId {
    type Error = IdError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhaseId> for u8 {
    fn from(id: PhaseId) -> Self {
        id.0
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

impl fmt::Debug for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhaseId({})", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IdError {
    #[error("item id cannot be empty")]
    EmptyItem,
    #[error("phase ids start at 1")]
    ZeroPhase,
    #[error("failed to parse phase id from {0:?}")]
    InvalidPhase(String),
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

impl FromStr for ItemId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for PhaseId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| IdError::InvalidPhase(s.to_string()))?;
        Self::new(value)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
