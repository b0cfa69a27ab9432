//! Attribute-duel sub-mode types.
//!
//! The duel progresses server-side through a linear stage machine:
//!
//! ```text
//! PICK_CARD -> PICK_ATTRIBUTE -> REVEAL -> RESOLVED
//! ```
//!
//! The only backward move is an explicit "unchoose", which clears one
//! player's selection while the duel is still in a picking stage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-owned progression of a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DuelStage {
    PickCard,
    PickAttribute,
    Reveal,
    Resolved,
}

impl DuelStage {
    /// The stage that follows this one, or `None` once the duel is resolved.
    pub fn next(self) -> Option<DuelStage> {
        match self {
            DuelStage::PickCard => Some(DuelStage::PickAttribute),
            DuelStage::PickAttribute => Some(DuelStage::Reveal),
            DuelStage::Reveal => Some(DuelStage::Resolved),
            DuelStage::Resolved => None,
        }
    }

    /// Whether a player may still retract a selection.
    pub fn allows_unchoose(self) -> bool {
        matches!(self, DuelStage::PickCard | DuelStage::PickAttribute)
    }

    pub fn accepts_card_choice(self) -> bool {
        self == DuelStage::PickCard
    }

    pub fn accepts_attribute_choice(self) -> bool {
        self == DuelStage::PickAttribute
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DuelStage::PickCard => "PICK_CARD",
            DuelStage::PickAttribute => "PICK_ATTRIBUTE",
            DuelStage::Reveal => "REVEAL",
            DuelStage::Resolved => "RESOLVED",
        }
    }
}

impl fmt::Display for DuelStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card attribute compared in a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuelAttribute {
    Magic,
    Might,
    Fire,
}

impl DuelAttribute {
    pub const ALL: [DuelAttribute; 3] = [DuelAttribute::Magic, DuelAttribute::Might, DuelAttribute::Fire];

    pub fn as_str(self) -> &'static str {
        match self {
            DuelAttribute::Magic => "magic",
            DuelAttribute::Might => "might",
            DuelAttribute::Fire => "fire",
        }
    }
}

impl fmt::Display for DuelAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown attribute name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAttribute(pub String);

impl fmt::Display for UnknownAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown duel attribute '{}' (expected magic, might or fire)", self.0)
    }
}

impl std::error::Error for UnknownAttribute {}

impl FromStr for DuelAttribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DuelAttribute::ALL
            .into_iter()
            .find(|attr| attr.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAttribute(s.to_string()))
    }
}

/// Snapshot of the two cards in the middle of the table.
///
/// Produced by the server and only read by the client for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuelCenter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a_card_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b_card_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chosen_attribute: Option<DuelAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revealed: Option<bool>,
    /// Player who picks the attribute this round.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chooser_id: Option<String>,
}
