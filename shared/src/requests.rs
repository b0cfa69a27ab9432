//! Request bodies sent to the backend.

use serde::{Deserialize, Serialize};

use crate::duel::DuelAttribute;

/// `POST /game/start-classic`, `/game/start-duel` and `/game/start`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameRequest {
    pub player_a_id: String,
}

/// `POST /game/surrender`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurrenderRequest {
    pub game_id: String,
}

/// `POST /game/play-card`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayCardRequest {
    pub game_id: String,
    pub player: String,
    /// Card code being played.
    pub card: String,
}

/// `POST /game/skip-turn`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipTurnRequest {
    pub game_id: String,
    pub player: String,
}

/// `POST /game/:id/duel/choose-card`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChooseCardRequest {
    pub player_id: String,
    pub card_code: String,
}

/// `POST /game/:id/duel/choose-attribute`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChooseAttributeRequest {
    pub player_id: String,
    pub attribute: DuelAttribute,
}

/// `POST /game/:id/duel/unchoose-card`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnchooseCardRequest {
    pub player_id: String,
}

/// `POST /friends/request` and `POST /friends/block`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendTargetRequest {
    pub target_id: String,
}

/// `POST /friends/chat/:friendId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendChatRequest {
    pub content: String,
}
