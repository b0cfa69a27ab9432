//! Match lifecycle types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::duel::{DuelCenter, DuelStage};

/// Rule set a match is played with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    #[default]
    Classic,
    AttributeDuel,
}

impl GameMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Classic => "CLASSIC",
            GameMode::AttributeDuel => "ATTRIBUTE_DUEL",
        }
    }

    /// Parse a wire mode name, case-insensitively.
    pub fn parse(s: &str) -> Option<GameMode> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CLASSIC" => Some(GameMode::Classic),
            "ATTRIBUTE_DUEL" => Some(GameMode::AttributeDuel),
            _ => None,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the active-games listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: String,
    pub player_a_id: String,
    pub mode: GameMode,
}

/// Response to any of the start-game endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameResponse {
    pub game_id: String,
}

/// Snapshot of a match as returned by `GET /game/state/:id`.
///
/// Owned by the backend; the client never mutates it and re-fetches to
/// observe changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub game_id: String,
    /// Seat order, e.g. `["alice", "BOT"]`.
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub turn: i64,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub last_activity: i64,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub hp: HashMap<String, i64>,
    /// Card codes in each player's hand, in display order.
    #[serde(default)]
    pub hands: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub decks: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub mode: GameMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duel_stage: Option<DuelStage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duel_center: Option<DuelCenter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discard_piles: Option<HashMap<String, Vec<String>>>,
}

impl GameState {
    /// Hand of `player`, empty if the player is unknown.
    pub fn hand(&self, player: &str) -> &[String] {
        self.hands.get(player).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }
}

/// Final outcome of a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    #[serde(default)]
    pub winner: Option<String>,
    /// Human-readable turn log, oldest first.
    #[serde(default)]
    pub log: Vec<String>,
}

/// Per-user totals from `GET /game/stats/me`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    #[serde(default)]
    pub games_played: u64,
    #[serde(default)]
    pub games_won: u64,
    #[serde(default)]
    pub games_drawn: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_state_without_duel_fields() {
        let json = r#"{
            "gameId": "g1",
            "players": ["alice", "BOT"],
            "turn": 3,
            "lastActivity": 1700000000000,
            "winner": null,
            "hp": {"alice": 20, "BOT": 17},
            "hands": {"alice": ["C01", "C02"], "BOT": []},
            "decks": {"alice": ["C03"], "BOT": ["C04"]}
        }"#;
        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.players, vec!["alice", "BOT"]);
        assert_eq!(state.mode, GameMode::Classic);
        assert_eq!(state.hp["BOT"], 17);
        assert_eq!(state.hand("alice"), ["C01", "C02"]);
        assert!(state.hand("nobody").is_empty());
        assert_eq!(state.duel_stage, None);
        assert!(!state.is_finished());
    }

    #[test]
    fn duel_state_fields() {
        let json = r#"{
            "gameId": "g2",
            "players": ["alice", "BOT"],
            "mode": "ATTRIBUTE_DUEL",
            "duelStage": "PICK_ATTRIBUTE",
            "duelCenter": {"aCardCode": "C01", "bCardCode": "C09", "chooserId": "alice"},
            "discardPiles": {"alice": ["C05"]}
        }"#;
        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.mode, GameMode::AttributeDuel);
        assert_eq!(state.duel_stage, Some(DuelStage::PickAttribute));
        let center = state.duel_center.unwrap();
        assert_eq!(center.chooser_id.as_deref(), Some("alice"));
        assert_eq!(state.discard_piles.unwrap()["alice"], vec!["C05"]);
    }

    #[test]
    fn mode_parse_is_case_insensitive() {
        assert_eq!(GameMode::parse("attribute_duel"), Some(GameMode::AttributeDuel));
        assert_eq!(GameMode::parse("CLASSIC"), Some(GameMode::Classic));
        assert_eq!(GameMode::parse("poker"), None);
    }

    #[test]
    fn result_and_stats_defaults() {
        let result: GameResult = serde_json::from_str(r#"{"winner":"alice"}"#).unwrap();
        assert_eq!(result.winner.as_deref(), Some("alice"));
        assert!(result.log.is_empty());

        let stats: GameStats = serde_json::from_str(r#"{"gamesPlayed":4,"gamesWon":1}"#).unwrap();
        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.games_drawn, 0);
    }
}
