//! Active-game listing normalization.

use chronos_shared::{GameMode, GameSummary};
use serde_json::Value;

use crate::fields::{first_string, lookup};

pub const GAME_ID_CANDIDATES: [&str; 2] = ["gameId", "id"];

const UNKNOWN_PLAYER: &str = "unknown";

/// Summarize one raw entry of `GET /game/active`.
///
/// Entries without an id are still listed, identified by their compact JSON
/// text, so an operator can see what the server returned.
pub fn normalize_game_summary(raw: &Value) -> GameSummary {
    let id = first_string(raw, &GAME_ID_CANDIDATES).unwrap_or_else(|| raw.to_string());

    let player_a_id = lookup(raw, "players")
        .and_then(Value::as_array)
        .and_then(|players| players.first())
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| first_string(raw, &["playerAId"]))
        .unwrap_or_else(|| UNKNOWN_PLAYER.to_string());

    let mode = lookup(raw, "mode")
        .and_then(Value::as_str)
        .and_then(GameMode::parse)
        .unwrap_or_default();

    GameSummary {
        id,
        player_a_id,
        mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_from_state_like_entry() {
        let summary = normalize_game_summary(&json!({
            "gameId": "g1",
            "players": ["alice", "BOT"],
            "mode": "ATTRIBUTE_DUEL"
        }));
        assert_eq!(summary.id, "g1");
        assert_eq!(summary.player_a_id, "alice");
        assert_eq!(summary.mode, GameMode::AttributeDuel);
    }

    #[test]
    fn missing_players_is_unknown() {
        let summary = normalize_game_summary(&json!({"gameId": "g2", "players": []}));
        assert_eq!(summary.player_a_id, "unknown");
        assert_eq!(summary.mode, GameMode::Classic);

        let explicit = normalize_game_summary(&json!({"id": "g3", "playerAId": "bob"}));
        assert_eq!(explicit.id, "g3");
        assert_eq!(explicit.player_a_id, "bob");
    }

    #[test]
    fn entry_without_id_is_identified_by_its_json() {
        let summary = normalize_game_summary(&json!({"players": ["carol"]}));
        assert_eq!(summary.id, r#"{"players":["carol"]}"#);
    }
}
