use chronos_shared::{
    GameResult, GameState, GameStats, GameSummary, PlayCardRequest, SkipTurnRequest,
    StartGameRequest, StartGameResponse, SurrenderRequest,
};
use serde_json::Value;

use super::ChronosClient;
use crate::error::ApiResult;
use crate::fields::list_items;
use crate::games::normalize_game_summary;
use crate::request::endpoint_path;
use crate::transport::Transport;

/// Which start endpoint to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMode {
    /// `POST /game/start-classic`
    Classic,
    /// `POST /game/start-duel`
    Duel,
    /// `POST /game/start`, the server picks the mode
    Auto,
}

impl StartMode {
    pub fn path(self) -> &'static str {
        match self {
            StartMode::Classic => "/game/start-classic",
            StartMode::Duel => "/game/start-duel",
            StartMode::Auto => "/game/start",
        }
    }
}

impl<T: Transport> ChronosClient<T> {
    pub async fn start_game(&self, mode: StartMode, player_a_id: &str) -> ApiResult<StartGameResponse> {
        let request = self.post(mode.path()).json(&StartGameRequest {
            player_a_id: player_a_id.to_string(),
        })?;
        self.executor.request_as(request).await
    }

    pub async fn start_classic_game(&self, player_a_id: &str) -> ApiResult<StartGameResponse> {
        self.start_game(StartMode::Classic, player_a_id).await
    }

    pub async fn start_duel_game(&self, player_a_id: &str) -> ApiResult<StartGameResponse> {
        self.start_game(StartMode::Duel, player_a_id).await
    }

    /// Permanently end one game (`DELETE /game/end/:id`).
    pub async fn end_game(&self, game_id: &str) -> ApiResult<()> {
        let path = endpoint_path(&["game", "end", game_id], &[])?;
        self.executor.request(self.delete(path)).await?;
        Ok(())
    }

    pub async fn surrender(&self, game_id: &str) -> ApiResult<Option<Value>> {
        let request = self.post("/game/surrender").json(&SurrenderRequest {
            game_id: game_id.to_string(),
        })?;
        self.executor.request(request).await
    }

    pub async fn play_card(&self, game_id: &str, player: &str, card: &str) -> ApiResult<Option<Value>> {
        let request = self.post("/game/play-card").json(&PlayCardRequest {
            game_id: game_id.to_string(),
            player: player.to_string(),
            card: card.to_string(),
        })?;
        self.executor.request(request).await
    }

    pub async fn skip_turn(&self, game_id: &str, player: &str) -> ApiResult<Option<Value>> {
        let request = self.post("/game/skip-turn").json(&SkipTurnRequest {
            game_id: game_id.to_string(),
            player: player.to_string(),
        })?;
        self.executor.request(request).await
    }

    /// Current snapshot of a game, `None` if the server has no such game.
    pub async fn get_game_state(&self, game_id: &str) -> ApiResult<Option<GameState>> {
        let path = endpoint_path(&["game", "state", game_id], &[])?;
        self.executor.request_as(self.get(path)).await
    }

    pub async fn get_game_result(&self, game_id: &str) -> ApiResult<GameResult> {
        let path = endpoint_path(&["game", "result", game_id], &[])?;
        self.executor.request_as(self.get(path)).await
    }

    /// Untyped entries of `GET /game/active` (or `/game/active/mine`).
    pub async fn list_active_raw(&self, mine: bool) -> ApiResult<Vec<Value>> {
        let path = if mine { "/game/active/mine" } else { "/game/active" };
        let value = self.executor.request(self.get(path)).await?.unwrap_or(Value::Null);
        Ok(list_items(&value, "games").to_vec())
    }

    pub async fn list_active(&self, mine: bool) -> ApiResult<Vec<GameSummary>> {
        let raw = self.list_active_raw(mine).await?;
        Ok(raw.iter().map(normalize_game_summary).collect())
    }

    /// Ask the server to expire idle games. The server answers without a body.
    pub async fn expire_games(&self) -> ApiResult<()> {
        self.executor.request(self.post("/game/expire")).await?;
        Ok(())
    }

    pub async fn my_stats(&self) -> ApiResult<GameStats> {
        self.executor.request_as(self.get("/game/stats/me")).await
    }

    /// Health check (`GET /game/test`), returns the server's plain-text answer.
    pub async fn health(&self) -> ApiResult<String> {
        self.executor.request_text(self.get("/game/test")).await
    }
}
