//! Attribute-duel transitions.
//!
//! The server is authoritative for stage validity: these calls perform no
//! local precondition check. After [`ChronosClient::advance_duel`] the caller
//! re-fetches the game state to observe the new stage.

use chronos_shared::{ChooseAttributeRequest, ChooseCardRequest, DuelAttribute, UnchooseCardRequest};
use serde_json::Value;

use super::ChronosClient;
use crate::error::ApiResult;
use crate::request::endpoint_path;
use crate::transport::Transport;

fn duel_path(game_id: &str, action: &str) -> ApiResult<String> {
    endpoint_path(&["game", game_id, "duel", action], &[])
}

impl<T: Transport> ChronosClient<T> {
    /// Pick a card from hand (stage `PICK_CARD`).
    pub async fn choose_card_for_duel(
        &self,
        game_id: &str,
        player_id: &str,
        card_code: &str,
    ) -> ApiResult<Option<Value>> {
        let request = self.post(duel_path(game_id, "choose-card")?).json(&ChooseCardRequest {
            player_id: player_id.to_string(),
            card_code: card_code.to_string(),
        })?;
        self.executor.request(request).await
    }

    /// Pick the attribute compared this round (stage `PICK_ATTRIBUTE`).
    pub async fn choose_attribute_for_duel(
        &self,
        game_id: &str,
        player_id: &str,
        attribute: DuelAttribute,
    ) -> ApiResult<Option<Value>> {
        let request = self
            .post(duel_path(game_id, "choose-attribute")?)
            .json(&ChooseAttributeRequest {
                player_id: player_id.to_string(),
                attribute,
            })?;
        self.executor.request(request).await
    }

    /// Retract this player's card/attribute choice. Only meaningful before `REVEAL`.
    pub async fn unchoose_card_for_duel(&self, game_id: &str, player_id: &str) -> ApiResult<Option<Value>> {
        let request = self.post(duel_path(game_id, "unchoose-card")?).json(&UnchooseCardRequest {
            player_id: player_id.to_string(),
        })?;
        self.executor.request(request).await
    }

    /// Ask the server to move the duel forward once both choices are made.
    /// The response is opaque.
    pub async fn advance_duel(&self, game_id: &str) -> ApiResult<Option<Value>> {
        self.executor.request(self.post(duel_path(game_id, "advance")?)).await
    }
}
