//! Attribute-duel commands

use anyhow::{Context, Result};
use chronos_core::ChronosClient;
use chronos_shared::DuelAttribute;
use clap::Subcommand;

use crate::output::print_json;

#[derive(Subcommand)]
pub enum DuelCommand {
    /// Pick a card from hand
    ChooseCard {
        game_id: String,
        player_id: String,
        card_code: String,
    },
    /// Pick the compared attribute (magic, might or fire)
    ChooseAttribute {
        game_id: String,
        player_id: String,
        attribute: DuelAttribute,
    },
    /// Retract a card/attribute choice
    Unchoose { game_id: String, player_id: String },
    /// Move the duel forward, then print the new state
    Advance { game_id: String },
}

pub async fn execute(client: &ChronosClient, command: DuelCommand) -> Result<()> {
    let game_id = match command {
        DuelCommand::ChooseCard {
            game_id,
            player_id,
            card_code,
        } => {
            client
                .choose_card_for_duel(&game_id, &player_id, &card_code)
                .await
                .context("Failed to choose card")?;
            game_id
        }
        DuelCommand::ChooseAttribute {
            game_id,
            player_id,
            attribute,
        } => {
            client
                .choose_attribute_for_duel(&game_id, &player_id, attribute)
                .await
                .context("Failed to choose attribute")?;
            game_id
        }
        DuelCommand::Unchoose { game_id, player_id } => {
            client
                .unchoose_card_for_duel(&game_id, &player_id)
                .await
                .context("Failed to unchoose card")?;
            game_id
        }
        DuelCommand::Advance { game_id } => {
            client.advance_duel(&game_id).await.context("Failed to advance duel")?;
            game_id
        }
    };

    // The server owns the stage machine; re-fetch to observe the outcome.
    let state = client
        .get_game_state(&game_id)
        .await
        .context("Failed to fetch game state")?;
    if let Some(stage) = state.as_ref().and_then(|s| s.duel_stage) {
        tracing::info!("Duel {} is now at {}", game_id, stage);
    }
    print_json(&state)
}
