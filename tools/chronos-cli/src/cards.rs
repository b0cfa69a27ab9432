//! Card metadata commands

use anyhow::{Context, Result};
use chronos_core::ChronosClient;
use clap::Args;

use crate::output::print_json;

#[derive(Args)]
pub struct CardArgs {
    pub code: String,
}

#[derive(Args)]
pub struct CardsArgs {
    /// Card codes, space- or comma-separated
    #[arg(required = true, value_delimiter = ',')]
    pub codes: Vec<String>,
}

pub async fn card(client: &ChronosClient, args: CardArgs) -> Result<()> {
    let card = client
        .get_card_meta(&args.code)
        .await
        .with_context(|| format!("Failed to resolve card {}", args.code))?;
    print_json(&card)
}

pub async fn cards(client: &ChronosClient, args: CardsArgs) -> Result<()> {
    let cards = client.get_card_metas(args.codes.as_slice()).await;
    if cards.len() < args.codes.len() {
        tracing::warn!("Resolved {} of {} cards", cards.len(), args.codes.len());
    }
    print_json(&cards)
}

pub async fn catalog(client: &ChronosClient) -> Result<()> {
    let catalog = client.get_card_catalog().await.context("Failed to fetch card catalog")?;
    print_json(&catalog)
}
