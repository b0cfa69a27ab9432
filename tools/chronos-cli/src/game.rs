//! Match lifecycle commands

use anyhow::{Context, Result};
use chronos_core::{ChronosClient, StartMode};
use clap::{Args, ValueEnum};

use crate::output::{print_ack, print_json};

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Classic,
    Duel,
    Auto,
}

impl From<ModeArg> for StartMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Classic => StartMode::Classic,
            ModeArg::Duel => StartMode::Duel,
            ModeArg::Auto => StartMode::Auto,
        }
    }
}

#[derive(Args)]
pub struct StartArgs {
    /// Player A id
    pub player: String,

    #[arg(long, value_enum, default_value = "classic")]
    pub mode: ModeArg,
}

#[derive(Args)]
pub struct GameIdArgs {
    pub game_id: String,
}

#[derive(Args)]
pub struct PlayArgs {
    pub game_id: String,
    pub player: String,
    /// Card code to play
    pub card: String,
}

#[derive(Args)]
pub struct SkipArgs {
    pub game_id: String,
    pub player: String,
}

#[derive(Args)]
pub struct ActiveArgs {
    /// Only matches of the authenticated user
    #[arg(long)]
    pub mine: bool,

    /// Print the server's entries without normalizing them
    #[arg(long)]
    pub raw: bool,
}

pub async fn health(client: &ChronosClient) -> Result<()> {
    let answer = client.health().await.context("Health check failed")?;
    println!("{}", answer);
    Ok(())
}

pub async fn start(client: &ChronosClient, args: StartArgs) -> Result<()> {
    let started = client
        .start_game(args.mode.into(), &args.player)
        .await
        .context("Failed to start game")?;
    print_json(&started)
}

pub async fn end(client: &ChronosClient, args: GameIdArgs) -> Result<()> {
    client
        .end_game(&args.game_id)
        .await
        .with_context(|| format!("Failed to end game {}", args.game_id))?;
    tracing::info!("Ended game {}", args.game_id);
    Ok(())
}

pub async fn surrender(client: &ChronosClient, args: GameIdArgs) -> Result<()> {
    let response = client.surrender(&args.game_id).await.context("Surrender failed")?;
    print_ack(response)
}

pub async fn state(client: &ChronosClient, args: GameIdArgs) -> Result<()> {
    let state = client
        .get_game_state(&args.game_id)
        .await
        .context("Failed to fetch game state")?;
    match state {
        Some(state) => print_json(&state),
        None => anyhow::bail!("Game {} not found", args.game_id),
    }
}

pub async fn result(client: &ChronosClient, args: GameIdArgs) -> Result<()> {
    let result = client
        .get_game_result(&args.game_id)
        .await
        .context("Failed to fetch game result")?;
    print_json(&result)
}

pub async fn play(client: &ChronosClient, args: PlayArgs) -> Result<()> {
    let response = client
        .play_card(&args.game_id, &args.player, &args.card)
        .await
        .context("Failed to play card")?;
    print_ack(response)
}

pub async fn skip(client: &ChronosClient, args: SkipArgs) -> Result<()> {
    let response = client
        .skip_turn(&args.game_id, &args.player)
        .await
        .context("Failed to skip turn")?;
    print_ack(response)
}

pub async fn active(client: &ChronosClient, args: ActiveArgs) -> Result<()> {
    if args.raw {
        let games = client
            .list_active_raw(args.mine)
            .await
            .context("Failed to list active games")?;
        return print_json(&games);
    }
    let games = client
        .list_active(args.mine)
        .await
        .context("Failed to list active games")?;
    print_json(&games)
}

pub async fn expire(client: &ChronosClient) -> Result<()> {
    client.expire_games().await.context("Failed to expire games")?;
    tracing::info!("Expired idle games");
    Ok(())
}

pub async fn stats(client: &ChronosClient) -> Result<()> {
    let stats = client.my_stats().await.context("Failed to fetch stats")?;
    print_json(&stats)
}
