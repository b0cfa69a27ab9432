//! Chronos CLI - command-line client for the Chronos card-game backend
//!
//! # Commands
//!
//! - `chronos login <username> <password> [--save]` - Authenticate (optionally store the token)
//! - `chronos start <player> [--mode classic|duel|auto]` - Start a match
//! - `chronos state <game-id>` - Print the current game snapshot
//! - `chronos duel advance <game-id>` - Drive the attribute duel
//! - `chronos cards C01 C02` - Resolve card metadata
//! - `chronos friends list` - Friends, requests and chat
//!
//! # Configuration
//!
//! Reads `config.toml` from the platform config directory. `CHRONOS_API_BASE_URL`
//! and `CHRONOS_TOKEN` override it, and `--base-url` / `--token` override both.
//!
//! ```toml
//! base_url = "http://localhost:3053"
//! timeout_secs = 10
//! ```

mod auth;
mod cards;
mod duel;
mod friends;
mod game;
mod output;

use anyhow::{Context, Result};
use chronos_core::ChronosClient;
use chronos_core::config;
use clap::{Parser, Subcommand};

/// Chronos CLI - command-line client for the Chronos card-game backend
#[derive(Parser)]
#[command(name = "chronos")]
#[command(about = "Command-line client for the Chronos card-game backend")]
#[command(version)]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Bearer token for authenticated endpoints
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the backend is reachable
    Health,

    /// Create an account
    Register(auth::CredentialArgs),

    /// Log in and print the access token
    Login(auth::LoginArgs),

    /// Show the authenticated user
    Me,

    /// Start a new match
    Start(game::StartArgs),

    /// Permanently end a match
    End(game::GameIdArgs),

    /// Surrender a match
    Surrender(game::GameIdArgs),

    /// Print the current state of a match
    State(game::GameIdArgs),

    /// Print the result of a finished match
    Result(game::GameIdArgs),

    /// Play a card (classic mode)
    Play(game::PlayArgs),

    /// Skip the current turn (classic mode)
    Skip(game::SkipArgs),

    /// List active matches
    Active(game::ActiveArgs),

    /// Expire idle matches
    Expire,

    /// Show your win/loss totals
    Stats,

    /// Resolve metadata for one card
    Card(cards::CardArgs),

    /// Resolve metadata for several cards
    Cards(cards::CardsArgs),

    /// Print the full card catalog
    Catalog,

    /// Attribute-duel actions
    #[command(subcommand)]
    Duel(duel::DuelCommand),

    /// Friends, friend requests and chat
    #[command(subcommand)]
    Friends(friends::FriendsCommand),
}

fn main() -> Result<()> {
    // Initialize logging (stderr, so stdout stays machine-readable)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = config::load();
    if let Some(base_url) = cli.base_url {
        config.base_url = config::normalize_base_url(&base_url);
    }
    if let Some(token) = cli.token {
        config.token = Some(token);
    }
    tracing::debug!("Using backend at '{}'", config.base_url);

    let client = ChronosClient::from_config(&config).context("Failed to create HTTP client")?;

    // Requests are driven one at a time on the current thread
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create runtime")?;

    rt.block_on(run(cli.command, client))
}

async fn run(command: Commands, client: ChronosClient) -> Result<()> {
    match command {
        Commands::Health => game::health(&client).await,
        Commands::Register(args) => auth::register(&client, args).await,
        Commands::Login(args) => auth::login(&client, args).await,
        Commands::Me => auth::me(&client).await,
        Commands::Start(args) => game::start(&client, args).await,
        Commands::End(args) => game::end(&client, args).await,
        Commands::Surrender(args) => game::surrender(&client, args).await,
        Commands::State(args) => game::state(&client, args).await,
        Commands::Result(args) => game::result(&client, args).await,
        Commands::Play(args) => game::play(&client, args).await,
        Commands::Skip(args) => game::skip(&client, args).await,
        Commands::Active(args) => game::active(&client, args).await,
        Commands::Expire => game::expire(&client).await,
        Commands::Stats => game::stats(&client).await,
        Commands::Card(args) => cards::card(&client, args).await,
        Commands::Cards(args) => cards::cards(&client, args).await,
        Commands::Catalog => cards::catalog(&client).await,
        Commands::Duel(command) => duel::execute(&client, command).await,
        Commands::Friends(command) => friends::execute(&client, command).await,
    }
}
