//! Auth commands

use anyhow::{Context, Result};
use chronos_core::ChronosClient;
use chronos_core::config;
use clap::Args;

use crate::output::print_json;

#[derive(Args)]
pub struct CredentialArgs {
    pub username: String,
    pub password: String,
}

#[derive(Args)]
pub struct LoginArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// Store the access token in config.toml for later commands
    #[arg(long)]
    pub save: bool,
}

pub async fn register(client: &ChronosClient, args: CredentialArgs) -> Result<()> {
    let auth = client
        .register(&args.username, &args.password)
        .await
        .context("Registration failed")?;
    print_json(&auth)
}

pub async fn login(client: &ChronosClient, args: LoginArgs) -> Result<()> {
    let auth = client
        .login(&args.credentials.username, &args.credentials.password)
        .await
        .context("Login failed")?;

    if args.save {
        // Only the token is persisted; one-off URL overrides stay one-off.
        let path = config::store_token(&auth.access_token).context("Failed to save access token")?;
        tracing::info!("Saved access token for {} to {}", auth.user.username, path.display());
    }
    print_json(&auth)
}

pub async fn me(client: &ChronosClient) -> Result<()> {
    let user = client.me().await.context("Failed to fetch current user")?;
    print_json(&user)
}
