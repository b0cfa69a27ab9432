//! Friends and chat commands

use anyhow::{Context, Result};
use chronos_core::ChronosClient;
use clap::Subcommand;

use crate::output::{print_ack, print_json};

#[derive(Subcommand)]
pub enum FriendsCommand {
    /// List friends
    List,
    /// List pending friend requests
    Requests,
    /// Search users by name
    Search { query: String },
    /// Send a friend request
    Request { target_id: String },
    /// Accept a friend request
    Accept { request_id: String },
    /// Reject a friend request
    Reject { request_id: String },
    /// Remove a friend
    Remove { friend_id: String },
    /// Block a user
    Block { target_id: String },
    /// Show the conversation with a friend
    Chat { friend_id: String },
    /// Send a message to a friend
    Send { friend_id: String, content: String },
}

pub async fn execute(client: &ChronosClient, command: FriendsCommand) -> Result<()> {
    match command {
        FriendsCommand::List => {
            let friends = client.list_friends().await.context("Failed to list friends")?;
            print_json(&friends)
        }
        FriendsCommand::Requests => {
            let requests = client
                .list_friend_requests()
                .await
                .context("Failed to list friend requests")?;
            print_json(&requests)
        }
        FriendsCommand::Search { query } => {
            let users = client.search_users(&query).await.context("User search failed")?;
            print_json(&users)
        }
        FriendsCommand::Request { target_id } => print_ack(
            client
                .send_friend_request(&target_id)
                .await
                .context("Failed to send friend request")?,
        ),
        FriendsCommand::Accept { request_id } => print_ack(
            client
                .accept_friend_request(&request_id)
                .await
                .context("Failed to accept friend request")?,
        ),
        FriendsCommand::Reject { request_id } => print_ack(
            client
                .reject_friend_request(&request_id)
                .await
                .context("Failed to reject friend request")?,
        ),
        FriendsCommand::Remove { friend_id } => {
            client
                .remove_friend(&friend_id)
                .await
                .context("Failed to remove friend")?;
            tracing::info!("Removed friend {}", friend_id);
            Ok(())
        }
        FriendsCommand::Block { target_id } => print_ack(
            client
                .block_user(&target_id)
                .await
                .context("Failed to block user")?,
        ),
        FriendsCommand::Chat { friend_id } => {
            let messages = client.get_chat(&friend_id).await.context("Failed to load chat")?;
            print_json(&messages)
        }
        FriendsCommand::Send { friend_id, content } => {
            let message = client
                .send_chat(&friend_id, &content)
                .await
                .context("Failed to send message")?;
            print_json(&message)
        }
    }
}
