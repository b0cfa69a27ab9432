//! Shared wire types for the Chronos card-game client.
//!
//! These are the stable, client-side shapes the UI layer consumes. Raw server
//! payloads that drift between backend revisions are normalized into these
//! types by `chronos-core`; payloads with a stable shape deserialize directly.

pub mod auth;
pub mod cards;
pub mod duel;
pub mod game;
pub mod requests;
pub mod social;

pub use auth::{AuthResponse, Credentials, User};
pub use cards::CanonicalCard;
pub use duel::{DuelAttribute, DuelCenter, DuelStage};
pub use game::{GameMode, GameResult, GameState, GameStats, GameSummary, StartGameResponse};
pub use requests::*;
pub use social::{ChatMessage, FriendRequest, FriendSummary, friend_status};
