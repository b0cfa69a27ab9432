//! Authentication types.

use serde::{Deserialize, Serialize};

/// Username/password pair sent to `/auth/register` and `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Authenticated user information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier, also used as the player id in games.
    pub id: String,
    /// Display name chosen by the user.
    pub username: String,
    /// Account role (e.g. "USER", "ADMIN"), if the backend reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Successful authentication response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Bearer token for the Authorization header.
    pub access_token: String,
    /// Authenticated user profile.
    pub user: User,
}
