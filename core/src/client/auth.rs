use chronos_shared::{AuthResponse, Credentials, User};

use super::ChronosClient;
use crate::error::ApiResult;
use crate::transport::Transport;

impl<T: Transport> ChronosClient<T> {
    /// `POST /auth/register`. The returned token is not stored.
    pub async fn register(&self, username: &str, password: &str) -> ApiResult<AuthResponse> {
        let request = self.post("/auth/register").json(&credentials(username, password))?;
        self.executor.request_as(request).await
    }

    /// `POST /auth/login`. The returned token is not stored; pass it to
    /// [`ChronosClient::set_token`] to authenticate later calls.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<AuthResponse> {
        let request = self.post("/auth/login").json(&credentials(username, password))?;
        self.executor.request_as(request).await
    }

    /// `GET /auth/me` with the session token.
    pub async fn me(&self) -> ApiResult<User> {
        self.executor.request_as(self.get("/auth/me")).await
    }
}

fn credentials(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}
