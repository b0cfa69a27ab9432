//! Client facade
//!
//! One method per backend operation, grouped by concern:
//!
//! - `auth`: register, login, current user
//! - `game`: match lifecycle, classic actions, listings, stats, health
//! - `duel`: attribute-duel transitions
//! - `cards`: cached card metadata
//! - `friends`: friends, requests and chat
//!
//! Methods only shape paths and bodies; all business validation happens
//! server-side. The card cache is the only local state they touch.

mod auth;
mod cards;
mod duel;
mod friends;
mod game;


use std::time::Duration;

use crate::cards::CardCache;
use crate::config::ClientConfig;
use crate::request::{ApiRequest, RequestExecutor};
use crate::transport::{ReqwestTransport, Transport, TransportError};

pub use game::StartMode;

/// Gateway to the Chronos backend.
///
/// Owns the request executor, the card cache and an optional session token.
/// The token, when set, is attached to every request as a bearer credential.
#[derive(Debug, Clone)]
pub struct ChronosClient<T = ReqwestTransport> {
    executor: RequestExecutor<T>,
    cache: CardCache,
    token: Option<String>,
}

impl ChronosClient<ReqwestTransport> {
    /// Build a client over HTTP from configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(config.timeout_secs.map(Duration::from_secs))?;
        let mut client = Self::new(RequestExecutor::new(config.base_url.clone(), transport));
        client.token = config.token.clone();
        Ok(client)
    }
}

impl<T: Transport> ChronosClient<T> {
    /// Client with a fresh, empty card cache.
    pub fn new(executor: RequestExecutor<T>) -> Self {
        Self::with_cache(executor, CardCache::new())
    }

    /// Client sharing an existing card cache.
    pub fn with_cache(executor: RequestExecutor<T>, cache: CardCache) -> Self {
        Self {
            executor,
            cache,
            token: None,
        }
    }

    pub fn executor(&self) -> &RequestExecutor<T> {
        &self.executor
    }

    pub fn cache(&self) -> &CardCache {
        &self.cache
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn get(&self, path: impl Into<String>) -> ApiRequest {
        ApiRequest::get(path).bearer(self.token())
    }

    fn post(&self, path: impl Into<String>) -> ApiRequest {
        ApiRequest::post(path).bearer(self.token())
    }

    fn delete(&self, path: impl Into<String>) -> ApiRequest {
        ApiRequest::delete(path).bearer(self.token())
    }
}
