//! Chronos client core
//!
//! The resilient layer between the Chronos card-game backend and a UI:
//!
//! - [`request`]: request executor (JSON headers, bearer credential, status
//!   and content-type handling) over a pluggable [`transport`]
//! - [`cards`]: card normalization, the shared card cache and the
//!   direct/batch/catalog resolver
//! - [`social`]: friend, friend-request and chat record normalization
//! - [`games`]: active-game summary normalization
//! - [`client`]: the per-endpoint facade composing all of the above
//!
//! Raw payloads vary between backend revisions; every ambiguous field is
//! resolved through an explicit, ordered candidate list ([`fields`]).

pub mod cards;
pub mod client;
pub mod config;
pub mod error;
pub mod fields;
pub mod games;
pub mod request;
pub mod social;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use cards::{CardCache, CardResolver};
pub use client::{ChronosClient, StartMode};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use request::{ApiRequest, RequestExecutor};
pub use transport::{HttpMethod, ReqwestTransport, Transport, TransportError};
