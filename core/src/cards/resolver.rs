//! Card metadata lookup with catalog fallback.
//!
//! Lookups are cache-first. A miss tries the preferred endpoint (per-code or
//! batched); if that attempt fails in any way the resolver fetches the full
//! catalog and scans it. Every resolved card is written back to the cache.

use chronos_shared::CanonicalCard;
use serde_json::Value;

use super::cache::CardCache;
use super::normalize::normalize_card;
use crate::error::{ApiError, ApiResult};
use crate::fields::list_items;
use crate::request::{ApiRequest, RequestExecutor, endpoint_path};
use crate::transport::Transport;

/// Outcome of a preferred lookup strategy.
#[derive(Debug)]
pub enum Lookup<T> {
    Resolved(T),
    /// The strategy failed; the catalog scan should run instead.
    NeedsFallback(ApiError),
}

/// Extract the card records from a list response.
///
/// Accepts a bare array or an object wrapping the array under `cards`.
pub fn card_list(value: &Value) -> &[Value] {
    list_items(value, "cards")
}

fn card_path(code: &str) -> ApiResult<String> {
    endpoint_path(&["game", "cards", code], &[])
}

fn batch_path(codes: &[String]) -> ApiResult<String> {
    let codes = codes.join(",");
    endpoint_path(&["game", "cards"], &[("codes", codes.as_str())])
}

const CATALOG_PATH: &str = "/game/cards";

/// Resolves card codes to [`CanonicalCard`]s through a [`CardCache`].
pub struct CardResolver<'a, T> {
    executor: &'a RequestExecutor<T>,
    cache: &'a CardCache,
    token: Option<&'a str>,
}

impl<'a, T: Transport> CardResolver<'a, T> {
    pub fn new(executor: &'a RequestExecutor<T>, cache: &'a CardCache) -> Self {
        Self {
            executor,
            cache,
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<&'a str>) -> Self {
        self.token = token;
        self
    }

    /// Resolve a single card.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when neither the direct endpoint nor the catalog
    /// knows `code`; the catalog request's own error if the catalog cannot be
    /// fetched.
    pub async fn get_card_meta(&self, code: &str) -> ApiResult<CanonicalCard> {
        if let Some(card) = self.cache.get(code) {
            return Ok(card);
        }

        let card = match self.fetch_direct(code).await {
            Lookup::Resolved(card) => card,
            Lookup::NeedsFallback(err) => {
                tracing::warn!("Direct lookup for card {} failed ({}), scanning catalog", code, err);
                self.scan_catalog_for(code).await?
            }
        };

        self.cache.insert(card.clone());
        Ok(card)
    }

    /// Resolve several cards, in request order.
    ///
    /// Codes that neither the batch endpoint nor the catalog resolve are
    /// omitted, so the result may be shorter than `codes`.
    pub async fn get_card_metas<S: AsRef<str>>(&self, codes: &[S]) -> Vec<CanonicalCard> {
        let missing = self.cache.missing(codes);
        if !missing.is_empty() {
            match self.fetch_batch(&missing).await {
                Lookup::Resolved(cards) => {
                    for card in cards {
                        self.cache.insert(card);
                    }
                }
                Lookup::NeedsFallback(err) => {
                    tracing::warn!(
                        "Batch lookup for {} cards failed ({}), scanning catalog",
                        missing.len(),
                        err
                    );
                    self.fill_from_catalog(&missing).await;
                }
            }
        }
        self.cache.collect(codes)
    }

    async fn fetch_direct(&self, code: &str) -> Lookup<CanonicalCard> {
        let path = match card_path(code) {
            Ok(path) => path,
            Err(err) => return Lookup::NeedsFallback(err),
        };
        let request = ApiRequest::get(path).bearer(self.token);
        match self.executor.request(request).await {
            Ok(Some(raw)) if raw.is_object() => {
                let mut card = normalize_card(&raw);
                if card.code.is_empty() {
                    card.code = code.to_string();
                }
                Lookup::Resolved(card)
            }
            Ok(_) => Lookup::NeedsFallback(ApiError::NotFound {
                code: code.to_string(),
            }),
            Err(err) => Lookup::NeedsFallback(err),
        }
    }

    async fn fetch_batch(&self, codes: &[String]) -> Lookup<Vec<CanonicalCard>> {
        let path = match batch_path(codes) {
            Ok(path) => path,
            Err(err) => return Lookup::NeedsFallback(err),
        };
        let request = ApiRequest::get(path).bearer(self.token);
        match self.executor.request(request).await {
            Ok(Some(raw)) if raw.is_array() || raw.get("cards").is_some() => Lookup::Resolved(
                card_list(&raw)
                    .iter()
                    .map(normalize_card)
                    .filter(|card| !card.code.is_empty())
                    .collect(),
            ),
            Ok(_) => Lookup::NeedsFallback(ApiError::NotFound {
                code: codes.join(","),
            }),
            Err(err) => Lookup::NeedsFallback(err),
        }
    }

    async fn fetch_catalog(&self) -> ApiResult<Vec<CanonicalCard>> {
        let request = ApiRequest::get(CATALOG_PATH).bearer(self.token);
        let raw = self.executor.request(request).await?.unwrap_or(Value::Null);
        Ok(card_list(&raw).iter().map(normalize_card).collect())
    }

    async fn scan_catalog_for(&self, code: &str) -> ApiResult<CanonicalCard> {
        self.fetch_catalog()
            .await?
            .into_iter()
            .find(|card| card.code == code)
            .ok_or_else(|| ApiError::NotFound {
                code: code.to_string(),
            })
    }

    async fn fill_from_catalog(&self, missing: &[String]) {
        let catalog = match self.fetch_catalog().await {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!("Card catalog fallback failed: {}", err);
                return;
            }
        };
        for card in catalog {
            if missing.iter().any(|code| *code == card.code) {
                self.cache.insert(card);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockTransport, json_response, text_response};
    use crate::transport::HttpMethod;
    use serde_json::json;

    fn setup() -> (MockTransport, RequestExecutor<MockTransport>, CardCache) {
        let transport = MockTransport::new();
        let executor = RequestExecutor::new(MockTransport::BASE_URL, transport.clone());
        (transport, executor, CardCache::new())
    }

    fn raw_card(code: &str, number: i64) -> Value {
        json!({"code": code, "name": format!("Card {}", code), "cardNumber": number})
    }

    #[tokio::test]
    async fn second_lookup_is_served_from_cache() {
        let (transport, executor, cache) = setup();
        transport.route(HttpMethod::Get, "/game/cards/X", json_response(200, raw_card("X", 3)));
        let resolver = CardResolver::new(&executor, &cache);

        let first = resolver.get_card_meta("X").await.unwrap();
        let second = resolver.get_card_meta("X").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.number, 3);
        assert_eq!(transport.total_requests(), 1);
    }

    #[tokio::test]
    async fn direct_failure_falls_back_to_catalog() {
        let (transport, executor, cache) = setup();
        transport.route(HttpMethod::Get, "/game/cards/X", text_response(500, "boom"));
        transport.route(
            HttpMethod::Get,
            "/game/cards",
            json_response(200, json!([raw_card("W", 1), raw_card("X", 2)])),
        );

        let card = CardResolver::new(&executor, &cache).get_card_meta("X").await.unwrap();
        assert_eq!(card.code, "X");
        assert_eq!(card.number, 2);
        assert!(cache.contains("X"));
        // Only the requested code is cached by a single lookup.
        assert!(!cache.contains("W"));
    }

    #[tokio::test]
    async fn direct_transport_failure_falls_back_to_catalog() {
        let (transport, executor, cache) = setup();
        transport.fail(HttpMethod::Get, "/game/cards/Y", "connection reset");
        transport.route(HttpMethod::Get, "/game/cards", json_response(200, json!([raw_card("Y", 2)])));

        let card = CardResolver::new(&executor, &cache).get_card_meta("Y").await.unwrap();
        assert_eq!(card.number, 2);
        assert_eq!(transport.count(HttpMethod::Get, "/game/cards"), 1);
    }

    #[tokio::test]
    async fn malformed_direct_body_falls_back_to_catalog() {
        let (transport, executor, cache) = setup();
        transport.route(
            HttpMethod::Get,
            "/game/cards/X",
            crate::test_support::raw_response(200, "application/json", "{bad"),
        );
        transport.route(HttpMethod::Get, "/game/cards", json_response(200, json!([raw_card("X", 1)])));

        let card = CardResolver::new(&executor, &cache).get_card_meta("X").await.unwrap();
        assert_eq!(card.number, 1);
        assert!(cache.contains("X"));
    }

    #[tokio::test]
    async fn null_or_non_object_direct_body_falls_back_to_catalog() {
        let (transport, executor, cache) = setup();
        transport.route(HttpMethod::Get, "/game/cards/N", json_response(200, Value::Null));
        transport.route(HttpMethod::Get, "/game/cards/S", json_response(200, json!("S")));
        transport.route(HttpMethod::Get, "/game/cards/T", text_response(200, "ok"));
        transport.route(
            HttpMethod::Get,
            "/game/cards",
            json_response(200, json!({"cards": [raw_card("N", 4), raw_card("S", 5), raw_card("T", 6)]})),
        );
        let resolver = CardResolver::new(&executor, &cache);

        assert_eq!(resolver.get_card_meta("N").await.unwrap().number, 4);
        assert_eq!(resolver.get_card_meta("S").await.unwrap().number, 5);
        assert_eq!(resolver.get_card_meta("T").await.unwrap().number, 6);
        assert_eq!(transport.count(HttpMethod::Get, "/game/cards"), 3);

        // Resolved codes are cached; repeat lookups stay local.
        let before = transport.total_requests();
        resolver.get_card_meta("N").await.unwrap();
        assert_eq!(transport.total_requests(), before);
    }

    #[tokio::test]
    async fn card_codes_are_encoded_as_one_segment() {
        let (transport, executor, cache) = setup();
        transport.route(HttpMethod::Get, "/game/cards/a%2Fb", json_response(200, raw_card("a/b", 8)));

        let card = CardResolver::new(&executor, &cache).get_card_meta("a/b").await.unwrap();
        assert_eq!(card.number, 8);
        assert_eq!(transport.total_requests(), 1);
    }

    #[tokio::test]
    async fn unknown_code_is_not_found() {
        let (transport, executor, cache) = setup();
        transport.route(HttpMethod::Get, "/game/cards", json_response(200, json!({"cards": []})));

        let err = CardResolver::new(&executor, &cache)
            .get_card_meta("Z")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound { ref code } if code == "Z"));
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn catalog_failure_surfaces_its_error() {
        let (transport, executor, cache) = setup();
        transport.route(HttpMethod::Get, "/game/cards", text_response(503, "down"));

        let err = CardResolver::new(&executor, &cache)
            .get_card_meta("Z")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.path(), Some("/game/cards"));
    }

    #[tokio::test]
    async fn direct_record_without_code_takes_requested_code() {
        let (transport, executor, cache) = setup();
        transport.route(
            HttpMethod::Get,
            "/game/cards/C07",
            json_response(200, json!({"name": "Nameless", "number": 7})),
        );

        let card = CardResolver::new(&executor, &cache).get_card_meta("C07").await.unwrap();
        assert_eq!(card.code, "C07");
        assert_eq!(cache.get("C07"), Some(card));
    }

    #[tokio::test]
    async fn batch_requests_only_missing_codes() {
        let (transport, executor, cache) = setup();
        cache.insert(normalize_card(&raw_card("A", 1)));
        transport.route(
            HttpMethod::Get,
            "/game/cards?codes=B%2CC",
            json_response(200, json!([raw_card("C", 3), raw_card("B", 2)])),
        );

        let cards = CardResolver::new(&executor, &cache)
            .get_card_metas(&["A", "B", "C"])
            .await;
        let codes: Vec<&str> = cards.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B", "C"]);
        assert_eq!(transport.count(HttpMethod::Get, "/game/cards?codes=B%2CC"), 1);
        assert_eq!(transport.total_requests(), 1);
    }

    #[tokio::test]
    async fn fully_cached_batch_makes_no_request() {
        let (transport, executor, cache) = setup();
        cache.insert(normalize_card(&raw_card("A", 1)));

        let cards = CardResolver::new(&executor, &cache).get_card_metas(&["A"]).await;
        assert_eq!(cards.len(), 1);
        assert_eq!(transport.total_requests(), 0);
    }

    #[tokio::test]
    async fn batch_failure_fills_missing_from_catalog_and_omits_unknown() {
        let (transport, executor, cache) = setup();
        transport.route(HttpMethod::Get, "/game/cards?codes=A%2CB", text_response(404, ""));
        transport.route(
            HttpMethod::Get,
            "/game/cards",
            json_response(200, json!([raw_card("A", 1), raw_card("Q", 9)])),
        );

        let cards = CardResolver::new(&executor, &cache)
            .get_card_metas(&["A", "B"])
            .await;
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].code, "A");
        // Catalog entries that were not requested stay out of the cache.
        assert!(!cache.contains("Q"));
    }

    #[tokio::test]
    async fn batch_and_catalog_failure_return_cached_only() {
        let (transport, executor, cache) = setup();
        cache.insert(normalize_card(&raw_card("A", 1)));
        transport.fail(HttpMethod::Get, "/game/cards?codes=B", "offline");
        transport.fail(HttpMethod::Get, "/game/cards", "offline");

        let cards = CardResolver::new(&executor, &cache)
            .get_card_metas(&["A", "B"])
            .await;
        assert_eq!(cards.iter().map(|c| c.code.as_str()).collect::<Vec<_>>(), vec!["A"]);
    }
}
