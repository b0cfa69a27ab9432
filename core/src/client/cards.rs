use chronos_shared::CanonicalCard;

use super::ChronosClient;
use crate::cards::{CardResolver, card_list, normalize_card};
use crate::error::ApiResult;
use crate::transport::Transport;

impl<T: Transport> ChronosClient<T> {
    fn resolver(&self) -> CardResolver<'_, T> {
        CardResolver::new(&self.executor, &self.cache).with_token(self.token())
    }

    /// Metadata for one card, cache-first with catalog fallback.
    pub async fn get_card_meta(&self, code: &str) -> ApiResult<CanonicalCard> {
        self.resolver().get_card_meta(code).await
    }

    /// Metadata for several cards in request order; unresolvable codes are
    /// omitted.
    pub async fn get_card_metas<S: AsRef<str>>(&self, codes: &[S]) -> Vec<CanonicalCard> {
        self.resolver().get_card_metas(codes).await
    }

    /// The full card catalog, normalized. Does not touch the cache.
    pub async fn get_card_catalog(&self) -> ApiResult<Vec<CanonicalCard>> {
        let raw = self.executor.request(self.get("/game/cards")).await?;
        Ok(raw
            .as_ref()
            .map(|value| card_list(value).iter().map(normalize_card).collect())
            .unwrap_or_default())
    }
}
