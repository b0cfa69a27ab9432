//! Card metadata: normalization, caching and lookup.

mod cache;
mod normalize;
mod resolver;

pub use cache::CardCache;
pub use normalize::{
    CARD_NUMBER_CANDIDATES, CODE_CANDIDATES, IMAGE_URL_CANDIDATES, normalize_card,
    resolve_card_number,
};
pub use resolver::{CardResolver, Lookup, card_list};
