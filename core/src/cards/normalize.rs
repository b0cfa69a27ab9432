//! Raw card record normalization.

use chronos_shared::CanonicalCard;
use serde_json::Value;

use crate::fields::{first_number, first_string};

/// Where the printed card number may live, most preferred first.
pub const CARD_NUMBER_CANDIDATES: [&str; 8] = [
    "number",
    "cardNumber",
    "cornerNumber",
    "meta.number",
    "metadata.number",
    "no",
    "idx",
    "id",
];

pub const CODE_CANDIDATES: [&str; 2] = ["code", "cardCode"];

pub const IMAGE_URL_CANDIDATES: [&str; 3] = ["imageUrl", "image_url", "image"];

/// Resolve the card number: the first candidate holding a number or numeric
/// string wins, `0` if none does.
pub fn resolve_card_number(raw: &Value) -> i64 {
    first_number(raw, &CARD_NUMBER_CANDIDATES).unwrap_or(0)
}

/// Convert a raw card record into a [`CanonicalCard`].
///
/// Total: any JSON value normalizes, missing strings become empty and
/// missing numbers become `0`.
pub fn normalize_card(raw: &Value) -> CanonicalCard {
    let stat = |field: &str| first_number(raw, &[field]).unwrap_or(0);
    let text = |candidates: &[&str]| first_string(raw, candidates).unwrap_or_default();

    CanonicalCard {
        code: text(&CODE_CANDIDATES),
        name: text(&["name"]),
        description: text(&["description"]),
        image_url: text(&IMAGE_URL_CANDIDATES),
        damage: stat("damage"),
        heal: stat("heal"),
        fire: stat("fire"),
        might: stat("might"),
        magic: stat("magic"),
        number: resolve_card_number(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_record() {
        let raw = json!({
            "code": "C01",
            "name": "Ember Drake",
            "description": "Breathes fire.",
            "imageUrl": "/cards/c01.png",
            "damage": 4,
            "heal": 0,
            "fire": 7,
            "might": 3,
            "magic": 2,
            "number": 12
        });
        let card = normalize_card(&raw);
        assert_eq!(card.code, "C01");
        assert_eq!(card.name, "Ember Drake");
        assert_eq!(card.description, "Breathes fire.");
        assert_eq!(card.image_url, "/cards/c01.png");
        assert_eq!((card.damage, card.heal, card.fire, card.might, card.magic), (4, 0, 7, 3, 2));
        assert_eq!(card.number, 12);
    }

    #[test]
    fn absent_numbers_default_to_zero() {
        let card = normalize_card(&json!({"code": "C02", "name": "Blank", "description": null}));
        assert_eq!(card.description, "");
        assert_eq!(
            [card.damage, card.heal, card.fire, card.might, card.magic, card.number],
            [0; 6]
        );
    }

    #[test]
    fn number_prefers_earlier_candidates() {
        assert_eq!(resolve_card_number(&json!({"number": 5, "cardNumber": 9})), 5);
        assert_eq!(resolve_card_number(&json!({"number": null, "cardNumber": 9})), 9);
        assert_eq!(resolve_card_number(&json!({"meta": {"number": "3"}, "no": 8})), 3);
        assert_eq!(resolve_card_number(&json!({"metadata": {"number": 6}, "idx": 1})), 6);
    }

    #[test]
    fn non_numeric_id_is_not_a_number() {
        assert_eq!(resolve_card_number(&json!({"id": "C01"})), 0);
        assert_eq!(resolve_card_number(&json!({"id": "C01", "idx": 4})), 4);
        assert_eq!(resolve_card_number(&json!({"id": 21})), 21);
    }

    #[test]
    fn stats_accept_numeric_strings() {
        let card = normalize_card(&json!({"code": "C03", "damage": "5", "fire": "x"}));
        assert_eq!(card.damage, 5);
        assert_eq!(card.fire, 0);
    }

    #[test]
    fn legacy_image_field() {
        let card = normalize_card(&json!({"cardCode": "C04", "image": "c04.webp"}));
        assert_eq!(card.code, "C04");
        assert_eq!(card.image_url, "c04.webp");
    }

    #[test]
    fn normalization_is_pure() {
        let raw = json!({"code": "C05", "cornerNumber": "11", "magic": 2});
        assert_eq!(normalize_card(&raw), normalize_card(&raw));
    }

    #[test]
    fn non_object_input_normalizes_to_defaults() {
        assert_eq!(normalize_card(&json!("garbage")), CanonicalCard::default());
        assert_eq!(normalize_card(&Value::Null), CanonicalCard::default());
    }
}
