//! Request validation over raw JSON bodies.
//!
//! Bodies are inspected as `serde_json::Value` rather than deserialized
//! into typed structs so that a missing field, a wrong-typed field and
//! an out-of-range value each get their own rejection message.

use serde_json::Value;

use crate::store::{ProductDraft, ProductPatch};

use super::errors::ApiError;

/// Parse a path identifier. Only whole numbers are accepted; fractional
/// or non-numeric ids are rejected.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::InvalidId)
}

/// Field lookup where JSON null counts as absent.
fn field<'a>(body: &'a Value, name: &str) -> Option<&'a Value> {
    match body.get(name) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

/// Validate a creation body. Checks run in order: presence, then type,
/// then range, each with its own message.
pub fn validate_draft(body: &Value) -> Result<ProductDraft, ApiError> {
    let name = field(body, "name");
    let price = field(body, "price");
    let quantity = field(body, "quantity");

    // An empty name counts as missing, so it hits the presence check
    // before the type check.
    if matches!(name, Some(Value::String(s)) if s.is_empty()) {
        return Err(ApiError::MissingFields);
    }
    let (Some(name), Some(price), Some(quantity)) = (name, price, quantity) else {
        return Err(ApiError::MissingFields);
    };

    let (Some(name), Some(price), Some(quantity)) =
        (name.as_str(), price.as_f64(), quantity.as_i64())
    else {
        return Err(ApiError::InvalidTypes);
    };

    if price <= 0.0 || quantity < 0 {
        return Err(ApiError::OutOfRange);
    }

    Ok(ProductDraft {
        name: name.to_string(),
        price,
        quantity,
    })
}

/// Validate an update body. Only fields present in the body are
/// checked, each with its own rejection message; unknown fields
/// (including `id`) are ignored. A non-object body yields an empty
/// patch, which is rejected.
pub fn validate_patch(body: &Value) -> Result<ProductPatch, ApiError> {
    let mut patch = ProductPatch::default();

    // Unlike creation, an explicit null here is a present-but-invalid
    // field, not an absent one.
    if let Some(value) = body.get("name") {
        let name = value
            .as_str()
            .filter(|s| !s.is_empty())
            .ok_or(ApiError::InvalidName)?;
        patch.name = Some(name.to_string());
    }

    if let Some(value) = body.get("price") {
        let price = value
            .as_f64()
            .filter(|price| *price > 0.0)
            .ok_or(ApiError::InvalidPrice)?;
        patch.price = Some(price);
    }

    if let Some(value) = body.get("quantity") {
        let quantity = value
            .as_i64()
            .filter(|quantity| *quantity >= 0)
            .ok_or(ApiError::InvalidQuantity)?;
        patch.quantity = Some(quantity);
    }

    if patch.is_empty() {
        return Err(ApiError::EmptyPatch);
    }

    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_id_accepts_whole_numbers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-1").unwrap(), -1);
    }

    #[test]
    fn test_parse_id_rejects_non_numeric() {
        assert!(matches!(parse_id("abc"), Err(ApiError::InvalidId)));
        assert!(matches!(parse_id("1.5"), Err(ApiError::InvalidId)));
        assert!(matches!(parse_id(""), Err(ApiError::InvalidId)));
    }

    #[test]
    fn test_valid_draft() {
        let body = json!({"name": "Widget", "price": 10.5, "quantity": 3});
        let draft = validate_draft(&body).unwrap();
        assert_eq!(draft.name, "Widget");
        assert_eq!(draft.price, 10.5);
        assert_eq!(draft.quantity, 3);
    }

    #[test]
    fn test_draft_missing_field() {
        let body = json!({"name": "Widget", "price": 10.5});
        assert!(matches!(
            validate_draft(&body),
            Err(ApiError::MissingFields)
        ));
    }

    #[test]
    fn test_draft_null_field_counts_as_missing() {
        let body = json!({"name": "Widget", "price": null, "quantity": 3});
        assert!(matches!(
            validate_draft(&body),
            Err(ApiError::MissingFields)
        ));
    }

    #[test]
    fn test_draft_empty_name_counts_as_missing() {
        let body = json!({"name": "", "price": 10.5, "quantity": 3});
        assert!(matches!(
            validate_draft(&body),
            Err(ApiError::MissingFields)
        ));
    }

    #[test]
    fn test_draft_wrong_types() {
        let body = json!({"name": "Widget", "price": "10.5", "quantity": 3});
        assert!(matches!(validate_draft(&body), Err(ApiError::InvalidTypes)));

        let body = json!({"name": 7, "price": 10.5, "quantity": 3});
        assert!(matches!(validate_draft(&body), Err(ApiError::InvalidTypes)));

        // Fractional quantity is not an integer.
        let body = json!({"name": "Widget", "price": 10.5, "quantity": 2.5});
        assert!(matches!(validate_draft(&body), Err(ApiError::InvalidTypes)));
    }

    #[test]
    fn test_draft_out_of_range() {
        let body = json!({"name": "Bad", "price": 0, "quantity": 3});
        assert!(matches!(validate_draft(&body), Err(ApiError::OutOfRange)));

        let body = json!({"name": "Bad", "price": 10.5, "quantity": -1});
        assert!(matches!(validate_draft(&body), Err(ApiError::OutOfRange)));
    }

    #[test]
    fn test_patch_with_single_field() {
        let body = json!({"price": 5.0});
        let patch = validate_patch(&body).unwrap();
        assert_eq!(patch.price, Some(5.0));
        assert!(patch.name.is_none());
        assert!(patch.quantity.is_none());
    }

    #[test]
    fn test_patch_ignores_unknown_fields() {
        // An id in the body is never part of the patch.
        let body = json!({"id": 999, "price": 5.0});
        let patch = validate_patch(&body).unwrap();
        assert_eq!(patch.price, Some(5.0));

        let body = json!({"id": 999});
        assert!(matches!(validate_patch(&body), Err(ApiError::EmptyPatch)));
    }

    #[test]
    fn test_patch_field_errors() {
        assert!(matches!(
            validate_patch(&json!({"name": 42})),
            Err(ApiError::InvalidName)
        ));
        assert!(matches!(
            validate_patch(&json!({"name": null})),
            Err(ApiError::InvalidName)
        ));
        assert!(matches!(
            validate_patch(&json!({"name": ""})),
            Err(ApiError::InvalidName)
        ));
        assert!(matches!(
            validate_patch(&json!({"price": 0})),
            Err(ApiError::InvalidPrice)
        ));
        assert!(matches!(
            validate_patch(&json!({"price": "5"})),
            Err(ApiError::InvalidPrice)
        ));
        assert!(matches!(
            validate_patch(&json!({"quantity": -1})),
            Err(ApiError::InvalidQuantity)
        ));
        assert!(matches!(
            validate_patch(&json!({"quantity": 1.5})),
            Err(ApiError::InvalidQuantity)
        ));
    }

    #[test]
    fn test_empty_or_non_object_body_is_empty_patch() {
        assert!(matches!(
            validate_patch(&json!({})),
            Err(ApiError::EmptyPatch)
        ));
        assert!(matches!(
            validate_patch(&json!("text")),
            Err(ApiError::EmptyPatch)
        ));
    }
}
