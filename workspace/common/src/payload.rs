//! Building the JSON body the quick-add form posts to `/api/{collection}`.

use crate::collection::{Collection, FieldKind};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Raw form input, keyed by field name.
pub type FormValues = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("{field} must be a number, got '{input}'")]
    NotANumber { field: String, input: String },
}

/// Builds the creation payload for `collection`.
///
/// Only the collection's declared fields are considered, in declaration order.
/// Unset or empty values are left out. Numeric fields are sent as JSON numbers.
pub fn build_payload(
    collection: Collection,
    values: &FormValues,
) -> Result<Map<String, Value>, PayloadError> {
    let mut payload = Map::new();

    for field in collection.quick_add_fields() {
        let Some(raw) = values.get(field.name).filter(|v| !v.is_empty()) else {
            continue;
        };

        let value = match field.kind {
            FieldKind::Text => Value::String(raw.clone()),
            FieldKind::Numeric => Value::Number(coerce_number(field.name, raw)?),
        };
        payload.insert(field.name.to_string(), value);
    }

    Ok(payload)
}

/// Parses form text as a JSON number. Integers stay integers.
pub fn coerce_number(field: &str, input: &str) -> Result<Number, PayloadError> {
    let trimmed = input.trim();

    if let Ok(int) = trimmed.parse::<i64>() {
        return Ok(Number::from(int));
    }

    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| {
            tracing::warn!(field, input, "quick-add value is not a finite number");
            PayloadError::NotANumber {
                field: field.to_string(),
                input: input.to_string(),
            }
        })
}
