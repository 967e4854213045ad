use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A backend record. Keys keep the order the backend sent them in.
pub type Record = Map<String, Value>;

/// Keys the list views never show.
pub const RESERVED_KEYS: [&str; 3] = ["_id", "created_at", "updated_at"];

/// Maximum number of columns a list view renders.
pub const MAX_COLUMNS: usize = 4;

/// Body of `GET /api/{collection}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<Record>,
}

impl ItemsResponse {
    /// Parses a list body, treating anything malformed as an empty list.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "list response did not match the expected shape");
            Self::default()
        })
    }
}

pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Columns for a list view: the first record's keys minus the reserved ones,
/// capped at [`MAX_COLUMNS`].
pub fn derive_columns(items: &[Record]) -> Vec<String> {
    items
        .first()
        .map(|first| {
            first
                .keys()
                .filter(|k| !is_reserved(k))
                .take(MAX_COLUMNS)
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

/// The cell texts of one row, one per column.
pub fn row_cells(record: &Record, columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .map(|column| record.get(column).map(display_value).unwrap_or_default())
        .collect()
}

/// Stable key for a rendered row.
pub fn row_key(record: &Record, index: usize) -> String {
    match record.get("_id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Null) | None => index.to_string(),
        Some(other) => display_value(other),
    }
}

/// Plain string rendering of a JSON value, without quotes or type-specific
/// formatting.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                // f64 Display drops a trailing ".0"
                n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(values) => values
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
