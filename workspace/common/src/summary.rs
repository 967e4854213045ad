use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use rusty_money::{Money, iso};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Placeholder shown for a count the backend did not report.
pub const MISSING_COUNT: &str = "—";

/// Aggregate counts and totals from `GET /api/summary`.
///
/// Each field is decoded on its own; a value that is not a usable number
/// becomes `None` without affecting the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default, deserialize_with = "lenient_count")]
    pub trusts: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub beneficiaries: Option<u64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_asset_value: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub ngos: Option<u64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_donation: Option<Decimal>,
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(count_from_value))
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(amount_from_value))
}

fn count_from_value(value: &Value) -> Option<u64> {
    let count = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    if count.is_none() {
        tracing::debug!(%value, "ignoring unusable summary count");
    }
    count
}

fn amount_from_value(value: &Value) -> Option<Decimal> {
    let amount = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(Decimal::from(i)),
            None => n.as_f64().and_then(Decimal::from_f64),
        },
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    };
    if amount.is_none() {
        tracing::debug!(%value, "ignoring unusable summary total");
    }
    amount
}

/// Count shown on a stat card.
pub fn display_count(count: Option<u64>) -> String {
    count
        .map(|c| c.to_string())
        .unwrap_or_else(|| MISSING_COUNT.to_string())
}

/// USD amount shown on a stat card, always with cents. Missing totals render as zero.
pub fn display_currency(amount: Option<Decimal>) -> String {
    let mut amount = amount.unwrap_or(Decimal::ZERO);
    amount.rescale(iso::USD.exponent);
    Money::from_decimal(amount, iso::USD).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_fields_are_optional() {
        let summary: Summary = serde_json::from_value(json!({
            "trusts": 3,
            "beneficiaries": 7,
            "total_asset_value": 1234.5
        }))
        .unwrap();

        assert_eq!(summary.trusts, Some(3));
        assert_eq!(summary.ngos, None);
        assert_eq!(summary.total_asset_value, Some(Decimal::new(12345, 1)));
        assert_eq!(summary.total_donation, None);
    }

    #[test]
    fn test_missing_donation_total_shows_zero_currency() {
        let summary: Summary = serde_json::from_value(json!({"trusts": 1})).unwrap();
        assert_eq!(display_currency(summary.total_donation), "$0.00");
    }

    #[test]
    fn test_currency_uses_grouping_and_cents() {
        assert_eq!(display_currency(Some(Decimal::new(12345, 1))), "$1,234.50");
        assert_eq!(display_currency(Some(Decimal::new(2_500_000, 0))), "$2,500,000.00");
        assert_eq!(display_currency(Some(Decimal::new(19999, 3))), "$20.00");
    }

    #[test]
    fn test_missing_count_shows_placeholder() {
        assert_eq!(display_count(None), "—");
        assert_eq!(display_count(Some(0)), "0");
        assert_eq!(display_count(Some(42)), "42");
    }

    #[test]
    fn test_null_fields_are_missing() {
        let summary: Summary =
            serde_json::from_value(json!({"trusts": null, "total_donation": null})).unwrap();
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn test_whole_float_counts_are_accepted() {
        let summary: Summary =
            serde_json::from_value(json!({"trusts": 3.0, "beneficiaries": 2, "total_donation": 50}))
                .unwrap();
        assert_eq!(summary.trusts, Some(3));
        assert_eq!(summary.beneficiaries, Some(2));
        assert_eq!(summary.total_donation, Some(Decimal::from(50)));
    }

    #[test]
    fn test_one_bad_field_leaves_the_others() {
        let summary: Summary = serde_json::from_value(json!({
            "trusts": "many",
            "beneficiaries": 2.5,
            "ngos": 4,
            "total_asset_value": 1e30,
            "total_donation": 75.25
        }))
        .unwrap();

        assert_eq!(summary.trusts, None);
        assert_eq!(summary.beneficiaries, None);
        assert_eq!(summary.ngos, Some(4));
        assert_eq!(summary.total_asset_value, None);
        assert_eq!(summary.total_donation, Some(Decimal::new(7525, 2)));
        assert_eq!(display_currency(summary.total_asset_value), "$0.00");
    }
}
