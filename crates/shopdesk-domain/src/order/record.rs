use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::OrderStatus;

pub const DEFAULT_CUSTOMER: &str = "Cliente";

/// An order exactly as `/pedidos` returns it.
///
/// Backend versions disagree on field names (`customer` vs `cliente`,
/// `createdAt` vs `fechaCreacion`), so every field is optional and both
/// spellings are kept until [`Order::from_record`] picks one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub cliente: Option<String>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "fechaCreacion", default)]
    pub fecha_creacion: Option<String>,
}

impl OrderRecord {
    /// Order total, with a missing or non-finite value counted as zero
    pub fn total_or_zero(&self) -> f64 {
        self.total.filter(|t| t.is_finite()).unwrap_or(0.0)
    }
}

/// Dashboard projection of an order with every field filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub total: f64,
    pub status: String,
    pub created_at: String,
}

impl Order {
    /// Normalize a raw record. `now` stands in for a missing creation date.
    pub fn from_record(record: &OrderRecord, now: DateTime<Utc>) -> Self {
        Self {
            id: normalize_id(record.id.as_ref()),
            customer: first_non_empty(&[&record.customer, &record.cliente])
                .unwrap_or_else(|| DEFAULT_CUSTOMER.to_string()),
            total: record.total_or_zero(),
            status: first_non_empty(&[&record.status])
                .unwrap_or_else(|| OrderStatus::default().label().to_string()),
            created_at: first_non_empty(&[&record.created_at, &record.fecha_creacion])
                .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }

    pub fn status_kind(&self) -> OrderStatus {
        OrderStatus::from_label(&self.status)
    }

    pub fn created_at_timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

fn first_non_empty(candidates: &[&Option<String>]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .find(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Zero, like an empty string, counts as no id.
fn normalize_id(id: Option<&serde_json::Value>) -> String {
    match id {
        Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
        Some(serde_json::Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        _ => "ORD-0".to_string(),
    }
}

/// Parse the date formats the backend and the canned data use: RFC 3339,
/// a naive `YYYY-MM-DDTHH:MM:SS[.fff]` (read as UTC), or a bare date.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_spanish_field_names_are_used_as_fallback() {
        let record: OrderRecord = serde_json::from_str(
            r#"{"id": 12, "cliente": "Ana López", "total": 85000, "fechaCreacion": "2024-01-15"}"#,
        )
        .unwrap();
        let order = Order::from_record(&record, now());

        assert_eq!(order.id, "12");
        assert_eq!(order.customer, "Ana López");
        assert_eq!(order.total, 85000.0);
        assert_eq!(order.status, "Pendiente");
        assert_eq!(order.created_at, "2024-01-15");
    }

    #[test]
    fn test_defaults_for_empty_record() {
        let order = Order::from_record(&OrderRecord::default(), now());

        assert_eq!(order.id, "ORD-0");
        assert_eq!(order.customer, DEFAULT_CUSTOMER);
        assert_eq!(order.total, 0.0);
        assert_eq!(order.status_kind(), OrderStatus::Pending);
        assert_eq!(order.created_at_timestamp(), Some(now()));
    }

    #[test]
    fn test_zero_and_empty_ids_are_placeholders() {
        for id in [serde_json::json!(0), serde_json::json!(""), serde_json::Value::Null] {
            let record = OrderRecord {
                id: Some(id),
                ..Default::default()
            };
            assert_eq!(Order::from_record(&record, now()).id, "ORD-0");
        }

        let record = OrderRecord {
            id: Some(serde_json::json!("ORD-0042")),
            ..Default::default()
        };
        assert_eq!(Order::from_record(&record, now()).id, "ORD-0042");
    }

    #[test]
    fn test_english_names_win_over_spanish() {
        let record = OrderRecord {
            customer: Some("María García".to_string()),
            cliente: Some("Otra".to_string()),
            created_at: Some("2024-01-15T10:30:00".to_string()),
            fecha_creacion: Some("2023-01-01".to_string()),
            ..Default::default()
        };
        let order = Order::from_record(&record, now());
        assert_eq!(order.customer, "María García");
        assert_eq!(order.created_at, "2024-01-15T10:30:00");
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-01-15"), Some(midnight));
        assert_eq!(
            parse_timestamp("2024-01-15T10:30:00"),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
        );
        assert_eq!(
            parse_timestamp("2024-01-15T10:30:00-05:00"),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 15, 30, 0).unwrap())
        );
        assert_eq!(parse_timestamp("yesterday"), None);
    }
}
