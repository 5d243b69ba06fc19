//! Invoice record handed over by the billing subsystem.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Finalized invoice data, as produced by an external billing system.
///
/// Timestamps are Unix seconds, the total is in minor currency units
/// (cents). The record is trusted as-is; the markup builder performs no
/// validation on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Invoice number, also used as the document name.
    pub number: String,

    /// Start of the billing period (Unix seconds).
    pub period_start: i64,

    /// End of the billing period (Unix seconds).
    pub period_end: i64,

    /// Payment due date (Unix seconds), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,

    /// Next scheduled payment attempt (Unix seconds), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_payment_attempt: Option<i64>,

    /// Amount due in minor currency units.
    pub total: i64,

    /// ISO 4217 currency code, any case.
    pub currency: String,
}

impl InvoiceRecord {
    /// Billing period start as a UTC instant.
    pub fn period_start_utc(&self) -> DateTime<Utc> {
        from_unix(self.period_start)
    }

    /// Billing period end as a UTC instant.
    pub fn period_end_utc(&self) -> DateTime<Utc> {
        from_unix(self.period_end)
    }

    /// Payment due date as a UTC instant, if set.
    pub fn due_date_utc(&self) -> Option<DateTime<Utc>> {
        self.due_date.map(from_unix)
    }

    /// Next payment attempt as a UTC instant, if set.
    pub fn next_payment_attempt_utc(&self) -> Option<DateTime<Utc>> {
        self.next_payment_attempt.map(from_unix)
    }
}

/// Convert Unix seconds to UTC. Timestamps beyond the representable
/// range clamp to the range ends instead of failing; the record is
/// trusted, so a nonsensical timestamp yields nonsensical markup rather
/// than an error.
fn from_unix(timestamp: i64) -> DateTime<Utc> {
    match Utc.timestamp_opt(timestamp, 0).single() {
        Some(instant) => instant,
        None if timestamp < 0 => DateTime::<Utc>::MIN_UTC,
        None => DateTime::<Utc>::MAX_UTC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> InvoiceRecord {
        InvoiceRecord {
            number: "INV-2024-001".to_string(),
            period_start: 1704067200, // 2024-01-01T00:00:00Z
            period_end: 1706745600,   // 2024-02-01T00:00:00Z
            due_date: Some(1705276800), // 2024-01-15T00:00:00Z
            next_payment_attempt: None,
            total: 12345,
            currency: "usd".to_string(),
        }
    }

    #[test]
    fn test_unix_conversion() {
        let record = record();
        assert_eq!(
            record.period_start_utc(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            record.due_date_utc(),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(record.next_payment_attempt_utc(), None);
    }

    #[test]
    fn test_out_of_range_timestamps_clamp() {
        assert_eq!(from_unix(i64::MAX), DateTime::<Utc>::MAX_UTC);
        assert_eq!(from_unix(i64::MIN), DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn test_round_trips_through_json() {
        let record = record();
        let json = serde_json::to_string(&record).unwrap();
        // The unset attempt is omitted rather than serialized as null.
        assert!(!json.contains("next_payment_attempt"));
        let back: InvoiceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
