//! Discriminated-recurrence decoder.
//!
//! A schedule document is one JSON object whose top-level keys are currency
//! codes, plus the reserved [`LINKS_KEY`] entry. A single untyped pass can
//! read each entry's `frequency` tag but cannot, in the same pass, decode
//! the variant-specific fields into the correct concrete shape: the shape is
//! unknown until the tag has been consumed. The decoder therefore works in
//! two phases per entry.
//!
//! # Decode Strategy
//!
//! 1. Parse the document into a map from top-level key to raw sub-document.
//! 2. For every key except [`LINKS_KEY`]:
//!    - *Sniff*: decode a minimal shape exposing only `enabled`,
//!      `threshold`, and the recurrence tag. Other recurrence fields are
//!      left untouched in the raw sub-document.
//!    - *Re-decode per tag*: decode the entry's recurrence sub-document a
//!      second time, into the concrete variant the tag selected. The tag
//!      gates which variant decoder runs; fields belonging to the other
//!      variants are ignored rather than silently folded in.
//! 3. The [`LINKS_KEY`] value decodes into the link map and never produces
//!    a currency entry.
//!
//! Any phase's failure aborts the whole decode; no partial schedule is
//! returned. The decode is a pure function over the byte buffer: no I/O, no
//! shared state, and identical bytes always produce value-equal results.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, trace};

use crate::{
    error::{Result, ScheduleError},
    schedule::models::{
        CurrencySchedule, LINKS_KEY, MonthlyRecurrence, PayoutSchedule, Recurrence,
        ScheduleFrequency, WeeklyRecurrence,
    },
};

/// Minimal entry shape for the sniff phase.
///
/// `enabled` and `threshold` are optional on the wire; the recurrence object
/// is required because its tag drives the second phase.
#[derive(Debug, Deserialize)]
struct SniffEntry {
    #[serde(default)]
    enabled: bool,
    #[serde(default)]
    threshold: u64,
    recurrence: Option<SniffRecurrence>,
}

/// Exposes only the discriminator; variant fields are ignored here.
#[derive(Debug, Deserialize)]
struct SniffRecurrence {
    frequency: String,
}

/// Decodes a payout schedule document into a [`PayoutSchedule`].
///
/// This is the function behind [`PayoutSchedule::from_json`]; see the
/// module docs for the phase structure.
///
/// # Errors
///
/// - [`ScheduleError::Json`] if the bytes are not one JSON object or a
///   field's type does not match its declared shape
/// - [`ScheduleError::MissingRecurrence`] if a currency entry has no
///   recurrence object
/// - [`ScheduleError::UnsupportedFrequency`] if a recurrence tag is outside
///   `Daily`, `Weekly`, `Monthly`
#[instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_payout_schedule(bytes: &[u8]) -> Result<PayoutSchedule> {
    let document: BTreeMap<String, Value> = serde_json::from_slice(bytes)?;

    let mut currencies = HashMap::with_capacity(document.len());
    let mut links = HashMap::new();

    for (key, value) in document {
        if key == LINKS_KEY {
            links = serde_json::from_value(value)?;
            continue;
        }
        let schedule = decode_currency_entry(&key, &value)?;
        currencies.insert(key, schedule);
    }

    debug!(currencies = currencies.len(), links = links.len(), "decoded payout schedule");
    Ok(PayoutSchedule { currencies, links })
}

/// Decodes one currency entry: sniff the tag, then run the matching
/// variant's decoder against the same recurrence sub-document.
fn decode_currency_entry(currency: &str, entry: &Value) -> Result<CurrencySchedule> {
    let sniff = SniffEntry::deserialize(entry)?;
    let Some(tag) = sniff.recurrence else {
        return Err(ScheduleError::MissingRecurrence { currency: currency.to_owned() });
    };

    let frequency = match ScheduleFrequency::from_tag(&tag.frequency) {
        Some(frequency) => frequency,
        None => {
            return Err(ScheduleError::UnsupportedFrequency {
                currency: currency.to_owned(),
                frequency: tag.frequency,
            });
        }
    };
    trace!(currency, %frequency, "dispatching recurrence decode");

    // The sniff phase proved the key exists; re-read it rather than carry
    // the raw sub-document through the sniff shape.
    let raw = entry
        .get("recurrence")
        .ok_or_else(|| ScheduleError::MissingRecurrence { currency: currency.to_owned() })?;

    let recurrence = match frequency {
        ScheduleFrequency::Daily => Recurrence::Daily,
        ScheduleFrequency::Weekly => Recurrence::Weekly(WeeklyRecurrence::deserialize(raw)?),
        ScheduleFrequency::Monthly => Recurrence::Monthly(MonthlyRecurrence::deserialize(raw)?),
    };

    Ok(CurrencySchedule { enabled: sniff.enabled, threshold: sniff.threshold, recurrence })
}

#[cfg(test)]
#[allow(
    clippy::unreachable,
    reason = "tests use unreachable! for exhaustive pattern matching"
)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_daily_entry() {
        let doc = br#"{"USD": {"enabled": true, "threshold": 500, "recurrence": {"frequency": "Daily"}}}"#;
        let schedule = decode_payout_schedule(doc).unwrap();

        assert_eq!(schedule.len(), 1);
        let usd = schedule.currency("USD").unwrap();
        assert!(usd.enabled);
        assert_eq!(usd.threshold, 500);
        assert_eq!(usd.recurrence, Recurrence::Daily);
        assert!(schedule.links.is_empty());
    }

    #[test]
    fn test_decode_defaults_enabled_and_threshold() {
        let doc = br#"{
            "USD": {"recurrence": {"frequency": "Weekly", "by_day": ["Monday"]}},
            "_links": {"self": {"href": "https://x"}}
        }"#;
        let schedule = decode_payout_schedule(doc).unwrap();

        assert_eq!(schedule.len(), 1);
        let usd = schedule.currency("USD").unwrap();
        assert!(!usd.enabled);
        assert_eq!(usd.threshold, 0);
        let Recurrence::Weekly(ref weekly) = usd.recurrence else {
            unreachable!("expected Weekly recurrence");
        };
        assert_eq!(weekly.by_day, vec!["Monday"]);
        assert_eq!(schedule.links["self"].href, "https://x");
    }

    #[test]
    fn test_links_key_never_becomes_a_currency() {
        let doc = br#"{"_links": {"self": {"href": "https://api.example.com/schedule"}}}"#;
        let schedule = decode_payout_schedule(doc).unwrap();

        assert!(schedule.is_empty());
        assert!(schedule.currency("_links").is_none());
        assert_eq!(schedule.links.len(), 1);
    }

    #[test]
    fn test_decode_multiple_currencies_without_cross_contamination() {
        let doc = br#"{
            "USD": {"enabled": true, "recurrence": {"frequency": "Daily"}},
            "EUR": {"enabled": true, "recurrence": {"frequency": "Weekly", "by_day": ["Tuesday", "Thursday"]}},
            "GBP": {"threshold": 1000, "recurrence": {"frequency": "Monthly", "by_month_day": [1, 15, 28]}}
        }"#;
        let schedule = decode_payout_schedule(doc).unwrap();

        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.currency("USD").unwrap().recurrence, Recurrence::Daily);

        let Recurrence::Weekly(ref weekly) = schedule.currency("EUR").unwrap().recurrence else {
            unreachable!("expected Weekly recurrence for EUR");
        };
        assert_eq!(weekly.by_day, vec!["Tuesday", "Thursday"]);

        let Recurrence::Monthly(ref monthly) = schedule.currency("GBP").unwrap().recurrence else {
            unreachable!("expected Monthly recurrence for GBP");
        };
        assert_eq!(monthly.by_month_day, vec![1, 15, 28]);
    }

    #[test]
    fn test_unsupported_tag_names_the_currency() {
        let doc = br#"{"USD": {"recurrence": {"frequency": "Biweekly"}}}"#;
        let err = decode_payout_schedule(doc).unwrap_err();

        let ScheduleError::UnsupportedFrequency { currency, frequency } = err else {
            unreachable!("expected UnsupportedFrequency");
        };
        assert_eq!(currency, "USD");
        assert_eq!(frequency, "Biweekly");
    }

    #[test]
    fn test_unsupported_tag_fails_the_whole_decode() {
        let doc = br#"{
            "USD": {"recurrence": {"frequency": "Daily"}},
            "EUR": {"recurrence": {"frequency": "Yearly"}}
        }"#;
        let result = decode_payout_schedule(doc);
        assert!(matches!(result, Err(ScheduleError::UnsupportedFrequency { .. })));
    }

    #[test]
    fn test_tag_matching_is_case_sensitive() {
        let doc = br#"{"USD": {"recurrence": {"frequency": "weekly"}}}"#;
        let err = decode_payout_schedule(doc).unwrap_err();
        assert!(matches!(err, ScheduleError::UnsupportedFrequency { .. }));
    }

    #[test]
    fn test_missing_recurrence_names_the_currency() {
        let doc = br#"{"CHF": {"enabled": true, "threshold": 100}}"#;
        let err = decode_payout_schedule(doc).unwrap_err();

        let ScheduleError::MissingRecurrence { currency } = err else {
            unreachable!("expected MissingRecurrence");
        };
        assert_eq!(currency, "CHF");
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = decode_payout_schedule(b"not json at all").unwrap_err();
        assert!(matches!(err, ScheduleError::Json(_)));
    }

    #[test]
    fn test_top_level_array_rejected() {
        let err = decode_payout_schedule(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ScheduleError::Json(_)));
    }

    #[test]
    fn test_threshold_type_mismatch_rejected() {
        let doc = br#"{"USD": {"threshold": "500", "recurrence": {"frequency": "Daily"}}}"#;
        let err = decode_payout_schedule(doc).unwrap_err();
        assert!(matches!(err, ScheduleError::Json(_)));
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let doc = br#"{"USD": {"threshold": -1, "recurrence": {"frequency": "Daily"}}}"#;
        let err = decode_payout_schedule(doc).unwrap_err();
        assert!(matches!(err, ScheduleError::Json(_)));
    }

    #[test]
    fn test_recurrence_must_be_an_object() {
        let doc = br#"{"USD": {"recurrence": "Daily"}}"#;
        let err = decode_payout_schedule(doc).unwrap_err();
        assert!(matches!(err, ScheduleError::Json(_)));
    }

    #[test]
    fn test_weekly_without_by_day_defaults_to_empty() {
        let doc = br#"{"USD": {"recurrence": {"frequency": "Weekly"}}}"#;
        let schedule = decode_payout_schedule(doc).unwrap();

        let Recurrence::Weekly(ref weekly) = schedule.currency("USD").unwrap().recurrence else {
            unreachable!("expected Weekly recurrence");
        };
        assert!(weekly.by_day.is_empty());
    }

    #[test]
    fn test_monthly_without_by_month_day_defaults_to_empty() {
        let doc = br#"{"USD": {"recurrence": {"frequency": "Monthly"}}}"#;
        let schedule = decode_payout_schedule(doc).unwrap();

        let Recurrence::Monthly(ref monthly) = schedule.currency("USD").unwrap().recurrence else {
            unreachable!("expected Monthly recurrence");
        };
        assert!(monthly.by_month_day.is_empty());
    }

    #[test]
    fn test_foreign_variant_fields_are_ignored() {
        // A Daily tag with stray weekly/monthly fields must decode as plain
        // Daily, not a mixed shape.
        let doc = br#"{"USD": {"recurrence": {"frequency": "Daily", "by_day": ["Monday"], "by_month_day": [1]}}}"#;
        let schedule = decode_payout_schedule(doc).unwrap();
        assert_eq!(schedule.currency("USD").unwrap().recurrence, Recurrence::Daily);
    }

    #[test]
    fn test_unknown_entry_fields_are_ignored() {
        let doc = br#"{"USD": {"enabled": true, "color": "green", "recurrence": {"frequency": "Daily"}}}"#;
        let schedule = decode_payout_schedule(doc).unwrap();
        assert!(schedule.currency("USD").unwrap().enabled);
    }

    #[test]
    fn test_month_days_are_not_range_checked_here() {
        // Structural decode only; range validation is the caller's layer.
        let doc = br#"{"USD": {"recurrence": {"frequency": "Monthly", "by_month_day": [42]}}}"#;
        let schedule = decode_payout_schedule(doc).unwrap();

        let Recurrence::Monthly(ref monthly) = schedule.currency("USD").unwrap().recurrence else {
            unreachable!("expected Monthly recurrence");
        };
        assert_eq!(monthly.by_month_day, vec![42]);
    }

    #[test]
    fn test_empty_document_decodes_to_empty_schedule() {
        let schedule = decode_payout_schedule(b"{}").unwrap();
        assert!(schedule.is_empty());
        assert!(schedule.links.is_empty());
    }

    #[test]
    fn test_malformed_links_fail_the_whole_decode() {
        let doc = br#"{
            "USD": {"recurrence": {"frequency": "Daily"}},
            "_links": {"self": {"href": 42}}
        }"#;
        let err = decode_payout_schedule(doc).unwrap_err();
        assert!(matches!(err, ScheduleError::Json(_)));
    }

    #[test]
    fn test_decode_is_idempotent() {
        let doc = br#"{
            "USD": {"enabled": true, "threshold": 500, "recurrence": {"frequency": "Weekly", "by_day": ["Monday"]}},
            "_links": {"self": {"href": "https://x"}}
        }"#;
        let first = decode_payout_schedule(doc).unwrap();
        let second = decode_payout_schedule(doc).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reencode_roundtrip() {
        let doc = br#"{
            "EUR": {"enabled": true, "threshold": 250, "recurrence": {"frequency": "Monthly", "by_month_day": [1, 15]}},
            "USD": {"recurrence": {"frequency": "Daily"}},
            "_links": {"self": {"href": "https://api.example.com/schedule"}}
        }"#;
        let decoded = decode_payout_schedule(doc).unwrap();
        let reencoded = decoded.to_json().unwrap();
        let decoded_again = decode_payout_schedule(&reencoded).unwrap();
        assert_eq!(decoded, decoded_again);
    }
}
