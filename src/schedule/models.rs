//! Payout schedule data models.
//!
//! This module defines the typed counterpart of the payout schedule wire
//! document: per-currency schedule entries whose recurrence is one of three
//! concrete shapes, plus the hypermedia links carried alongside them.

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};

use crate::error::Result;

/// Reserved top-level key holding hypermedia links.
///
/// Every other top-level key of a schedule document is a currency code; this
/// one must never produce a currency entry.
pub const LINKS_KEY: &str = "_links";

/// Payout cadence discriminator.
///
/// Carried on the wire as the string value of the `frequency` field inside
/// every recurrence object. It is never meaningful on its own; it only
/// selects which concrete [`Recurrence`] shape applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleFrequency {
    /// Pay out every day.
    Daily,
    /// Pay out on configured weekdays.
    Weekly,
    /// Pay out on configured calendar days.
    Monthly,
}

impl ScheduleFrequency {
    /// Returns the exact wire representation of the tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    /// Parses a wire tag, returning `None` for anything outside the
    /// supported set.
    ///
    /// Matching is exact: the upstream API emits `"Daily"`, `"Weekly"`,
    /// `"Monthly"` and nothing else is accepted.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Daily" => Some(Self::Daily),
            "Weekly" => Some(Self::Weekly),
            "Monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

impl fmt::Display for ScheduleFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weekly recurrence payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyRecurrence {
    /// Weekdays to pay out on (e.g. `"Monday"`). An absent list decodes as
    /// empty. The decoder does not check the names; see
    /// [`validate_schedule`](crate::schedule::validate::validate_schedule).
    #[serde(default)]
    pub by_day: Vec<String>,
}

/// Monthly recurrence payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecurrence {
    /// Calendar days to pay out on (1-31). An absent list decodes as empty.
    /// The decoder does not range-check the values; see
    /// [`validate_schedule`](crate::schedule::validate::validate_schedule).
    #[serde(default)]
    pub by_month_day: Vec<u32>,
}

/// Payout cadence for a currency.
///
/// A closed set of shapes selected by the `frequency` tag embedded in each
/// wire recurrence object. Exactly one variant is active per schedule entry,
/// and the active variant always matches the tag used to select it: the
/// decoder in [`decode`](crate::schedule::decode) is the only constructor
/// from wire data, and it gates each variant's decoder on the tag.
///
/// Serialization is internally tagged on `frequency`, reproducing the wire
/// variant shapes exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "frequency")]
pub enum Recurrence {
    /// Pay out every day. No payload beyond the tag.
    Daily,
    /// Pay out on the listed weekdays.
    Weekly(WeeklyRecurrence),
    /// Pay out on the listed calendar days.
    Monthly(MonthlyRecurrence),
}

impl Recurrence {
    /// Reports the frequency tag of the active variant.
    #[must_use]
    pub fn frequency(&self) -> ScheduleFrequency {
        match self {
            Self::Daily => ScheduleFrequency::Daily,
            Self::Weekly(_) => ScheduleFrequency::Weekly,
            Self::Monthly(_) => ScheduleFrequency::Monthly,
        }
    }
}

/// One currency's schedule entry.
///
/// Owned exclusively by the enclosing [`PayoutSchedule`]; it has no
/// independent lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencySchedule {
    /// Whether payouts are enabled for this currency. Defaults to `false`
    /// when absent on the wire.
    pub enabled: bool,
    /// Minimum balance, in minor currency units, before a payout runs.
    /// Defaults to `0` when absent on the wire.
    pub threshold: u64,
    /// The payout cadence. Required on the wire.
    pub recurrence: Recurrence,
}

/// Hypermedia link metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target of the link.
    pub href: String,
}

/// A decoded payout schedule document.
///
/// Created fresh on every decode and immutable once produced; a new API
/// response produces a new value. Currency keys are unique and their order
/// is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayoutSchedule {
    /// Schedule entries keyed by currency code (ISO 4217).
    pub currencies: HashMap<String, CurrencySchedule>,
    /// Links keyed by relation name (e.g. `"self"`), extracted from the
    /// reserved [`LINKS_KEY`] entry of the same document.
    pub links: HashMap<String, Link>,
}

impl PayoutSchedule {
    /// Decodes a payout schedule from the raw bytes of one JSON document.
    ///
    /// Pure and side-effect-free: decoding identical bytes twice yields
    /// value-equal results.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid schedule document, if
    /// an entry has no recurrence object, or if a recurrence tag is outside
    /// the supported set. No partial schedule is ever returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use payout_schedule::{PayoutSchedule, ScheduleFrequency};
    ///
    /// let doc = br#"{
    ///     "USD": {
    ///         "enabled": true,
    ///         "threshold": 500,
    ///         "recurrence": { "frequency": "Weekly", "by_day": ["Monday"] }
    ///     },
    ///     "_links": { "self": { "href": "https://api.example.com/schedule" } }
    /// }"#;
    ///
    /// let schedule = PayoutSchedule::from_json(doc)?;
    /// let usd = schedule.currency("USD").expect("USD entry");
    /// assert_eq!(usd.recurrence.frequency(), ScheduleFrequency::Weekly);
    /// assert_eq!(schedule.links["self"].href, "https://api.example.com/schedule");
    /// # Ok::<(), payout_schedule::ScheduleError>(())
    /// ```
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        crate::schedule::decode::decode_payout_schedule(bytes)
    }

    /// Re-encodes the schedule into the wire shape.
    ///
    /// Currency entries and links land in one JSON object, links under
    /// [`LINKS_KEY`]. The key is omitted when no links are present, so
    /// decode-encode-decode round-trips to an equal value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(Into::into)
    }

    /// Looks up the schedule entry for a currency code.
    #[must_use]
    pub fn currency(&self, code: &str) -> Option<&CurrencySchedule> {
        self.currencies.get(code)
    }

    /// Number of currency entries (links are not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Whether the schedule has no currency entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

impl Serialize for PayoutSchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let extra = usize::from(!self.links.is_empty());
        let mut map = serializer.serialize_map(Some(self.currencies.len() + extra))?;
        for (currency, schedule) in &self.currencies {
            map.serialize_entry(currency, schedule)?;
        }
        if !self.links.is_empty() {
            map.serialize_entry(LINKS_KEY, &self.links)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_as_str() {
        assert_eq!(ScheduleFrequency::Daily.as_str(), "Daily");
        assert_eq!(ScheduleFrequency::Weekly.as_str(), "Weekly");
        assert_eq!(ScheduleFrequency::Monthly.as_str(), "Monthly");
    }

    #[test]
    fn test_frequency_from_tag_valid() {
        assert_eq!(ScheduleFrequency::from_tag("Daily"), Some(ScheduleFrequency::Daily));
        assert_eq!(ScheduleFrequency::from_tag("Weekly"), Some(ScheduleFrequency::Weekly));
        assert_eq!(ScheduleFrequency::from_tag("Monthly"), Some(ScheduleFrequency::Monthly));
    }

    #[test]
    fn test_frequency_from_tag_rejects_unknown() {
        assert_eq!(ScheduleFrequency::from_tag("Yearly"), None);
        assert_eq!(ScheduleFrequency::from_tag("daily"), None);
        assert_eq!(ScheduleFrequency::from_tag(""), None);
    }

    #[test]
    fn test_frequency_display_matches_wire() {
        for frequency in
            [ScheduleFrequency::Daily, ScheduleFrequency::Weekly, ScheduleFrequency::Monthly]
        {
            assert_eq!(frequency.to_string(), frequency.as_str());
        }
    }

    #[test]
    fn test_frequency_serde_roundtrip() {
        for frequency in
            [ScheduleFrequency::Daily, ScheduleFrequency::Weekly, ScheduleFrequency::Monthly]
        {
            let json = serde_json::to_string(&frequency).unwrap();
            assert_eq!(json, format!("\"{}\"", frequency.as_str()));
            let parsed: ScheduleFrequency = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, frequency);
        }
    }

    #[test]
    fn test_recurrence_reports_frequency() {
        assert_eq!(Recurrence::Daily.frequency(), ScheduleFrequency::Daily);
        assert_eq!(
            Recurrence::Weekly(WeeklyRecurrence::default()).frequency(),
            ScheduleFrequency::Weekly
        );
        assert_eq!(
            Recurrence::Monthly(MonthlyRecurrence::default()).frequency(),
            ScheduleFrequency::Monthly
        );
    }

    #[test]
    fn test_daily_recurrence_serialization() {
        let json = serde_json::to_string(&Recurrence::Daily).unwrap();
        assert_eq!(json, r#"{"frequency":"Daily"}"#);
    }

    #[test]
    fn test_weekly_recurrence_serialization() {
        let recurrence = Recurrence::Weekly(WeeklyRecurrence {
            by_day: vec!["Monday".to_owned(), "Friday".to_owned()],
        });
        let json = serde_json::to_string(&recurrence).unwrap();
        assert_eq!(json, r#"{"frequency":"Weekly","by_day":["Monday","Friday"]}"#);
    }

    #[test]
    fn test_monthly_recurrence_serialization() {
        let recurrence = Recurrence::Monthly(MonthlyRecurrence { by_month_day: vec![1, 15] });
        let json = serde_json::to_string(&recurrence).unwrap();
        assert_eq!(json, r#"{"frequency":"Monthly","by_month_day":[1,15]}"#);
    }

    #[test]
    fn test_currency_schedule_serialization() {
        let schedule =
            CurrencySchedule { enabled: true, threshold: 500, recurrence: Recurrence::Daily };
        let json = serde_json::to_string(&schedule).unwrap();
        assert_eq!(json, r#"{"enabled":true,"threshold":500,"recurrence":{"frequency":"Daily"}}"#);
    }

    #[test]
    fn test_payout_schedule_serialization_includes_links() {
        let mut schedule = PayoutSchedule::default();
        schedule.currencies.insert("USD".to_owned(), CurrencySchedule {
            enabled: false,
            threshold: 0,
            recurrence: Recurrence::Daily,
        });
        schedule
            .links
            .insert("self".to_owned(), Link { href: "https://api.example.com/x".to_owned() });

        let json = String::from_utf8(schedule.to_json().unwrap()).unwrap();
        assert!(json.contains("\"USD\""));
        assert!(json.contains("\"_links\""));
        assert!(json.contains("https://api.example.com/x"));
    }

    #[test]
    fn test_payout_schedule_serialization_omits_empty_links() {
        let mut schedule = PayoutSchedule::default();
        schedule.currencies.insert("EUR".to_owned(), CurrencySchedule {
            enabled: true,
            threshold: 100,
            recurrence: Recurrence::Daily,
        });

        let json = String::from_utf8(schedule.to_json().unwrap()).unwrap();
        assert!(!json.contains("_links"));
    }

    #[test]
    fn test_payout_schedule_default_is_empty() {
        let schedule = PayoutSchedule::default();
        assert!(schedule.is_empty());
        assert_eq!(schedule.len(), 0);
        assert!(schedule.links.is_empty());
    }

    #[test]
    fn test_currency_lookup() {
        let mut schedule = PayoutSchedule::default();
        schedule.currencies.insert("GBP".to_owned(), CurrencySchedule {
            enabled: true,
            threshold: 250,
            recurrence: Recurrence::Monthly(MonthlyRecurrence { by_month_day: vec![28] }),
        });

        assert!(schedule.currency("GBP").is_some());
        assert!(schedule.currency("JPY").is_none());
        assert_eq!(schedule.currency("GBP").unwrap().threshold, 250);
    }

    #[test]
    fn test_link_serde_roundtrip() {
        let link = Link { href: "https://api.example.com/schedule".to_owned() };
        let json = serde_json::to_string(&link).unwrap();
        assert_eq!(json, r#"{"href":"https://api.example.com/schedule"}"#);
        let parsed: Link = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, link);
    }
}
