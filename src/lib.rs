//! Payout Schedule Decoder
//!
//! A typed decoder for the per-currency payout schedule documents returned
//! by a payments API, turning raw JSON bytes into a [`PayoutSchedule`]
//! whose recurrence shapes are selected by the `frequency` tag embedded in
//! each entry.
//!
//! # Overview
//!
//! The wire document is one JSON object. Every top-level key is a currency
//! code (ISO 4217) mapping to `{enabled, threshold, recurrence}`, except
//! the reserved `_links` key, which carries hypermedia links and must never
//! produce a currency entry. The recurrence is polymorphic: `Daily` has no
//! payload, `Weekly` lists weekdays (`by_day`), `Monthly` lists calendar
//! days (`by_month_day`). A single untyped pass cannot decode the variant
//! fields into the right shape, so the decoder sniffs each entry's tag
//! first and then runs the matching variant's decoder — see
//! [`schedule::decode`] for the phase structure.
//!
//! Decoding is a pure function over an in-memory byte buffer: no I/O, no
//! shared state, no partial results on failure, and identical bytes always
//! decode to value-equal schedules.
//!
//! # Quick Start
//!
//! ```
//! use payout_schedule::{PayoutSchedule, Recurrence, ScheduleFrequency};
//!
//! let doc = br#"{
//!     "USD": {
//!         "enabled": true,
//!         "threshold": 500,
//!         "recurrence": { "frequency": "Weekly", "by_day": ["Monday"] }
//!     },
//!     "_links": { "self": { "href": "https://api.example.com/schedule" } }
//! }"#;
//!
//! let schedule = PayoutSchedule::from_json(doc)?;
//!
//! let usd = schedule.currency("USD").expect("USD entry");
//! assert!(usd.enabled);
//! assert_eq!(usd.threshold, 500);
//! assert_eq!(usd.recurrence.frequency(), ScheduleFrequency::Weekly);
//!
//! // The reserved key lands in `links`, never in `currencies`.
//! assert_eq!(schedule.len(), 1);
//! assert_eq!(schedule.links["self"].href, "https://api.example.com/schedule");
//! # Ok::<(), payout_schedule::ScheduleError>(())
//! ```
//!
//! ## Handling schema drift
//!
//! A recurrence tag outside `Daily`/`Weekly`/`Monthly` is a hard failure
//! naming the offending currency, so upstream schema drift is loggable
//! instead of silently misread:
//!
//! ```
//! use payout_schedule::{PayoutSchedule, ScheduleError};
//!
//! let doc = br#"{"USD": {"recurrence": {"frequency": "Biweekly"}}}"#;
//!
//! match PayoutSchedule::from_json(doc) {
//!     Err(ScheduleError::UnsupportedFrequency { currency, frequency }) => {
//!         assert_eq!(currency, "USD");
//!         assert_eq!(frequency, "Biweekly");
//!     }
//!     other => panic!("expected unsupported-frequency error, got {other:?}"),
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`schedule`]: the typed data model, the two-phase decoder, and the
//!   opt-in range validation layer
//! - [`error`]: error types with recovery guidance
//!
//! # Scope
//!
//! This crate is the response-decoding seam only. Request construction,
//! authentication, retries, and HTTP transport belong to the surrounding
//! client and are deliberately absent here.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod schedule;

pub use error::{Result, ScheduleError};
pub use schedule::{
    CurrencySchedule, LINKS_KEY, Link, MonthlyRecurrence, PayoutSchedule, Recurrence,
    ScheduleFrequency, WeeklyRecurrence, decode_payout_schedule, validate_schedule,
};
