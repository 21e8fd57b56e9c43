//! Payout schedule decoding.
//!
//! This module turns the raw bytes of a payout schedule API response into a
//! typed [`PayoutSchedule`]. One JSON object carries a schedule entry per
//! currency code plus a reserved `_links` entry; each schedule entry embeds
//! a `frequency` tag that selects one of three concrete recurrence shapes.
//!
//! - [`models`]: the typed document ([`PayoutSchedule`], [`CurrencySchedule`],
//!   the [`Recurrence`] variants) and its wire serialization
//! - [`decode`]: the two-phase discriminated decoder
//! - [`validate`]: opt-in range/enum checks the decoder deliberately skips
//!
//! # Examples
//!
//! ```
//! use payout_schedule::{PayoutSchedule, Recurrence};
//!
//! let doc = br#"{
//!     "USD": { "enabled": true, "threshold": 500, "recurrence": { "frequency": "Daily" } }
//! }"#;
//!
//! let schedule = PayoutSchedule::from_json(doc)?;
//! assert_eq!(schedule.currency("USD").unwrap().recurrence, Recurrence::Daily);
//! # Ok::<(), payout_schedule::ScheduleError>(())
//! ```

pub mod decode;
pub mod models;
pub mod validate;

pub use decode::decode_payout_schedule;
pub use models::{
    CurrencySchedule, LINKS_KEY, Link, MonthlyRecurrence, PayoutSchedule, Recurrence,
    ScheduleFrequency, WeeklyRecurrence,
};
pub use validate::validate_schedule;

#[cfg(test)]
mod tests;
