//! Error types for payout schedule decoding.
//!
//! This module defines all error types that can occur while decoding or
//! validating a payout schedule document. All errors implement the standard
//! [`std::error::Error`] trait via [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Malformed input** ([`ScheduleError::Json`]): bytes are not valid JSON,
//!   or a field's JSON type does not match the expected shape
//! - **Schema drift** ([`ScheduleError::UnsupportedFrequency`],
//!   [`ScheduleError::MissingRecurrence`]): the document is valid JSON but
//!   violates the schedule contract for a named currency
//! - **Validation errors** ([`ScheduleError::InvalidWeekday`],
//!   [`ScheduleError::InvalidMonthDay`]): produced only by the opt-in
//!   [`validate`](crate::schedule::validate) layer, never by the decoder
//!
//! # Examples
//!
//! ```
//! use payout_schedule::{PayoutSchedule, ScheduleError};
//!
//! let doc = br#"{"USD": {"recurrence": {"frequency": "Biweekly"}}}"#;
//! let err = PayoutSchedule::from_json(doc).unwrap_err();
//! assert!(matches!(err, ScheduleError::UnsupportedFrequency { .. }));
//! assert!(err.to_string().contains("USD"));
//! ```

use thiserror::Error;

/// Result type alias for schedule operations.
///
/// This is a convenience type that uses [`ScheduleError`] as the error type.
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors that can occur while decoding or validating a payout schedule.
///
/// Decoding is a pure, local, synchronous transform: no error is retried or
/// recovered here. Failures propagate to whatever consumed the decoded value.
///
/// # Error Recovery
///
/// - **Malformed input** ([`Json`](Self::Json)): the whole decode failed;
///   treat the response as unusable
/// - **Schema drift** ([`UnsupportedFrequency`](Self::UnsupportedFrequency)):
///   the upstream API started emitting a tag this crate does not know;
///   log or alert on the named currency so the drift is visible
/// - **Validation errors** ([`InvalidWeekday`](Self::InvalidWeekday),
///   [`InvalidMonthDay`](Self::InvalidMonthDay)): the document decoded but
///   carries out-of-range values; decide at the call site whether to reject
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The document is not valid JSON, or a field's JSON type does not match
    /// its declared shape (e.g. `threshold` is a string).
    ///
    /// Surfaced immediately from whichever decode phase hit it; no partial
    /// schedule is returned.
    #[error("invalid payout schedule document: {0}")]
    Json(#[from] serde_json::Error),

    /// A currency entry is present without a `recurrence` object.
    ///
    /// The recurrence carries the frequency tag that drives the second
    /// decode phase, so it is required whenever an entry is present.
    /// `enabled` and `threshold` may be omitted; `recurrence` may not.
    #[error("currency '{currency}' has no recurrence object")]
    MissingRecurrence {
        /// Currency code of the offending entry.
        currency: String,
    },

    /// A recurrence tag outside `Daily`, `Weekly`, `Monthly`.
    ///
    /// This is a hard failure, not a silent default: an unknown tag means
    /// the upstream schema drifted and any fallback shape would misread the
    /// variant-specific fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use payout_schedule::{PayoutSchedule, ScheduleError};
    ///
    /// let doc = br#"{"EUR": {"recurrence": {"frequency": "Yearly"}}}"#;
    /// let err = PayoutSchedule::from_json(doc).unwrap_err();
    /// assert_eq!(err.to_string(), "unsupported payout frequency 'Yearly' for currency 'EUR'");
    /// ```
    #[error("unsupported payout frequency '{frequency}' for currency '{currency}'")]
    UnsupportedFrequency {
        /// Currency code of the offending entry.
        currency: String,
        /// The tag value found on the wire.
        frequency: String,
    },

    /// A `by_day` value is not one of the seven weekday names.
    ///
    /// Only produced by
    /// [`validate_schedule`](crate::schedule::validate::validate_schedule).
    #[error("invalid weekday '{day}' in by_day for currency '{currency}'")]
    InvalidWeekday {
        /// Currency code of the offending entry.
        currency: String,
        /// The rejected weekday value.
        day: String,
    },

    /// A `by_month_day` value is outside the range 1-31.
    ///
    /// Only produced by
    /// [`validate_schedule`](crate::schedule::validate::validate_schedule).
    #[error("by_month_day value {day} out of range 1-31 for currency '{currency}'")]
    InvalidMonthDay {
        /// Currency code of the offending entry.
        currency: String,
        /// The rejected calendar day.
        day: u32,
    },
}
