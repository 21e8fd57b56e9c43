//! Range and enum validation for decoded schedules.
//!
//! The decoder guarantees structural correctness only: a `by_month_day` of
//! `42` or a `by_day` of `"Payday"` decodes fine. Callers that want the
//! documented value ranges enforced layer this module on top.

use crate::{
    error::{Result, ScheduleError},
    schedule::models::{PayoutSchedule, Recurrence},
};

/// Weekday names accepted in `by_day`, exactly as the upstream API spells
/// them.
const WEEKDAYS: &[&str] =
    &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

/// Checks every entry's variant fields against their documented ranges.
///
/// Weekly entries must list only the seven English weekday names; monthly
/// entries must list calendar days in `1..=31`. Daily entries always pass.
/// The first offending value fails the whole check.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidWeekday`] or
/// [`ScheduleError::InvalidMonthDay`], each naming the offending currency.
///
/// # Examples
///
/// ```
/// use payout_schedule::{PayoutSchedule, validate_schedule};
///
/// let doc = br#"{"USD": {"recurrence": {"frequency": "Monthly", "by_month_day": [42]}}}"#;
/// let schedule = PayoutSchedule::from_json(doc)?;
///
/// // Decodes fine, fails the opt-in range check.
/// assert!(validate_schedule(&schedule).is_err());
/// # Ok::<(), payout_schedule::ScheduleError>(())
/// ```
pub fn validate_schedule(schedule: &PayoutSchedule) -> Result<()> {
    for (currency, entry) in &schedule.currencies {
        match &entry.recurrence {
            Recurrence::Daily => {}
            Recurrence::Weekly(weekly) => {
                for day in &weekly.by_day {
                    if !WEEKDAYS.contains(&day.as_str()) {
                        return Err(ScheduleError::InvalidWeekday {
                            currency: currency.clone(),
                            day: day.clone(),
                        });
                    }
                }
            }
            Recurrence::Monthly(monthly) => {
                for &day in &monthly.by_month_day {
                    if !(1..=31).contains(&day) {
                        return Err(ScheduleError::InvalidMonthDay {
                            currency: currency.clone(),
                            day,
                        });
                    }
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::decode::decode_payout_schedule;

    #[test]
    fn test_empty_schedule_passes() {
        assert!(validate_schedule(&PayoutSchedule::default()).is_ok());
    }

    #[test]
    fn test_daily_always_passes() {
        let doc = br#"{"USD": {"recurrence": {"frequency": "Daily"}}}"#;
        let schedule = decode_payout_schedule(doc).unwrap();
        assert!(validate_schedule(&schedule).is_ok());
    }

    #[test]
    fn test_all_weekdays_pass() {
        let doc = br#"{"USD": {"recurrence": {"frequency": "Weekly",
            "by_day": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]}}}"#;
        let schedule = decode_payout_schedule(doc).unwrap();
        assert!(validate_schedule(&schedule).is_ok());
    }

    #[test]
    fn test_unknown_weekday_rejected() {
        let doc = br#"{"EUR": {"recurrence": {"frequency": "Weekly", "by_day": ["Funday"]}}}"#;
        let schedule = decode_payout_schedule(doc).unwrap();
        let err = validate_schedule(&schedule).unwrap_err();

        assert!(matches!(
            err,
            ScheduleError::InvalidWeekday { ref currency, ref day }
                if currency == "EUR" && day == "Funday"
        ));
    }

    #[test]
    fn test_lowercase_weekday_rejected() {
        let doc = br#"{"USD": {"recurrence": {"frequency": "Weekly", "by_day": ["monday"]}}}"#;
        let schedule = decode_payout_schedule(doc).unwrap();
        assert!(validate_schedule(&schedule).is_err());
    }

    #[test]
    fn test_month_day_bounds() {
        for day in [1u32, 15, 31] {
            let doc = format!(
                r#"{{"USD": {{"recurrence": {{"frequency": "Monthly", "by_month_day": [{day}]}}}}}}"#
            );
            let schedule = decode_payout_schedule(doc.as_bytes()).unwrap();
            assert!(validate_schedule(&schedule).is_ok(), "day {day} should pass");
        }

        for day in [0u32, 32, 42] {
            let doc = format!(
                r#"{{"USD": {{"recurrence": {{"frequency": "Monthly", "by_month_day": [{day}]}}}}}}"#
            );
            let schedule = decode_payout_schedule(doc.as_bytes()).unwrap();
            let err = validate_schedule(&schedule).unwrap_err();
            assert!(
                matches!(err, ScheduleError::InvalidMonthDay { day: rejected, .. } if rejected == day)
            );
        }
    }

    #[test]
    fn test_error_names_currency() {
        let doc = br#"{"GBP": {"recurrence": {"frequency": "Monthly", "by_month_day": [0]}}}"#;
        let schedule = decode_payout_schedule(doc).unwrap();
        let err = validate_schedule(&schedule).unwrap_err();
        assert!(err.to_string().contains("GBP"));
    }
}
