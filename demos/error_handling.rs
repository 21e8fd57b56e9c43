//! Error handling example showing how decode failures surface.
//!
//! This example demonstrates the error taxonomy of schedule decoding:
//! malformed input, missing recurrence objects, unsupported frequency tags,
//! and the opt-in range validation layer.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example error_handling
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::uninlined_format_args,
    clippy::use_debug,
    reason = "examples are allowed to use println and simple formatting"
)]

use payout_schedule::{PayoutSchedule, ScheduleError, validate_schedule};

fn main() {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    println!("Payout Schedule: Error Handling Example\n");

    // Example 1: bytes that are not JSON at all.
    println!("Example 1: Malformed input (should fail)");
    match PayoutSchedule::from_json(b"definitely not json") {
        Ok(_) => println!("   Unexpected success"),
        Err(ScheduleError::Json(e)) => println!("   Rejected as malformed: {}", e),
        Err(e) => println!("   Unexpected error kind: {}", e),
    }

    // Example 2: an entry without the required recurrence object.
    println!("\nExample 2: Missing recurrence (should fail)");
    let doc = br#"{"USD": {"enabled": true, "threshold": 100}}"#;
    match PayoutSchedule::from_json(doc) {
        Ok(_) => println!("   Unexpected success"),
        Err(e @ ScheduleError::MissingRecurrence { .. }) => println!("   Rejected: {}", e),
        Err(e) => println!("   Unexpected error kind: {}", e),
    }

    // Example 3: schema drift — a tag this crate does not know.
    println!("\nExample 3: Unsupported frequency tag (should fail)");
    let doc = br#"{"EUR": {"recurrence": {"frequency": "Biweekly"}}}"#;
    match PayoutSchedule::from_json(doc) {
        Ok(_) => println!("   Unexpected success"),
        Err(ScheduleError::UnsupportedFrequency { currency, frequency }) => {
            println!("   Rejected: currency={} tag={}", currency, frequency);
            println!("   This is the signal to alert on upstream schema drift.");
        }
        Err(e) => println!("   Unexpected error kind: {}", e),
    }

    // Example 4: structurally fine, out of documented range.
    println!("\nExample 4: Out-of-range month day (decodes, fails validation)");
    let doc = br#"{"GBP": {"recurrence": {"frequency": "Monthly", "by_month_day": [42]}}}"#;
    match PayoutSchedule::from_json(doc) {
        Ok(schedule) => {
            println!("   Decoded fine (the decoder is structural only)");
            match validate_schedule(&schedule) {
                Ok(()) => println!("   Unexpected validation success"),
                Err(e) => println!("   Validation rejected it: {}", e),
            }
        }
        Err(e) => println!("   Unexpected decode error: {}", e),
    }

    println!("\nDone.");
}
