//! Basic decoding example for payout schedule documents.
//!
//! This example shows the simplest way to turn an API response body into a
//! typed schedule and read the per-currency recurrence shapes back out.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example basic_decode
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::uninlined_format_args,
    reason = "examples are allowed to use println and simple formatting"
)]

use payout_schedule::{PayoutSchedule, Recurrence};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    println!("Payout Schedule: Basic Decode Example\n");

    // Step 1: the raw response body, as received from the payouts endpoint.
    println!("1. Response body received from the API...");
    let body = br#"{
        "USD": {
            "enabled": true,
            "threshold": 500,
            "recurrence": { "frequency": "Weekly", "by_day": ["Monday", "Thursday"] }
        },
        "EUR": {
            "enabled": true,
            "threshold": 1000,
            "recurrence": { "frequency": "Monthly", "by_month_day": [1, 15] }
        },
        "GBP": {
            "recurrence": { "frequency": "Daily" }
        },
        "_links": { "self": { "href": "https://api.example.com/payouts/schedule" } }
    }"#;
    println!("   {} bytes", body.len());

    // Step 2: decode into the typed schedule.
    println!("\n2. Decoding...");
    let schedule = PayoutSchedule::from_json(body)?;
    println!("   Decoded {} currencies, {} links", schedule.len(), schedule.links.len());

    // Step 3: walk the entries; the tag already selected the right shape.
    println!("\n3. Schedule entries:");
    for (currency, entry) in &schedule.currencies {
        print!("   {} enabled={} threshold={} ", currency, entry.enabled, entry.threshold);
        match &entry.recurrence {
            Recurrence::Daily => println!("pays out daily"),
            Recurrence::Weekly(weekly) => println!("pays out weekly on {:?}", weekly.by_day),
            Recurrence::Monthly(monthly) => {
                println!("pays out monthly on days {:?}", monthly.by_month_day);
            }
        }
    }

    // Step 4: the reserved _links key never becomes a currency.
    println!("\n4. Links:");
    for (rel, link) in &schedule.links {
        println!("   {} -> {}", rel, link.href);
    }

    Ok(())
}
