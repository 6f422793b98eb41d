//! Singleton: one cached, refreshable, process-wide value.
//!
//! Run with: cargo run --bin singleton

use std::time::Instant;

use creational_patterns::singleton::{expensive_resource, expensive_value};
use creational_patterns::telemetry;

fn timed(label: &str, refresh: bool) {
    let start = Instant::now();
    let value = expensive_value(refresh);
    println!("{label}: {value} in {:?}", start.elapsed());
}

fn main() {
    telemetry::init("info");

    println!("=== Lazy first access ===");
    timed("first call", false);

    println!("\n=== Cached access ===");
    timed("second call", false);
    timed("third call", false);

    println!("\n=== Forced refresh ===");
    timed("refresh", true);
    timed("after refresh", false);

    println!("\nloads performed: {}", expensive_resource().load_count());
}
