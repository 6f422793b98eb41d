//! Simple Factory: one static function maps a tag to a product.
//!
//! Run with: cargo run --bin simple_factory

use creational_patterns::simple_factory::{ChartFactory, Factory};
use creational_patterns::telemetry;

fn main() {
    telemetry::init("info");

    println!("=== Template: tag -> product ===");
    for tag in ["A", "B", "Z"] {
        match Factory::get_product(tag) {
            Ok(product) => println!("get_product({tag:?}) -> {}", product.describe()),
            Err(err) => println!("get_product({tag:?}) -> error: {err}"),
        }
    }

    println!("\n=== Sample: chart factory ===");
    match ChartFactory::get_chart("Pie") {
        Ok(chart) => chart.display(),
        Err(err) => eprintln!("{err}"),
    }

    if let Err(err) = ChartFactory::get_chart("radar") {
        println!("Unknown chart rejected: {err}");
    }
}
