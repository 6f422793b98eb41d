//! Prototype: new objects come from cloning registered ones.
//!
//! Run with: cargo run --bin prototype

use std::process::ExitCode;

use creational_patterns::prototype::{Label, Point, PrototypeRegistry};
use creational_patterns::{telemetry, Result};

fn run() -> Result<()> {
    let mut registry = PrototypeRegistry::new();
    registry.register("point", Point::new(1, 2));
    registry.register(
        "caption",
        Label {
            text: "Prototype".to_string(),
            at: Point::new(0, 0),
        },
    );

    println!("=== Plain clones ===");
    for name in registry.names() {
        println!("{name}: {}", registry.create(&name)?);
    }

    println!("\n=== Customised clones ===");
    for n in 2..=7 {
        let point = registry.create_with::<Point, _>("point", |p| {
            p.x = n;
            p.y = 2 * n;
        })?;
        println!("{point}");
    }

    println!("\n=== Unknown prototype ===");
    if let Err(err) = registry.create("square") {
        println!("{err}");
    }
    Ok(())
}

fn main() -> ExitCode {
    telemetry::init("info");
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
