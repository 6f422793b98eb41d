//! Abstract Factory: one factory, one consistent product family.
//!
//! Run with: cargo run --bin abstract_factory

use std::io;
use std::process::ExitCode;

use creational_patterns::abstract_factory::{
    create_diagram, ConcreteFactory1, ConcreteFactory2, Diagram, Factory, SkinFactory,
    SpringSkinFactory, SummerSkinFactory, SvgDiagramFactory, TextDiagramFactory,
};
use creational_patterns::{telemetry, Result};

fn show_skin(factory: &dyn SkinFactory) {
    println!("--- {} skin ---", factory.skin());
    factory.create_button().display();
    factory.create_text_field().display();
    factory.create_combo_box().display();
}

fn run() -> Result<()> {
    println!("=== Template: product families ===");
    let factories: Vec<Box<dyn Factory>> = vec![Box::new(ConcreteFactory1), Box::new(ConcreteFactory2)];
    for factory in &factories {
        let a = factory.create_product_a();
        let b = factory.create_product_b();
        println!("{:?} + {:?} (family {:?})", a, b, factory.family());
    }

    println!("\n=== Sample: UI skins ===");
    show_skin(&SpringSkinFactory);
    show_skin(&SummerSkinFactory);

    println!("\n=== Sample: diagrams ===");
    let mut stdout = io::stdout();
    create_diagram(&TextDiagramFactory).save(&mut stdout)?;
    println!();
    create_diagram(&SvgDiagramFactory).save(&mut stdout)?;
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
