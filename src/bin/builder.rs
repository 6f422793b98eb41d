//! Builder: a director runs the steps, builders decide the parts.
//!
//! Run with: cargo run --bin builder

use creational_patterns::builder::{
    create_login_form, Assembly, Builder, ConcreteBuilderA, ConcreteBuilderB, Director,
    HtmlFormBuilder, TkFormBuilder,
};
use creational_patterns::telemetry;

fn main() {
    telemetry::init("info");

    println!("=== Template: director ===");
    let mut director = Director::new(ConcreteBuilderA::default());
    println!("builder A: {:?}", director.construct());
    let mut director = Director::new(ConcreteBuilderB::default());
    println!("builder B: {:?}", director.construct());

    println!("\n=== Template: typestate assembly ===");
    let product = Assembly::new(ConcreteBuilderA::default())
        .part_a()
        .part_b()
        .part_c()
        .finish();
    println!("assembled: {product:?}");

    let mut early = ConcreteBuilderB::default();
    early.build_part_a();
    println!(
        "get_result after one step: {:?} (complete: {})",
        early.get_result(),
        early.get_result().is_complete()
    );
    // Assembly::new(ConcreteBuilderA::default()).part_a().finish();
    //   -> ERROR: no method named `finish` on `Assembly<_, HasPartA>`

    println!("\n=== Sample: login form as HTML ===");
    println!("{}", create_login_form(&mut HtmlFormBuilder::new()));

    println!("\n=== Sample: login form as a Tk script ===");
    println!("{}", create_login_form(&mut TkFormBuilder::new()));
}
