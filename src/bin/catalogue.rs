//! Runs every creational pattern with the variants chosen in a config file.
//!
//! Run with: cargo run --bin catalogue -- config/catalogue.toml
//! (without an argument the built-in defaults are used)

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use colored::Colorize;
use tracing::info;

use creational_patterns::builder::{create_login_form, Director};
use creational_patterns::factory_method::factory_for;
use creational_patterns::prototype::{Point, PrototypeRegistry};
use creational_patterns::simple_factory::ChartFactory;
use creational_patterns::singleton::expensive_value;
use creational_patterns::{telemetry, CatalogueConfig, Result};

fn heading(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold());
}

fn run(config: &CatalogueConfig) -> Result<()> {
    heading("Simple Factory");
    ChartFactory::get_chart(&config.simple_factory.chart)?.display();

    heading("Factory Method");
    let factory = factory_for(config.factory_method.logger, &config.factory_method.log_path);
    let mut logger = factory.create_logger();
    logger.write_log("catalogue run started")?;
    println!("logged through the {} logger", logger.kind());
    print!("{}", config.factory_method.board.create().render());

    heading("Abstract Factory");
    let skins = config.abstract_factory.skin.factory();
    skins.create_button().display();
    skins.create_text_field().display();
    skins.create_combo_box().display();
    print!("{}", config.abstract_factory.diagram.render_sample()?);

    heading("Builder");
    let product = Director::new(config.builder.variant.builder()).construct();
    println!("{product:?}");
    println!("{}", create_login_form(config.builder.form.builder().as_mut()));

    heading("Singleton");
    println!("cached value: {}", expensive_value(false));

    heading("Prototype");
    let mut registry = PrototypeRegistry::new();
    registry.register("origin", Point::default());
    println!("{}", registry.create("origin")?);

    Ok(())
}

fn main() -> ExitCode {
    let path = env::args().nth(1).map(PathBuf::from);
    let config = match CatalogueConfig::load_or_default(path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    telemetry::init(&config.logging.filter);
    info!(?config, "catalogue configured");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
