//! Factory Method: each concrete creator yields exactly one product type.
//!
//! Run with: cargo run --bin factory_method

use std::env;
use std::process::ExitCode;

use creational_patterns::factory_method::{
    Board, ChessBoard, CheckersBoard, ConcreteCreatorA, ConcreteCreatorB, Creator,
    DatabaseLoggerFactory, FileLoggerFactory, LoggerFactory,
};
use creational_patterns::{telemetry, Result};

fn run() -> Result<()> {
    println!("=== Template: creators ===");
    let creators: Vec<Box<dyn Creator>> = vec![Box::new(ConcreteCreatorA), Box::new(ConcreteCreatorB)];
    for creator in &creators {
        println!("{}", creator.operation());
    }

    println!("\n=== Sample: logger factories ===");
    let log_path = env::temp_dir().join("factory_method_demo.log");
    let factories: Vec<Box<dyn LoggerFactory>> = vec![
        Box::new(FileLoggerFactory::new(&log_path)),
        Box::new(DatabaseLoggerFactory::default()),
    ];
    for factory in &factories {
        let mut logger = factory.create_logger();
        logger.write_log("application started")?;
        println!("wrote a log entry through the {} logger", logger.kind());
    }
    println!("file log at {}", log_path.display());

    println!("\n=== Sample: boards ===");
    println!("{}", ChessBoard::new().render());
    println!("{}", CheckersBoard::new().render());
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
