//! # Creational Design Patterns
//!
//! Each classic creational pattern appears twice: a minimal template showing
//! the shape of the pattern, and a sample built on a small story (charts,
//! loggers, UI skins, forms).
//!
//! ## Patterns Covered
//!
//! 1. **Simple Factory** ([`simple_factory`])
//!    - A single creation function mapping a tag to a product variant
//!    - Unknown tags are an explicit error, never a null product
//!
//! 2. **Factory Method** ([`factory_method`])
//!    - A creator trait with one factory method per concrete creator
//!    - Boards populated through a single piece factory
//!
//! 3. **Abstract Factory** ([`abstract_factory`])
//!    - Families of related products that must not be mixed
//!    - Associated types enforcing family membership at compile time
//!
//! 4. **Builder** ([`builder`])
//!    - Director-driven assembly through ordered steps
//!    - Typestate wrapper so the result only exists once every step ran
//!
//! 5. **Singleton** ([`singleton`])
//!    - A lazily computed, refreshable, process-wide resource
//!
//! 6. **Prototype** ([`prototype`])
//!    - Creating objects by cloning registered prototypes
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin simple_factory
//! cargo run --bin factory_method
//! cargo run --bin abstract_factory
//! cargo run --bin builder
//! cargo run --bin singleton
//! cargo run --bin prototype
//!
//! # Every pattern, with variants chosen by a config file
//! cargo run --bin catalogue -- config/catalogue.toml
//! ```

pub mod abstract_factory;
pub mod builder;
pub mod config;
pub mod error;
pub mod factory_method;
pub mod prototype;
pub mod simple_factory;
pub mod singleton;
pub mod telemetry;

pub use config::CatalogueConfig;
pub use error::{PatternError, Result};
