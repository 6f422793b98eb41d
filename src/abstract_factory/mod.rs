//! Abstract Factory
//!
//! A factory produces a whole family of related products. Every product a
//! single factory hands out belongs to that factory's family; families are
//! never mixed.
//!
//! - [`template`]: two factories, each producing a product A and a product B
//! - [`skin`]: Spring and Summer UI skins (button, text field, combo box)
//! - [`diagram`]: plain-text and SVG diagram families, where associated
//!   types stop a component from one family landing in the other's diagram

pub mod diagram;
pub mod skin;
pub mod template;

pub use diagram::{
    create_diagram, Diagram, DiagramFactory, DiagramStyle, SvgDiagramFactory, TextDiagramFactory,
};
pub use skin::{Button, ComboBox, Skin, SkinFactory, SpringSkinFactory, SummerSkinFactory, TextField};
pub use template::{ConcreteFactory1, ConcreteFactory2, Factory, Family};
