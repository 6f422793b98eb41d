//! Builder
//!
//! A director drives a builder through ordered steps to assemble a
//! composite product; concrete builders decide what each step puts in.
//!
//! - [`template`]: `Builder` with three part steps, a `Director`, and the
//!   [`Assembly`] typestate wrapper whose `finish()` exists only once every
//!   step has run
//! - [`form`]: a login form assembled as HTML or as a Tk script

pub mod form;
pub mod template;

pub use form::{create_login_form, EntryKind, FormBuilder, FormStyle, HtmlFormBuilder, TkFormBuilder};
pub use template::{
    Assembly, Builder, BuilderVariant, ConcreteBuilderA, ConcreteBuilderB, Director, Product,
};
