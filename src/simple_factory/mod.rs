//! Simple Factory
//!
//! One static creation function maps a string tag to a concrete product.
//! Unrecognised tags produce [`PatternError::UnknownVariant`](crate::PatternError)
//! instead of an absent product, so callers cannot forget the failure case.
//!
//! - [`template`]: the bare shape, two products selected by `"A"` / `"B"`
//! - [`chart`]: charts selected by `"histogram"`, `"pie"`, `"line"`

pub mod chart;
pub mod template;

pub use chart::{Chart, ChartFactory, ChartKind};
pub use template::{Factory, Product, ProductKind};

/// Tags are compared after trimming, ignoring ASCII case.
pub(crate) fn tag_matches(tag: &str, candidate: &str) -> bool {
    tag.trim().eq_ignore_ascii_case(candidate)
}
