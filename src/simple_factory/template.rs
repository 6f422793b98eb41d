use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use super::tag_matches;
use crate::error::{PatternError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductKind {
    A,
    B,
}

impl ProductKind {
    pub const ALL: [ProductKind; 2] = [ProductKind::A, ProductKind::B];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductKind::A => "A",
            ProductKind::B => "B",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductKind {
    type Err = PatternError;

    fn from_str(tag: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| tag_matches(tag, kind.as_str()))
            .ok_or_else(|| {
                PatternError::unknown_variant("product", tag, Self::ALL.map(ProductKind::as_str))
            })
    }
}

pub trait Product: fmt::Debug {
    fn kind(&self) -> ProductKind;

    fn describe(&self) -> String {
        format!("ConcreteProduct{}", self.kind())
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConcreteProductA;

impl Product for ConcreteProductA {
    fn kind(&self) -> ProductKind {
        ProductKind::A
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConcreteProductB;

impl Product for ConcreteProductB {
    fn kind(&self) -> ProductKind {
        ProductKind::B
    }
}

/// The factory itself holds no state; creation is a static method.
pub struct Factory;

impl Factory {
    pub fn get_product(tag: &str) -> Result<Box<dyn Product>> {
        let kind = tag.parse::<ProductKind>().inspect_err(|err| {
            warn!(%err, "rejected product tag");
        })?;
        Ok(Self::create(kind))
    }

    /// Infallible creation once the tag has already been resolved.
    pub fn create(kind: ProductKind) -> Box<dyn Product> {
        debug!(%kind, "creating product");
        match kind {
            ProductKind::A => Box::new(ConcreteProductA),
            ProductKind::B => Box::new(ConcreteProductB),
        }
    }
}
