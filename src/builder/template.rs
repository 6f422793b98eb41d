use std::marker::PhantomData;

use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Product {
    part_a: String,
    part_b: String,
    part_c: String,
}

impl Product {
    pub fn part_a(&self) -> &str {
        &self.part_a
    }

    pub fn part_b(&self) -> &str {
        &self.part_b
    }

    pub fn part_c(&self) -> &str {
        &self.part_c
    }

    pub fn is_complete(&self) -> bool {
        !self.part_a.is_empty() && !self.part_b.is_empty() && !self.part_c.is_empty()
    }
}

/// Building steps. `get_result` is unguarded: called before every step ran
/// it returns a product whose missing parts are empty. Use [`Director`] or
/// [`Assembly`] to get the ordering checked by the compiler.
pub trait Builder {
    fn build_part_a(&mut self);
    fn build_part_b(&mut self);
    fn build_part_c(&mut self);

    fn get_result(&self) -> Product;
}

impl<B: Builder + ?Sized> Builder for &mut B {
    fn build_part_a(&mut self) {
        (**self).build_part_a()
    }

    fn build_part_b(&mut self) {
        (**self).build_part_b()
    }

    fn build_part_c(&mut self) {
        (**self).build_part_c()
    }

    fn get_result(&self) -> Product {
        (**self).get_result()
    }
}

impl<B: Builder + ?Sized> Builder for Box<B> {
    fn build_part_a(&mut self) {
        (**self).build_part_a()
    }

    fn build_part_b(&mut self) {
        (**self).build_part_b()
    }

    fn build_part_c(&mut self) {
        (**self).build_part_c()
    }

    fn get_result(&self) -> Product {
        (**self).get_result()
    }
}

#[derive(Debug, Default)]
pub struct ConcreteBuilderA {
    product: Product,
}

impl Builder for ConcreteBuilderA {
    fn build_part_a(&mut self) {
        self.product.part_a = "A1".to_string();
    }

    fn build_part_b(&mut self) {
        self.product.part_b = "B1".to_string();
    }

    fn build_part_c(&mut self) {
        self.product.part_c = "C1".to_string();
    }

    fn get_result(&self) -> Product {
        self.product.clone()
    }
}

#[derive(Debug, Default)]
pub struct ConcreteBuilderB {
    product: Product,
}

impl Builder for ConcreteBuilderB {
    fn build_part_a(&mut self) {
        self.product.part_a = "A2".to_string();
    }

    fn build_part_b(&mut self) {
        self.product.part_b = "B2".to_string();
    }

    fn build_part_c(&mut self) {
        self.product.part_c = "C2".to_string();
    }

    fn get_result(&self) -> Product {
        self.product.clone()
    }
}

// Stage markers for the assembly
pub struct Empty;
pub struct HasPartA;
pub struct HasPartB;
pub struct Complete;

/// Wraps a builder and tracks which steps have run in its type.
/// `finish` is only available on `Assembly<B, Complete>`.
pub struct Assembly<B, Stage> {
    builder: B,
    _stage: PhantomData<Stage>,
}

impl<B: Builder> Assembly<B, Empty> {
    pub fn new(builder: B) -> Self {
        Assembly {
            builder,
            _stage: PhantomData,
        }
    }

    pub fn part_a(mut self) -> Assembly<B, HasPartA> {
        self.builder.build_part_a();
        Assembly {
            builder: self.builder,
            _stage: PhantomData,
        }
    }
}

impl<B: Builder> Assembly<B, HasPartA> {
    pub fn part_b(mut self) -> Assembly<B, HasPartB> {
        self.builder.build_part_b();
        Assembly {
            builder: self.builder,
            _stage: PhantomData,
        }
    }
}

impl<B: Builder> Assembly<B, HasPartB> {
    pub fn part_c(mut self) -> Assembly<B, Complete> {
        self.builder.build_part_c();
        Assembly {
            builder: self.builder,
            _stage: PhantomData,
        }
    }
}

impl<B: Builder> Assembly<B, Complete> {
    #[must_use]
    pub fn finish(self) -> Product {
        self.builder.get_result()
    }

    pub fn into_builder(self) -> B {
        self.builder
    }
}

pub struct Director<B> {
    builder: B,
}

impl<B: Builder> Director<B> {
    pub fn new(builder: B) -> Self {
        Director { builder }
    }

    pub fn set_builder(&mut self, builder: B) {
        self.builder = builder;
    }

    /// Runs every step in order, then hands back the result.
    pub fn construct(&mut self) -> Product {
        Assembly::new(&mut self.builder)
            .part_a()
            .part_b()
            .part_c()
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuilderVariant {
    #[default]
    A,
    B,
}

impl BuilderVariant {
    pub fn builder(self) -> Box<dyn Builder> {
        debug!(variant = ?self, "selecting concrete builder");
        match self {
            BuilderVariant::A => Box::new(ConcreteBuilderA::default()),
            BuilderVariant::B => Box::new(ConcreteBuilderB::default()),
        }
    }
}
