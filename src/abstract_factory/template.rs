use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    One,
    Two,
}

pub trait AbstractProductA: fmt::Debug {
    fn family(&self) -> Family;
}

pub trait AbstractProductB: fmt::Debug {
    fn family(&self) -> Family;

    /// Products of one family are designed to collaborate with each other.
    fn collaborate_with(&self, product_a: &dyn AbstractProductA) -> bool {
        self.family() == product_a.family()
    }
}

#[derive(Debug)]
pub struct ProductA1;

impl AbstractProductA for ProductA1 {
    fn family(&self) -> Family {
        Family::One
    }
}

#[derive(Debug)]
pub struct ProductA2;

impl AbstractProductA for ProductA2 {
    fn family(&self) -> Family {
        Family::Two
    }
}

#[derive(Debug)]
pub struct ProductB1;

impl AbstractProductB for ProductB1 {
    fn family(&self) -> Family {
        Family::One
    }
}

#[derive(Debug)]
pub struct ProductB2;

impl AbstractProductB for ProductB2 {
    fn family(&self) -> Family {
        Family::Two
    }
}

pub trait Factory {
    fn family(&self) -> Family;

    fn create_product_a(&self) -> Box<dyn AbstractProductA>;

    fn create_product_b(&self) -> Box<dyn AbstractProductB>;
}

pub struct ConcreteFactory1;

impl Factory for ConcreteFactory1 {
    fn family(&self) -> Family {
        Family::One
    }

    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ProductA1)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ProductB1)
    }
}

pub struct ConcreteFactory2;

impl Factory for ConcreteFactory2 {
    fn family(&self) -> Family {
        Family::Two
    }

    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ProductA2)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ProductB2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_never_mix_families() {
        let factories: Vec<Box<dyn Factory>> = vec![Box::new(ConcreteFactory1), Box::new(ConcreteFactory2)];
        for factory in &factories {
            let a = factory.create_product_a();
            let b = factory.create_product_b();
            assert_eq!(a.family(), factory.family());
            assert_eq!(b.family(), factory.family());
            assert!(b.collaborate_with(a.as_ref()));
        }
    }

    #[test]
    fn test_cross_family_products_do_not_collaborate() {
        let a = ConcreteFactory1.create_product_a();
        let b = ConcreteFactory2.create_product_b();
        assert!(!b.collaborate_with(a.as_ref()));
    }
}
