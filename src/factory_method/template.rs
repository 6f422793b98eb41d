use std::fmt;

pub trait Product: fmt::Debug {
    fn name(&self) -> &'static str;
}

#[derive(Debug)]
pub struct ConcreteProductA;

impl Product for ConcreteProductA {
    fn name(&self) -> &'static str {
        "ConcreteProductA"
    }
}

#[derive(Debug)]
pub struct ConcreteProductB;

impl Product for ConcreteProductB {
    fn name(&self) -> &'static str {
        "ConcreteProductB"
    }
}

pub trait Creator {
    /// The factory method.
    fn factory_method(&self) -> Box<dyn Product>;

    /// Business logic that relies on the product without naming its type.
    fn operation(&self) -> String {
        let product = self.factory_method();
        format!("creator worked with {}", product.name())
    }
}

pub struct ConcreteCreatorA;

impl Creator for ConcreteCreatorA {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductA)
    }
}

pub struct ConcreteCreatorB;

impl Creator for ConcreteCreatorB {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_creator_yields_one_product() {
        assert_eq!(ConcreteCreatorA.factory_method().name(), "ConcreteProductA");
        assert_eq!(ConcreteCreatorB.factory_method().name(), "ConcreteProductB");
    }

    #[test]
    fn test_operation_through_trait_object() {
        let creators: Vec<Box<dyn Creator>> = vec![Box::new(ConcreteCreatorA), Box::new(ConcreteCreatorB)];
        let reports: Vec<String> = creators.iter().map(|c| c.operation()).collect();
        assert_eq!(
            reports,
            vec![
                "creator worked with ConcreteProductA",
                "creator worked with ConcreteProductB"
            ]
        );
    }
}
