//! Prototype
//!
//! New objects are made by cloning a registered prototype rather than by
//! naming a concrete type. The registry owns the prototypes; every `create`
//! hands out an independent copy.

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use crate::error::{PatternError, Result};

pub trait Prototype: fmt::Debug + fmt::Display {
    fn clone_box(&self) -> Box<dyn Prototype>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// Implemented per concrete type rather than as a blanket impl, which would
// also cover `Box<dyn Prototype>` and hand out boxes of boxes.
macro_rules! impl_prototype {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Prototype for $ty {
                fn clone_box(&self) -> Box<dyn Prototype> {
                    Box::new(self.clone())
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn Any {
                    self
                }
            }
        )+
    };
}

impl Clone for Box<dyn Prototype> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({},{})", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub at: Point,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label({:?} at {})", self.text, self.at)
    }
}

impl_prototype!(Point, Label);

#[derive(Debug, Default, Clone)]
pub struct PrototypeRegistry {
    prototypes: HashMap<String, Box<dyn Prototype>>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a prototype, replacing any previous one under `name`.
    pub fn register(&mut self, name: impl Into<String>, prototype: impl Prototype + 'static) {
        let name = name.into();
        debug!(%name, "registering prototype");
        self.prototypes.insert(name, Box::new(prototype));
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn Prototype>> {
        match self.prototypes.get(name) {
            Some(prototype) => Ok(prototype.clone_box()),
            None => {
                warn!(name, "no prototype registered");
                Err(PatternError::unknown_variant("prototype", name, self.names()))
            }
        }
    }

    /// Clones the prototype and applies `customise` to the copy. Fails if
    /// the prototype registered under `name` is not a `T`.
    pub fn create_with<T, F>(&self, name: &str, customise: F) -> Result<Box<dyn Prototype>>
    where
        T: 'static,
        F: FnOnce(&mut T),
    {
        let mut object = self.create(name)?;
        match object.as_any_mut().downcast_mut::<T>() {
            Some(concrete) => customise(concrete),
            None => {
                let expected = type_name::<T>().rsplit("::").next().unwrap_or_default();
                warn!(name, expected, "prototype has a different type");
                return Err(PatternError::PrototypeType {
                    name: name.to_string(),
                    expected,
                });
            }
        }
        Ok(object)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.prototypes.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PrototypeRegistry {
        let mut registry = PrototypeRegistry::new();
        registry.register("origin", Point::new(0, 0));
        registry.register(
            "caption",
            Label {
                text: "Prototype".to_string(),
                at: Point::new(1, 2),
            },
        );
        registry
    }

    #[test]
    fn test_create_clones_prototype() {
        let registry = registry();
        let point = registry.create("origin").unwrap();
        assert_eq!(point.to_string(), "Point(0,0)");
        assert_eq!(point.as_any().downcast_ref::<Point>(), Some(&Point::new(0, 0)));
    }

    #[test]
    fn test_clones_are_independent() {
        let registry = registry();
        let mut first = registry.create("caption").unwrap();
        if let Some(label) = first.as_any_mut().downcast_mut::<Label>() {
            label.text = "changed".to_string();
        }

        let second = registry.create("caption").unwrap();
        assert_eq!(second.to_string(), "Label(\"Prototype\" at Point(1,2))");
        assert!(first.to_string().contains("changed"));
    }

    #[test]
    fn test_create_with_customises_copy() {
        let registry = registry();
        let moved = registry
            .create_with::<Point, _>("origin", |p| {
                p.x = 7;
                p.y = 14;
            })
            .unwrap();
        assert_eq!(moved.to_string(), "Point(7,14)");
        assert_eq!(registry.create("origin").unwrap().to_string(), "Point(0,0)");
    }

    #[test]
    fn test_create_with_wrong_type_is_an_error() {
        let registry = registry();
        let err = registry
            .create_with::<Label, _>("origin", |label| label.text = "x".to_string())
            .unwrap_err();
        assert!(matches!(err, PatternError::PrototypeType { .. }));
        assert_eq!(err.to_string(), "prototype 'origin' is not a Label");
    }

    #[test]
    fn test_unknown_prototype_is_an_error() {
        let err = registry().create("square").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown prototype 'square' (expected one of: caption, origin)"
        );
    }

    #[test]
    fn test_register_replaces_and_boxes_clone() {
        let mut registry = registry();
        registry.register("origin", Point::new(5, 5));
        let boxed = registry.create("origin").unwrap();
        let copy = boxed.clone();
        assert_eq!(copy.to_string(), "Point(5,5)");
        assert_eq!(registry.names(), vec!["caption", "origin"]);
    }
}
