//! Component family registry.
//!
//! A host registers one factory per component family name. A component that
//! needs to replace itself with a different family resolves the factory by
//! name; a missing family is a checked `DomainError::UnregisteredFamily` so the
//! caller decides whether it is fatal.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::DomainError;

/// A component instance mounted into a host slot.
pub trait MountedComponent: Send + fmt::Debug {
    /// The family name this component belongs to.
    fn family(&self) -> &str;
}

/// Constructs components of one family from a model of type `M`.
pub trait ComponentFactory<M>: Send + Sync {
    /// Builds a new component from `model`.
    fn construct(&self, model: M) -> Box<dyn MountedComponent>;
}

/// Registry of component factories keyed by family name.
pub struct ComponentRegistry<M> {
    factories: HashMap<String, Arc<dyn ComponentFactory<M>>>,
}

impl<M> ComponentRegistry<M> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers `factory` under `family`, replacing any previous entry.
    pub fn register(&mut self, family: impl Into<String>, factory: Arc<dyn ComponentFactory<M>>) {
        self.factories.insert(family.into(), factory);
    }

    /// Resolves the factory registered for `family`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnregisteredFamily` if no factory is registered.
    pub fn resolve(&self, family: &str) -> Result<Arc<dyn ComponentFactory<M>>, DomainError> {
        self.factories
            .get(family)
            .cloned()
            .ok_or_else(|| DomainError::UnregisteredFamily(family.to_owned()))
    }
}

impl<M> Default for ComponentRegistry<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for ComponentRegistry<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut families: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        families.sort_unstable();
        f.debug_struct("ComponentRegistry")
            .field("families", &families)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Widget(String);

    impl MountedComponent for Widget {
        fn family(&self) -> &str {
            "widget"
        }
    }

    struct WidgetFactory;

    impl ComponentFactory<String> for WidgetFactory {
        fn construct(&self, model: String) -> Box<dyn MountedComponent> {
            Box::new(Widget(model))
        }
    }

    #[test]
    fn test_resolve_returns_registered_factory() {
        // Arrange
        let mut registry = ComponentRegistry::new();
        registry.register("widget", Arc::new(WidgetFactory));

        // Act
        let factory = registry.resolve("widget").unwrap();
        let component = factory.construct("model".to_owned());

        // Assert
        assert_eq!(component.family(), "widget");
    }

    #[test]
    fn test_resolve_unregistered_family_is_checked_error() {
        // Arrange
        let registry: ComponentRegistry<String> = ComponentRegistry::new();

        // Act
        let result = registry.resolve("hotgraphic");

        // Assert
        match result {
            Err(DomainError::UnregisteredFamily(name)) => assert_eq!(name, "hotgraphic"),
            Err(other) => panic!("expected UnregisteredFamily, got {other:?}"),
            Ok(_) => panic!("expected UnregisteredFamily, got a factory"),
        }
    }
}
