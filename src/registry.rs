//! Registry for managing pattern demonstrations.
//!
//! The `Registry` is a container for demos that supports registration,
//! lookup by name, and selection by tag, preserving registration order.

use std::collections::HashMap;

use crate::adapter::AdapterDemo;
use crate::decorator::DecoratorDemo;
use crate::demo::Demo;
use crate::error::{RegistryError, RegistryResult};
use crate::factory::FactoryDemo;
use crate::observer::ObserverDemo;
use crate::singleton::SingletonDemo;
use crate::strategy::StrategyDemo;

/// A registry for managing demos.
///
/// The registry stores demos and provides methods for:
/// - Registration by name
/// - Lookup by name
/// - Selection by tag matching
/// - Listing all registered demos in registration order
///
/// # Example
///
/// ```rust
/// use patternkit::{Demo, Registry};
/// use patternkit::observer::ObserverDemo;
///
/// let mut registry: Registry<dyn Demo> = Registry::new();
/// registry.register(Box::new(ObserverDemo));
///
/// assert!(registry.get("observer").is_some());
/// ```
#[derive(Debug)]
pub struct Registry<D: ?Sized> {
    demos: HashMap<String, Box<D>>,
    ordered: Vec<String>,
}

impl<D: Demo + ?Sized> Registry<D> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            demos: HashMap::new(),
            ordered: Vec::new(),
        }
    }

    /// Register a demo.
    ///
    /// The demo is registered under its name. If a demo with the same name
    /// already exists, it will be replaced.
    pub fn register(&mut self, demo: Box<D>) {
        let name = demo.name().to_string();
        tracing::debug!(demo = %name, "registering demo");
        if !self.demos.contains_key(&name) {
            self.ordered.push(name.clone());
        }
        self.demos.insert(name, demo);
    }

    /// Register a demo, returning an error if already registered.
    pub fn register_unique(&mut self, demo: Box<D>) -> RegistryResult<()> {
        let name = demo.name().to_string();
        if name.is_empty() {
            return Err(RegistryError::InvalidName(name));
        }
        if self.demos.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        self.ordered.push(name.clone());
        self.demos.insert(name, demo);
        Ok(())
    }

    /// Get a demo by name.
    pub fn get(&self, name: &str) -> Option<&D> {
        self.demos.get(name).map(|d| d.as_ref())
    }

    /// Find the first demo matching the given key (name or tag).
    ///
    /// Demos are checked in registration order.
    pub fn find(&self, key: &str) -> Option<&D> {
        self.ordered
            .iter()
            .filter_map(|name| self.demos.get(name))
            .find(|d| d.matches(key))
            .map(|d| d.as_ref())
    }

    /// Find all demos matching the given key.
    pub fn find_all(&self, key: &str) -> Vec<&D> {
        self.ordered
            .iter()
            .filter_map(|name| self.demos.get(name))
            .filter(|d| d.matches(key))
            .map(|d| d.as_ref())
            .collect()
    }

    /// Check if a demo with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.demos.contains_key(name)
    }

    /// Remove a demo by name.
    pub fn remove(&mut self, name: &str) -> Option<Box<D>> {
        self.ordered.retain(|n| n != name);
        self.demos.remove(name)
    }

    /// Get the names of all registered demos, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.ordered.iter().map(|s| s.as_str()).collect()
    }

    /// Get the number of registered demos.
    pub fn len(&self) -> usize {
        self.demos.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }

    /// Clear all demos from the registry.
    pub fn clear(&mut self) {
        self.demos.clear();
        self.ordered.clear();
    }

    /// Iterate over all demos in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &D> {
        self.ordered
            .iter()
            .filter_map(move |name| self.demos.get(name))
            .map(|d| d.as_ref())
    }
}

impl<D: Demo + ?Sized> Default for Registry<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating registries with fluent API.
pub struct RegistryBuilder<D: ?Sized> {
    registry: Registry<D>,
}

impl<D: Demo + ?Sized> RegistryBuilder<D> {
    /// Create a new registry builder.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Add a demo to the registry.
    pub fn with(mut self, demo: Box<D>) -> Self {
        self.registry.register(demo);
        self
    }

    /// Build the registry.
    pub fn build(self) -> Registry<D> {
        self.registry
    }
}

impl<D: Demo + ?Sized> Default for RegistryBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// The six bundled demonstrations, registered in canonical order.
pub fn default_registry() -> Registry<dyn Demo> {
    RegistryBuilder::<dyn Demo>::new()
        .with(Box::new(ObserverDemo))
        .with(Box::new(StrategyDemo))
        .with(Box::new(SingletonDemo))
        .with(Box::new(FactoryDemo))
        .with(Box::new(AdapterDemo))
        .with(Box::new(DecoratorDemo))
        .build()
}
