//! Order decorator chain (Decorator pattern).
//!
//! A [`BasicCoffee`] is wrapped by zero or more decorators, each exclusively
//! owning the entity directly beneath it. Description and cost are computed
//! by a linear delegating walk; each layer adds its own contribution after
//! delegating inward. Cycles are impossible because every decorator is built
//! strictly around an already existing value.

use std::any::Any;

use crate::console::Console;
use crate::demo::Demo;
use crate::error::PatternResult;

/// A beverage with a cumulative description and cost.
pub trait Beverage: Send + Sync {
    /// Human-readable description, innermost layer first.
    fn description(&self) -> String;

    /// Total cost of the chain.
    fn cost(&self) -> f64;
}

/// Base entity with fixed literals.
#[derive(Debug, Default)]
pub struct BasicCoffee;

impl Beverage for BasicCoffee {
    fn description(&self) -> String {
        "Basic Coffee".to_string()
    }

    fn cost(&self) -> f64 {
        2.0
    }
}

/// Milk decorator: appends " + Milk" and adds 0.5.
pub struct Milk {
    inner: Box<dyn Beverage>,
}

impl Milk {
    /// Wrap an existing beverage.
    pub fn new(inner: Box<dyn Beverage>) -> Self {
        Self { inner }
    }
}

impl Beverage for Milk {
    fn description(&self) -> String {
        format!("{} + Milk", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 0.5
    }
}

/// Sugar decorator: appends " + Sugar" and adds 0.2.
pub struct Sugar {
    inner: Box<dyn Beverage>,
}

impl Sugar {
    /// Wrap an existing beverage.
    pub fn new(inner: Box<dyn Beverage>) -> Self {
        Self { inner }
    }
}

impl Beverage for Sugar {
    fn description(&self) -> String {
        format!("{} + Sugar", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 0.2
    }
}

/// Bundled decorator scenario: `Sugar(Milk(Basic))`.
#[derive(Debug)]
pub struct DecoratorDemo;

impl Demo for DecoratorDemo {
    fn name(&self) -> &str {
        "decorator"
    }

    fn summary(&self) -> &str {
        "decorators add description suffixes and cost increments by delegation"
    }

    fn tags(&self) -> &[&str] {
        &["structural", "orders"]
    }

    fn run(&self, console: &mut dyn Console) -> PatternResult<()> {
        let order = Sugar::new(Box::new(Milk::new(Box::new(BasicCoffee))));
        console.line(&format!("{} costs {:.2}", order.description(), order.cost()));
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
