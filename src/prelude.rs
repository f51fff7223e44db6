//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types and traits from Patternkit for
//! convenient glob imports.
//!
//! # Example
//!
//! ```rust
//! use patternkit::prelude::*;
//! ```

// Console
pub use crate::console::{BufferConsole, Console, StdoutConsole};

// Core traits
pub use crate::demo::{Demo, DemoExt};

// Registry
pub use crate::registry::{default_registry, Registry, RegistryBuilder};

// Runner and configuration
pub use crate::config::RunConfig;
pub use crate::runner::{DefaultRunner, ShowcaseRunner};

// Streams
pub use crate::stream::{create_stream, DemoEvent, DemoEventStream, EventSender, EventStream, StreamBuilder};

// Errors
pub use crate::error::{
    PatternError, PatternResult, RegistryError, RegistryResult, ShowcaseError, ShowcaseResult,
};

// The bundled demonstrations
pub use crate::adapter::AdapterDemo;
pub use crate::decorator::DecoratorDemo;
pub use crate::factory::FactoryDemo;
pub use crate::observer::ObserverDemo;
pub use crate::singleton::SingletonDemo;
pub use crate::strategy::StrategyDemo;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
