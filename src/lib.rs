//! # Patternkit
//!
//! **Patternkit** is a collection of six classic design-pattern
//! demonstrations — Observer, Strategy, Singleton, Factory Method, Adapter,
//! and Decorator — packaged as runnable demos behind a small registry and
//! streaming runner.
//!
//! ## Overview
//!
//! Each pattern lives in its own module as a handful of small entities plus
//! a [`Demo`] implementation that executes the bundled scenario with fixed
//! literal inputs and writes a human-readable transcript:
//!
//! ```text
//! observer   - a ticker broadcasts price changes to watchers in order
//! strategy   - a checkout context delegates to the assigned payment strategy
//! singleton  - a lazily constructed process-wide print spooler
//! factory    - a string key dispatches shape construction, unknown keys fail
//! adapter    - a legacy gateway wrapped behind a target interface
//! decorator  - coffee decorators accumulate description and cost
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use patternkit::prelude::*;
//! use tokio_stream::StreamExt;
//!
//! # async fn example() -> ShowcaseResult<()> {
//! let runner = DefaultRunner::new(default_registry());
//! let mut stream = runner.run_all(&RunConfig::new()).await?;
//!
//! while let Some(event) = stream.next().await {
//!     if let DemoEvent::Line { text, .. } = event {
//!         println!("{text}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - Generic `Demo` trait with name/tag-based selection
//! - Insertion-ordered `Registry` for demo management
//! - Async event streams for run observation
//! - Explicit precondition errors instead of panics

pub mod adapter;
mod config;
mod console;
pub mod decorator;
mod demo;
mod error;
pub mod factory;
pub mod observer;
mod registry;
mod runner;
pub mod singleton;
pub mod strategy;
pub mod stream;

pub mod prelude;

// Re-export core types
pub use config::RunConfig;
pub use console::{BufferConsole, Console, StdoutConsole};
pub use demo::{Demo, DemoExt};
pub use error::{
    PatternError, PatternResult, RegistryError, RegistryResult, ShowcaseError, ShowcaseResult,
};
pub use registry::{default_registry, Registry, RegistryBuilder};
pub use runner::{DefaultRunner, ShowcaseRunner};
pub use stream::{create_stream, DemoEvent, DemoEventStream, EventSender, EventStream, StreamBuilder};

// Re-export async-trait for convenience
pub use async_trait::async_trait;
