//! The `Demo` trait: the contract every pattern demonstration implements.
//!
//! A demo is a self-contained scenario that builds a small object graph with
//! fixed literal inputs and writes a human-readable transcript to a
//! [`Console`](crate::console::Console). Demos are registered in a
//! [`Registry`](crate::registry::Registry) and selected by name or tag.

use std::any::Any;
use std::fmt::Debug;

use crate::console::Console;
use crate::error::PatternResult;

/// A runnable design-pattern demonstration.
///
/// # Example
///
/// ```rust
/// use patternkit::{Console, Demo, PatternResult};
/// use std::any::Any;
///
/// #[derive(Debug)]
/// struct HelloDemo;
///
/// impl Demo for HelloDemo {
///     fn name(&self) -> &str {
///         "hello"
///     }
///
///     fn summary(&self) -> &str {
///         "prints a greeting"
///     }
///
///     fn tags(&self) -> &[&str] {
///         &["greeting"]
///     }
///
///     fn run(&self, console: &mut dyn Console) -> PatternResult<()> {
///         console.line("Hello, patterns!");
///         Ok(())
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
/// ```
pub trait Demo: Send + Sync + Debug {
    /// Returns the unique name of this demo.
    ///
    /// This name is used for registration and lookup in the registry.
    fn name(&self) -> &str;

    /// One-line description of what the demo shows.
    fn summary(&self) -> &str;

    /// Classification tags (e.g. "behavioral", "structural", "creational").
    ///
    /// Return an empty slice if the demo doesn't use tag-based matching.
    fn tags(&self) -> &[&str] {
        &[]
    }

    /// Check if this demo matches the given key.
    ///
    /// A demo matches its own name and any of its tags.
    fn matches(&self, key: &str) -> bool {
        self.name() == key || self.tags().iter().any(|tag| *tag == key)
    }

    /// Execute the demonstration with its fixed literal inputs, writing the
    /// transcript to `console`.
    fn run(&self, console: &mut dyn Console) -> PatternResult<()>;

    /// Downcast to concrete type for advanced usage.
    fn as_any(&self) -> &dyn Any;
}

/// Extension trait for demo type checking.
pub trait DemoExt: Demo {
    /// Check if this demo is of type T.
    fn is<T: Demo + 'static>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcast to type T.
    fn downcast_ref<T: Demo + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl<D: Demo + ?Sized> DemoExt for D {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferConsole;

    #[derive(Debug)]
    struct TestDemo;

    impl Demo for TestDemo {
        fn name(&self) -> &str {
            "test"
        }

        fn summary(&self) -> &str {
            "a test demo"
        }

        fn tags(&self) -> &[&str] {
            &["behavioral", "toy"]
        }

        fn run(&self, console: &mut dyn Console) -> PatternResult<()> {
            console.line("ran");
            Ok(())
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_demo_matches_name_and_tags() {
        let demo = TestDemo;
        assert!(demo.matches("test"));
        assert!(demo.matches("behavioral"));
        assert!(demo.matches("toy"));
        assert!(!demo.matches("structural"));
    }

    #[test]
    fn test_demo_downcast() {
        let demo = TestDemo;
        assert!(demo.is::<TestDemo>());
        assert!(demo.downcast_ref::<TestDemo>().is_some());
    }

    #[test]
    fn test_demo_run_writes_transcript() {
        let mut console = BufferConsole::new();
        TestDemo.run(&mut console).unwrap();
        assert_eq!(console.lines(), &["ran"]);
    }
}
