//! Shape factory (Factory Method pattern).
//!
//! [`create_shape`] maps a string key, case-insensitively, to a freshly
//! constructed [`Shape`]. Any key outside the known set — including the empty
//! string and whitespace — fails with [`PatternError::UnknownShape`].

use std::any::Any;
use std::fmt::Debug;

use crate::console::Console;
use crate::demo::Demo;
use crate::error::{PatternError, PatternResult};

/// Polymorphic product constructed by the factory.
pub trait Shape: Send + Sync + Debug {
    /// The canonical (lowercase) name of this shape kind.
    fn name(&self) -> &'static str;

    /// Describe drawing this shape.
    fn draw(&self) -> String;
}

#[derive(Debug)]
struct Circle;

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn draw(&self) -> String {
        "Drawing a circle".to_string()
    }
}

#[derive(Debug)]
struct Square;

impl Shape for Square {
    fn name(&self) -> &'static str {
        "square"
    }

    fn draw(&self) -> String {
        "Drawing a square".to_string()
    }
}

#[derive(Debug)]
struct Rectangle;

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn draw(&self) -> String {
        "Drawing a rectangle".to_string()
    }
}

/// Construct a shape for the given type key.
///
/// Matching is case-insensitive over the closed set `circle`, `square`,
/// `rectangle`; a fresh instance is returned on every call.
///
/// # Errors
///
/// Returns [`PatternError::UnknownShape`] for any other input. The key is not
/// trimmed, so `" circle"` is unrecognized.
pub fn create_shape(kind: &str) -> PatternResult<Box<dyn Shape>> {
    match kind.to_ascii_lowercase().as_str() {
        "circle" => Ok(Box::new(Circle)),
        "square" => Ok(Box::new(Square)),
        "rectangle" => Ok(Box::new(Rectangle)),
        _ => Err(PatternError::UnknownShape(kind.to_string())),
    }
}

/// Bundled factory scenario: three known keys in mixed case.
///
/// The error path exists but is not exercised by the bundled inputs.
#[derive(Debug)]
pub struct FactoryDemo;

impl Demo for FactoryDemo {
    fn name(&self) -> &str {
        "factory"
    }

    fn summary(&self) -> &str {
        "a string key dispatches construction of one of several shape products"
    }

    fn tags(&self) -> &[&str] {
        &["creational", "shapes"]
    }

    fn run(&self, console: &mut dyn Console) -> PatternResult<()> {
        for kind in ["circle", "SQUARE", "Rectangle"] {
            let shape = create_shape(kind)?;
            console.line(&shape.draw());
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferConsole;

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(create_shape("circle").unwrap().name(), "circle");
        assert_eq!(create_shape("CIRCLE").unwrap().name(), "circle");
        assert_eq!(create_shape("SqUaRe").unwrap().name(), "square");
    }

    #[test]
    fn test_unknown_keys_fail() {
        for kind in ["triangle", "", "   ", " circle"] {
            assert_eq!(
                create_shape(kind).unwrap_err(),
                PatternError::UnknownShape(kind.to_string())
            );
        }
    }

    #[test]
    fn test_demo_transcript() {
        let mut console = BufferConsole::new();
        FactoryDemo.run(&mut console).unwrap();
        assert_eq!(
            console.lines(),
            &[
                "Drawing a circle",
                "Drawing a square",
                "Drawing a rectangle",
            ]
        );
    }
}
