//! Singleton accessor.
//!
//! [`Spooler::instance`] returns the unique process-wide print spooler,
//! constructing it lazily on first access. `OnceLock` provides the mutual
//! exclusion around check-and-create, so concurrent first callers observe
//! exactly one construction and the same `'static` reference.

use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use crate::console::Console;
use crate::demo::Demo;
use crate::error::PatternResult;

static INSTANCE: OnceLock<Spooler> = OnceLock::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

/// Process-wide print spooler, lazily constructed on first access.
#[derive(Debug)]
pub struct Spooler {
    _private: (),
}

impl Spooler {
    fn new() -> Self {
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("print spooler constructed");
        Self { _private: () }
    }

    /// The unique spooler instance.
    ///
    /// Constructs the spooler on the first call from any thread; every call,
    /// including concurrent first calls, returns the same reference.
    pub fn instance() -> &'static Spooler {
        INSTANCE.get_or_init(Spooler::new)
    }

    /// How many times the spooler has been constructed (0 before first
    /// access, 1 forever after).
    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    /// Spool a document. Pure side effect, no state change.
    pub fn print(&self, console: &mut dyn Console, doc: &str) {
        console.line(&format!("Spooling document: {doc}"));
    }
}

/// Bundled singleton scenario: two accessor calls, same instance, two prints.
#[derive(Debug)]
pub struct SingletonDemo;

impl Demo for SingletonDemo {
    fn name(&self) -> &str {
        "singleton"
    }

    fn summary(&self) -> &str {
        "a lazily constructed process-wide spooler returned by every accessor call"
    }

    fn tags(&self) -> &[&str] {
        &["creational"]
    }

    fn run(&self, console: &mut dyn Console) -> PatternResult<()> {
        let spooler = Spooler::instance();
        spooler.print(console, "invoice-0001.pdf");
        spooler.print(console, "report-Q3.pdf");

        let again = Spooler::instance();
        console.line(&format!(
            "same instance across calls: {}",
            std::ptr::eq(spooler, again)
        ));
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
    use std::thread;

    #[test]
    fn test_concurrent_first_calls_see_one_instance() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| Spooler::instance() as *const Spooler as usize))
            .collect();

        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
        assert!(std::ptr::eq(Spooler::instance(), Spooler::instance()));
        assert_eq!(Spooler::constructions(), 1);
    }

    #[test]
    fn test_print_is_a_pure_side_effect() {
        let mut console = BufferConsole::new();
        Spooler::instance().print(&mut console, "a.pdf");
        Spooler::instance().print(&mut console, "a.pdf");
        assert_eq!(
            console.lines(),
            &["Spooling document: a.pdf", "Spooling document: a.pdf"]
        );
    }

    #[test]
    fn test_demo_transcript() {
        let mut console = BufferConsole::new();
        SingletonDemo.run(&mut console).unwrap();
        assert_eq!(
            console.lines(),
            &[
                "Spooling document: invoice-0001.pdf",
                "Spooling document: report-Q3.pdf",
                "same instance across calls: true",
            ]
        );
    }
}
