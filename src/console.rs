//! Output port for demo text.
//!
//! Every pattern demonstration produces a sequence of human-readable lines.
//! The `Console` trait is the single seam those lines flow through, so the
//! same demo code can print to stdout in the showcase binary and be captured
//! verbatim in tests.

/// Sink for the lines a demonstration produces.
pub trait Console {
    /// Write one line of demo output.
    fn line(&mut self, text: &str);
}

/// Console that prints each line to stdout and mirrors it as a tracing event.
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    /// Create a stdout-backed console.
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn line(&mut self, text: &str) {
        tracing::debug!(target: "patternkit::console", "{text}");
        println!("{text}");
    }
}

/// Console that records lines in memory.
///
/// Used by the runner to capture a demo's transcript before streaming it,
/// and by tests to assert on exact output ordering.
#[derive(Debug, Default)]
pub struct BufferConsole {
    lines: Vec<String>,
}

impl BufferConsole {
    /// Create an empty buffer console.
    pub fn new() -> Self {
        Self::default()
    }

    /// The lines recorded so far, in the order they were written.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the console and return the recorded lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Check whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Console for BufferConsole {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_console_records_in_order() {
        let mut console = BufferConsole::new();
        assert!(console.is_empty());

        console.line("first");
        console.line("second");

        assert_eq!(console.lines(), &["first", "second"]);
        assert_eq!(console.into_lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_stdout_console_accepts_lines() {
        let mut console = StdoutConsole::new();
        console.line("stdout console smoke line");
    }
}
