//! Run configuration for the showcase runner.

/// Configuration for a showcase run.
///
/// Built fluently:
///
/// ```rust
/// use patternkit::RunConfig;
///
/// let config = RunConfig::new()
///     .with_name("nightly")
///     .verbose()
///     .stop_on_failure();
///
/// assert_eq!(config.name(), "nightly");
/// assert!(config.is_verbose());
/// ```
#[derive(Debug, Clone)]
pub struct RunConfig {
    name: String,
    verbose: bool,
    stop_on_failure: bool,
    buffer_size: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            verbose: false,
            stop_on_failure: false,
            buffer_size: 64,
        }
    }
}

impl RunConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the run name, used in tracing spans.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Mirror every transcript line as an info-level tracing event.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Stop the run after the first failing demo.
    pub fn stop_on_failure(mut self) -> Self {
        self.stop_on_failure = true;
        self
    }

    /// Set the event channel buffer size.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// The run name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether verbose tracing is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Whether the run stops at the first failure.
    pub fn stops_on_failure(&self) -> bool {
        self.stop_on_failure
    }

    /// The event channel buffer size.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("run name must not be empty".to_string());
        }
        if self.buffer_size == 0 {
            return Err("buffer size must be greater than 0".to_string());
        }
        Ok(())
    }
}
