//! Error types for the Patternkit showcase.

use thiserror::Error;

/// Root error type for showcase operations.
#[derive(Error, Debug)]
pub enum ShowcaseError {
    /// Errors raised by the pattern demonstrations themselves
    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// Registry-related errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Stream-related errors
    #[error("Stream error: {0}")]
    Stream(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

/// Errors raised by the pattern demonstrations.
///
/// The shape factory's unrecognized-key error is the only error a bundled
/// demo can genuinely produce; the remaining variants surface precondition
/// violations explicitly instead of panicking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The shape factory was given a key outside its known set
    #[error("Unrecognized shape type: {0:?}")]
    UnknownShape(String),

    /// Checkout was attempted before any payment strategy was assigned
    #[error("No payment strategy set before checkout")]
    StrategyNotSet,
}

/// Errors that can occur in demo registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Demo already registered with this name
    #[error("Demo already registered: {0}")]
    AlreadyRegistered(String),

    /// No demo found with the given name
    #[error("Demo not found: {0}")]
    NotFound(String),

    /// Registry is empty
    #[error("Registry is empty")]
    Empty,

    /// Invalid demo name
    #[error("Invalid demo name: {0}")]
    InvalidName(String),
}

impl From<String> for ShowcaseError {
    fn from(msg: String) -> Self {
        ShowcaseError::Other(msg)
    }
}

impl From<&str> for ShowcaseError {
    fn from(msg: &str) -> Self {
        ShowcaseError::Other(msg.to_string())
    }
}

/// Result type alias for pattern demonstrations.
pub type PatternResult<T> = Result<T, PatternError>;

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Result type alias for general showcase operations.
pub type ShowcaseResult<T> = Result<T, ShowcaseError>;
