use thiserror::Error;

/// Error produced when a level name does not match any known severity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown log level: '{name}'")]
pub struct ParseLevelError {
    pub name: String,
}
