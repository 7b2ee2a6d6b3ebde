//! Error types for declaration generation

use thiserror::Error;

/// Result type alias for generator operations
pub type GenResult<T> = Result<T, GenError>;

/// Error type for generator operations.
///
/// Every variant is fatal for the run that raised it: the generator never
/// hands back partial output.
#[derive(Error, Debug)]
pub enum GenError {
    /// The field tree contains a node the generator cannot handle
    #[error("malformed input at `{path}`: {reason}")]
    MalformedInput { path: String, reason: String },

    /// A message name appears in both the field map and the enum map
    #[error("enum `{message}` has entries in both the field map and the enum map")]
    AmbiguousCodeMap { message: String },

    /// Generator configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(String),

    /// The output sink rejected a write
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenError {
    /// Shorthand for [`GenError::MalformedInput`].
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        GenError::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        GenError::MalformedInput {
            path: format!("line {}, column {}", err.line(), err.column()),
            reason: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for GenError {
    fn from(err: toml::de::Error) -> Self {
        GenError::Config(err.to_string())
    }
}
