//! Errors surfaced by generated code at decode time

use thiserror::Error;

/// A numeric code did not match any variant of the target enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown variant {code} for enum {enum_name}")]
pub struct UnknownDiscriminantError {
    pub enum_name: &'static str,
    pub code: i32,
}

impl UnknownDiscriminantError {
    pub fn new(enum_name: &'static str, code: i32) -> Self {
        Self { enum_name, code }
    }
}

/// A response union held a different method than the one requested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("response mismatch: expected `{expected}`, got `{actual}`")]
pub struct TryFromResponseError {
    /// Tag of the method whose response was requested
    pub expected: &'static str,
    /// Tag of the method actually held by the union
    pub actual: &'static str,
}

impl TryFromResponseError {
    pub fn new(expected: &'static str, actual: &'static str) -> Self {
        Self { expected, actual }
    }
}
