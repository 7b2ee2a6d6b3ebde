//! Naming convention utilities for code generation.
//!
//! Schema names follow whatever convention the RPC server uses (`camelCase`,
//! `kebab-case`, `SCREAMING` variants with spaces). Generated Rust needs valid
//! identifiers, while the wire protocol keeps the original spelling, so every
//! conversion here is paired with the raw name it came from.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `myField`, `my-field` | [`normalize`] | `my_field` |
//! | `dual-funded` | [`variant_name`] | `DUAL_FUNDED` |
//! | `ListFunds` | [`method_tag`] | `listfunds` |
//!
//! All of them are idempotent: feeding an output back in returns it unchanged.

use crate::config::Keywords;

/// Marker the schema appends to array field names.
const ARRAY_SUFFIX: &str = "[]";

/// A generated identifier together with the name used on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// Valid Rust identifier.
    pub ident: String,
    /// Name as it appears in serialized messages.
    pub wire: String,
}

impl Identifier {
    /// Build the identifier for a raw schema field name.
    pub fn for_field(raw: &str, keywords: &Keywords) -> Self {
        let wire = wire_name(raw).to_string();
        let ident = keywords.avoid(normalize(raw));
        Self { ident, wire }
    }

    /// Whether the generated declaration needs a `#[serde(rename)]` directive.
    pub fn needs_rename(&self) -> bool {
        self.ident != self.wire
    }
}

/// Strip the array marker from a raw schema name.
///
/// # Examples
///
/// ```
/// use msgbind_core::naming::wire_name;
///
/// assert_eq!(wire_name("channels[]"), "channels");
/// assert_eq!(wire_name("id"), "id");
/// ```
pub fn wire_name(raw: &str) -> &str {
    raw.strip_suffix(ARRAY_SUFFIX).unwrap_or(raw)
}

/// Convert a raw schema name to `snake_case`.
///
/// Dashes become underscores, every non-leading ASCII uppercase letter starts
/// a new word, and the result is lower-cased.
///
/// # Examples
///
/// ```
/// use msgbind_core::naming::normalize;
///
/// assert_eq!(normalize("myField"), "my_field");
/// assert_eq!(normalize("my-field"), "my_field");
/// assert_eq!(normalize("my_field"), "my_field");
/// ```
pub fn normalize(raw: &str) -> String {
    let base = wire_name(raw).replace('-', "_");
    let mut result = String::with_capacity(base.len() + 4);

    for (i, c) in base.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }

    result
}

/// Convert a raw enum variant to the identifier used in the generated enum.
///
/// # Examples
///
/// ```
/// use msgbind_core::naming::variant_name;
///
/// assert_eq!(variant_name("dual-funded"), "DUAL_FUNDED");
/// assert_eq!(variant_name("OPEN"), "OPEN");
/// ```
pub fn variant_name(raw: &str) -> String {
    raw.replace([' ', '-', '/'], "_").to_uppercase()
}

/// Tag used for a method in the request/response unions.
pub fn method_tag(name: &str) -> String {
    name.to_lowercase()
}
