//! Field tree describing RPC request and response shapes.
//!
//! The tree is produced by a schema loader and handed to the generator as
//! immutable input. It can also be read from JSON directly:
//!
//! ```json
//! {
//!   "methods": [{
//!     "name": "Getinfo",
//!     "request":  { "kind": "composite", "name": "getinfo", "typename": "GetinfoRequest", "fields": [] },
//!     "response": { "kind": "composite", "name": "getinfo", "typename": "GetinfoResponse", "fields": [
//!       { "kind": "primitive", "name": "id", "typename": "pubkey" },
//!       { "kind": "array", "name": "address[]", "optional": true, "dims": 1,
//!         "item": { "kind": "primitive", "name": "address", "typename": "string" } }
//!     ]}
//!   }]
//! }
//! ```
//!
//! # Structure
//!
//! - [`Service`]: ordered list of [`Method`]s
//! - [`Field`]: one node with its common attributes and a [`FieldKind`]
//! - [`Meta`]: numeric code maps consulted for enum discriminants

use crate::error::{GenError, GenResult};
use crate::naming;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Variant name to numeric code for one message.
pub type CodeMap = BTreeMap<String, u32>;

/// A service: the methods a server exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub methods: Vec<Method>,
}

impl Service {
    /// Parse a service description from JSON.
    pub fn from_json(json: &str) -> GenResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One RPC method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    /// Method name; the lower-cased form is the wire tag.
    pub name: String,
    pub request: Field,
    pub response: Field,
}

impl Method {
    pub fn new(name: impl Into<String>, request: Field, response: Field) -> Self {
        Self {
            name: name.into(),
            request,
            response,
        }
    }

    /// Tag identifying this method in the request and response unions.
    pub fn tag(&self) -> String {
        naming::method_tag(&self.name)
    }
}

/// A node of the field tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Raw schema name, as sent on the wire.
    pub name: String,

    /// Dotted schema location. Defaults to the name.
    #[serde(default)]
    pub path: String,

    #[serde(default)]
    pub optional: bool,

    #[serde(default)]
    pub deprecated: bool,

    #[serde(rename = "override", default, skip_serializing_if = "Option::is_none")]
    pub type_override: Option<Override>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub kind: FieldKind,
}

/// The closed set of field shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldKind {
    /// A scalar schema type, resolved through the type map.
    Primitive { typename: String },

    /// A struct with named sub-fields.
    Composite { typename: String, fields: Vec<Field> },

    /// An enumeration; `None` entries are variants the schema omits.
    Enum {
        typename: String,
        variants: Vec<Option<Variant>>,
    },

    /// `dims` nested sequences of `item`.
    Array { item: Box<Field>, dims: usize },
}

/// Schema directive replacing the generated type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Override {
    /// Emit nothing for this field.
    Omit,
    /// Reference an existing type instead of generating one.
    Type(String),
}

impl Field {
    /// Create a field whose path is its name.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            optional: false,
            deprecated: false,
            type_override: None,
            description: None,
            kind,
        }
    }

    pub fn primitive(name: impl Into<String>, typename: impl Into<String>) -> Self {
        Self::new(
            name,
            FieldKind::Primitive {
                typename: typename.into(),
            },
        )
    }

    pub fn composite(name: impl Into<String>, typename: impl Into<String>, fields: Vec<Field>) -> Self {
        Self::new(
            name,
            FieldKind::Composite {
                typename: typename.into(),
                fields,
            },
        )
    }

    pub fn enumeration<'a>(
        name: impl Into<String>,
        typename: impl Into<String>,
        variants: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::new(
            name,
            FieldKind::Enum {
                typename: typename.into(),
                variants: variants.into_iter().map(|v| Some(Variant::new(v))).collect(),
            },
        )
    }

    pub fn array(name: impl Into<String>, item: Field, dims: usize) -> Self {
        Self::new(
            name,
            FieldKind::Array {
                item: Box::new(item),
                dims,
            },
        )
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    pub fn with_override(mut self, type_override: Override) -> Self {
        self.type_override = Some(type_override);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the schema asks for this field to be left out entirely.
    pub fn is_omitted(&self) -> bool {
        matches!(self.type_override, Some(Override::Omit))
    }

    /// The replacement type, if the schema provides one.
    pub fn override_type(&self) -> Option<&str> {
        match &self.type_override {
            Some(Override::Type(ty)) => Some(ty),
            _ => None,
        }
    }

    /// Location used in diagnostics; falls back to the name for loaded
    /// fields without an explicit path.
    pub fn location(&self) -> &str {
        if self.path.is_empty() {
            &self.name
        } else {
            &self.path
        }
    }

    /// Type name of a composite field, or an error for any other kind.
    pub fn composite_typename(&self) -> GenResult<&str> {
        match &self.kind {
            FieldKind::Composite { typename, .. } => Ok(typename),
            other => Err(GenError::malformed(
                self.location(),
                format!("expected a composite, found {}", other.kind_name()),
            )),
        }
    }
}

impl FieldKind {
    /// Short description used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldKind::Primitive { .. } => "primitive",
            FieldKind::Composite { .. } => "composite",
            FieldKind::Enum { .. } => "enum",
            FieldKind::Array { .. } => "array",
        }
    }
}

/// One enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "VariantRepr")]
pub struct Variant {
    pub raw_name: String,
    pub normalized_name: String,
}

impl Variant {
    /// Create a variant, deriving the normalized identifier from the raw name.
    pub fn new(raw_name: impl Into<String>) -> Self {
        let raw_name = raw_name.into();
        let normalized_name = naming::variant_name(&raw_name);
        Self {
            raw_name,
            normalized_name,
        }
    }

    pub fn needs_rename(&self) -> bool {
        self.raw_name != self.normalized_name
    }
}

/// Variants may be given as a bare string or with an explicit identifier.
#[derive(Deserialize)]
#[serde(untagged)]
enum VariantRepr {
    Raw(String),
    Full {
        raw_name: String,
        normalized_name: String,
    },
}

impl From<VariantRepr> for Variant {
    fn from(repr: VariantRepr) -> Self {
        match repr {
            VariantRepr::Raw(raw) => Variant::new(raw),
            VariantRepr::Full {
                raw_name,
                normalized_name,
            } => Variant {
                raw_name,
                normalized_name,
            },
        }
    }
}

/// Which map an enum's codes came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeMapKind {
    Field,
    Enum,
}

/// Numeric code maps for enum discriminants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(rename = "grpc-field-map", alias = "field_map", default)]
    pub field_map: BTreeMap<String, CodeMap>,

    #[serde(rename = "grpc-enum-map", alias = "enum_map", default)]
    pub enum_map: BTreeMap<String, CodeMap>,
}

impl Meta {
    /// Parse code maps from JSON.
    pub fn from_json(json: &str) -> GenResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up the code map for a message.
    ///
    /// A message listed in both maps is rejected rather than silently
    /// preferring one of them.
    pub fn code_map(&self, message: &str) -> GenResult<Option<(CodeMapKind, &CodeMap)>> {
        match (self.field_map.get(message), self.enum_map.get(message)) {
            (Some(_), Some(_)) => Err(GenError::AmbiguousCodeMap {
                message: message.to_string(),
            }),
            (Some(map), None) => Ok(Some((CodeMapKind::Field, map))),
            (None, Some(map)) => Ok(Some((CodeMapKind::Enum, map))),
            (None, None) => Ok(None),
        }
    }
}
