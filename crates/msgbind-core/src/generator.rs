//! Declaration generation from the field tree.
//!
//! Every field maps to a pair of text fragments:
//!
//! - `inline`: the member declaration inside the parent struct
//! - `nested`: any type declarations the member depends on
//!
//! ```text
//! Composite
//!     ↓
//!  children → (inline, nested) pairs
//!     ↓ sort by fragment text
//!  nested₁ nested₂ … struct { inline₁ inline₂ … }
//! ```
//!
//! Members are ordered by their own text instead of schema order, which keeps
//! the output stable when a schema shuffles its fields.

use crate::config::GeneratorConfig;
use crate::enums;
use crate::error::{GenError, GenResult};
use crate::model::{Field, FieldKind, Meta, Override, Variant};
use crate::naming::Identifier;

/// Predicate used for optional scalar, enum and composite members.
const SKIP_IF_NONE: &str = "Option::is_none";

/// Generated text for one field.
///
/// The derived ordering compares `inline` first and `nested` second; it is
/// the sort key for struct members.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fragments {
    pub inline: String,
    pub nested: String,
}

impl Fragments {
    pub fn is_empty(&self) -> bool {
        self.inline.is_empty() && self.nested.is_empty()
    }
}

/// Walks a field tree and renders declarations.
pub struct Generator<'a> {
    config: &'a GeneratorConfig,
    meta: &'a Meta,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a GeneratorConfig, meta: &'a Meta) -> Self {
        Self { config, meta }
    }

    /// Generate the fragments for any field.
    pub fn field(&self, field: &Field) -> GenResult<Fragments> {
        if field.is_omitted() {
            return Ok(Fragments::default());
        }

        match &field.kind {
            FieldKind::Primitive { typename } => Ok(self.primitive(field, typename)),
            FieldKind::Composite { typename, fields } => self.composite(field, typename, fields),
            FieldKind::Enum { typename, variants } => self.enumeration(field, typename, variants),
            FieldKind::Array { item, dims } => self.array(field, item, *dims),
        }
    }

    fn primitive(&self, field: &Field, typename: &str) -> Fragments {
        let ty = field
            .override_type()
            .unwrap_or_else(|| self.config.type_map.resolve(typename));

        Fragments {
            inline: self.member(field, ty, field.optional, SKIP_IF_NONE, false),
            nested: String::new(),
        }
    }

    fn enumeration(
        &self,
        field: &Field,
        typename: &str,
        variants: &[Option<Variant>],
    ) -> GenResult<Fragments> {
        let (ty, nested) = match field.override_type() {
            Some(ty) => (ty, String::new()),
            None => {
                let resolved = enums::resolve(typename, variants, self.meta)?;
                (typename, resolved.declaration(&self.config.runtime_crate))
            }
        };

        // The wire format always carries these, whatever the schema says.
        let optional = field.optional
            && !self
                .config
                .mandatory_discriminants
                .contains(field.location());

        Ok(Fragments {
            inline: self.member(field, ty, optional, SKIP_IF_NONE, true),
            nested,
        })
    }

    fn array(&self, field: &Field, item: &Field, dims: usize) -> GenResult<Fragments> {
        tracing::debug!("Generating array field {} ({})", field.name, field.location());

        if dims == 0 {
            return Err(GenError::malformed(
                field.location(),
                "array dimensions must be at least 1",
            ));
        }
        if let FieldKind::Array { .. } = item.kind {
            return Err(GenError::malformed(
                field.location(),
                "array items cannot be arrays, use `dims` instead",
            ));
        }

        let (item_type, nested) = match field.override_type() {
            Some(ty) => (ty.to_string(), String::new()),
            None => {
                let item_type = match &item.type_override {
                    Some(Override::Omit) => return Ok(Fragments::default()),
                    Some(Override::Type(ty)) => ty.clone(),
                    None => self.item_type(item).to_string(),
                };
                (item_type, self.field(item)?.nested)
            }
        };

        let ty = format!("{}{}{}", "Vec<".repeat(dims), item_type, ">".repeat(dims));
        let predicate = self.config.none_or_empty_predicate();

        Ok(Fragments {
            inline: self.member(field, &ty, field.optional, &predicate, false),
            nested,
        })
    }

    fn item_type<'f>(&'f self, item: &'f Field) -> &'f str {
        match &item.kind {
            FieldKind::Primitive { typename } => self.config.type_map.resolve(typename),
            FieldKind::Composite { typename, .. } | FieldKind::Enum { typename, .. } => {
                self.config.type_map.resolve(typename)
            }
            // Rejected by `array` before we get here.
            FieldKind::Array { item, .. } => self.item_type(item),
        }
    }

    fn composite(&self, field: &Field, typename: &str, fields: &[Field]) -> GenResult<Fragments> {
        let (ty, nested) = match field.override_type() {
            Some(ty) => (ty, String::new()),
            None => (typename, self.structure(field, typename, fields)?),
        };

        Ok(Fragments {
            inline: self.member(field, ty, field.optional, SKIP_IF_NONE, false),
            nested,
        })
    }

    /// Render a struct declaration preceded by everything its members need.
    pub fn structure(&self, field: &Field, typename: &str, fields: &[Field]) -> GenResult<String> {
        tracing::debug!("Generating composite field {} ({})", field.name, field.location());

        let mut members = fields
            .iter()
            .map(|f| self.field(f))
            .collect::<GenResult<Vec<_>>>()?;
        members.sort();

        let mut code = String::new();
        for m in &members {
            code.push_str(&m.nested);
        }

        code.push_str("#[derive(Clone, Debug, Deserialize, Serialize)]\n");
        code.push_str(&format!("pub struct {typename} {{\n"));
        for m in &members {
            code.push_str(&m.inline);
        }
        code.push_str("}\n\n");

        Ok(code)
    }

    /// Render one struct member.
    fn member(
        &self,
        field: &Field,
        ty: &str,
        optional: bool,
        skip_if: &str,
        path_comment: bool,
    ) -> String {
        let name = Identifier::for_field(&field.name, &self.config.keywords);
        let mut code = String::new();

        if path_comment {
            code.push_str(&format!("    // Path `{}`\n", field.location()));
        }
        if let Some(description) = &field.description {
            for line in description.lines() {
                let line = line.trim_end();
                if line.is_empty() {
                    code.push_str("    ///\n");
                } else {
                    code.push_str(&format!("    /// {line}\n"));
                }
            }
        }
        if field.deprecated {
            code.push_str("    #[deprecated]\n");
        }
        if name.needs_rename() {
            code.push_str(&format!("    #[serde(rename = {:?})]\n", name.wire));
        }
        if optional {
            code.push_str(&format!("    #[serde(skip_serializing_if = {skip_if:?})]\n"));
            code.push_str(&format!("    pub {}: Option<{ty}>,\n", name.ident));
        } else {
            code.push_str(&format!("    pub {}: {ty},\n", name.ident));
        }

        code
    }
}
