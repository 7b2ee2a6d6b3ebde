//! Enum discriminant resolution.
//!
//! Each enum is looked up by its type name in the field map or the enum map of
//! [`Meta`]. When the entry covers every variant the mapped codes are used and
//! the variants are declared in ascending code order. Anything short of that
//! (no entry, an empty entry, a single variant missing) drops the map
//! entirely and numbers the variants by position.
//!
//! The all-or-nothing fallback means that a schema edit which completes a
//! previously partial map changes the discriminants of every variant.

use crate::error::{GenError, GenResult};
use crate::model::{CodeMapKind, Meta, Variant};

/// Where an enum's discriminants came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSource {
    Mapped(CodeMapKind),
    Positional,
}

/// A variant with its final discriminant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVariant {
    /// Name on the wire.
    pub raw: String,
    /// Identifier in the generated enum.
    pub ident: String,
    pub code: u32,
}

impl ResolvedVariant {
    pub fn needs_rename(&self) -> bool {
        self.raw != self.ident
    }
}

/// An enum ready to be declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEnum {
    pub typename: String,
    pub source: CodeSource,
    /// Variants in declaration order.
    pub variants: Vec<ResolvedVariant>,
}

/// Resolve the discriminants of `typename`.
pub fn resolve(typename: &str, variants: &[Option<Variant>], meta: &Meta) -> GenResult<ResolvedEnum> {
    let present: Vec<&Variant> = variants.iter().flatten().collect();

    if let Some((kind, map)) = meta.code_map(typename)? {
        let complete = !map.is_empty() && present.iter().all(|v| map.contains_key(&v.raw_name));

        if complete {
            let mut resolved: Vec<ResolvedVariant> = present
                .iter()
                .filter_map(|v| {
                    map.get(&v.raw_name).map(|code| ResolvedVariant {
                        raw: v.raw_name.clone(),
                        ident: v.normalized_name.clone(),
                        code: *code,
                    })
                })
                .collect();
            resolved.sort_by_key(|v| v.code);

            // Generated discriminants and `TryFrom<i32>` arms must be valid i32s
            // and distinct, or the output does not compile.
            if let Some(v) = resolved.iter().find(|v| i32::try_from(v.code).is_err()) {
                return Err(GenError::malformed(
                    typename,
                    format!("code {} of variant `{}` does not fit in i32", v.code, v.raw),
                ));
            }
            if let Some(pair) = resolved.windows(2).find(|w| w[0].code == w[1].code) {
                return Err(GenError::malformed(
                    typename,
                    format!(
                        "variants `{}` and `{}` share code {}",
                        pair[0].raw, pair[1].raw, pair[0].code
                    ),
                ));
            }

            return Ok(ResolvedEnum {
                typename: typename.to_string(),
                source: CodeSource::Mapped(kind),
                variants: resolved,
            });
        }

        tracing::debug!(
            "Code map for enum {} is incomplete, using positional discriminants",
            typename
        );
    }

    let resolved = present
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let code = u32::try_from(i)
                .map_err(|_| GenError::malformed(typename, "too many enum variants"))?;
            Ok(ResolvedVariant {
                raw: v.raw_name.clone(),
                ident: v.normalized_name.clone(),
                code,
            })
        })
        .collect::<GenResult<Vec<_>>>()?;

    Ok(ResolvedEnum {
        typename: typename.to_string(),
        source: CodeSource::Positional,
        variants: resolved,
    })
}

impl ResolvedEnum {
    /// Variant carrying `code`, mirroring the generated `TryFrom<i32>`.
    pub fn decode(&self, code: u32) -> Option<&ResolvedVariant> {
        self.variants.iter().find(|v| v.code == code)
    }

    /// Display string of a variant, mirroring the generated `Display`.
    pub fn encode<'a>(&self, variant: &'a ResolvedVariant) -> &'a str {
        &variant.ident
    }

    /// Render the enum declaration with its conversion impls.
    pub fn declaration(&self, runtime_crate: &str) -> String {
        let name = &self.typename;
        let mut code = String::new();

        code.push_str("#[allow(non_camel_case_types)]\n");
        code.push_str("#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]\n");
        code.push_str(&format!("pub enum {name} {{\n"));
        for v in &self.variants {
            if v.needs_rename() {
                code.push_str(&format!("    #[serde(rename = {:?})]\n", v.raw));
            }
            code.push_str(&format!("    {} = {},\n", v.ident, v.code));
        }
        code.push_str("}\n\n");

        // Decoding from the numeric representation
        code.push_str(&format!("impl TryFrom<i32> for {name} {{\n"));
        code.push_str(&format!(
            "    type Error = {runtime_crate}::UnknownDiscriminantError;\n\n"
        ));
        code.push_str(&format!(
            "    fn try_from(c: i32) -> Result<{name}, Self::Error> {{\n"
        ));
        code.push_str("        match c {\n");
        for v in &self.variants {
            code.push_str(&format!("            {} => Ok({name}::{}),\n", v.code, v.ident));
        }
        code.push_str(&format!(
            "            o => Err({runtime_crate}::UnknownDiscriminantError::new({name:?}, o)),\n"
        ));
        code.push_str("        }\n");
        code.push_str("    }\n");
        code.push_str("}\n\n");

        if !self.variants.is_empty() {
            code.push_str(&format!("impl From<{name}> for i32 {{\n"));
            code.push_str(&format!("    fn from(v: {name}) -> i32 {{\n"));
            code.push_str("        v as i32\n");
            code.push_str("    }\n");
            code.push_str("}\n\n");
        }

        code.push_str(&format!("impl std::fmt::Display for {name} {{\n"));
        code.push_str("    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {\n");
        code.push_str("        let s: &str = match *self {\n");
        for v in &self.variants {
            code.push_str(&format!("            {name}::{} => {:?},\n", v.ident, v.ident));
        }
        code.push_str("        };\n");
        code.push_str("        f.write_str(s)\n");
        code.push_str("    }\n");
        code.push_str("}\n\n");

        code
    }
}
