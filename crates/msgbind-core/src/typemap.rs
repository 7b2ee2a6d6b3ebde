//! Schema primitive types to Rust types.
//!
//! | Schema | Rust |
//! |--------|------|
//! | `integer` | `i64` |
//! | `number` | `f64` |
//! | `float` | `f32` |
//! | `boolean` | `bool` |
//! | `msat` | `Amount` |
//! | `pubkey` | `PublicKey` |
//! | `hex`, `txid`, `signature` | `String` |
//!
//! Names missing from the table are assumed to already be Rust types, which
//! covers references to other generated composites and enums.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Type mapping from schema to Rust
struct TypeMapping {
    schema_type: &'static str,
    rust_type: &'static str,
}

const TYPE_MAPPINGS: &[TypeMapping] = &[
    TypeMapping {
        schema_type: "boolean",
        rust_type: "bool",
    },
    TypeMapping {
        schema_type: "hex",
        rust_type: "String",
    },
    TypeMapping {
        schema_type: "msat",
        rust_type: "Amount",
    },
    TypeMapping {
        schema_type: "msat_or_all",
        rust_type: "AmountOrAll",
    },
    TypeMapping {
        schema_type: "msat_or_any",
        rust_type: "AmountOrAny",
    },
    TypeMapping {
        schema_type: "currency",
        rust_type: "String",
    },
    TypeMapping {
        schema_type: "number",
        rust_type: "f64",
    },
    TypeMapping {
        schema_type: "pubkey",
        rust_type: "PublicKey",
    },
    TypeMapping {
        schema_type: "short_channel_id",
        rust_type: "ShortChannelId",
    },
    TypeMapping {
        schema_type: "signature",
        rust_type: "String",
    },
    TypeMapping {
        schema_type: "string",
        rust_type: "String",
    },
    TypeMapping {
        schema_type: "txid",
        rust_type: "String",
    },
    TypeMapping {
        schema_type: "float",
        rust_type: "f32",
    },
    TypeMapping {
        schema_type: "utxo",
        rust_type: "Utxo",
    },
    TypeMapping {
        schema_type: "feerate",
        rust_type: "Feerate",
    },
    TypeMapping {
        schema_type: "outpoint",
        rust_type: "Outpoint",
    },
    TypeMapping {
        schema_type: "outputdesc",
        rust_type: "OutputDesc",
    },
    TypeMapping {
        schema_type: "hash",
        rust_type: "Sha256",
    },
    TypeMapping {
        schema_type: "secret",
        rust_type: "Secret",
    },
    TypeMapping {
        schema_type: "bip340sig",
        rust_type: "String",
    },
    TypeMapping {
        schema_type: "integer",
        rust_type: "i64",
    },
    TypeMapping {
        schema_type: "u8",
        rust_type: "u8",
    },
    TypeMapping {
        schema_type: "u16",
        rust_type: "u16",
    },
    TypeMapping {
        schema_type: "u32",
        rust_type: "u32",
    },
    TypeMapping {
        schema_type: "u64",
        rust_type: "u64",
    },
];

/// Lookup table from schema primitive names to Rust type names.
///
/// Deserializing a `TypeMap` layers the given entries over the built-in table,
/// so a config file only lists what it adds or replaces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, String>")]
pub struct TypeMap {
    entries: BTreeMap<String, String>,
}

impl TypeMap {
    /// The built-in table.
    pub fn builtin() -> Self {
        let entries = TYPE_MAPPINGS
            .iter()
            .map(|m| (m.schema_type.to_string(), m.rust_type.to_string()))
            .collect();
        Self { entries }
    }

    /// Add or replace a mapping.
    pub fn with_entry(mut self, schema_type: impl Into<String>, rust_type: impl Into<String>) -> Self {
        self.entries.insert(schema_type.into(), rust_type.into());
        self
    }

    /// Resolve a schema type name. Unknown names are returned unchanged.
    pub fn resolve<'a>(&'a self, schema_type: &'a str) -> &'a str {
        self.entries
            .get(schema_type)
            .map(String::as_str)
            .unwrap_or(schema_type)
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        Self::builtin()
    }
}

impl From<BTreeMap<String, String>> for TypeMap {
    fn from(extra: BTreeMap<String, String>) -> Self {
        let mut map = Self::builtin();
        map.entries.extend(extra);
        map
    }
}
