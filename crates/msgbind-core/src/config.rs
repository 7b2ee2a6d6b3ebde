//! Generator configuration

use crate::error::{GenError, GenResult};
use crate::typemap::TypeMap;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Identifiers that would clash with Rust keywords and their replacements.
const DEFAULT_KEYWORDS: &[(&str, &str)] = &[("type", "item_type"), ("in", "in_")];

/// Enum fields the wire format always carries, even where the schema marks
/// them optional.
const MANDATORY_DISCRIMINANTS: &[&str] = &[
    "ListPeers.peers[].channels[].state",
    "ListPeerChannels.channels[].state",
    "ListFunds.channels[].state",
];

/// Read-only settings shared by every stage of a generation run.
///
/// Built once, either from [`Default`] or from a TOML file, and passed by
/// reference into the generator.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Path of the crate providing runtime support items
    #[serde(default = "default_runtime_crate")]
    pub runtime_crate: String,

    /// Module glob-imported into the request and response namespaces.
    /// An empty string in TOML disables the import.
    #[serde(default = "default_primitives_module")]
    pub primitives_module: Option<String>,

    /// String repeated once per indentation level
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Extra or replacement primitive type mappings
    #[serde(default)]
    pub type_map: TypeMap,

    /// Extra or replacement keyword substitutions
    #[serde(default)]
    pub keywords: Keywords,

    /// Additional enum field paths that are never emitted as optional
    #[serde(default)]
    pub mandatory_discriminants: MandatoryDiscriminants,
}

fn default_runtime_crate() -> String {
    "msgbind_runtime".to_string()
}

fn default_primitives_module() -> Option<String> {
    Some("crate::primitives".to_string())
}

fn default_indent() -> String {
    "    ".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_crate: default_runtime_crate(),
            primitives_module: default_primitives_module(),
            indent: default_indent(),
            type_map: TypeMap::default(),
            keywords: Keywords::default(),
            mandatory_discriminants: MandatoryDiscriminants::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> GenResult<Self> {
        let mut config: Self = toml::from_str(content)?;
        if config.primitives_module.as_deref().is_some_and(|m| m.trim().is_empty()) {
            config.primitives_module = None;
        }
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| GenError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> GenResult<()> {
        if self.runtime_crate.trim().is_empty() {
            return Err(GenError::Config("runtime_crate cannot be empty".to_string()));
        }
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(GenError::Config(
                "indent may only contain spaces and tabs".to_string(),
            ));
        }
        Ok(())
    }

    /// Path of the skip predicate used for optional arrays.
    pub fn none_or_empty_predicate(&self) -> String {
        format!("{}::is_none_or_empty", self.runtime_crate)
    }
}

/// Keyword avoidance table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, String>")]
pub struct Keywords {
    replacements: BTreeMap<String, String>,
}

impl Keywords {
    /// Replace `ident` if it is a reserved word, otherwise return it as is.
    pub fn avoid(&self, ident: String) -> String {
        match self.replacements.get(&ident) {
            Some(replacement) => replacement.clone(),
            None => ident,
        }
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self::from(BTreeMap::new())
    }
}

impl From<BTreeMap<String, String>> for Keywords {
    fn from(extra: BTreeMap<String, String>) -> Self {
        let mut replacements: BTreeMap<String, String> = DEFAULT_KEYWORDS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        replacements.extend(extra);
        Self { replacements }
    }
}

/// Enum field paths forced to be non-optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct MandatoryDiscriminants {
    paths: BTreeSet<String>,
}

impl MandatoryDiscriminants {
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }
}

impl Default for MandatoryDiscriminants {
    fn default() -> Self {
        Self::from(Vec::new())
    }
}

impl From<Vec<String>> for MandatoryDiscriminants {
    fn from(extra: Vec<String>) -> Self {
        let mut paths: BTreeSet<String> =
            MANDATORY_DISCRIMINANTS.iter().map(|p| p.to_string()).collect();
        paths.extend(extra);
        Self { paths }
    }
}
