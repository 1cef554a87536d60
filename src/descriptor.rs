//! Module descriptors: the static interface description of one on-chain module.
//!
//! A descriptor is loaded from the module's JSON schema (see `schemas/`) and is
//! immutable afterwards. Lookups never fail; an unknown name is `None`.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use anyhow::{anyhow, bail, Context, Result};
use move_bindings_types::{encode_address_str, ArgKind};
use move_core_types::identifier::Identifier;
use serde::{Deserialize, Serialize};

/// A declared capability of a struct type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Copy,
    Drop,
    Store,
    Key,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSignature {
    pub name: String,
    pub r#type: String,
}

/// Signature of one entry function. The signer parameter is not listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    pub name: String,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub arguments: Vec<FieldSignature>,
}

impl FunctionSignature {
    pub fn argument_names(&self) -> impl Iterator<Item = &str> {
        self.arguments.iter().map(|a| a.name.as_str())
    }

    pub fn is_generic(&self) -> bool {
        !self.type_parameters.is_empty()
    }

    /// Encoding class of each argument, in declared order.
    ///
    /// Returns the name and type of the first argument that cannot be classified.
    pub fn argument_kinds(&self) -> std::result::Result<Vec<ArgKind>, (&str, &str)> {
        self.arguments
            .iter()
            .map(|arg| {
                ArgKind::classify(&arg.r#type, &self.type_parameters)
                    .ok_or((arg.name.as_str(), arg.r#type.as_str()))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructSignature {
    pub name: String,
    /// `<address>::<module>::<name>`, derived when the descriptor is loaded.
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub abilities: BTreeSet<Ability>,
    #[serde(default)]
    pub fields: Vec<FieldSignature>,
}

impl StructSignature {
    pub fn has_ability(&self, ability: Ability) -> bool {
        self.abilities.contains(&ability)
    }

    /// Whether values of this struct can live in global storage under an account.
    pub fn is_resource(&self) -> bool {
        self.has_ability(Ability::Key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

/// Canonical abort categories of the Move standard library `error` module.
const ABORT_CATEGORIES: [(u64, &str); 13] = [
    (0x1, "INVALID_ARGUMENT"),
    (0x2, "OUT_OF_RANGE"),
    (0x3, "INVALID_STATE"),
    (0x4, "UNAUTHENTICATED"),
    (0x5, "PERMISSION_DENIED"),
    (0x6, "NOT_FOUND"),
    (0x7, "ABORTED"),
    (0x8, "ALREADY_EXISTS"),
    (0x9, "RESOURCE_EXHAUSTED"),
    (0xA, "CANCELLED"),
    (0xB, "INTERNAL"),
    (0xC, "NOT_IMPLEMENTED"),
    (0xD, "UNAVAILABLE"),
];

pub fn abort_category_name(category: u64) -> Option<&'static str> {
    ABORT_CATEGORIES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, name)| *name)
}

/// A decoded abort code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbortInfo<'a> {
    pub code: u64,
    /// Set when the code was decoded as `category << 16 | reason`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<&'static str>,
    pub reason: u64,
    pub error: &'a ErrorCode,
}

/// Interface description of one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    address: String,
    name: String,
    #[serde(default)]
    full_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    legacy_names: Vec<String>,
    #[serde(default)]
    functions: Vec<FunctionSignature>,
    #[serde(default)]
    structs: Vec<StructSignature>,
    #[serde(default)]
    error_codes: BTreeMap<u64, ErrorCode>,
}

impl ModuleDescriptor {
    /// Parse and validate a module schema.
    ///
    /// The address is rewritten to its short canonical form and all derived
    /// names (`full_name`, struct full names) are recomputed, so a descriptor
    /// round-trips through its own JSON output.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: ModuleDescriptor =
            serde_json::from_str(json).context("Failed to parse module schema")?;
        raw.finalize()
    }

    fn finalize(mut self) -> Result<Self> {
        self.address = encode_address_str(&self.address)
            .map_err(|e| anyhow!("Invalid module address: {}", e))?;
        Identifier::new(self.name.as_str())
            .map_err(|e| anyhow!("Invalid module name '{}': {}", self.name, e))?;
        self.full_name = format!("{}::{}", self.address, self.name);

        let context = self.full_name.clone();
        self.validate().with_context(|| format!("Invalid schema for {}", context))?;

        for s in &mut self.structs {
            s.full_name = format!("{}::{}", context, s.name);
        }
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for f in &self.functions {
            if !seen.insert(f.name.as_str()) {
                bail!("duplicate function '{}'", f.name);
            }
            Identifier::new(f.name.as_str())
                .map_err(|e| anyhow!("invalid function name '{}': {}", f.name, e))?;
            unique(&f.type_parameters, "type parameter", &f.name)?;
            unique(
                &f.arguments.iter().map(|a| a.name.clone()).collect::<Vec<_>>(),
                "argument",
                &f.name,
            )?;
            if let Err((arg, ty)) = f.argument_kinds() {
                bail!(
                    "function '{}' argument '{}' has unsupported type '{}'",
                    f.name,
                    arg,
                    ty
                );
            }
        }

        let mut seen = HashSet::new();
        for s in &self.structs {
            if !seen.insert(s.name.as_str()) {
                bail!("duplicate struct '{}'", s.name);
            }
            Identifier::new(s.name.as_str())
                .map_err(|e| anyhow!("invalid struct name '{}': {}", s.name, e))?;
            unique(
                &s.fields.iter().map(|f| f.name.clone()).collect::<Vec<_>>(),
                "field",
                &s.name,
            )?;
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize module descriptor")
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Earlier mixed-case names of this module.
    pub fn legacy_names(&self) -> &[String] {
        &self.legacy_names
    }

    pub fn functions(&self) -> &[FunctionSignature] {
        &self.functions
    }

    pub fn structs(&self) -> &[StructSignature] {
        &self.structs
    }

    pub fn error_codes(&self) -> &BTreeMap<u64, ErrorCode> {
        &self.error_codes
    }

    pub fn function(&self, name: &str) -> Option<&FunctionSignature> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Look up a struct by short name or fully-qualified name.
    pub fn struct_def(&self, name: &str) -> Option<&StructSignature> {
        self.structs
            .iter()
            .find(|s| s.name == name || s.full_name == name)
    }

    pub fn error(&self, code: u64) -> Option<&ErrorCode> {
        self.error_codes.get(&code)
    }

    /// Structs that can be stored in global storage.
    pub fn resources(&self) -> impl Iterator<Item = &StructSignature> {
        self.structs.iter().filter(|s| s.is_resource())
    }

    /// Fully-qualified names of all structs, in declaration order.
    pub fn struct_names(&self) -> Vec<&str> {
        self.structs.iter().map(|s| s.full_name.as_str()).collect()
    }

    /// Decode an abort code raised by this module.
    ///
    /// An exact table entry wins; otherwise the code is read as a canonical
    /// `category << 16 | reason` code and the reason is looked up.
    pub fn decode_abort(&self, code: u64) -> Option<AbortInfo<'_>> {
        if let Some(error) = self.error_codes.get(&code) {
            return Some(AbortInfo {
                code,
                category: None,
                category_name: None,
                reason: code,
                error,
            });
        }

        let category = code >> 16;
        let reason = code & 0xffff;
        if category == 0 {
            return None;
        }
        self.error_codes.get(&reason).map(|error| AbortInfo {
            code,
            category: Some(category),
            category_name: abort_category_name(category),
            reason,
            error,
        })
    }
}

fn unique(names: &[String], what: &str, owner: &str) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            bail!("'{}' declares {} '{}' twice", owner, what, name);
        }
    }
    Ok(())
}
