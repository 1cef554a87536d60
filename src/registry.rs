//! Process-wide index of module descriptors and their typed builders.
//!
//! The builtin registry is populated once from the embedded schemas and is
//! read-only afterwards. Tools that need extra or newer schemas build their own
//! with [`RegistryBuilder`].
//!
//! Module names are accepted in several spellings:
//! - `0x1::coin` or `0x0000…0001::coin`
//! - `aptos_framework::coin` (package-qualified)
//! - `0x1::Coin` (legacy module name)

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use anyhow::{anyhow, Context, Result};
use move_bindings_types::address::{is_valid_address, normalize_address_short};
use move_bindings_types::ArgKind;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::builder::{self, BuildError};
use crate::descriptor::{AbortInfo, FunctionSignature, ModuleDescriptor};
use crate::packages::{self, ModuleSource};
use crate::payload::{FunctionBinding, Payload};
use crate::structs::StructBinding;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::builtin);

/// The builtin registry, built on first use.
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// One registered module.
#[derive(Debug, Clone)]
pub struct ModuleEntry {
    pub package: String,
    pub descriptor: Arc<ModuleDescriptor>,
    /// Typed builders generated for this module. Empty for modules loaded
    /// from schema files only.
    pub bindings: &'static [FunctionBinding],
    /// Struct types generated for this module. Empty for schema-only modules.
    pub structs: &'static [StructBinding],
}

impl ModuleEntry {
    pub fn full_name(&self) -> &str {
        self.descriptor.full_name()
    }

    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    pub fn binding(&self, function: &str) -> Option<&'static FunctionBinding> {
        self.bindings.iter().find(|b| b.name == function)
    }
}

/// A typed builder or struct type that disagrees with its module's descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingMismatch {
    /// `<address>::<module>::<function or struct>`
    pub item: String,
    pub reason: String,
}

impl std::fmt::Display for BindingMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.item, self.reason)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Keyed by fully-qualified module name.
    modules: BTreeMap<String, ModuleEntry>,
    /// Alternate spelling -> fully-qualified module name.
    aliases: HashMap<String, String>,
}

impl Registry {
    /// Registry of every module embedded in this crate.
    pub fn builtin() -> Self {
        RegistryBuilder::new().with_builtin().build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Look up a module by any accepted spelling.
    pub fn module(&self, name: &str) -> Option<&ModuleEntry> {
        let name = name.trim();
        if let Some(entry) = self.modules.get(name) {
            return Some(entry);
        }
        let canonical = canonical_module_name(name);
        if let Some(key) = canonical.as_deref() {
            if let Some(entry) = self.modules.get(key) {
                return Some(entry);
            }
        }
        canonical
            .as_deref()
            .and_then(|key| self.aliases.get(key))
            .or_else(|| self.aliases.get(name))
            .and_then(|full_name| self.modules.get(full_name))
    }

    pub fn descriptor(&self, module: &str) -> Option<&ModuleDescriptor> {
        self.module(module).map(|entry| entry.descriptor.as_ref())
    }

    /// Resolve `<module>::<function>` to its module entry and signature.
    pub fn function(&self, function_id: &str) -> Option<(&ModuleEntry, &FunctionSignature)> {
        let (module, function) = function_id.trim().rsplit_once("::")?;
        let entry = self.module(module)?;
        let signature = entry.descriptor.function(function)?;
        Some((entry, signature))
    }

    /// All modules, ordered by fully-qualified name.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleEntry> {
        self.modules.values()
    }

    pub fn modules_in<'a>(&'a self, package: &'a str) -> impl Iterator<Item = &'a ModuleEntry> {
        self.modules.values().filter(move |e| e.package == package)
    }

    /// Distinct package names, sorted.
    pub fn packages(&self) -> Vec<&str> {
        self.modules
            .values()
            .map(|e| e.package.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn decode_abort(&self, module: &str, code: u64) -> Option<AbortInfo<'_>> {
        self.module(module)?.descriptor.decode_abort(code)
    }

    /// See [`builder::build_payload`].
    pub fn build_payload(
        &self,
        function_id: &str,
        args: Option<&Map<String, Value>>,
        type_args: &[String],
    ) -> Result<Payload, BuildError> {
        builder::build_payload(self, function_id, args, type_args)
    }

    /// Check every typed builder and struct type against its module's descriptor.
    ///
    /// A builder must name a declared function with the same argument names,
    /// argument encodings and type parameters, in the same order. A struct type
    /// must name a declared struct with the same fields and type parameters.
    /// Modules that carry builders (or struct types) must have one for every
    /// declared function (or struct).
    pub fn verify_bindings(&self) -> Vec<BindingMismatch> {
        let mut mismatches = Vec::new();
        for entry in self.modules.values() {
            check_functions(entry, &mut mismatches);
            check_structs(entry, &mut mismatches);
        }
        for m in &mismatches {
            warn!(item = %m.item, reason = %m.reason, "binding mismatch");
        }
        mismatches
    }
}

fn check_functions(entry: &ModuleEntry, out: &mut Vec<BindingMismatch>) {
    let descriptor = &entry.descriptor;
    for binding in entry.bindings {
        let item = format!("{}::{}", descriptor.full_name(), binding.name);
        let mut report = |reason: String| {
            out.push(BindingMismatch {
                item: item.clone(),
                reason,
            })
        };

        if binding.module != descriptor.full_name() {
            report(format!("builder targets module {}", binding.module));
        }
        let Some(signature) = descriptor.function(binding.name) else {
            report("not declared in the module descriptor".to_string());
            continue;
        };
        let declared: Vec<&str> = signature.argument_names().collect();
        if declared != binding.arguments {
            report(format!(
                "builder arguments {:?} differ from declared {:?}",
                binding.arguments, declared
            ));
        } else if let Ok(declared_kinds) = signature.argument_kinds() {
            let bound_kinds = (binding.argument_kinds)();
            for ((arg, expected), bound) in signature
                .arguments
                .iter()
                .zip(&declared_kinds)
                .zip(&bound_kinds)
            {
                if *expected != ArgKind::PassThrough && expected != bound {
                    report(format!(
                        "argument '{}' is declared {} but the builder writes {:?}",
                        arg.name, arg.r#type, bound
                    ));
                }
            }
        }
        if signature.type_parameters != binding.type_parameters {
            report(format!(
                "builder type parameters {:?} differ from declared {:?}",
                binding.type_parameters, signature.type_parameters
            ));
        }
    }

    if entry.bindings.is_empty() {
        return;
    }
    for signature in descriptor.functions() {
        if entry.binding(&signature.name).is_none() {
            out.push(BindingMismatch {
                item: format!("{}::{}", descriptor.full_name(), signature.name),
                reason: "declared function has no typed builder".to_string(),
            });
        }
    }
}

fn check_structs(entry: &ModuleEntry, out: &mut Vec<BindingMismatch>) {
    let descriptor = &entry.descriptor;
    for binding in entry.structs {
        let item = format!("{}::{}", descriptor.full_name(), binding.name);
        let mut report = |reason: String| {
            out.push(BindingMismatch {
                item: item.clone(),
                reason,
            })
        };

        if binding.module != descriptor.full_name() {
            report(format!("struct type belongs to module {}", binding.module));
        }
        let Some(signature) = descriptor.struct_def(binding.name) else {
            report("struct not declared in the module descriptor".to_string());
            continue;
        };
        let declared: Vec<&str> = signature.fields.iter().map(|f| f.name.as_str()).collect();
        if declared != binding.fields {
            report(format!(
                "struct fields {:?} differ from declared {:?}",
                binding.fields, declared
            ));
        }
        if signature.type_parameters != binding.type_parameters {
            report(format!(
                "struct type parameters {:?} differ from declared {:?}",
                binding.type_parameters, signature.type_parameters
            ));
        }
    }

    if entry.structs.is_empty() {
        return;
    }
    for signature in descriptor.structs() {
        if !entry.structs.iter().any(|b| b.name == signature.name) {
            out.push(BindingMismatch {
                item: signature.full_name.clone(),
                reason: "declared struct has no Rust type".to_string(),
            });
        }
    }
}

/// Rewrite an address-qualified module name to its short canonical form.
fn canonical_module_name(name: &str) -> Option<String> {
    let (prefix, module) = name.rsplit_once("::")?;
    if !is_valid_address(prefix) {
        return None;
    }
    Some(format!("{}::{}", normalize_address_short(prefix), module))
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    modules: BTreeMap<String, ModuleEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every embedded module.
    pub fn with_builtin(mut self) -> Self {
        for package in packages::all() {
            for source in package.modules {
                self.add_source(source());
            }
        }
        self
    }

    pub fn add_source(&mut self, source: ModuleSource) -> &mut Self {
        self.insert(ModuleEntry {
            package: source.package.to_string(),
            descriptor: source.descriptor,
            bindings: source.bindings,
            structs: source.structs,
        });
        self
    }

    /// Register a descriptor without typed builders.
    ///
    /// Replacing a module that has builders or struct types keeps them, so
    /// they can be checked against the new descriptor.
    pub fn add_module(&mut self, package: &str, descriptor: ModuleDescriptor) -> &mut Self {
        let (bindings, structs) = self
            .modules
            .get(descriptor.full_name())
            .map(|e| (e.bindings, e.structs))
            .unwrap_or((&[], &[]));
        self.insert(ModuleEntry {
            package: package.to_string(),
            descriptor: Arc::new(descriptor),
            bindings,
            structs,
        });
        self
    }

    /// Load one schema file into `package`.
    pub fn load_schema_file(&mut self, package: &str, path: &Path) -> Result<&mut Self> {
        let json = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let descriptor = ModuleDescriptor::from_json(&json)
            .with_context(|| format!("load schema {}", path.display()))?;
        Ok(self.add_module(package, descriptor))
    }

    /// Load every `*.json` schema under `dir`, recursively.
    ///
    /// The package of a schema is the name of the directory that contains it.
    /// Returns the number of schemas loaded.
    pub fn load_schema_dir(&mut self, dir: &Path) -> Result<usize> {
        if !dir.is_dir() {
            return Err(anyhow!("schema directory {} does not exist", dir.display()));
        }
        let count = self.scan_dir(dir)?;
        debug!(dir = %dir.display(), count, "loaded schema directory");
        Ok(count)
    }

    fn scan_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut entries: Vec<_> = fs::read_dir(dir)
            .with_context(|| format!("read {}", dir.display()))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .with_context(|| format!("list {}", dir.display()))?;
        entries.sort_by_key(|e| e.path());

        let package = dir
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("local")
            .to_string();

        let mut count = 0;
        for entry in entries {
            let path = entry.path();
            if path.is_dir() {
                count += self.scan_dir(&path)?;
                continue;
            }
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            self.load_schema_file(&package, &path)?;
            count += 1;
        }
        Ok(count)
    }

    fn insert(&mut self, entry: ModuleEntry) {
        let full_name = entry.full_name().to_string();
        debug!(module = %full_name, package = %entry.package, "registering module");
        if let Some(previous) = self.modules.insert(full_name.clone(), entry) {
            warn!(
                module = %full_name,
                previous_package = %previous.package,
                "module registered twice, replacing previous descriptor"
            );
        }
    }

    pub fn build(self) -> Registry {
        let mut aliases = HashMap::new();
        for (full_name, entry) in &self.modules {
            let descriptor = &entry.descriptor;
            aliases.insert(
                format!("{}::{}", entry.package, descriptor.name()),
                full_name.clone(),
            );
            for legacy in descriptor.legacy_names() {
                aliases.insert(
                    format!("{}::{}", descriptor.address(), legacy),
                    full_name.clone(),
                );
                aliases.insert(format!("{}::{}", entry.package, legacy), full_name.clone());
            }
        }
        debug!(modules = self.modules.len(), "module registry built");
        Registry {
            modules: self.modules,
            aliases,
        }
    }
}
