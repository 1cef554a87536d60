//! Bundled module bindings, grouped by package.
//!
//! Every module file pairs one embedded schema (`schemas/<package>/<module>.json`)
//! with the typed builders and struct types declared against it. The schema is
//! the source of truth; [`crate::registry::Registry::verify_bindings`] checks
//! both against it.

use std::sync::Arc;

use move_core_types::account_address::AccountAddress;

use crate::descriptor::ModuleDescriptor;
use crate::payload::FunctionBinding;
use crate::structs::StructBinding;

/// Identity constants, the embedded descriptor and its views for one module.
///
/// Expects the invoking module to define `BINDINGS` and `STRUCTS`.
macro_rules! module_bindings {
    (package: $package:literal, address: $address:literal, name: $name:literal $(,)?) => {
        pub const ADDRESS: &str = $address;
        pub const NAME: &str = $name;
        pub const FULL_NAME: &str = concat!($address, "::", $name);
        pub const PACKAGE: &str = $package;

        /// The module's schema as shipped in `schemas/`.
        pub const SCHEMA: &str = include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/schemas/",
            $package,
            "/",
            $name,
            ".json"
        ));

        static DESCRIPTOR: std::sync::LazyLock<
            std::sync::Arc<$crate::descriptor::ModuleDescriptor>,
        > = std::sync::LazyLock::new(|| {
            std::sync::Arc::new(
                $crate::descriptor::ModuleDescriptor::from_json(SCHEMA)
                    .expect(concat!("embedded schema ", $package, "/", $name, ".json is invalid")),
            )
        });

        pub fn descriptor() -> &'static $crate::descriptor::ModuleDescriptor {
            &DESCRIPTOR
        }

        pub fn functions() -> &'static [$crate::descriptor::FunctionSignature] {
            descriptor().functions()
        }

        /// Fully-qualified names of every struct.
        pub fn structs() -> Vec<&'static str> {
            descriptor().struct_names()
        }

        /// Fully-qualified names of the structs with the `key` ability.
        pub fn resources() -> Vec<&'static str> {
            descriptor()
                .resources()
                .map(|s| s.full_name.as_str())
                .collect()
        }

        pub fn error_codes(
        ) -> &'static std::collections::BTreeMap<u64, $crate::descriptor::ErrorCode> {
            descriptor().error_codes()
        }

        pub fn source() -> $crate::packages::ModuleSource {
            $crate::packages::ModuleSource {
                package: PACKAGE,
                descriptor: std::sync::Arc::clone(&DESCRIPTOR),
                bindings: BINDINGS,
                structs: STRUCTS,
            }
        }
    };
}

pub mod aptos_framework;
pub mod aptos_token;

/// What a module file contributes to a registry.
#[derive(Debug, Clone)]
pub struct ModuleSource {
    pub package: &'static str,
    pub descriptor: Arc<ModuleDescriptor>,
    pub bindings: &'static [FunctionBinding],
    pub structs: &'static [StructBinding],
}

/// One bundled package.
#[derive(Debug, Clone, Copy)]
pub struct PackageInfo {
    pub name: &'static str,
    pub address: AccountAddress,
    pub modules: &'static [fn() -> ModuleSource],
}

const PACKAGES: &[PackageInfo] = &[aptos_framework::PACKAGE, aptos_token::PACKAGE];

/// Every bundled package.
pub fn all() -> &'static [PackageInfo] {
    PACKAGES
}

/// Look up a bundled package by name.
pub fn package(name: &str) -> Option<&'static PackageInfo> {
    PACKAGES.iter().find(|p| p.name == name)
}
