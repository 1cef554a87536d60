//! `aptos_token` package (0x3).

pub mod token;
pub mod token_transfers;

use move_bindings_types::framework::APTOS_TOKEN;

use super::{ModuleSource, PackageInfo};

pub const MODULES: &[fn() -> ModuleSource] = &[token::source, token_transfers::source];

pub const PACKAGE: PackageInfo = PackageInfo {
    name: "aptos_token",
    address: APTOS_TOKEN,
    modules: MODULES,
};
