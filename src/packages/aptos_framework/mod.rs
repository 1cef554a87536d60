//! `aptos_framework` package (0x1).

pub mod account;
pub mod aptos_account;
pub mod coin;
pub mod managed_coin;
pub mod test_coin;

use move_bindings_types::framework::APTOS_FRAMEWORK;

use super::{ModuleSource, PackageInfo};

pub const MODULES: &[fn() -> ModuleSource] = &[
    account::source,
    aptos_account::source,
    coin::source,
    managed_coin::source,
    test_coin::source,
];

pub const PACKAGE: PackageInfo = PackageInfo {
    name: "aptos_framework",
    address: APTOS_FRAMEWORK,
    modules: MODULES,
};
