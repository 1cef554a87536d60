//! Framework package addresses.
//!
//! Compile-time constants for the packages the bundled bindings cover, so that
//! callers don't repeat `AccountAddress::from_hex_literal("0x1").unwrap()`.

use move_core_types::account_address::AccountAddress;

/// Core framework and standard library address (0x1)
pub const APTOS_FRAMEWORK: AccountAddress = AccountAddress::ONE;

/// Token package address (0x3)
pub const APTOS_TOKEN: AccountAddress = {
    let mut bytes = [0u8; AccountAddress::LENGTH];
    bytes[AccountAddress::LENGTH - 1] = 3;
    AccountAddress::new(bytes)
};
