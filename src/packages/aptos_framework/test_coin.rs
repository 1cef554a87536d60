//! `0x1::test_coin`: the devnet test coin.

use super::coin::{BurnCapability, MintCapability};
use crate::payload::FunctionBinding;
use crate::structs::{MoveStruct, StructBinding};
use crate::AccountAddress;

module_bindings! {
    package: "aptos_framework",
    address: "0x1",
    name: "test_coin",
}

crate::entry_function! {
    TRANSFER: fn transfer(args: TransferArgs { to: AccountAddress, amount: u64 });
}

crate::entry_function! {
    /// Mint to `dst_addr`. Requires a mint capability or a delegation.
    MINT: fn mint(args: MintArgs { dst_addr: AccountAddress, amount: u64 });
}

pub const BINDINGS: &[FunctionBinding] = &[TRANSFER, MINT];

crate::move_struct! {
    struct TestCoin {}

    struct Capabilities {
        mint_cap: MintCapability,
        burn_cap: BurnCapability,
    }

    /// A mint right granted to `to`, waiting to be claimed.
    struct DelegatedMintCapability {
        to: AccountAddress,
    }

    struct Delegations {
        inner: Vec<DelegatedMintCapability>,
    }
}

pub const STRUCTS: &[StructBinding] = &[
    TestCoin::BINDING,
    Capabilities::BINDING,
    DelegatedMintCapability::BINDING,
    Delegations::BINDING,
];

/// Type tag of the test coin, for use as a `CoinType` argument.
pub const TEST_COIN: &str = "0x1::test_coin::TestCoin";
