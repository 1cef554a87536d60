//! `0x1::managed_coin`: coins whose mint and burn capabilities stay with the issuer.

use super::coin::{BurnCapability, MintCapability};
use crate::payload::FunctionBinding;
use crate::structs::{MoveStruct, StructBinding};
use crate::{AccountAddress, HexBytes};

module_bindings! {
    package: "aptos_framework",
    address: "0x1",
    name: "managed_coin",
}

crate::entry_function! {
    /// Initialize `CoinType` and keep its capabilities under the sender.
    INITIALIZE: fn initialize(
        args: InitializeArgs { name: HexBytes, symbol: HexBytes, decimals: u8, monitor_supply: bool },
        type_args: InitializeTypeArgs { CoinType => coin_type },
    );
}

crate::entry_function! {
    MINT: fn mint(
        args: MintArgs { dst_addr: AccountAddress, amount: u64 },
        type_args: MintTypeArgs { CoinType => coin_type },
    );
}

crate::entry_function! {
    REGISTER: fn register(type_args: RegisterTypeArgs { CoinType => coin_type });
}

crate::entry_function! {
    /// Burn `amount` from the sender's balance. Only the issuer may call this.
    BURN: fn burn(
        args: BurnArgs { amount: u64 },
        type_args: BurnTypeArgs { CoinType => coin_type },
    );
}

pub const BINDINGS: &[FunctionBinding] = &[INITIALIZE, MINT, REGISTER, BURN];

crate::move_struct! {
    /// Mint and burn capabilities of `CoinType`, held by its issuer.
    struct Capabilities [CoinType] {
        mint_cap: MintCapability,
        burn_cap: BurnCapability,
    }
}

pub const STRUCTS: &[StructBinding] = &[Capabilities::BINDING];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initialize_encoding() {
        let payload = initialize(
            InitializeArgs {
                name: HexBytes::utf8("Moon"),
                symbol: HexBytes::utf8("MOON"),
                decimals: 6,
                monitor_supply: false,
            },
            InitializeTypeArgs {
                coin_type: "0xcafe::moon::Moon".to_string(),
            },
        );
        assert_eq!(
            payload.arguments,
            vec![json!("0x4d6f6f6e"), json!("0x4d4f4f4e"), json!(6), json!(false)]
        );
        assert_eq!(payload.type_arguments, vec!["0xcafe::moon::Moon"]);
    }
}
