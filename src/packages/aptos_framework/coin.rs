//! `0x1::coin`: the generic coin standard.

use serde_json::Value;

use crate::payload::FunctionBinding;
use crate::structs::{MoveStruct, StructBinding};
use crate::{AccountAddress, HexBytes};

module_bindings! {
    package: "aptos_framework",
    address: "0x1",
    name: "coin",
}

crate::entry_function! {
    /// Transfer `amount` of `CoinType` from the sender to `to`.
    TRANSFER: fn transfer(
        args: TransferArgs { to: AccountAddress, amount: u64 },
        type_args: TransferTypeArgs { CoinType => coin_type },
    );
}

crate::entry_function! {
    /// Publish a `CoinStore<CoinType>` under the sender.
    REGISTER: fn register(type_args: RegisterTypeArgs { CoinType => coin_type });
}

pub const BINDINGS: &[FunctionBinding] = &[TRANSFER, REGISTER];

crate::move_struct! {
    struct Coin [CoinType] {
        value: u64,
    }

    /// An account's balance of `CoinType` and its deposit/withdraw event streams.
    struct CoinStore [CoinType] {
        coin: Coin,
        deposit_events: Value,
        withdraw_events: Value,
    }

    /// Metadata published once per coin type, under the issuer.
    struct CoinInfo [CoinType] {
        name: HexBytes,
        symbol: HexBytes,
        decimals: u64,
        supply: Option<u128>,
    }

    struct MintCapability [CoinType] {}

    struct BurnCapability [CoinType] {}

    struct DepositEvent {
        amount: u64,
    }

    struct WithdrawEvent {
        amount: u64,
    }
}

pub const STRUCTS: &[StructBinding] = &[
    Coin::BINDING,
    CoinStore::BINDING,
    CoinInfo::BINDING,
    MintCapability::BINDING,
    BurnCapability::BINDING,
    DepositEvent::BINDING,
    WithdrawEvent::BINDING,
];
