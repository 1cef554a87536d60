//! `0x1::account`: account creation and authentication key rotation.

use serde_json::Value;

use crate::payload::FunctionBinding;
use crate::structs::{MoveStruct, StructBinding};
use crate::{AccountAddress, HexBytes};

module_bindings! {
    package: "aptos_framework",
    address: "0x1",
    name: "account",
}

crate::entry_function! {
    /// Create an account at the address derived from `auth_key`.
    CREATE_ACCOUNT: fn create_account(args: CreateAccountArgs { auth_key: AccountAddress });
}

crate::entry_function! {
    /// Replace the sender's authentication key. The key must be 32 bytes.
    ROTATE_AUTHENTICATION_KEY: fn rotate_authentication_key(
        args: RotateAuthenticationKeyArgs { new_auth_key: HexBytes }
    );
}

pub const BINDINGS: &[FunctionBinding] = &[CREATE_ACCOUNT, ROTATE_AUTHENTICATION_KEY];

crate::move_struct! {
    /// Per-account state published at account creation.
    struct Account {
        authentication_key: HexBytes,
        sequence_number: u64,
        self_address: AccountAddress,
        coin_register_events: Value,
    }

    struct CoinRegisterEvent {
        type_info: Value,
    }

    /// Lets a module act as the signer of a resource account.
    struct SignerCapability {
        account: AccountAddress,
    }
}

pub const STRUCTS: &[StructBinding] = &[
    Account::BINDING,
    CoinRegisterEvent::BINDING,
    SignerCapability::BINDING,
];
