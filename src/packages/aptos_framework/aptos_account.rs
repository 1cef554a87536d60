//! `0x1::aptos_account`: APT transfers that create the recipient on demand.

use crate::payload::FunctionBinding;
use crate::structs::StructBinding;
use crate::AccountAddress;

module_bindings! {
    package: "aptos_framework",
    address: "0x1",
    name: "aptos_account",
}

crate::entry_function! {
    /// Transfer `amount` APT to `to`, creating the account if needed.
    TRANSFER: fn transfer(args: TransferArgs { to: AccountAddress, amount: u64 });
}

crate::entry_function! {
    /// Pairwise transfers; both lists must have the same length.
    BATCH_TRANSFER: fn batch_transfer(
        args: BatchTransferArgs { recipients: Vec<AccountAddress>, amounts: Vec<u64> }
    );
}

crate::entry_function! {
    CREATE_ACCOUNT: fn create_account(args: CreateAccountArgs { auth_key: AccountAddress });
}

pub const BINDINGS: &[FunctionBinding] = &[TRANSFER, BATCH_TRANSFER, CREATE_ACCOUNT];

pub const STRUCTS: &[StructBinding] = &[];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch_transfer_maps_elementwise() {
        let payload = batch_transfer(BatchTransferArgs {
            recipients: vec![
                AccountAddress::ONE,
                AccountAddress::from_hex_literal("0x2").unwrap(),
            ],
            amounts: vec![10, u64::MAX],
        });
        assert_eq!(
            payload.arguments,
            vec![json!(["0x1", "0x2"]), json!(["10", "18446744073709551615"])]
        );
    }

    #[test]
    fn test_no_structs() {
        assert!(structs().is_empty());
        assert!(resources().is_empty());
        assert_eq!(error_codes().len(), 3);
    }
}
