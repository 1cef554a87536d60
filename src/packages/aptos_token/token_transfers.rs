//! `0x3::token_transfers`: two-step token transfers through pending offers.

use serde_json::Value;

use super::token::TokenId;
use crate::payload::FunctionBinding;
use crate::structs::{MoveStruct, StructBinding};
use crate::AccountAddress;

module_bindings! {
    package: "aptos_token",
    address: "0x3",
    name: "token_transfers",
}

crate::entry_function! {
    /// Offer `amount` of a token to `receiver`, who claims it with `claim_script`.
    OFFER_SCRIPT: fn offer_script(
        args: OfferScriptArgs {
            receiver: AccountAddress,
            creator: AccountAddress,
            collection: String,
            name: String,
            property_version: u64,
            amount: u64,
        }
    );
}

crate::entry_function! {
    CLAIM_SCRIPT: fn claim_script(
        args: ClaimScriptArgs {
            sender: AccountAddress,
            creator: AccountAddress,
            collection: String,
            name: String,
            property_version: u64,
        }
    );
}

crate::entry_function! {
    CANCEL_OFFER_SCRIPT: fn cancel_offer_script(
        args: CancelOfferScriptArgs {
            receiver: AccountAddress,
            creator: AccountAddress,
            collection: String,
            name: String,
            property_version: u64,
        }
    );
}

pub const BINDINGS: &[FunctionBinding] = &[OFFER_SCRIPT, CLAIM_SCRIPT, CANCEL_OFFER_SCRIPT];

crate::move_struct! {
    /// Offers made by an account, as a table handle keyed by [`TokenOfferId`].
    struct PendingClaims {
        pending_claims: Value,
    }

    struct TokenOfferId {
        to_addr: AccountAddress,
        token_id: TokenId,
    }
}

pub const STRUCTS: &[StructBinding] = &[PendingClaims::BINDING, TokenOfferId::BINDING];
