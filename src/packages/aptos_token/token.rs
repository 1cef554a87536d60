//! `0x3::token`: collections, token data and token balances.

use serde_json::Value;

use crate::payload::FunctionBinding;
use crate::structs::{MoveStruct, StructBinding};
use crate::{AccountAddress, HexBytes};

module_bindings! {
    package: "aptos_token",
    address: "0x3",
    name: "token",
}

crate::entry_function! {
    /// Create a collection owned by the sender. `maximum` of 0 means unlimited.
    CREATE_COLLECTION_SCRIPT: fn create_collection_script(
        args: CreateCollectionScriptArgs {
            name: String,
            description: String,
            uri: String,
            maximum: u64,
            mutate_setting: Vec<bool>,
        }
    );
}

crate::entry_function! {
    /// Create token data in one of the sender's collections and mint `balance`
    /// to the sender.
    ///
    /// The three property lists are parallel: key, BCS-encoded value, type name.
    CREATE_TOKEN_SCRIPT: fn create_token_script(
        args: CreateTokenScriptArgs {
            collection: String,
            name: String,
            description: String,
            balance: u64,
            maximum: u64,
            uri: String,
            royalty_payee_address: AccountAddress,
            royalty_points_denominator: u64,
            royalty_points_numerator: u64,
            mutate_setting: Vec<bool>,
            property_keys: Vec<String>,
            property_values: Vec<HexBytes>,
            property_types: Vec<String>,
        }
    );
}

crate::entry_function! {
    DIRECT_TRANSFER_SCRIPT: fn direct_transfer_script(
        args: DirectTransferScriptArgs {
            creators_address: AccountAddress,
            collection: String,
            name: String,
            property_version: u64,
            amount: u64,
        }
    );
}

crate::entry_function! {
    /// Allow or refuse direct transfers into the sender's token store.
    OPT_IN_DIRECT_TRANSFER: fn opt_in_direct_transfer(
        args: OptInDirectTransferArgs { opt_in: bool }
    );
}

crate::entry_function! {
    BURN: fn burn(
        args: BurnArgs {
            creators_address: AccountAddress,
            collection: String,
            name: String,
            property_version: u64,
            amount: u64,
        }
    );
}

pub const BINDINGS: &[FunctionBinding] = &[
    CREATE_COLLECTION_SCRIPT,
    CREATE_TOKEN_SCRIPT,
    DIRECT_TRANSFER_SCRIPT,
    OPT_IN_DIRECT_TRANSFER,
    BURN,
];

crate::move_struct! {
    /// A token balance. `token_properties` is a property map kept as raw JSON.
    struct Token {
        id: TokenId,
        amount: u64,
        token_properties: Value,
    }

    /// Identifies one property version of a token.
    struct TokenId {
        token_data_id: TokenDataId,
        property_version: u64,
    }

    struct TokenDataId {
        creator: AccountAddress,
        collection: String,
        name: String,
    }

    struct TokenData {
        maximum: u64,
        largest_property_version: u64,
        supply: u64,
        uri: String,
        royalty: Royalty,
        name: String,
        description: String,
        default_properties: Value,
        mutability_config: TokenMutabilityConfig,
    }

    struct Royalty {
        royalty_points_numerator: u64,
        royalty_points_denominator: u64,
        payee_address: AccountAddress,
    }

    struct TokenMutabilityConfig {
        maximum: bool,
        uri: bool,
        royalty: bool,
        description: bool,
        properties: bool,
    }

    struct CollectionData {
        description: String,
        name: String,
        uri: String,
        supply: u64,
        maximum: u64,
    }

    /// Tokens held by an account. `tokens` is a table handle.
    struct TokenStore {
        tokens: Value,
        direct_transfer: bool,
    }

    /// Collections and token data created by an account, as table handles.
    struct Collections {
        collection_data: Value,
        token_data: Value,
    }
}

pub const STRUCTS: &[StructBinding] = &[
    Token::BINDING,
    TokenId::BINDING,
    TokenDataId::BINDING,
    TokenData::BINDING,
    Royalty::BINDING,
    TokenMutabilityConfig::BINDING,
    CollectionData::BINDING,
    TokenStore::BINDING,
    Collections::BINDING,
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_token_script_argument_order() {
        let payload = create_token_script(CreateTokenScriptArgs {
            collection: "Cats".to_string(),
            name: "Tabby".to_string(),
            description: String::new(),
            balance: 1,
            maximum: 1,
            uri: "https://example.org/tabby".to_string(),
            royalty_payee_address: AccountAddress::ONE,
            royalty_points_denominator: 100,
            royalty_points_numerator: 5,
            mutate_setting: vec![false, false, false, false, true],
            property_keys: vec![],
            property_values: vec![],
            property_types: vec![],
        });
        assert_eq!(payload.function, "0x3::token::create_token_script");
        assert_eq!(payload.arguments.len(), 13);
        assert_eq!(payload.arguments[3], json!("1"));
        assert_eq!(payload.arguments[6], json!("0x1"));
        assert_eq!(payload.arguments[9], json!([false, false, false, false, true]));
        assert_eq!(payload.arguments[10], json!([]));
        assert_eq!(payload.arguments[11], json!([]));
    }

    #[test]
    fn test_resources() {
        assert_eq!(
            resources(),
            vec!["0x3::token::TokenStore", "0x3::token::Collections"]
        );
    }

    #[test]
    fn test_token_id_nests_token_data_id() {
        let id: TokenId = serde_json::from_value(json!({
            "token_data_id": {
                "creator": AccountAddress::ONE,
                "collection": "Cats",
                "name": "Tabby"
            },
            "property_version": 0
        }))
        .unwrap();
        assert_eq!(id.token_data_id.collection, "Cats");
        assert_eq!(id.token_data_id.creator, AccountAddress::ONE);
        assert_eq!(id.property_version, 0);
        assert_eq!(
            TokenDataId::BINDING.fields,
            &["creator", "collection", "name"]
        );
    }

    #[test]
    fn test_mutability_config_round_trip() {
        let config = TokenMutabilityConfig {
            maximum: false,
            uri: true,
            royalty: false,
            description: true,
            properties: false,
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["uri"], true);
        assert_eq!(serde_json::from_value::<TokenMutabilityConfig>(value).unwrap(), config);
    }
}
