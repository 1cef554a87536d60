//! Rust types mirroring on-chain struct layouts.
//!
//! Each bundled module declares its structs with [`move_struct!`](crate::move_struct).
//! The generated types carry the struct's fields in declared order and
//! deserialize resource data read from an account. Move type parameters are
//! phantom on the Rust side: `CoinStore<CoinType>` is a single `CoinStore`
//! type whose binding records the parameter names.
//!
//! Field types follow the payload encoding where one exists (`HexBytes` for
//! `vector<u8>`, `AccountAddress` for `address`). Structs from modules that
//! are not bundled (event handles, tables, property maps) are kept as raw JSON.

/// Static shape of one generated struct type, used to check it against its
/// descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructBinding {
    /// Fully-qualified module name.
    pub module: &'static str,
    pub name: &'static str,
    pub fields: &'static [&'static str],
    pub type_parameters: &'static [&'static str],
}

impl StructBinding {
    /// `<address>::<module>::<name>`
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.module, self.name)
    }

    /// Type tag of this struct instantiated with `type_args`.
    ///
    /// ```
    /// use move_bindings::aptos_framework::coin::CoinStore;
    /// use move_bindings::structs::MoveStruct;
    ///
    /// assert_eq!(
    ///     CoinStore::BINDING.type_tag(&["0x1::test_coin::TestCoin"]),
    ///     "0x1::coin::CoinStore<0x1::test_coin::TestCoin>"
    /// );
    /// ```
    pub fn type_tag(&self, type_args: &[&str]) -> String {
        if type_args.is_empty() {
            self.full_name()
        } else {
            format!("{}<{}>", self.full_name(), type_args.join(", "))
        }
    }
}

/// A Rust type generated for an on-chain struct.
pub trait MoveStruct {
    const BINDING: StructBinding;
}

/// Declare Rust types for the structs of one module.
///
/// Must be invoked in a module that defines `FULL_NAME`, like
/// [`entry_function!`](crate::entry_function). Move type parameters go in
/// brackets after the name:
///
/// ```ignore
/// move_struct! {
///     /// A `Coin<CoinType>` balance.
///     struct Coin [CoinType] { value: u64 }
///
///     struct DepositEvent { amount: u64 }
/// }
/// ```
#[macro_export]
macro_rules! move_struct {
    ($(
        $(#[$meta:meta])*
        struct $name:ident $([ $( $tparam:ident ),+ ])? {
            $( $field:ident : $ty:ty ),* $(,)?
        }
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
            pub struct $name {
                $( pub $field: $ty, )*
            }

            impl $crate::structs::MoveStruct for $name {
                const BINDING: $crate::structs::StructBinding = $crate::structs::StructBinding {
                    module: FULL_NAME,
                    name: stringify!($name),
                    fields: &[$( stringify!($field) ),*],
                    type_parameters: &[$( $( stringify!($tparam) ),+ )?],
                };
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HexBytes;
    use serde_json::json;

    const FULL_NAME: &str = "0x7::demo";

    crate::move_struct! {
        /// Demo struct with a phantom parameter.
        struct Vault [Asset] {
            balance: u64,
            memo: HexBytes,
        }

        struct Marker {}
    }

    #[test]
    fn test_generated_bindings() {
        assert_eq!(Vault::BINDING.full_name(), "0x7::demo::Vault");
        assert_eq!(Vault::BINDING.fields, &["balance", "memo"]);
        assert_eq!(Vault::BINDING.type_parameters, &["Asset"]);
        assert!(Marker::BINDING.fields.is_empty());
        assert!(Marker::BINDING.type_parameters.is_empty());
    }

    #[test]
    fn test_type_tag() {
        assert_eq!(
            Vault::BINDING.type_tag(&["0x7::demo::Gold"]),
            "0x7::demo::Vault<0x7::demo::Gold>"
        );
        assert_eq!(Marker::BINDING.type_tag(&[]), "0x7::demo::Marker");
    }

    #[test]
    fn test_generated_types_deserialize_resource_data() {
        let vault: Vault = serde_json::from_value(json!({
            "balance": 12,
            "memo": "0x6f6b"
        }))
        .unwrap();
        assert_eq!(vault.balance, 12);
        assert_eq!(vault.memo, HexBytes::utf8("ok"));
        assert_eq!(
            serde_json::to_value(&vault).unwrap(),
            json!({"balance": 12, "memo": "0x6f6b"})
        );

        let marker: Marker = serde_json::from_value(json!({})).unwrap();
        assert_eq!(marker, Marker {});
    }
}
