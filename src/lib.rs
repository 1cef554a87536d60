//! Move Bindings
//!
//! Client bindings for on-chain Move modules:
//!
//! - **Descriptors**: the interface of each module (functions, structs, abort codes),
//!   loaded from one JSON schema per module
//! - **Typed builders**: one function per entry function, producing a call [`Payload`]
//! - **Struct types**: one Rust type per on-chain struct, for reading resource data
//! - **Registry**: lookup of every bundled module by name, plus schema-driven payload
//!   building for functions only known at runtime
//!
//! ```
//! use move_bindings::aptos_framework::coin;
//! use move_bindings::AccountAddress;
//!
//! let payload = coin::transfer(
//!     coin::TransferArgs { to: AccountAddress::ONE, amount: 500 },
//!     coin::TransferTypeArgs { coin_type: "0x1::test_coin::TestCoin".to_string() },
//! );
//! assert_eq!(payload.function, "0x1::coin::transfer");
//! assert_eq!(payload.arguments, vec!["0x1", "500"]);
//! ```

pub mod payload;

pub mod builder;
pub mod config;
pub mod descriptor;
pub mod packages;
pub mod registry;
pub mod structs;

pub use builder::{build_payload, BuildError};
pub use config::BindingsConfig;
pub use descriptor::{
    Ability, AbortInfo, ErrorCode, FieldSignature, FunctionSignature, ModuleDescriptor,
    StructSignature,
};
pub use move_bindings_types::{AccountAddress, EncodingError, HexBytes, MoveArg};
pub use packages::{aptos_framework, aptos_token};
pub use payload::{FunctionBinding, Payload, PayloadKind};
pub use registry::{global, BindingMismatch, ModuleEntry, Registry, RegistryBuilder};
pub use structs::{MoveStruct, StructBinding};
