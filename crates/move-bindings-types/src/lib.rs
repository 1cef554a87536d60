//! Shared primitives for the move-bindings workspace.
//!
//! This crate is the value-encoding layer the generated bindings delegate to.
//! It owns no module data; it only knows how Move values are written in a
//! call payload:
//!
//! - [`address`] - address normalization (short and full forms)
//! - [`encoding`] - the value encoder ([`MoveArg`], [`encode_json_arg`])
//! - [`type_parsing`] - Move type strings and their encoding class ([`ArgKind`])
//! - [`framework`] - well-known framework addresses
//! - [`env_utils`] - environment variable helpers used for configuration

pub mod address;
pub mod encoding;
pub mod env_utils;
pub mod framework;
pub mod type_parsing;

pub use encoding::{
    encode_address, encode_address_str, encode_bytes, encode_bytes_str, encode_json_arg,
    encode_u128, encode_u64, EncodingError, HexBytes, MoveArg,
};
pub use move_core_types::account_address::AccountAddress;
pub use type_parsing::{parse_type_tag, split_type_params, ArgKind};
