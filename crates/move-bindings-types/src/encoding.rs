//! Value encoding for call payloads.
//!
//! Payload arguments are JSON values. Each Move type has one canonical text form:
//! - `address` -> short lowercase hex (`0x1`)
//! - `u64`, `u128`, `u256` -> decimal text
//! - `vector<u8>` -> `0x`-prefixed lowercase hex
//! - `vector<T>` -> a list with each element encoded as `T`
//! - `bool`, `u8`/`u16`/`u32`, strings and structs -> unchanged
//!
//! Typed builders go through [`MoveArg`]; the schema-driven builder goes through
//! [`encode_json_arg`]. Both end up in the same `encode_*` functions.

use std::fmt;
use std::str::FromStr;

use move_core_types::account_address::AccountAddress;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::address::{is_valid_address, normalize_address_short, strip_hex_prefix};
use crate::type_parsing::ArgKind;

/// Largest u256 in decimal.
const U256_MAX_DECIMAL: &str =
    "115792089237316195423570985008687907853269984665640564039457584007913129639935";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("invalid address '{0}'")]
    InvalidAddress(String),

    #[error("invalid hex string '{value}': {reason}")]
    InvalidHex { value: String, reason: String },

    #[error("value {value} is out of range for {kind}")]
    IntegerOutOfRange { kind: String, value: String },

    #[error("expected {expected}, found {found}")]
    UnexpectedValue { expected: String, found: String },
}

// =============================================================================
// Scalar encoders
// =============================================================================

/// Encode an address as short canonical hex.
pub fn encode_address(addr: &AccountAddress) -> String {
    normalize_address_short(&addr.to_hex_literal())
}

/// Encode a pre-formatted address string as short canonical hex.
///
/// ```
/// use move_bindings_types::encode_address_str;
///
/// assert_eq!(encode_address_str("0x0001").unwrap(), "0x1");
/// assert_eq!(encode_address_str("ABCDEF").unwrap(), "0xabcdef");
/// assert!(encode_address_str("0xnope").is_err());
/// ```
pub fn encode_address_str(addr: &str) -> Result<String, EncodingError> {
    if !is_valid_address(addr) {
        return Err(EncodingError::InvalidAddress(addr.to_string()));
    }
    Ok(normalize_address_short(addr))
}

pub fn encode_u64(value: u64) -> String {
    value.to_string()
}

pub fn encode_u128(value: u128) -> String {
    value.to_string()
}

/// Encode raw bytes as `0x`-prefixed lowercase hex. Empty input yields `0x`.
pub fn encode_bytes(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Validate a pre-formatted hex string and return it in canonical form.
pub fn encode_bytes_str(hex_str: &str) -> Result<String, EncodingError> {
    let bytes = decode_hex(hex_str)?;
    Ok(encode_bytes(&bytes))
}

fn decode_hex(hex_str: &str) -> Result<Vec<u8>, EncodingError> {
    hex::decode(strip_hex_prefix(hex_str)).map_err(|e| EncodingError::InvalidHex {
        value: hex_str.to_string(),
        reason: e.to_string(),
    })
}

// =============================================================================
// HexBytes
// =============================================================================

/// A Move `vector<u8>` argument.
///
/// Kept distinct from `Vec<u8>` so that byte strings encode as hex text while
/// other vectors encode element-wise. Serializes as hex text, the same form
/// it takes in a payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HexBytes(pub Vec<u8>);

impl HexBytes {
    /// Parse hex text, with or without a `0x` prefix.
    pub fn from_hex(hex_str: &str) -> Result<Self, EncodingError> {
        decode_hex(hex_str).map(HexBytes)
    }

    /// Raw UTF-8 bytes of `s`, as Move code treats `b"..."` literals.
    pub fn utf8(s: &str) -> Self {
        HexBytes(s.as_bytes().to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for HexBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode_bytes(&self.0))
    }
}

impl<'de> Deserialize<'de> for HexBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HexBytes::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl FromStr for HexBytes {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexBytes::from_hex(s)
    }
}

impl fmt::Display for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_bytes(&self.0))
    }
}

impl From<Vec<u8>> for HexBytes {
    fn from(bytes: Vec<u8>) -> Self {
        HexBytes(bytes)
    }
}

impl From<&[u8]> for HexBytes {
    fn from(bytes: &[u8]) -> Self {
        HexBytes(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for HexBytes {
    fn from(bytes: [u8; N]) -> Self {
        HexBytes(bytes.to_vec())
    }
}

// =============================================================================
// Typed arguments
// =============================================================================

/// A Rust value that can be written as one payload argument.
pub trait MoveArg {
    fn to_move_arg(&self) -> Value;

    /// The encoding class this type writes, for checking a typed builder
    /// against the declared argument type.
    fn arg_kind() -> ArgKind
    where
        Self: Sized;
}

impl MoveArg for bool {
    fn to_move_arg(&self) -> Value {
        Value::Bool(*self)
    }

    fn arg_kind() -> ArgKind {
        ArgKind::Bool
    }
}

macro_rules! small_int_arg {
    ($($t:ty => $width:literal),*) => {
        $(
            impl MoveArg for $t {
                fn to_move_arg(&self) -> Value {
                    Value::from(*self)
                }

                fn arg_kind() -> ArgKind {
                    ArgKind::SmallInt($width)
                }
            }
        )*
    };
}

small_int_arg!(u8 => 8, u16 => 16, u32 => 32);

impl MoveArg for u64 {
    fn to_move_arg(&self) -> Value {
        Value::String(encode_u64(*self))
    }

    fn arg_kind() -> ArgKind {
        ArgKind::U64
    }
}

impl MoveArg for u128 {
    fn to_move_arg(&self) -> Value {
        Value::String(encode_u128(*self))
    }

    fn arg_kind() -> ArgKind {
        ArgKind::U128
    }
}

impl MoveArg for AccountAddress {
    fn to_move_arg(&self) -> Value {
        Value::String(encode_address(self))
    }

    fn arg_kind() -> ArgKind {
        ArgKind::Address
    }
}

impl MoveArg for HexBytes {
    fn to_move_arg(&self) -> Value {
        Value::String(encode_bytes(&self.0))
    }

    fn arg_kind() -> ArgKind {
        ArgKind::Bytes
    }
}

impl MoveArg for String {
    fn to_move_arg(&self) -> Value {
        Value::String(self.clone())
    }

    fn arg_kind() -> ArgKind {
        ArgKind::Utf8String
    }
}

/// `Vec<u8>` lands here as a vector of numbers; byte strings need [`HexBytes`].
impl<T: MoveArg> MoveArg for Vec<T> {
    fn to_move_arg(&self) -> Value {
        Value::Array(self.iter().map(MoveArg::to_move_arg).collect())
    }

    fn arg_kind() -> ArgKind {
        ArgKind::Vector(Box::new(T::arg_kind()))
    }
}

// =============================================================================
// Schema-driven encoding
// =============================================================================

/// Encode a JSON value according to the declared kind of its argument.
///
/// Numbers wider than 32 bits may be given as JSON numbers or decimal strings;
/// byte vectors may be hex strings or arrays of byte values.
pub fn encode_json_arg(kind: &ArgKind, value: &Value) -> Result<Value, EncodingError> {
    match kind {
        ArgKind::Bool => match value {
            Value::Bool(_) => Ok(value.clone()),
            other => Err(unexpected(kind, other)),
        },
        ArgKind::SmallInt(width) => {
            let parsed = parse_unsigned(kind, value)?;
            let max = (1u128 << width) - 1;
            if parsed > max {
                return Err(out_of_range(kind, value));
            }
            Ok(Value::from(parsed as u64))
        }
        ArgKind::U64 => {
            let parsed = parse_unsigned(kind, value)?;
            let parsed = u64::try_from(parsed).map_err(|_| out_of_range(kind, value))?;
            Ok(Value::String(encode_u64(parsed)))
        }
        ArgKind::U128 => {
            let parsed = parse_unsigned(kind, value)?;
            Ok(Value::String(encode_u128(parsed)))
        }
        ArgKind::U256 => encode_u256(kind, value).map(Value::String),
        ArgKind::Address => match value {
            Value::String(s) => encode_address_str(s).map(Value::String),
            other => Err(unexpected(kind, other)),
        },
        ArgKind::Bytes => match value {
            Value::String(s) => encode_bytes_str(s).map(Value::String),
            Value::Array(items) => {
                let byte_kind = ArgKind::SmallInt(8);
                let bytes = items
                    .iter()
                    .map(|item| {
                        let b = parse_unsigned(&byte_kind, item)?;
                        u8::try_from(b).map_err(|_| out_of_range(&byte_kind, item))
                    })
                    .collect::<Result<Vec<u8>, _>>()?;
                Ok(Value::String(encode_bytes(&bytes)))
            }
            other => Err(unexpected(kind, other)),
        },
        ArgKind::Vector(inner) => match value {
            Value::Array(items) => items
                .iter()
                .map(|item| encode_json_arg(inner, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            other => Err(unexpected(kind, other)),
        },
        ArgKind::Utf8String => match value {
            Value::String(_) => Ok(value.clone()),
            other => Err(unexpected(kind, other)),
        },
        ArgKind::PassThrough => Ok(value.clone()),
    }
}

/// Read an unsigned integer from a JSON number or a decimal string.
fn parse_unsigned(kind: &ArgKind, value: &Value) -> Result<u128, EncodingError> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .map(u128::from)
            .ok_or_else(|| out_of_range(kind, value)),
        Value::String(s) => {
            let digits = s.trim();
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(unexpected(kind, value));
            }
            digits.parse::<u128>().map_err(|_| out_of_range(kind, value))
        }
        other => Err(unexpected(kind, other)),
    }
}

fn encode_u256(kind: &ArgKind, value: &Value) -> Result<String, EncodingError> {
    let digits = match value {
        Value::Number(n) => n
            .as_u64()
            .map(|v| v.to_string())
            .ok_or_else(|| out_of_range(kind, value))?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
                return Err(unexpected(kind, value));
            }
            s.to_string()
        }
        other => return Err(unexpected(kind, other)),
    };

    let trimmed = digits.trim_start_matches('0');
    let canonical = if trimmed.is_empty() { "0" } else { trimmed };
    let fits = canonical.len() < U256_MAX_DECIMAL.len()
        || (canonical.len() == U256_MAX_DECIMAL.len() && canonical <= U256_MAX_DECIMAL);
    if !fits {
        return Err(out_of_range(kind, value));
    }
    Ok(canonical.to_string())
}

fn unexpected(kind: &ArgKind, found: &Value) -> EncodingError {
    EncodingError::UnexpectedValue {
        expected: kind.describe(),
        found: describe_json(found),
    }
}

fn out_of_range(kind: &ArgKind, value: &Value) -> EncodingError {
    EncodingError::IntegerOutOfRange {
        kind: kind.describe(),
        value: value.to_string(),
    }
}

fn describe_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("bool {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string \"{}\"", s),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_address() {
        assert_eq!(encode_address(&AccountAddress::ONE), "0x1");
        assert_eq!(encode_address(&AccountAddress::ZERO), "0x0");
        assert_eq!(encode_address_str("0X00Ab").unwrap(), "0xab");
        assert_eq!(
            encode_address_str("0xgg"),
            Err(EncodingError::InvalidAddress("0xgg".to_string()))
        );
    }

    #[test]
    fn test_encode_bytes() {
        assert_eq!(encode_bytes(&[0xde, 0xad]), "0xdead");
        assert_eq!(encode_bytes(&[]), "0x");
        assert_eq!(encode_bytes_str("DEAD").unwrap(), "0xdead");
        assert!(matches!(
            encode_bytes_str("0xabc"),
            Err(EncodingError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_hex_bytes() {
        let bytes: HexBytes = "0x0102".parse().unwrap();
        assert_eq!(bytes.as_bytes(), &[1, 2]);
        assert_eq!(bytes.to_string(), "0x0102");
        assert_eq!(HexBytes::utf8("hi").to_string(), "0x6869");
        assert!("xyz".parse::<HexBytes>().is_err());
    }

    #[test]
    fn test_hex_bytes_serde() {
        let bytes = HexBytes(vec![0xca, 0xfe]);
        assert_eq!(serde_json::to_value(&bytes).unwrap(), json!("0xcafe"));
        let back: HexBytes = serde_json::from_value(json!("CAFE")).unwrap();
        assert_eq!(back, bytes);
        assert!(serde_json::from_value::<HexBytes>(json!([1, 2])).is_err());
    }

    #[test]
    fn test_arg_kinds() {
        assert_eq!(<u8 as MoveArg>::arg_kind(), ArgKind::SmallInt(8));
        assert_eq!(<String as MoveArg>::arg_kind(), ArgKind::Utf8String);
        assert_eq!(<HexBytes as MoveArg>::arg_kind(), ArgKind::Bytes);
        assert_eq!(
            <Vec<u8> as MoveArg>::arg_kind(),
            ArgKind::Vector(Box::new(ArgKind::SmallInt(8)))
        );
        assert_eq!(
            <Vec<HexBytes> as MoveArg>::arg_kind(),
            ArgKind::Vector(Box::new(ArgKind::Bytes))
        );
    }

    #[test]
    fn test_move_arg_transforms() {
        assert_eq!(true.to_move_arg(), json!(true));
        assert_eq!(7u8.to_move_arg(), json!(7));
        assert_eq!(500u64.to_move_arg(), json!("500"));
        assert_eq!(u128::MAX.to_move_arg(), json!(u128::MAX.to_string()));
        assert_eq!(
            vec![AccountAddress::ONE, AccountAddress::ZERO].to_move_arg(),
            json!(["0x1", "0x0"])
        );
        assert_eq!(Vec::<u64>::new().to_move_arg(), json!([]));
        assert_eq!(
            vec![HexBytes::from(vec![1u8]), HexBytes::default()].to_move_arg(),
            json!(["0x01", "0x"])
        );
    }

    #[test]
    fn test_json_integers() {
        assert_eq!(encode_json_arg(&ArgKind::U64, &json!(500)).unwrap(), json!("500"));
        assert_eq!(encode_json_arg(&ArgKind::U64, &json!("500")).unwrap(), json!("500"));
        assert!(matches!(
            encode_json_arg(&ArgKind::U64, &json!("18446744073709551616")),
            Err(EncodingError::IntegerOutOfRange { .. })
        ));
        assert!(matches!(
            encode_json_arg(&ArgKind::U64, &json!(-1)),
            Err(EncodingError::IntegerOutOfRange { .. })
        ));
        assert!(matches!(
            encode_json_arg(&ArgKind::U64, &json!("+1")),
            Err(EncodingError::UnexpectedValue { .. })
        ));
        assert_eq!(
            encode_json_arg(&ArgKind::U128, &json!("340282366920938463463374607431768211455"))
                .unwrap(),
            json!("340282366920938463463374607431768211455")
        );
        assert_eq!(encode_json_arg(&ArgKind::SmallInt(8), &json!(255)).unwrap(), json!(255));
        assert!(encode_json_arg(&ArgKind::SmallInt(8), &json!(256)).is_err());
    }

    #[test]
    fn test_json_u256() {
        assert_eq!(encode_json_arg(&ArgKind::U256, &json!("007")).unwrap(), json!("7"));
        assert_eq!(
            encode_json_arg(&ArgKind::U256, &json!(U256_MAX_DECIMAL)).unwrap(),
            json!(U256_MAX_DECIMAL)
        );
        let too_big = format!("{}0", U256_MAX_DECIMAL);
        assert!(encode_json_arg(&ArgKind::U256, &json!(too_big)).is_err());
    }

    #[test]
    fn test_json_bytes_and_vectors() {
        assert_eq!(
            encode_json_arg(&ArgKind::Bytes, &json!("0xCAFE")).unwrap(),
            json!("0xcafe")
        );
        assert_eq!(
            encode_json_arg(&ArgKind::Bytes, &json!([1, 2, 255])).unwrap(),
            json!("0x0102ff")
        );
        assert!(encode_json_arg(&ArgKind::Bytes, &json!([256])).is_err());

        let addresses = ArgKind::Vector(Box::new(ArgKind::Address));
        assert_eq!(
            encode_json_arg(&addresses, &json!(["0x01", "0xAB"])).unwrap(),
            json!(["0x1", "0xab"])
        );
        assert_eq!(encode_json_arg(&addresses, &json!([])).unwrap(), json!([]));
        assert!(encode_json_arg(&addresses, &json!("0x1")).is_err());
    }

    #[test]
    fn test_json_pass_through() {
        assert_eq!(encode_json_arg(&ArgKind::Bool, &json!(false)).unwrap(), json!(false));
        assert!(encode_json_arg(&ArgKind::Bool, &json!("false")).is_err());
        assert_eq!(
            encode_json_arg(&ArgKind::Utf8String, &json!("hello")).unwrap(),
            json!("hello")
        );
        let obj = json!({"inner": 1});
        assert_eq!(encode_json_arg(&ArgKind::PassThrough, &obj).unwrap(), obj);
    }

    #[test]
    fn test_error_messages() {
        let err = encode_json_arg(&ArgKind::Address, &json!(5)).unwrap_err();
        assert_eq!(err.to_string(), "expected address, found number 5");
    }
}
