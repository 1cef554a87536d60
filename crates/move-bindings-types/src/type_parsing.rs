//! Type string parsing utilities.
//!
//! Two views of a Move type string are provided:
//! - [`parse_type_tag`] turns a concrete type (no type parameters) into a
//!   [`TypeTag`]; it is used to check type arguments supplied by callers.
//! - [`ArgKind::classify`] decides how a declared argument type is written in a
//!   payload; it understands type parameters of the enclosing function.

use move_core_types::account_address::AccountAddress;
use move_core_types::identifier::Identifier;
use move_core_types::language_storage::{StructTag, TypeTag};

use crate::address::{is_valid_address, same_address};

/// Parse a Move type string into a TypeTag.
///
/// Supports:
/// - Primitive types: `bool`, `u8`, `u16`, `u32`, `u64`, `u128`, `u256`, `address`, `signer`
/// - Vector types: `vector<T>`
/// - Struct types: `0x1::module::Struct` or `0x1::module::Struct<T1, T2>`
///
/// # Examples
///
/// ```
/// use move_bindings_types::parse_type_tag;
///
/// assert!(parse_type_tag("0x1::coin::CoinStore<0x1::test_coin::TestCoin>").is_some());
/// assert!(parse_type_tag("0x1::coin::CoinStore<CoinType>").is_none());
/// ```
pub fn parse_type_tag(type_str: &str) -> Option<TypeTag> {
    let type_str = type_str.trim();

    // Handle primitive types
    match type_str {
        "bool" => return Some(TypeTag::Bool),
        "u8" => return Some(TypeTag::U8),
        "u16" => return Some(TypeTag::U16),
        "u32" => return Some(TypeTag::U32),
        "u64" => return Some(TypeTag::U64),
        "u128" => return Some(TypeTag::U128),
        "u256" => return Some(TypeTag::U256),
        "address" => return Some(TypeTag::Address),
        "signer" => return Some(TypeTag::Signer),
        _ => {}
    }

    // Handle vector types
    if let Some(inner) = type_str
        .strip_prefix("vector<")
        .and_then(|s| s.strip_suffix('>'))
    {
        let inner_tag = parse_type_tag(inner)?;
        return Some(TypeTag::Vector(Box::new(inner_tag)));
    }

    // Handle struct types: 0x<address>::<module>::<name><type_args>
    let (base_type, type_args_str) = split_generic(type_str);
    let (address_str, module_name, struct_name) = split_struct_path(base_type)?;

    let address = AccountAddress::from_hex_literal(address_str).ok()?;
    let module = Identifier::new(module_name).ok()?;
    let name = Identifier::new(struct_name).ok()?;

    let type_params = match type_args_str {
        Some(args) => split_type_params(args)
            .into_iter()
            .map(parse_type_tag)
            .collect::<Option<Vec<_>>>()?,
        None => vec![],
    };

    Some(TypeTag::Struct(Box::new(StructTag {
        address,
        module,
        name,
        type_params,
    })))
}

/// Split `Name<A, B>` into (`Name`, Some(`A, B`)); a bare name yields None.
fn split_generic(type_str: &str) -> (&str, Option<&str>) {
    match type_str.find('<') {
        Some(angle_pos) => {
            let base = &type_str[..angle_pos];
            let args = type_str[angle_pos + 1..].strip_suffix('>');
            // An opening bracket without a closing one leaves an empty base,
            // which the struct path check rejects.
            match args {
                Some(args) => (base, Some(args)),
                None => ("", None),
            }
        }
        None => (type_str, None),
    }
}

/// Split `addr::module::Name` into its three components.
fn split_struct_path(base: &str) -> Option<(&str, &str, &str)> {
    let parts: Vec<&str> = base.split("::").collect();
    if parts.len() != 3 {
        return None;
    }
    Some((parts[0].trim(), parts[1].trim(), parts[2].trim()))
}

/// Split type parameters respecting nested angle brackets.
///
/// Given "A, B<C, D>, E", returns ["A", "B<C, D>", "E"] by tracking bracket depth.
pub fn split_type_params(s: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut depth = 0;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth -= 1,
            ',' if depth == 0 => {
                result.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    if start < s.len() {
        result.push(s[start..].trim());
    }

    result
}

/// How a declared argument type is written in a call payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgKind {
    Bool,
    /// `u8`, `u16` or `u32`, written as a JSON number. Holds the bit width.
    SmallInt(u32),
    /// Written as decimal text.
    U64,
    U128,
    U256,
    /// Written as short canonical hex text.
    Address,
    /// `vector<u8>`, written as `0x`-prefixed hex text.
    Bytes,
    Vector(Box<ArgKind>),
    /// `0x1::string::String`, written as plain text.
    Utf8String,
    /// Type parameters and other structs are copied unchanged.
    PassThrough,
}

impl ArgKind {
    /// Classify a declared argument type.
    ///
    /// `type_params` are the type parameter names of the enclosing function.
    /// Returns None when the type string is not a type this layer can write.
    ///
    /// ```
    /// use move_bindings_types::ArgKind;
    ///
    /// assert_eq!(ArgKind::classify("vector<u8>", &[] as &[&str]), Some(ArgKind::Bytes));
    /// assert_eq!(ArgKind::classify("CoinType", &["CoinType"]), Some(ArgKind::PassThrough));
    /// assert_eq!(ArgKind::classify("signer", &[] as &[&str]), None);
    /// ```
    pub fn classify<S: AsRef<str>>(type_str: &str, type_params: &[S]) -> Option<ArgKind> {
        let type_str = type_str.trim();

        match type_str {
            "bool" => return Some(ArgKind::Bool),
            "u8" => return Some(ArgKind::SmallInt(8)),
            "u16" => return Some(ArgKind::SmallInt(16)),
            "u32" => return Some(ArgKind::SmallInt(32)),
            "u64" => return Some(ArgKind::U64),
            "u128" => return Some(ArgKind::U128),
            "u256" => return Some(ArgKind::U256),
            "address" => return Some(ArgKind::Address),
            // Signers are supplied by the transaction sender, never as arguments.
            "signer" | "&signer" => return None,
            _ => {}
        }

        if type_params.iter().any(|p| p.as_ref() == type_str) {
            return Some(ArgKind::PassThrough);
        }

        if let Some(inner) = type_str
            .strip_prefix("vector<")
            .and_then(|s| s.strip_suffix('>'))
        {
            return match ArgKind::classify(inner, type_params)? {
                ArgKind::SmallInt(8) => Some(ArgKind::Bytes),
                kind => Some(ArgKind::Vector(Box::new(kind))),
            };
        }

        let (base, args) = split_generic(type_str);
        let (address, module, name) = split_struct_path(base)?;
        if !is_valid_address(address)
            || Identifier::new(module).is_err()
            || Identifier::new(name).is_err()
        {
            return None;
        }
        if let Some(args) = args {
            for arg in split_type_params(args) {
                ArgKind::classify(arg, type_params)?;
            }
        }

        if args.is_none() && module == "string" && name == "String" && same_address(address, "0x1")
        {
            Some(ArgKind::Utf8String)
        } else {
            Some(ArgKind::PassThrough)
        }
    }

    /// Type name used in encoder error messages.
    pub fn describe(&self) -> String {
        match self {
            ArgKind::Bool => "bool".to_string(),
            ArgKind::SmallInt(width) => format!("u{}", width),
            ArgKind::U64 => "u64".to_string(),
            ArgKind::U128 => "u128".to_string(),
            ArgKind::U256 => "u256".to_string(),
            ArgKind::Address => "address".to_string(),
            ArgKind::Bytes => "vector<u8>".to_string(),
            ArgKind::Vector(inner) => format!("vector<{}>", inner.describe()),
            ArgKind::Utf8String => "0x1::string::String".to_string(),
            ArgKind::PassThrough => "value".to_string(),
        }
    }
}
