//! Address normalization utilities.
//!
//! This module is the canonical source for address normalization in the workspace.
//!
//! Move addresses are 32-byte values, but they're written in different formats:
//! - Short form: "0x1"
//! - Full form: "0x0000000000000000000000000000000000000000000000000000000000000001"
//! - Without prefix: "1"
//!
//! Module identities and payload arguments use the short form; the full form is
//! only used for comparisons where both sides may come from different sources.

use move_core_types::account_address::AccountAddress;

/// Number of hex digits in a full-form address.
pub const ADDRESS_HEX_LEN: usize = AccountAddress::LENGTH * 2;

/// Strip an optional `0x` / `0X` prefix after trimming whitespace.
pub fn strip_hex_prefix(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Whether `addr` is a syntactically valid address in any accepted form.
///
/// ```
/// use move_bindings_types::address::is_valid_address;
///
/// assert!(is_valid_address("0x1"));
/// assert!(is_valid_address("ABC"));
/// assert!(!is_valid_address("0x"));
/// assert!(!is_valid_address("0xzz"));
/// ```
pub fn is_valid_address(addr: &str) -> bool {
    let hex = strip_hex_prefix(addr);
    !hex.is_empty() && hex.len() <= ADDRESS_HEX_LEN && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Normalize an address to lowercase with 0x prefix and full 64 hex characters.
///
/// No validation is done; use [`normalize_address_checked`] for untrusted input.
///
/// ```
/// use move_bindings_types::address::normalize_address;
///
/// assert_eq!(
///     normalize_address("0x1"),
///     "0x0000000000000000000000000000000000000000000000000000000000000001"
/// );
/// ```
pub fn normalize_address(addr: &str) -> String {
    let hex = strip_hex_prefix(addr).to_lowercase();
    if hex.len() < ADDRESS_HEX_LEN {
        format!("0x{:0>64}", hex)
    } else {
        format!("0x{}", &hex[..ADDRESS_HEX_LEN])
    }
}

/// Normalize an address to full form, returning None if it's not a valid address.
pub fn normalize_address_checked(addr: &str) -> Option<String> {
    if !is_valid_address(addr) {
        return None;
    }
    Some(normalize_address(addr))
}

/// Normalize an address to short form (leading zeros trimmed).
///
/// ```
/// use move_bindings_types::address::normalize_address_short;
///
/// assert_eq!(normalize_address_short("0x0000000000000000000000000000000000000000000000000000000000000003"), "0x3");
/// assert_eq!(normalize_address_short("0x00ABC"), "0xabc");
/// assert_eq!(normalize_address_short("0x0"), "0x0");
/// ```
pub fn normalize_address_short(addr: &str) -> String {
    let normalized = normalize_address(addr);
    let hex = normalized.strip_prefix("0x").unwrap_or(&normalized);
    let trimmed = hex.trim_start_matches('0');
    if trimmed.is_empty() {
        "0x0".to_string()
    } else {
        format!("0x{}", trimmed)
    }
}

/// Whether two address strings name the same account.
pub fn same_address(a: &str, b: &str) -> bool {
    match (normalize_address_checked(a), normalize_address_checked(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
