//! Fixtures: sample values and on-disk schema directories.

use std::fs;
use std::path::Path;

use move_bindings::AccountAddress;
use serde_json::{Map, Value};
use tempfile::TempDir;

/// A module outside the bundled packages.
#[allow(dead_code)]
pub const VAULT_SCHEMA: &str = r#"{
  "address": "0xcafe",
  "name": "vault",
  "legacy_names": ["Vault"],
  "functions": [
    {
      "name": "deposit",
      "type_parameters": ["CoinType"],
      "arguments": [
        {"name": "amount", "type": "u64"},
        {"name": "memo", "type": "vector<u8>"}
      ]
    },
    {"name": "close", "arguments": []}
  ],
  "structs": [
    {"name": "Vault", "abilities": ["key"], "fields": [{"name": "balance", "type": "u64"}]}
  ],
  "error_codes": {
    "1": {"name": "EVAULT_LOCKED", "doc": "The vault is locked"}
  }
}"#;

#[allow(dead_code)]
pub fn addr(hex: &str) -> AccountAddress {
    AccountAddress::from_hex_literal(hex).unwrap()
}

/// A 32-byte authentication key whose first byte is non-zero, so its short
/// and full forms are the same.
#[allow(dead_code)]
pub fn long_auth_key() -> String {
    format!("0xab{}", "cd".repeat(31))
}

/// Unwrap a JSON object literal into an argument bundle.
#[allow(dead_code)]
pub fn json_args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

/// A temp directory holding `<package>/<module>.json` for each schema given.
#[allow(dead_code)]
pub fn schema_dir_with(schemas: &[(&str, &str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (package, module, json) in schemas {
        write_schema(dir.path(), package, module, json);
    }
    dir
}

#[allow(dead_code)]
pub fn write_schema(root: &Path, package: &str, module: &str, json: &str) {
    let package_dir = root.join(package);
    fs::create_dir_all(&package_dir).unwrap();
    fs::write(package_dir.join(format!("{}.json", module)), json).unwrap();
}
