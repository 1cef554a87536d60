//! Registry, package index and descriptor behavior over the bundled modules.

mod common;

use common::{assert_error_contains, assert_ok, schema_dir_with, VAULT_SCHEMA};
use move_bindings::aptos_framework::{account, coin, test_coin};
use move_bindings::aptos_token::token;
use move_bindings::packages;
use move_bindings::{global, Ability, MoveStruct, Registry, RegistryBuilder};

#[test]
fn test_every_builder_matches_its_descriptor() {
    let mismatches = global().verify_bindings();
    assert!(mismatches.is_empty(), "mismatches: {:#?}", mismatches);
}

#[test]
fn test_every_bundled_module_is_registered() {
    let registry = global();
    let mut count = 0;
    for package in packages::all() {
        for source in package.modules {
            let source = source();
            let entry = registry
                .module(source.descriptor.full_name())
                .unwrap_or_else(|| panic!("{} missing", source.descriptor.full_name()));
            assert_eq!(entry.package, package.name);
            assert_eq!(entry.bindings.len(), source.descriptor.functions().len());
            assert_eq!(entry.structs.len(), source.descriptor.structs().len());
            count += 1;
        }
    }
    assert_eq!(registry.len(), count);
    assert_eq!(count, 7);
}

#[test]
fn test_struct_types_mirror_descriptors() {
    assert_eq!(
        coin::CoinStore::BINDING.full_name(),
        coin::descriptor().struct_def("CoinStore").unwrap().full_name
    );
    let declared: Vec<&str> = token::descriptor()
        .struct_def("TokenId")
        .unwrap()
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(token::TokenId::BINDING.fields, declared.as_slice());
    assert_eq!(coin::Coin::BINDING.type_parameters, &["CoinType"]);
    assert!(account::Account::BINDING.type_parameters.is_empty());
}

#[test]
fn test_global_registry_is_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Registry>();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let registry = global();
                let entry = registry.module("0x1::coin").unwrap();
                let info = registry.decode_abort("0x1::coin", 0x10005).unwrap();
                (entry.full_name().to_string(), info.error.name.clone())
            })
        })
        .collect();
    for handle in handles {
        let (module, error) = handle.join().unwrap();
        assert_eq!(module, "0x1::coin");
        assert_eq!(error, "EINSUFFICIENT_BALANCE");
    }
}

#[test]
fn test_identity_constants() {
    assert_eq!(coin::ADDRESS, "0x1");
    assert_eq!(coin::NAME, "coin");
    assert_eq!(coin::FULL_NAME, "0x1::coin");
    assert_eq!(coin::PACKAGE, "aptos_framework");
    assert_eq!(coin::descriptor().full_name(), coin::FULL_NAME);
    assert_eq!(token::FULL_NAME, "0x3::token");
    assert_eq!(token::descriptor().address(), token::ADDRESS);
}

#[test]
fn test_module_views() {
    assert_eq!(coin::functions().len(), 2);
    assert!(coin::structs().contains(&"0x1::coin::MintCapability"));
    assert_eq!(
        account::resources(),
        vec!["0x1::account::Account"]
    );
    assert_eq!(coin::error_codes()[&5].name, "EINSUFFICIENT_BALANCE");

    let cap = coin::descriptor().struct_def("MintCapability").unwrap();
    assert!(cap.has_ability(Ability::Copy));
    assert!(!cap.is_resource());
    assert_eq!(cap.type_parameters, vec!["CoinType"]);
}

#[test]
fn test_lookup_by_every_spelling() {
    let registry = global();
    for name in [
        "0x1::coin",
        "0x0000000000000000000000000000000000000000000000000000000000000001::coin",
        "aptos_framework::coin",
        "0x1::Coin",
    ] {
        let entry = registry.module(name).unwrap_or_else(|| panic!("{}", name));
        assert_eq!(entry.full_name(), "0x1::coin");
    }
    assert_eq!(
        registry.module("0x1::TestCoin").unwrap().full_name(),
        test_coin::FULL_NAME
    );
    assert_eq!(
        registry.module("aptos_token::TokenTransfers").unwrap().full_name(),
        "0x3::token_transfers"
    );
    assert!(registry.module("0x2::coin").is_none());
    assert!(registry.module("aptos_framework::teleport").is_none());
}

#[test]
fn test_unknown_names_are_absent() {
    let registry = global();
    assert!(registry.function("0x1::coin::teleport").is_none());
    assert!(registry.descriptor("0x9::nothing").is_none());
    assert!(coin::descriptor().function("teleport").is_none());
    assert!(coin::descriptor().struct_def("Nothing").is_none());
    assert!(coin::descriptor().error(999).is_none());
}

#[test]
fn test_decode_abort() {
    let registry = global();

    let info = registry.decode_abort("0x1::coin", 5).unwrap();
    assert_eq!(info.error.name, "EINSUFFICIENT_BALANCE");
    assert_eq!(info.category, None);

    // INVALID_ARGUMENT (0x1) << 16 | EINSUFFICIENT_BALANCE
    let info = registry.decode_abort("aptos_framework::coin", 0x10005).unwrap();
    assert_eq!(info.error.name, "EINSUFFICIENT_BALANCE");
    assert_eq!(info.category_name, Some("INVALID_ARGUMENT"));
    assert_eq!(info.reason, 5);

    assert!(registry.decode_abort("0x1::coin", 0x10063).is_none());
    assert!(registry.decode_abort("0x9::nothing", 1).is_none());
}

#[test]
fn test_packages() {
    assert_eq!(global().packages(), vec!["aptos_framework", "aptos_token"]);
    assert_eq!(global().modules_in("aptos_token").count(), 2);
    let names: Vec<&str> = packages::all().iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["aptos_framework", "aptos_token"]);
}

#[test]
fn test_load_schema_dir() {
    let dir = schema_dir_with(&[("vaults", "vault", VAULT_SCHEMA)]);

    let mut builder = RegistryBuilder::new().with_builtin();
    let loaded = assert_ok(builder.load_schema_dir(dir.path()), "load schema dir");
    assert_eq!(loaded, 1);
    let registry = builder.build();

    assert_eq!(registry.len(), global().len() + 1);
    let entry = registry.module("vaults::Vault").unwrap();
    assert_eq!(entry.full_name(), "0xcafe::vault");
    assert_eq!(entry.package, "vaults");
    assert!(entry.bindings.is_empty());
    assert!(registry.verify_bindings().is_empty());

    let (_, sig) = registry.function("0xcafe::vault::deposit").unwrap();
    assert!(sig.is_generic());
}

#[test]
fn test_overriding_a_builtin_schema_is_verified() {
    // Only the first `amount` is the transfer argument; the event structs also have one.
    let drifted = coin::SCHEMA.replacen(r#""name": "amount""#, r#""name": "value""#, 1);
    let dir = schema_dir_with(&[("aptos_framework", "coin", &drifted)]);

    let mut builder = Registry::builder().with_builtin();
    assert_ok(builder.load_schema_dir(dir.path()), "load override");
    let registry = builder.build();

    assert_eq!(registry.len(), global().len());
    let mismatches = registry.verify_bindings();
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].item, "0x1::coin::transfer");
    assert!(mismatches[0].reason.contains("\"amount\""));
}

#[test]
fn test_invalid_schema_names_the_file() {
    let dir = schema_dir_with(&[("broken", "bad", r#"{"address": "0x1", "name": "bad""#)]);
    let mut builder = RegistryBuilder::new();
    let err = builder.load_schema_dir(dir.path()).unwrap_err();
    assert_error_contains(format!("{:#}", err), "bad.json", "broken schema");
}

#[test]
fn test_descriptor_json_round_trip() {
    for entry in global().modules() {
        let json = entry.descriptor.to_json_pretty().unwrap();
        let reloaded = move_bindings::ModuleDescriptor::from_json(&json).unwrap();
        assert_eq!(&reloaded, entry.descriptor.as_ref());
    }
}
